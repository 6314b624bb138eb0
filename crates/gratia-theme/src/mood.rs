//! Moods: discrete presets that scale accent tinting and nudge the ANSI
//! sub-palette.
//!
//! The general rule table maps every mood to a tint strength and a pair of
//! ANSI tunings (normal, bright). One mood also carries a hand-authored
//! accent emphasis that is not derivable from that table; it lives in its
//! own table below and is applied as a separate pass.

use std::fmt;
use std::str::FromStr;

use gratia_color::Tuning;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ansi::AnsiColor;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Soft,
    Focused,
    Celebratory,
}

impl Mood {
    /// Every mood, in generation order.
    pub const ALL: [Self; 3] = [Self::Soft, Self::Focused, Self::Celebratory];

    /// The mood used when none is given.
    pub const DEFAULT: Self = Self::Soft;

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Focused => "focused",
            Self::Celebratory => "celebratory",
        }
    }

    /// Look up a mood by its exact lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mood| mood.name() == name)
    }

    /// How strongly the accent tints surface-derived colors, in [0, 0.35].
    #[must_use]
    pub const fn strength(self) -> f64 {
        match self {
            Self::Soft => 0.08,
            Self::Focused => 0.14,
            Self::Celebratory => 0.18,
        }
    }

    /// OKLCH tuning applied to every normal and bright ANSI color.
    #[must_use]
    pub const fn ansi_tuning(self) -> AnsiTuning {
        match self {
            Self::Soft => AnsiTuning {
                normal: Tuning::new(-0.01, -0.06),
                bright: Tuning::new(-0.02, -0.1),
            },
            Self::Focused => AnsiTuning::NEUTRAL,
            Self::Celebratory => AnsiTuning {
                normal: Tuning::new(0.01, 0.06),
                bright: Tuning::new(0.03, 0.12),
            },
        }
    }

    /// The one-off emphasis pass for this mood, if it has one.
    #[must_use]
    pub fn accent_emphasis(self) -> Option<&'static AccentEmphasis> {
        match self {
            Self::Celebratory => Some(&CELEBRATORY_WARM_EMPHASIS),
            Self::Soft | Self::Focused => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name did not match any mood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood {0:?} (expected soft, focused or celebratory)")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMood(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tunings
// ---------------------------------------------------------------------------

/// Per-group ANSI tuning: one delta for the 8 normal colors, one for the 8
/// bright ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnsiTuning {
    pub normal: Tuning,
    pub bright: Tuning,
}

impl AnsiTuning {
    pub const NEUTRAL: Self = Self {
        normal: Tuning::NEUTRAL,
        bright: Tuning::NEUTRAL,
    };
}

/// Extra tuning for a few named ANSI slots, on top of the mood's general
/// tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentEmphasis {
    pub slots: &'static [AnsiColor],
    pub normal: Tuning,
    pub bright: Tuning,
}

/// Celebratory pushes red and magenta warmer and louder than the rest.
pub const CELEBRATORY_WARM_EMPHASIS: AccentEmphasis = AccentEmphasis {
    slots: &[AnsiColor::Red, AnsiColor::Magenta],
    normal: Tuning::new(0.01, 0.08),
    bright: Tuning::new(0.02, 0.16),
};

// ---------------------------------------------------------------------------
// MoodProfile
// ---------------------------------------------------------------------------

/// The resolved parameters the palette deriver consumes.
///
/// `mood` is `None` when the caller asked for a name that is not a mood. In
/// that case the profile tints like the default mood but applies neutral
/// ANSI tuning and no emphasis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodProfile {
    pub mood: Option<Mood>,
    pub strength: f64,
    pub ansi: AnsiTuning,
}

impl MoodProfile {
    #[must_use]
    pub const fn of(mood: Mood) -> Self {
        Self {
            mood: Some(mood),
            strength: mood.strength(),
            ansi: mood.ansi_tuning(),
        }
    }

    /// Resolve an optional mood name. Never fails.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::of(Mood::DEFAULT);
        };
        if let Some(mood) = Mood::from_name(name) {
            return Self::of(mood);
        }
        debug!(name, "unknown mood, using default strength with neutral tuning");
        Self {
            mood: None,
            strength: Mood::DEFAULT.strength(),
            ansi: Mood::Focused.ansi_tuning(),
        }
    }

    /// Tint strength clamped to its valid range.
    #[must_use]
    pub const fn tint(&self) -> f64 {
        self.strength.clamp(0.0, 0.35)
    }

    #[must_use]
    pub fn accent_emphasis(&self) -> Option<&'static AccentEmphasis> {
        self.mood.and_then(Mood::accent_emphasis)
    }
}

impl From<Mood> for MoodProfile {
    fn from(mood: Mood) -> Self {
        Self::of(mood)
    }
}

impl Default for MoodProfile {
    fn default() -> Self {
        Self::of(Mood::DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_roundtrip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_name(mood.name()), Some(mood));
            assert_eq!(mood.to_string().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn from_name_matches_exactly() {
        assert_eq!(Mood::from_name("celebratory"), Some(Mood::Celebratory));
        assert_eq!(Mood::from_name("Celebratory"), None);
        assert_eq!(Mood::from_name(" soft"), None);
        assert_eq!(Mood::from_name("party"), None);
    }

    #[test]
    fn strengths_are_ordered_and_bounded() {
        let s: Vec<f64> = Mood::ALL.iter().map(|m| m.strength()).collect();
        assert!(s.windows(2).all(|w| w[0] < w[1]));
        assert!(s.iter().all(|&v| (0.0..=0.35).contains(&v)));
    }

    #[test]
    fn focused_is_neutral() {
        assert_eq!(Mood::Focused.ansi_tuning(), AnsiTuning::NEUTRAL);
    }

    #[test]
    fn only_celebratory_has_emphasis() {
        assert!(Mood::Soft.accent_emphasis().is_none());
        assert!(Mood::Focused.accent_emphasis().is_none());
        let e = Mood::Celebratory.accent_emphasis().unwrap();
        assert_eq!(e.slots, &[AnsiColor::Red, AnsiColor::Magenta]);
    }

    #[test]
    fn resolve_missing_is_default() {
        assert_eq!(MoodProfile::resolve(None), MoodProfile::of(Mood::Soft));
    }

    #[test]
    fn resolve_unknown_mixes_default_strength_with_neutral_tuning() {
        let p = MoodProfile::resolve(Some("melancholy"));
        assert_eq!(p.mood, None);
        assert_eq!(p.strength, Mood::Soft.strength());
        assert_eq!(p.ansi, AnsiTuning::NEUTRAL);
        assert!(p.accent_emphasis().is_none());
    }

    #[test]
    fn resolve_capitalized_name_is_unknown() {
        let p = MoodProfile::resolve(Some("Celebratory"));
        assert_eq!(p.mood, None);
        assert_eq!(p.strength, Mood::Soft.strength());
        assert_eq!(p.ansi, AnsiTuning::NEUTRAL);
        assert!(p.accent_emphasis().is_none());
    }

    #[test]
    fn tint_is_clamped() {
        let p = MoodProfile { strength: 0.9, ..MoodProfile::default() };
        assert_eq!(p.tint(), 0.35);
        let p = MoodProfile { strength: -1.0, ..MoodProfile::default() };
        assert_eq!(p.tint(), 0.0);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Mood::Celebratory).unwrap(), "\"celebratory\"");
        let m: Mood = serde_json::from_str("\"focused\"").unwrap();
        assert_eq!(m, Mood::Focused);
    }
}
