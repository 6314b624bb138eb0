//! Palette derivation: tone + mood in, every named color out.
//!
//! The key set is closed: [`PaletteKey`] lists every name a palette holds,
//! and [`Palette::derive`] fills them through one exhaustive match, so a
//! derived palette cannot be missing a name.
//!
//! ```text
//! Tone (surface, ink, accent) + MoodProfile
//!     │
//!     ├─ mood surface / halo / selection bg   (OKLCH blends, mood strength)
//!     ├─ input field backgrounds              (OKLCH blends, fixed weights)
//!     ├─ lines / chrome / gutters / tabs      (gamma blends, fixed weights)
//!     ├─ selection fg                         (contrast search, AAA → AA → white)
//!     └─ ANSI 16                              (hue anchors → mood tuning → emphasis)
//! ```

use std::fmt;
use std::ops::Index;

use gratia_color::Color;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ansi::{AnsiColor, AnsiPalette};
use crate::contrast::pick_foreground;
use crate::mood::{Mood, MoodProfile};
use crate::tone::{Tone, ToneDefaults, ToneInput};

// ---------------------------------------------------------------------------
// Blend weights
// ---------------------------------------------------------------------------

// Accent → surface weight for the halo around active elements.
const HALO_WEIGHT: f64 = 0.2;
// Extra accent on top of the mood strength for selection backgrounds.
const SELECTION_EXTRA: f64 = 0.06;
const SELECTION_MAX: f64 = 0.4;
// Surface → ink, OKLCH: input fields invite a little more than the surface.
const INPUT_WEIGHT: f64 = 0.06;
const INPUT_ACTIVE_WEIGHT: f64 = 0.08;

// Surface → black, gamma space.
const LINE_WEIGHT: f64 = 0.15;
const LINE_SOFT_WEIGHT: f64 = 0.10;
const CHROME_WEIGHT: f64 = 0.25;
const CHROME_SOFT_WEIGHT: f64 = 0.18;

// Ink → surface, gamma space.
const GUTTER_WEIGHT: f64 = 0.65;
const GUTTER_SOFT_WEIGHT: f64 = 0.75;
const PLACEHOLDER_WEIGHT: f64 = 0.45;
const TAB_INACTIVE_FG_WEIGHT: f64 = 0.35;

// Alpha overlays.
const SELECTION_ALPHA: f64 = 0.55;
const SELECTION_MUTED_ALPHA: f64 = 0.3;
const ACCENT_SOFT_ALPHA: f64 = 0.4;
const FIELD_BORDER_ALPHA: f64 = 0.06;
const FOCUS_RING_ALPHA: f64 = 0.6;
const TAB_BORDER_ALPHA: f64 = 0.04;
const TAB_UNFOCUSED_BORDER_ALPHA: f64 = 0.45;

// ---------------------------------------------------------------------------
// PaletteKey
// ---------------------------------------------------------------------------

macro_rules! palette_keys {
    ($($variant:ident => $name:literal,)+) => {
        /// Every name a palette holds, in canonical output order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PaletteKey {
            $($variant,)+
        }

        impl PaletteKey {
            pub const ALL: [Self; palette_keys!(@count $($variant)+)] = [$(Self::$variant,)+];

            /// The placeholder name used in templates.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
    (@count $($variant:ident)+) => { 0 $(+ palette_keys!(@one $variant))+ };
    (@one $variant:ident) => { 1 };
}

palette_keys! {
    Surface => "surface",
    Ink => "ink",
    Accent => "accent",
    AccentSoft => "accentSoft",
    Caret => "caret",
    Selection => "selection",
    SelectionMuted => "selectionMuted",
    Line => "line",
    LineSoft => "lineSoft",
    Chrome => "chrome",
    ChromeSoft => "chromeSoft",
    Gutter => "gutter",
    GutterSoft => "gutterSoft",
    TabActiveBg => "tabActiveBg",
    TabInactiveBg => "tabInactiveBg",
    TabBorder => "tabBorder",
    TabActiveBorder => "tabActiveBorder",
    TabUnfocusedActiveBorder => "tabUnfocusedActiveBorder",
    TabActiveFg => "tabActiveFg",
    TabInactiveFg => "tabInactiveFg",
    FieldBg => "fieldBg",
    FieldBgActive => "fieldBgActive",
    FieldBorder => "fieldBorder",
    FieldPlaceholder => "fieldPlaceholder",
    FocusRing => "focusRing",
    MoodSurface => "moodSurface",
    MoodHalo => "moodHalo",
    SelectionBg => "selectionBg",
    InputBg => "inputBg",
    SelectionFg => "selectionFg",
    TerminalBg => "terminalBg",
    TerminalFg => "terminalFg",
    TerminalCursor => "terminalCursor",
    TerminalAnsiBlack => "terminalAnsiBlack",
    TerminalAnsiRed => "terminalAnsiRed",
    TerminalAnsiGreen => "terminalAnsiGreen",
    TerminalAnsiYellow => "terminalAnsiYellow",
    TerminalAnsiBlue => "terminalAnsiBlue",
    TerminalAnsiMagenta => "terminalAnsiMagenta",
    TerminalAnsiCyan => "terminalAnsiCyan",
    TerminalAnsiWhite => "terminalAnsiWhite",
    TerminalAnsiBrightBlack => "terminalAnsiBrightBlack",
    TerminalAnsiBrightRed => "terminalAnsiBrightRed",
    TerminalAnsiBrightGreen => "terminalAnsiBrightGreen",
    TerminalAnsiBrightYellow => "terminalAnsiBrightYellow",
    TerminalAnsiBrightBlue => "terminalAnsiBrightBlue",
    TerminalAnsiBrightMagenta => "terminalAnsiBrightMagenta",
    TerminalAnsiBrightCyan => "terminalAnsiBrightCyan",
    TerminalAnsiBrightWhite => "terminalAnsiBrightWhite",
}

impl PaletteKey {
    /// Number of names in every palette.
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a key by its template name (exact match).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A complete, immutable set of named colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PaletteKey::COUNT],
}

/// Intermediate colors shared by several palette entries.
struct MoodColors {
    surface: Color,
    halo: Color,
    input_bg: Color,
    input_bg_active: Color,
    selection_bg: Color,
}

impl MoodColors {
    fn derive(tone: &Tone, profile: &MoodProfile) -> Self {
        let tint = profile.tint();
        let selection_tint = (tint + SELECTION_EXTRA).clamp(0.0, SELECTION_MAX);
        Self {
            surface: tone.surface.mix_oklch(tone.accent, tint),
            halo: tone.accent.mix_oklch(tone.surface, HALO_WEIGHT),
            input_bg: tone.surface.mix_oklch(tone.ink, INPUT_WEIGHT),
            input_bg_active: tone.surface.mix_oklch(tone.ink, INPUT_ACTIVE_WEIGHT),
            selection_bg: tone.surface.mix_oklch(tone.accent, selection_tint),
        }
    }
}

impl Palette {
    /// Derive the full palette for a resolved tone and mood profile.
    #[must_use]
    pub fn derive(tone: &Tone, profile: &MoodProfile) -> Self {
        let Tone { surface, ink, accent, .. } = *tone;
        let mood = MoodColors::derive(tone, profile);
        let selection_fg = pick_foreground(mood.selection_bg, ink);
        let ansi = derive_ansi(mood.surface, ink, profile);

        let colors = PaletteKey::ALL.map(|key| match key {
            PaletteKey::Surface | PaletteKey::TabInactiveBg => surface,
            PaletteKey::Ink | PaletteKey::TabActiveFg | PaletteKey::TerminalFg => ink,
            PaletteKey::Accent | PaletteKey::TerminalCursor => accent,
            PaletteKey::AccentSoft => accent.with_alpha(ACCENT_SOFT_ALPHA),
            PaletteKey::Caret => tone.caret(),
            PaletteKey::Selection => accent.with_alpha(SELECTION_ALPHA),
            PaletteKey::SelectionMuted => accent.with_alpha(SELECTION_MUTED_ALPHA),
            PaletteKey::Line => surface.mix_rgb(Color::BLACK, LINE_WEIGHT),
            PaletteKey::LineSoft => surface.mix_rgb(Color::BLACK, LINE_SOFT_WEIGHT),
            PaletteKey::Chrome => surface.mix_rgb(Color::BLACK, CHROME_WEIGHT),
            PaletteKey::ChromeSoft => surface.mix_rgb(Color::BLACK, CHROME_SOFT_WEIGHT),
            PaletteKey::Gutter => ink.mix_rgb(surface, GUTTER_WEIGHT),
            PaletteKey::GutterSoft => ink.mix_rgb(surface, GUTTER_SOFT_WEIGHT),
            PaletteKey::TabActiveBg | PaletteKey::MoodSurface | PaletteKey::TerminalBg => mood.surface,
            PaletteKey::TabBorder => ink.with_alpha(TAB_BORDER_ALPHA),
            PaletteKey::TabActiveBorder | PaletteKey::MoodHalo => mood.halo,
            PaletteKey::TabUnfocusedActiveBorder => mood.halo.with_alpha(TAB_UNFOCUSED_BORDER_ALPHA),
            PaletteKey::TabInactiveFg => ink.mix_rgb(surface, TAB_INACTIVE_FG_WEIGHT),
            PaletteKey::FieldBg | PaletteKey::InputBg => mood.input_bg,
            PaletteKey::FieldBgActive => mood.input_bg_active,
            PaletteKey::FieldBorder => ink.with_alpha(FIELD_BORDER_ALPHA),
            PaletteKey::FieldPlaceholder => ink.mix_rgb(surface, PLACEHOLDER_WEIGHT),
            PaletteKey::FocusRing => mood.halo.with_alpha(FOCUS_RING_ALPHA),
            PaletteKey::SelectionBg => mood.selection_bg,
            PaletteKey::SelectionFg => selection_fg,
            PaletteKey::TerminalAnsiBlack => ansi.normal(AnsiColor::Black),
            PaletteKey::TerminalAnsiRed => ansi.normal(AnsiColor::Red),
            PaletteKey::TerminalAnsiGreen => ansi.normal(AnsiColor::Green),
            PaletteKey::TerminalAnsiYellow => ansi.normal(AnsiColor::Yellow),
            PaletteKey::TerminalAnsiBlue => ansi.normal(AnsiColor::Blue),
            PaletteKey::TerminalAnsiMagenta => ansi.normal(AnsiColor::Magenta),
            PaletteKey::TerminalAnsiCyan => ansi.normal(AnsiColor::Cyan),
            PaletteKey::TerminalAnsiWhite => ansi.normal(AnsiColor::White),
            PaletteKey::TerminalAnsiBrightBlack => ansi.bright(AnsiColor::Black),
            PaletteKey::TerminalAnsiBrightRed => ansi.bright(AnsiColor::Red),
            PaletteKey::TerminalAnsiBrightGreen => ansi.bright(AnsiColor::Green),
            PaletteKey::TerminalAnsiBrightYellow => ansi.bright(AnsiColor::Yellow),
            PaletteKey::TerminalAnsiBrightBlue => ansi.bright(AnsiColor::Blue),
            PaletteKey::TerminalAnsiBrightMagenta => ansi.bright(AnsiColor::Magenta),
            PaletteKey::TerminalAnsiBrightCyan => ansi.bright(AnsiColor::Cyan),
            PaletteKey::TerminalAnsiBrightWhite => ansi.bright(AnsiColor::White),
        });

        Self { colors }
    }

    /// Derive for a named mood.
    #[must_use]
    pub fn for_mood(tone: &Tone, mood: Mood) -> Self {
        Self::derive(tone, &MoodProfile::of(mood))
    }

    /// Resolve raw tone input against the theme defaults and derive.
    ///
    /// `mood` is a mood name; `None` selects the default mood and an
    /// unrecognized name gets neutral ANSI tuning.
    #[must_use]
    pub fn from_input(input: &ToneInput, mood: Option<&str>) -> Self {
        let tone = input.resolve(&ToneDefaults::THEME);
        Self::derive(&tone, &MoodProfile::resolve(mood))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, key: PaletteKey) -> Color {
        self.colors[key.index()]
    }

    /// Look up a color by template name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Color> {
        PaletteKey::from_name(name).map(|key| self.get(key))
    }

    /// Iterate `(key, color)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteKey, Color)> + '_ {
        PaletteKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl Index<PaletteKey> for Palette {
    type Output = Color;

    fn index(&self, key: PaletteKey) -> &Color {
        &self.colors[key.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PaletteKey::COUNT))?;
        for (key, color) in self.iter() {
            map.serialize_entry(key.name(), &color)?;
        }
        map.end()
    }
}

/// ANSI sub-palette: hue anchors, then the general mood tuning, then the
/// mood's one-off emphasis if it has one.
fn derive_ansi(surface: Color, ink: Color, profile: &MoodProfile) -> AnsiPalette {
    let ansi = AnsiPalette::derive(surface, ink).tuned(profile.ansi);
    match profile.accent_emphasis() {
        Some(emphasis) => ansi.emphasized(emphasis),
        None => ansi,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{AA, AAA, contrast_ratio};
    use crate::mood::{AnsiTuning, CELEBRATORY_WARM_EMPHASIS};
    use pretty_assertions::assert_eq;

    fn tone() -> Tone {
        Tone::new(
            Color::hex("#0F1317").unwrap(),
            Color::hex("#E6EDF5").unwrap(),
            Color::hex("#FFD59E").unwrap(),
        )
    }

    // ── Key set ─────────────────────────────────────────────────────

    #[test]
    fn key_count_and_order() {
        assert_eq!(PaletteKey::COUNT, 49);
        for (i, key) in PaletteKey::ALL.into_iter().enumerate() {
            assert_eq!(key.index(), i, "{key}");
        }
    }

    #[test]
    fn key_names_are_unique_and_resolvable() {
        let mut names: Vec<&str> = PaletteKey::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PaletteKey::COUNT);
        for key in PaletteKey::ALL {
            assert_eq!(PaletteKey::from_name(key.name()), Some(key));
        }
        assert_eq!(PaletteKey::from_name("Surface"), None);
    }

    #[test]
    fn sixteen_ansi_keys() {
        let n = PaletteKey::ALL.iter().filter(|k| k.name().starts_with("terminalAnsi")).count();
        assert_eq!(n, 16);
    }

    // ── Derivation ──────────────────────────────────────────────────

    #[test]
    fn tone_colors_pass_through() {
        let p = Palette::for_mood(&tone(), Mood::Soft);
        assert_eq!(p.get(PaletteKey::Surface).to_hex(), "#0F1317");
        assert_eq!(p.get(PaletteKey::Ink).to_hex(), "#E6EDF5");
        assert_eq!(p.get(PaletteKey::Accent).to_hex(), "#FFD59E");
        assert_eq!(p[PaletteKey::TabInactiveBg], p[PaletteKey::Surface]);
        assert_eq!(p[PaletteKey::TerminalFg], p[PaletteKey::Ink]);
        assert_eq!(p[PaletteKey::TerminalCursor], p[PaletteKey::Accent]);
        assert_eq!(p[PaletteKey::Caret], p[PaletteKey::Accent]);
    }

    #[test]
    fn caret_override_is_honored() {
        let mut t = tone();
        t.caret = Some(Color::hex("#FF0000").unwrap());
        let p = Palette::for_mood(&t, Mood::Focused);
        assert_eq!(p[PaletteKey::Caret].to_hex(), "#FF0000");
    }

    #[test]
    fn alpha_overlays() {
        let p = Palette::for_mood(&tone(), Mood::Soft);
        assert_eq!(p[PaletteKey::Selection].to_hex(), "#FFD59E8C");
        assert_eq!(p[PaletteKey::SelectionMuted].to_hex(), "#FFD59E4D");
        assert_eq!(p[PaletteKey::AccentSoft].to_hex(), "#FFD59E66");
        assert_eq!(p[PaletteKey::FieldBorder].to_hex(), "#E6EDF50F");
        assert_eq!(p[PaletteKey::TabBorder].to_hex(), "#E6EDF50A");
        assert_eq!(p[PaletteKey::FocusRing].opaque(), p[PaletteKey::MoodHalo]);
    }

    #[test]
    fn chrome_shades_are_fixed_gamma_blends() {
        let p = Palette::for_mood(&tone(), Mood::Celebratory);
        assert_eq!(p[PaletteKey::Line], Color::rgb8(13, 16, 20));
        let t = tone();
        assert_eq!(p[PaletteKey::Chrome], t.surface.mix_rgb(Color::BLACK, 0.25));
        assert_eq!(p[PaletteKey::Gutter], t.ink.mix_rgb(t.surface, 0.65));
        assert_eq!(p[PaletteKey::TabInactiveFg], t.ink.mix_rgb(t.surface, 0.35));
    }

    #[test]
    fn input_backgrounds_ignore_mood() {
        let soft = Palette::for_mood(&tone(), Mood::Soft);
        let loud = Palette::for_mood(&tone(), Mood::Celebratory);
        assert_eq!(soft[PaletteKey::InputBg], loud[PaletteKey::InputBg]);
        assert_eq!(soft[PaletteKey::FieldBgActive], loud[PaletteKey::FieldBgActive]);
        assert_eq!(soft[PaletteKey::FieldBg], soft[PaletteKey::InputBg]);
    }

    #[test]
    fn stronger_moods_tint_surface_further() {
        let accent_l = tone().accent.to_oklch().l;
        let distance = |mood| {
            let p = Palette::for_mood(&tone(), mood);
            (p[PaletteKey::MoodSurface].to_oklch().l - accent_l).abs()
        };
        assert!(distance(Mood::Soft) > distance(Mood::Focused));
        assert!(distance(Mood::Focused) > distance(Mood::Celebratory));
    }

    #[test]
    fn mood_surface_feeds_terminal_and_tabs() {
        let p = Palette::for_mood(&tone(), Mood::Focused);
        assert_eq!(p[PaletteKey::TerminalBg], p[PaletteKey::MoodSurface]);
        assert_eq!(p[PaletteKey::TabActiveBg], p[PaletteKey::MoodSurface]);
        assert_eq!(p[PaletteKey::TabActiveBorder], p[PaletteKey::MoodHalo]);
    }

    #[test]
    fn selection_fg_is_legible() {
        for mood in Mood::ALL {
            let p = Palette::for_mood(&tone(), mood);
            let ratio = contrast_ratio(p[PaletteKey::SelectionFg], p[PaletteKey::SelectionBg]);
            assert!(ratio >= AA, "{mood}: {ratio}");
        }
    }

    #[test]
    fn selection_fg_prefers_ink_on_plain_surface() {
        let t = tone();
        let profile = MoodProfile { strength: 0.0, ..MoodProfile::default() };
        let p = Palette::derive(&t, &profile);
        // 0.06 of accent over a near-black surface still leaves ink at AAA.
        assert!(contrast_ratio(t.ink, p[PaletteKey::SelectionBg]) >= AAA);
        assert_eq!(p[PaletteKey::SelectionFg], t.ink);
    }

    #[test]
    fn selection_fg_scenario_for_default_tone() {
        let t = tone();
        let p = Palette::for_mood(&t, Mood::Soft);
        let bg = p[PaletteKey::SelectionBg];
        let fg = p[PaletteKey::SelectionFg];
        if contrast_ratio(t.ink, bg) >= AAA {
            assert_eq!(fg, t.ink);
        } else {
            assert!(contrast_ratio(fg, bg) >= AA, "{fg} on {bg}");
        }
    }

    #[test]
    fn selection_fg_matches_reference_output() {
        // the contrast search darkens through mix_rgb onto exact halves
        let input = ToneInput {
            surface: Some("#DC5275".into()),
            ink: Some("#79D791".into()),
            accent: Some("#24E07E".into()),
            caret: None,
        };
        let p = Palette::from_input(&input, Some("soft"));
        assert_eq!(p[PaletteKey::SelectionFg].to_hex(), "#0C160F");
    }

    #[test]
    fn derivation_is_deterministic() {
        for mood in Mood::ALL {
            let a = serde_json::to_string(&Palette::for_mood(&tone(), mood)).unwrap();
            let b = serde_json::to_string(&Palette::for_mood(&tone(), mood)).unwrap();
            assert_eq!(a, b, "{mood}");
        }
    }

    #[test]
    fn celebratory_emphasis_applies_on_top_of_general_tuning() {
        let t = tone();
        let p = Palette::for_mood(&t, Mood::Celebratory);
        let profile = MoodProfile::of(Mood::Celebratory);
        let surface = MoodColors::derive(&t, &profile).surface;
        let general = AnsiPalette::derive(surface, t.ink).tuned(profile.ansi);
        let emphasized = general.emphasized(&CELEBRATORY_WARM_EMPHASIS);

        assert_eq!(p[PaletteKey::TerminalAnsiRed], emphasized.normal(AnsiColor::Red));
        assert_eq!(p[PaletteKey::TerminalAnsiBrightMagenta], emphasized.bright(AnsiColor::Magenta));
        assert_eq!(p[PaletteKey::TerminalAnsiGreen], general.normal(AnsiColor::Green));
    }

    #[test]
    fn unknown_mood_tints_like_default_but_tunes_neutral() {
        let input = ToneInput::default();
        let unknown = Palette::from_input(&input, Some("wistful"));
        let soft = Palette::from_input(&input, None);
        assert_eq!(unknown[PaletteKey::MoodSurface], soft[PaletteKey::MoodSurface]);
        assert_eq!(unknown[PaletteKey::SelectionBg], soft[PaletteKey::SelectionBg]);

        let ink = Tone::default().ink;
        let neutral = AnsiPalette::derive(unknown[PaletteKey::MoodSurface], ink).tuned(AnsiTuning::NEUTRAL);
        assert_eq!(unknown[PaletteKey::TerminalAnsiRed], neutral.normal(AnsiColor::Red));
        assert_eq!(unknown[PaletteKey::TerminalAnsiBrightCyan], neutral.bright(AnsiColor::Cyan));
    }

    // ── Lookup / serialization ──────────────────────────────────────

    #[test]
    fn lookup_by_name() {
        let p = Palette::for_mood(&tone(), Mood::Soft);
        assert_eq!(p.lookup("surface"), Some(p[PaletteKey::Surface]));
        assert_eq!(p.lookup("doesNotExist"), None);
    }

    #[test]
    fn serializes_in_canonical_order() {
        let p = Palette::for_mood(&tone(), Mood::Soft);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.starts_with("{\"surface\":\"#0F1317\",\"ink\":\"#E6EDF5\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), PaletteKey::COUNT);
    }
}
