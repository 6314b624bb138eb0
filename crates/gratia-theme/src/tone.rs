//! Seed colors a palette is derived from.
//!
//! Input arrives loosely typed (token files, stylesheet extracts), so it is
//! held as [`ToneInput`] until resolved against a set of defaults. Resolution
//! never fails: a field that is missing or does not parse as a color takes
//! the default for that field.

use gratia_color::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Resolved seed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub surface: Color,
    pub ink: Color,
    pub accent: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caret: Option<Color>,
}

impl Tone {
    #[must_use]
    pub const fn new(surface: Color, ink: Color, accent: Color) -> Self {
        Self { surface, ink, accent, caret: None }
    }

    /// The caret color: the explicit override, or the accent.
    #[must_use]
    pub fn caret(&self) -> Color {
        self.caret.unwrap_or(self.accent)
    }
}

impl Default for Tone {
    fn default() -> Self {
        ToneDefaults::THEME.tone()
    }
}

// ---------------------------------------------------------------------------
// ToneDefaults
// ---------------------------------------------------------------------------

/// Fallback seed colors. Two sets exist and are deliberately not unified:
/// theme generation and token publishing each ship their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneDefaults {
    pub surface: Color,
    pub ink: Color,
    pub accent: Color,
}

impl ToneDefaults {
    /// Defaults used when deriving a palette.
    pub const THEME: Self = Self {
        surface: Color::rgb8(0x0F, 0x13, 0x17),
        ink: Color::rgb8(0xE6, 0xED, 0xF5),
        accent: Color::rgb8(0xFF, 0xD5, 0x9E),
    };

    /// Defaults used when publishing tokens extracted from a stylesheet.
    pub const TOKENS: Self = Self {
        surface: Color::rgb8(0x0F, 0x13, 0x17),
        ink: Color::rgb8(0xE6, 0xED, 0xF3),
        accent: Color::rgb8(0x60, 0xD3, 0x94),
    };

    #[must_use]
    pub const fn tone(self) -> Tone {
        Tone::new(self.surface, self.ink, self.accent)
    }
}

// ---------------------------------------------------------------------------
// ToneInput
// ---------------------------------------------------------------------------

/// Unvalidated tone fields, each a hex or `oklch()` string if present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret: Option<String>,
}

impl ToneInput {
    /// Read tone fields from a token document.
    ///
    /// Accepts either `{ "tone": { ... } }` or a bare tone object. Fields
    /// that are not strings are ignored rather than rejected.
    #[must_use]
    pub fn from_json(doc: &Value) -> Self {
        let tone = match doc.get("tone") {
            Some(inner @ Value::Object(_)) => inner,
            _ => doc,
        };
        let field = |name: &str| tone.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            surface: field("surface"),
            ink: field("ink"),
            accent: field("accent"),
            caret: field("caret"),
        }
    }

    /// Resolve every field, substituting `defaults` for anything missing or
    /// malformed. The caret has no default: an invalid caret follows the
    /// accent.
    #[must_use]
    pub fn resolve(&self, defaults: &ToneDefaults) -> Tone {
        Tone {
            surface: resolve_field("surface", self.surface.as_deref(), defaults.surface),
            ink: resolve_field("ink", self.ink.as_deref(), defaults.ink),
            accent: resolve_field("accent", self.accent.as_deref(), defaults.accent),
            caret: self.caret.as_deref().and_then(Color::parse),
        }
    }
}

fn resolve_field(name: &str, raw: Option<&str>, default: Color) -> Color {
    match raw {
        Some(s) => Color::parse(s).unwrap_or_else(|| {
            debug!(field = name, value = s, %default, "tone value is not a color, using default");
            default
        }),
        None => {
            debug!(field = name, %default, "tone value missing, using default");
            default
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
