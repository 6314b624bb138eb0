// SPDX-License-Identifier: MIT
//
// The canonical color value: 8-bit sRGB plus an optional alpha byte.
//
// Parsing follows the theme-token grammar: 3, 4, 6 or 8 hex digits, with
// or without a leading `#`. Short forms are expanded by digit doubling and
// any alpha digits in the input are discarded, so a parsed color is always
// opaque. Alpha only enters through `Color::with_alpha`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::css;
use crate::oklch::Oklch;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8 bits per channel and an optional alpha byte.
///
/// Equality is exact on bytes, which is what palette determinism is
/// measured against.
///
/// # Examples
///
/// ```
/// use gratia_color::Color;
///
/// let surface = Color::hex("#0f1317").unwrap();
/// assert_eq!(surface.to_hex(), "#0F1317");
///
/// let short = Color::hex("fa0").unwrap();
/// assert_eq!(short.to_hex(), "#FFAA00");
///
/// let translucent = surface.with_alpha(0.5);
/// assert_eq!(translucent.to_hex(), "#0F131780");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Alpha byte appended to the hex form. `None` prints as `#RRGGBB`.
    pub alpha: Option<u8>,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit sRGB values.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Normalize a hex color string.
    ///
    /// Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, with or without a
    /// leading `#` and surrounding whitespace. Alpha digits are dropped.
    ///
    /// Returns `None` when the input is not a color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let r = parse_hex_digit(bytes[0])?;
                let g = parse_hex_digit(bytes[1])?;
                let b = parse_hex_digit(bytes[2])?;
                if bytes.len() == 4 {
                    parse_hex_digit(bytes[3])?;
                }
                Some(Self::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 | 8 => {
                let r = parse_hex_byte(&bytes[0..2])?;
                let g = parse_hex_byte(&bytes[2..4])?;
                let b = parse_hex_byte(&bytes[4..6])?;
                if bytes.len() == 8 {
                    parse_hex_byte(&bytes[6..8])?;
                }
                Some(Self::rgb8(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse either a hex color or a CSS `oklch(L C H [/ A])` function.
    ///
    /// This is the front door for tone values pulled out of stylesheets.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::hex(s).or_else(|| css::parse_oklch(s).map(Self::from_oklch))
    }

    /// Create an opaque color from OKLCH components, clamping lightness to
    /// [0, 1], chroma to [0, 0.4] and normalizing the hue first.
    #[must_use]
    pub fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self::from_oklch(Oklch::new(l, c, h).clamped())
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0x00, 0x00, 0x00);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(0xFF, 0xFF, 0xFF);

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The RGB channels as a byte triple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The RGB channels scaled to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Drop the alpha byte.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self::rgb8(self.r, self.g, self.b)
    }

    /// Whether this color carries no alpha byte.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha.is_none()
    }

    /// Uppercase hex string: `#RRGGBB`, or `#RRGGBBAA` when alpha is set.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, alpha } = self;
        match alpha {
            None => format!("#{r:02X}{g:02X}{b:02X}"),
            Some(a) => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// The input was not a recognizable color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a byte, rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Round a float on the 0–255 scale to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn channel_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short_doubles_digits() {
        assert_eq!(Color::hex("#f80").unwrap().to_hex(), "#FF8800");
    }

    #[test]
    fn hex_parsing_short_alpha_is_dropped() {
        let color = Color::hex("#f808").unwrap();
        assert_eq!(color.to_hex(), "#FF8800");
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_long_alpha_is_dropped() {
        let color = Color::hex("#ff000080").unwrap();
        assert_eq!(color.to_hex(), "#FF0000");
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Color::hex("00ff00").unwrap().to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn hex_parsing_trims_whitespace() {
        assert_eq!(Color::hex("  #abcdef \n").unwrap().to_hex(), "#ABCDEF");
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#1234567").is_none());
        assert!(Color::hex("#ggg").is_none());
        assert!(Color::hex("##fff").is_none());
        assert!(Color::hex("").is_none());
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(Color::rgb8(0xc8, 0x64, 0x32).to_hex(), "#C86432");
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn opaque_strips_alpha() {
        let c = Color::rgb8(1, 2, 3).with_alpha(0.5);
        assert!(!c.is_opaque());
        assert_eq!(c.opaque().to_hex(), "#010203");
    }

    // ── Parse front door ─────────────────────────────────────────────────

    #[test]
    fn parse_accepts_hex_and_oklch() {
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        let c = Color::parse("oklch(0% 0 0)").unwrap();
        assert_eq!(c, Color::BLACK);
        assert!(Color::parse("rebeccapurple").is_none());
    }

    #[test]
    fn from_str_reports_input() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert_eq!("#0F1317".parse::<Color>().unwrap(), Color::rgb8(0x0F, 0x13, 0x17));
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb8(0xE6, 0xED, 0xF5)).unwrap();
        assert_eq!(json, "\"#E6EDF5\"");
        let back: Color = serde_json::from_str("\"#e6edf5\"").unwrap();
        assert_eq!(back, Color::rgb8(0xE6, 0xED, 0xF5));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn display_and_debug() {
        let c = Color::rgb8(0x0F, 0x13, 0x17);
        assert_eq!(format!("{c}"), "#0F1317");
        assert_eq!(format!("{c:?}"), "Color(#0F1317)");
    }

    #[test]
    fn byte_rounding_is_half_up() {
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(1.0), 255);
        assert_eq!(unit_to_u8(2.0), 255);
        assert_eq!(channel_to_u8(12.5), 13);
        assert_eq!(channel_to_u8(-3.0), 0);
    }
}
