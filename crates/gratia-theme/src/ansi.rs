//! The 16-slot terminal sub-palette.
//!
//! Six chromatic slots are fixed hue anchors instantiated at two OKLCH
//! working points, so every theme gets the same perceptual weight per hue
//! regardless of its tone colors. The four neutral slots are gamma-space
//! blends between the (mood-tinted) surface and the ink.

use gratia_color::Color;

use crate::mood::{AccentEmphasis, AnsiTuning};

/// Lightness and chroma of a group of ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WorkingPoint {
    l: f64,
    c: f64,
}

const NORMAL_POINT: WorkingPoint = WorkingPoint { l: 0.68, c: 0.06 };
const BRIGHT_POINT: WorkingPoint = WorkingPoint { l: 0.80, c: 0.09 };

// Surface → ink blend weights for the neutral slots.
const BLACK_WEIGHT: f64 = 0.65;
const WHITE_WEIGHT: f64 = 0.15;
const BRIGHT_BLACK_WEIGHT: f64 = 0.45;
const BRIGHT_WHITE_WEIGHT: f64 = 0.05;

// ---------------------------------------------------------------------------
// AnsiColor
// ---------------------------------------------------------------------------

/// One of the eight ANSI color slots, in escape-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Slot index, 0–7.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The OKLCH hue anchor for chromatic slots; `None` for black/white.
    #[must_use]
    pub const fn hue(self) -> Option<f64> {
        match self {
            Self::Red => Some(25.0),
            Self::Yellow => Some(100.0),
            Self::Green => Some(145.0),
            Self::Cyan => Some(200.0),
            Self::Blue => Some(255.0),
            Self::Magenta => Some(320.0),
            Self::Black | Self::White => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AnsiPalette
// ---------------------------------------------------------------------------

/// Normal and bright variants of all eight slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPalette {
    pub normal: [Color; 8],
    pub bright: [Color; 8],
}

impl AnsiPalette {
    /// Build the untuned sub-palette from a surface and an ink color.
    #[must_use]
    pub fn derive(surface: Color, ink: Color) -> Self {
        let slot = |color: AnsiColor, point: WorkingPoint, neutral_weight: f64| match color.hue() {
            Some(h) => Color::oklch(point.l, point.c, h),
            None => surface.mix_rgb(ink, neutral_weight),
        };

        Self {
            normal: AnsiColor::ALL.map(|c| {
                let weight = if c == AnsiColor::Black { BLACK_WEIGHT } else { WHITE_WEIGHT };
                slot(c, NORMAL_POINT, weight)
            }),
            bright: AnsiColor::ALL.map(|c| {
                let weight = if c == AnsiColor::Black { BRIGHT_BLACK_WEIGHT } else { BRIGHT_WHITE_WEIGHT };
                slot(c, BRIGHT_POINT, weight)
            }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn normal(&self, color: AnsiColor) -> Color {
        self.normal[color.index()]
    }

    #[inline]
    #[must_use]
    pub const fn bright(&self, color: AnsiColor) -> Color {
        self.bright[color.index()]
    }

    /// Apply a mood's general tuning to all sixteen colors.
    #[must_use]
    pub fn tuned(self, tuning: AnsiTuning) -> Self {
        Self {
            normal: self.normal.map(|c| c.tune(tuning.normal)),
            bright: self.bright.map(|c| c.tune(tuning.bright)),
        }
    }

    /// Apply an emphasis pass to its named slots only.
    #[must_use]
    pub fn emphasized(mut self, emphasis: &AccentEmphasis) -> Self {
        for &slot in emphasis.slots {
            let i = slot.index();
            self.normal[i] = self.normal[i].tune(emphasis.normal);
            self.bright[i] = self.bright[i].tune(emphasis.bright);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
