// SPDX-License-Identifier: MIT
//
// OKLCH ↔ sRGB conversion.
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Pipeline: sRGB bytes ↔ linear sRGB ↔ LMS ↔ Oklab ↔ OKLCH
//
// Forward results clamp L to [0, 1] and C to [0, 0.4]. The inverse clips
// each linear channel to [0, 1] before re-encoding, which is the whole
// gamut-mapping policy: lossy, silent, deterministic.

use crate::color::{Color, unit_to_u8};

/// Upper bound on chroma for every OKLCH value this crate produces.
pub const MAX_CHROMA: f64 = 0.4;

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in cylindrical Oklab coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) to 0.4.
    pub c: f64,

    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    /// 0° = pink/red, 90° = yellow, 180° = cyan/green, 270° = blue/purple.
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Clamp lightness and chroma to their valid ranges and wrap the hue.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            l: self.l.clamp(0.0, 1.0),
            c: self.c.clamp(0.0, MAX_CHROMA),
            h: normalize_hue(self.h),
        }
    }

    /// Quantize back to an opaque 8-bit color.
    #[inline]
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_oklch(self)
    }
}

impl Color {
    /// View this color in OKLCH. Alpha is ignored.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (r, g, b) = self.to_srgb();
        let (l, a, b_ok) = linear_srgb_to_oklab(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
        );
        let c = a.hypot(b_ok);
        let h = normalize_hue(b_ok.atan2(a).to_degrees());

        Oklch {
            l: l.clamp(0.0, 1.0),
            c: c.clamp(0.0, MAX_CHROMA),
            h,
        }
    }

    /// Convert OKLCH to an opaque 8-bit color, clipping out-of-gamut
    /// channels.
    #[must_use]
    pub fn from_oklch(color: Oklch) -> Self {
        let h_rad = color.h.to_radians();
        let a = color.c * h_rad.cos();
        let b = color.c * h_rad.sin();
        let (r, g, bl) = oklab_to_linear_srgb(color.l, a, b);

        Self::rgb8(encode_channel(r), encode_channel(g), encode_channel(bl))
    }
}

/// Clip a linear channel, re-apply gamma and quantize.
#[inline]
fn encode_channel(linear: f64) -> u8 {
    unit_to_u8(linear_to_srgb(linear.clamp(0.0, 1.0)).clamp(0.0, 1.0))
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Signed shortest-arc difference from `from` to `to`, in (−180, 180].
#[inline]
#[must_use]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    hue_delta(a, b).abs()
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The Oklab ↔ Linear sRGB conversion goes through an intermediate LMS
// (Long, Medium, Short cone response) space.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    // Linear sRGB → LMS
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    // Cube root (LMS → Oklab intermediate)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // Oklab intermediate → Oklab
    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_)));
    let b_ok = 0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
