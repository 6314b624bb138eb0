// SPDX-License-Identifier: MIT
//
// Color algebra: blending, alpha and parametric tuning.
//
// Two blend spaces are offered on purpose. `mix_rgb` interpolates the
// gamma-encoded bytes and is what UI chrome shades are built from.
// `mix_oklch` interpolates in OKLCH with shortest-arc hue, which is what
// tinting toward an accent needs to look even.

use crate::color::{Color, channel_to_u8, unit_to_u8};
use crate::oklch::{MAX_CHROMA, Oklch, hue_delta, normalize_hue};

/// A lightness shift and a relative chroma scale, applied in OKLCH.
///
/// `l` is added to lightness; chroma is multiplied by `1.0 + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuning {
    pub l: f64,
    pub c: f64,
}

impl Tuning {
    /// The identity tuning.
    pub const NEUTRAL: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64) -> Self {
        Self { l, c }
    }
}

impl Color {
    /// Linear interpolation per channel in gamma-encoded sRGB.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`; `t` is clamped.
    /// The result is opaque.
    ///
    /// Each channel is `a + (b - a) * t` rounded half away from zero, with
    /// the multiply and add rounded separately. A fused multiply-add lands
    /// exact halves like 2.5 on 2.4999… and shifts the byte.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn mix_rgb(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let a = f64::from(a);
            channel_to_u8(a + (f64::from(b) - a) * t)
        };
        Self::rgb8(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Interpolate in OKLCH.
    ///
    /// Lightness and chroma are interpolated linearly. Hue travels the
    /// shorter arc around the wheel, so 29° → 331° passes through 0°
    /// rather than through 180°. `t` is clamped; the result is opaque.
    #[must_use]
    pub fn mix_oklch(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.to_oklch();
        let b = other.to_oklch();

        Oklch {
            l: (b.l - a.l).mul_add(t, a.l),
            c: (b.c - a.c).mul_add(t, a.c),
            h: normalize_hue(hue_delta(a.h, b.h).mul_add(t, a.h)),
        }
        .to_color()
    }

    /// Attach an alpha byte. `alpha` is clamped to [0, 1], never rejected.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(unit_to_u8(alpha.clamp(0.0, 1.0))),
            ..self
        }
    }

    /// Shift lightness and scale chroma while preserving hue.
    #[must_use]
    pub fn tune(self, tuning: Tuning) -> Self {
        let o = self.to_oklch();
        Oklch {
            l: (o.l + tuning.l).clamp(0.0, 1.0),
            c: (o.c * (1.0 + tuning.c)).clamp(0.0, MAX_CHROMA),
            h: o.h,
        }
        .to_color()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
