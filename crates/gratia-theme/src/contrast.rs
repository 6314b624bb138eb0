//! WCAG contrast evaluation and bounded contrast repair.
//!
//! Luminance and ratios follow WCAG 2.1 exactly. Repair is deliberately
//! coarse: ten fixed blend steps toward white or black in gamma space,
//! lighten tried before darken at every step. It either finds a candidate
//! within those steps or reports `None`, and [`pick_foreground`] turns that
//! into a three-tier guarantee (AAA, then AA, then white).

use gratia_color::Color;
use gratia_color::oklch::srgb_to_linear;
use tracing::warn;

/// WCAG AAA threshold for normal text.
pub const AAA: f64 = 7.0;

/// WCAG AA threshold for normal text.
pub const AA: f64 = 4.5;

/// Number of blend steps tried by [`ensure_contrast`], at 1/10 spacing.
const SEARCH_STEPS: u32 = 10;

/// Last-resort foreground when neither AAA nor AA can be reached.
pub const FALLBACK_FOREGROUND: Color = Color::WHITE;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// WCAG quotes a 0.03928 linearization knee where sRGB uses 0.04045. No
/// 8-bit channel value falls between the two, so they agree on every color.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Nudge `fg` toward white or black until it reaches `min_ratio` against
/// `bg`.
///
/// Returns `fg` untouched when it already passes. Otherwise tries blend
/// fractions 0.1, 0.2, …, 1.0; at each fraction the lighter candidate is
/// tested before the darker one. Returns `None` if no step passes.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Option<Color> {
    if contrast_ratio(fg, bg) >= min_ratio {
        return Some(fg);
    }

    (1..=SEARCH_STEPS).find_map(|i| {
        let step = f64::from(i) / f64::from(SEARCH_STEPS);
        [Color::WHITE, Color::BLACK]
            .into_iter()
            .map(|target| fg.mix_rgb(target, step))
            .find(|&candidate| contrast_ratio(candidate, bg) >= min_ratio)
    })
}

/// Choose a legible foreground for `bg`, starting from `preferred`.
///
/// Tries AAA, then AA, then falls back to [`FALLBACK_FOREGROUND`]. Always
/// returns a color.
#[must_use]
pub fn pick_foreground(bg: Color, preferred: Color) -> Color {
    if let Some(fg) = ensure_contrast(preferred, bg, AAA) {
        return fg;
    }
    if let Some(fg) = ensure_contrast(preferred, bg, AA) {
        warn!(%bg, %preferred, %fg, "foreground settled for AA contrast");
        return fg;
    }
    warn!(%bg, %preferred, "no AA foreground within search bound, using fallback");
    FALLBACK_FOREGROUND
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(hex("#808080"));
        // sRGB 0.502 linearizes to ~0.216
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_use_wcag_weights() {
        assert!(approx_eq(relative_luminance(hex("#FF0000")), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#00FF00")), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(hex("#0000FF")), 0.0722, 1e-9));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#3A7BD5");
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let samples = ["#0F1317", "#E6EDF5", "#FFD59E", "#60D394", "#C86432", "#777777"];
        for a in samples {
            for b in samples {
                let ab = contrast_ratio(hex(a), hex(b));
                let ba = contrast_ratio(hex(b), hex(a));
                assert!(approx_eq(ab, ba, 1e-12), "Asymmetric {a}/{b}: {ab} vs {ba}");
                assert!((1.0..=21.0 + 1e-9).contains(&ab));
            }
        }
    }

    // ── ensure_contrast ─────────────────────────────────────────────

    #[test]
    fn ensure_returns_input_when_already_passing() {
        let fg = hex("#E6EDF5");
        let bg = hex("#0F1317");
        assert_eq!(ensure_contrast(fg, bg, AAA), Some(fg));
    }

    #[test]
    fn ensure_lightens_on_dark_background() {
        let fg = hex("#505050");
        let bg = hex("#101010");
        let fixed = ensure_contrast(fg, bg, AAA).unwrap();
        assert!(contrast_ratio(fixed, bg) >= AAA);
        assert!(relative_luminance(fixed) > relative_luminance(fg));
    }

    #[test]
    fn ensure_darkens_on_light_background() {
        let fg = hex("#B0B0B0");
        let bg = hex("#F5F5F5");
        let fixed = ensure_contrast(fg, bg, AA).unwrap();
        assert!(contrast_ratio(fixed, bg) >= AA);
        assert!(relative_luminance(fixed) < relative_luminance(fg));
    }

    #[test]
    fn ensure_prefers_lighten_on_tie_step() {
        // Against its own mid gray, both directions first clear 1.5:1 at
        // the 0.3 step. The lighter candidate must win.
        let bg = hex("#767676");
        let fg = hex("#767676");
        let fixed = ensure_contrast(fg, bg, 1.5).unwrap();
        assert!(relative_luminance(fixed) > relative_luminance(bg));
    }

    #[test]
    fn ensure_takes_first_passing_step() {
        let fg = hex("#505050");
        let bg = hex("#101010");
        let fixed = ensure_contrast(fg, bg, AAA).unwrap();
        // One step less toward white must not have passed.
        let steps: Vec<Color> = (1..=10)
            .map(|i| fg.mix_rgb(Color::WHITE, f64::from(i) / 10.0))
            .collect();
        let idx = steps.iter().position(|&c| c == fixed).unwrap();
        if idx > 0 {
            assert!(contrast_ratio(steps[idx - 1], bg) < AAA);
        }
    }

    #[test]
    fn ensure_reports_unreachable() {
        // Nothing reaches 7:1 against mid gray: white gives ~4.5, black ~4.7.
        assert_eq!(ensure_contrast(hex("#777777"), hex("#777777"), AAA), None);
        assert_eq!(ensure_contrast(Color::WHITE, Color::BLACK, 22.0), None);
    }

    // ── pick_foreground ─────────────────────────────────────────────

    #[test]
    fn pick_keeps_preferred_when_aaa() {
        let ink = hex("#E6EDF5");
        assert_eq!(pick_foreground(hex("#0F1317"), ink), ink);
    }

    #[test]
    fn pick_degrades_to_aa() {
        let bg = hex("#777777");
        let fg = pick_foreground(bg, hex("#777777"));
        let ratio = contrast_ratio(fg, bg);
        assert!(ratio >= AA && ratio < AAA, "ratio {ratio}");
    }

    #[test]
    fn pick_always_returns_legible_color() {
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let bg = Color::rgb8(r, g, b);
                    let fg = pick_foreground(bg, bg);
                    let ratio = contrast_ratio(fg, bg);
                    assert!(
                        ratio >= AA || fg == FALLBACK_FOREGROUND,
                        "bg {bg} fg {fg} ratio {ratio}"
                    );
                }
            }
        }
    }
}
