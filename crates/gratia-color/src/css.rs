// SPDX-License-Identifier: MIT
//
// CSS `oklch()` function parsing for tone values taken from stylesheets.

use std::sync::LazyLock;

use regex::Regex;

use crate::oklch::Oklch;

static OKLCH_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)oklch\(\s*([\d.]+%?)\s+([\d.]+)\s+([\d.]+)(?:deg|°)?(?:\s*/\s*([\d.]+%?))?\s*\)",
    )
    .expect("oklch pattern is valid")
});

/// Parse `oklch(L C H)` or `oklch(L C H / A)`.
///
/// Lightness may be a percentage (`62%`) or a fraction (`0.62`). The hue
/// accepts an optional `deg` or `°` suffix. Alpha is matched but ignored,
/// since tone colors are opaque. The first `oklch(` occurrence wins.
#[must_use]
pub fn parse_oklch(s: &str) -> Option<Oklch> {
    let caps = OKLCH_FN.captures(s)?;

    let l_raw = caps.get(1)?.as_str();
    let l = match l_raw.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => l_raw.parse::<f64>().ok()?,
    };
    let c = caps.get(2)?.as_str().parse::<f64>().ok()?;
    let h = caps.get(3)?.as_str().parse::<f64>().ok()?;

    Some(Oklch::new(l, c, h))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
