//! Tone extraction from a design-system stylesheet.
//!
//! Three layers are read in order, later layers overriding earlier ones:
//!
//! 1. `--tone-(surface|ink|accent)` declarations anywhere in the sheet
//! 2. `--color-(surface|text|accent)` inside `:root[data-theme='dark']`
//! 3. the same `--color-*` declarations inside `:root[data-skin-id='SKIN']`
//!
//! `text` maps to `ink`. Declarations whose value is not a hex or
//! `oklch()` color are skipped.

use std::sync::LazyLock;

use gratia_color::Color;
use regex::Regex;

use crate::tone::ToneInput;

/// Skin applied when none is configured.
pub const DEFAULT_SKIN: &str = "MOON";

const DARK_THEME_SELECTOR: &str = ":root[data-theme='dark']";

static TONE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)--tone-(surface|ink|accent)\s*:\s*([^;]+);").expect("tone declaration pattern is valid")
});

static COLOR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)--color-(surface|text|accent)\s*:\s*([^;]+);").expect("color declaration pattern is valid")
});

/// Resolve the configured skin from the raw environment value.
///
/// Unset selects [`DEFAULT_SKIN`], `none` (any case) disables skins, and
/// anything else is upper-cased.
#[must_use]
pub fn skin_from_env(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        None | Some("") => Some(DEFAULT_SKIN.to_owned()),
        Some(s) if s.eq_ignore_ascii_case("none") => None,
        Some(s) => Some(s.to_ascii_uppercase()),
    }
}

/// The body of the first rule block whose selector text is `selector`.
///
/// The block is found by brace matching from the first `{` after the
/// selector, so nested blocks are included verbatim. Returns `None` if the
/// selector is absent or its block is never closed.
#[must_use]
pub fn extract_block<'a>(css: &'a str, selector: &str) -> Option<&'a str> {
    let anchor = css.find(selector)?;
    let open = anchor + css[anchor..].find('{')?;

    let mut depth = 0usize;
    for (i, byte) in css.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&css[open + 1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract tone fields from stylesheet text. Values are normalized to
/// opaque upper-case hex.
#[must_use]
pub fn tone_from_stylesheet(css: &str, skin: Option<&str>) -> ToneInput {
    let mut tone = ToneInput::default();

    apply_declarations(&mut tone, &TONE_DECL, css);

    if let Some(block) = extract_block(css, DARK_THEME_SELECTOR) {
        apply_declarations(&mut tone, &COLOR_DECL, block);
    }

    if let Some(skin) = skin {
        let selector = format!(":root[data-skin-id='{skin}']");
        if let Some(block) = extract_block(css, &selector) {
            apply_declarations(&mut tone, &COLOR_DECL, block);
        }
    }

    tone
}

fn apply_declarations(tone: &mut ToneInput, pattern: &Regex, text: &str) {
    for caps in pattern.captures_iter(text) {
        let Some(color) = Color::parse(&caps[2]) else { continue };
        let value = Some(color.opaque().to_hex());
        match caps[1].to_ascii_lowercase().as_str() {
            "surface" => tone.surface = value,
            "ink" | "text" => tone.ink = value,
            "accent" => tone.accent = value,
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
