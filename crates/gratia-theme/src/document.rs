//! Checks and extracts over rendered theme documents.
//!
//! A theme document is VS Code theme JSON; only its `colors` object is
//! inspected. A missing or non-object `colors` is treated as empty.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys every generated theme must define.
pub const REQUIRED_KEYS: [&str; 20] = [
    "editor.selectionForeground",
    "terminal.background",
    "terminal.foreground",
    "terminalCursor.foreground",
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

/// Keys whose value shifts with the mood, copied into a settings overlay
/// when switching moods without switching themes.
pub const MOOD_OVERLAY_KEYS: [&str; 11] = [
    "tab.activeBackground",
    "tab.activeBorder",
    "editor.selectionBackground",
    "list.activeSelectionBackground",
    "quickInput.list.focusBackground",
    "input.background",
    "input.border",
    "focusBorder",
    "quickInput.background",
    "peekViewEditor.background",
    "peekViewResult.background",
];

static DEPRECATED: LazyLock<[Regex; 1]> =
    LazyLock::new(|| [Regex::new(r"^quickInput\.list\.").expect("deprecated key pattern is valid")]);

static HEX_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex value pattern is valid"));

// ---------------------------------------------------------------------------
// Lint
// ---------------------------------------------------------------------------

/// A string value that is not `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonHexValue {
    pub key: String,
    pub value: String,
}

/// Findings for one document. Deprecated and missing keys fail the lint;
/// non-hex values are warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub deprecated: Vec<String>,
    pub missing: Vec<&'static str>,
    pub non_hex: Vec<NonHexValue>,
}

impl LintReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.deprecated.is_empty() && self.missing.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.non_hex.is_empty()
    }
}

/// Lint a parsed theme document.
#[must_use]
pub fn lint_document(doc: &Value) -> LintReport {
    let empty = Map::new();
    let colors = colors(doc).unwrap_or(&empty);

    let deprecated = colors
        .keys()
        .filter(|key| DEPRECATED.iter().any(|rx| rx.is_match(key)))
        .cloned()
        .collect();

    let missing = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !colors.contains_key(*key))
        .collect();

    let non_hex = colors
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_str()?;
            (!HEX_VALUE.is_match(value)).then(|| NonHexValue {
                key: key.clone(),
                value: value.to_owned(),
            })
        })
        .collect();

    LintReport { deprecated, missing, non_hex }
}

// ---------------------------------------------------------------------------
// Mood overlay
// ---------------------------------------------------------------------------

/// The mood-sensitive subset of a document's colors. Keys that are absent,
/// empty or not strings are left out.
#[must_use]
pub fn mood_overlay(doc: &Value) -> Map<String, Value> {
    let Some(colors) = colors(doc) else {
        return Map::new();
    };
    MOOD_OVERLAY_KEYS
        .into_iter()
        .filter_map(|key| match colors.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some((key.to_owned(), Value::String(s.clone()))),
            _ => None,
        })
        .collect()
}

/// Layer `overlay` on top of existing color customizations. Overlay entries
/// win; everything else in `current` is preserved.
#[must_use]
pub fn merge_overlay(current: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = current.clone();
    merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

fn colors(doc: &Value) -> Option<&Map<String, Value>> {
    doc.get("colors").and_then(Value::as_object)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
