// SPDX-License-Identifier: MIT
//
// Mood overlays: the mood-sensitive slice of a generated theme, ready to be
// dropped into an editor's color customizations.

use std::fs;
use std::path::Path;

use gratia_theme::document::merge_overlay;
use gratia_theme::mood_overlay;
use serde_json::{Map, Value};

use crate::error::Result;

/// Read a generated theme and extract its mood overlay. With `onto`, the
/// overlay is layered over the JSON object in that file (a non-object
/// file counts as empty).
pub fn overlay_from_file(theme: &Path, onto: Option<&Path>) -> Result<Map<String, Value>> {
    let doc: Value = serde_json::from_str(&fs::read_to_string(theme)?)?;
    let overlay = mood_overlay(&doc);

    let Some(onto) = onto else {
        return Ok(overlay);
    };
    let current: Value = serde_json::from_str(&fs::read_to_string(onto)?)?;
    let current = match current {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Ok(merge_overlay(&current, &overlay))
}
