// SPDX-License-Identifier: MIT
//
// Directory-level theme lint. The per-document rules live in
// `gratia_theme::document`; this walks a themes directory and applies them
// to every generated file.

use std::fs;
use std::path::{Path, PathBuf};

use gratia_theme::{LintReport, lint_document};
use serde_json::Value;

use crate::error::Result;
use crate::project::TEMPLATE_SUFFIX;

/// Generated theme documents in `dir`: every `*.json` except templates,
/// sorted by file name.
pub fn theme_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if name.ends_with(".json") && !name.ends_with(TEMPLATE_SUFFIX) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Lint every generated theme in `dir`. A file that is not JSON is an
/// error, not a finding.
pub fn lint_dir(dir: &Path) -> Result<Vec<(PathBuf, LintReport)>> {
    theme_files(dir)?
        .into_iter()
        .map(|path| -> Result<(PathBuf, LintReport)> {
            let doc: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
            let report = lint_document(&doc);
            Ok((path, report))
        })
        .collect()
}
