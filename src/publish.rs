// SPDX-License-Identifier: MIT
//
// Token publishing: pull the tone out of the design system's stylesheet
// (or the bundled example tokens) and write it to `tokens.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use gratia_theme::tokens::tone_from_stylesheet;
use gratia_theme::{Tone, ToneDefaults, ToneInput};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{GratiaError, Result};
use crate::project::Project;

/// Stylesheet locations tried after an explicit path, relative to the
/// project root.
const STYLESHEET_CANDIDATES: [&str; 4] = [
    "../garden-core/ui/src/styles/tokens.css",
    "../garden-core/packages/tokens/theme.css",
    "../ui/src/styles/tokens.css",
    "../../ui/src/styles/tokens.css",
];

/// Where the published tone comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Stylesheet(PathBuf),
    Example(PathBuf),
}

impl TokenSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stylesheet(path) | Self::Example(path) => path,
        }
    }
}

/// Pick the first existing stylesheet (explicit path first), else the
/// example token file.
#[must_use]
pub fn resolve_source(project: &Project, explicit: Option<&Path>) -> Option<TokenSource> {
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(STYLESHEET_CANDIDATES.iter().map(|rel| project.root().join(rel)));

    for candidate in candidates {
        if candidate.is_file() {
            return Some(TokenSource::Stylesheet(candidate));
        }
    }

    let example = project.tokens_example_path();
    example.is_file().then_some(TokenSource::Example(example))
}

/// The `tokens.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDocument {
    pub tone: Tone,
    pub meta: TokenMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    pub source: String,
    pub generated_at: String,
}

impl TokenDocument {
    /// Resolve `input` against the publishing defaults. The caret is not
    /// published.
    #[must_use]
    pub fn new(input: &ToneInput, source: &Path, generated_at: DateTime<Utc>) -> Self {
        let tone = Tone {
            caret: None,
            ..input.resolve(&ToneDefaults::TOKENS)
        };
        Self {
            tone,
            meta: TokenMeta {
                source: source.display().to_string(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

/// Extract the tone from `source`.
pub fn read_source(source: &TokenSource, skin: Option<&str>) -> Result<ToneInput> {
    match source {
        TokenSource::Stylesheet(path) => {
            let css = fs::read_to_string(path)?;
            Ok(tone_from_stylesheet(&css, skin))
        }
        TokenSource::Example(path) => {
            let doc: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            Ok(ToneInput::from_json(&doc))
        }
    }
}

/// Resolve a source, extract its tone and write `tokens.json`.
pub fn publish(
    project: &Project,
    explicit: Option<&Path>,
    skin: Option<&str>,
    now: DateTime<Utc>,
) -> Result<TokenDocument> {
    let source = resolve_source(project, explicit).ok_or(GratiaError::NoTokenSource)?;
    let input = read_source(&source, skin)?;
    let doc = TokenDocument::new(&input, source.path(), now);

    let out = project.tokens_path();
    fs::write(&out, serde_json::to_string_pretty(&doc)?)?;
    info!(source = %source.path().display(), "wrote {}", out.display());

    Ok(doc)
}
