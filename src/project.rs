// SPDX-License-Identifier: MIT
//
// On-disk layout of a gratia theme project:
//
//   <root>/
//     tokens.json                         ← published tone (optional)
//     tokens.example.json                 ← fallback tone
//     themes/
//       gratia-garden-dark.template.json  ← ${placeholder} template
//       gratia-garden-dark.json           ← default mood output
//       gratia-garden-dark-<mood>.json    ← one per mood

use std::fs;
use std::path::{Path, PathBuf};

use gratia_theme::{Mood, ToneInput};
use serde_json::Value;
use tracing::{debug, warn};

pub const THEMES_DIR: &str = "themes";
pub const THEME_STEM: &str = "gratia-garden-dark";
pub const TEMPLATE_SUFFIX: &str = ".template.json";
pub const TOKENS_FILE: &str = "tokens.json";
pub const TOKENS_EXAMPLE_FILE: &str = "tokens.example.json";

/// Paths of one theme project, anchored at its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn themes_dir(&self) -> PathBuf {
        self.root.join(THEMES_DIR)
    }

    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.themes_dir().join(format!("{THEME_STEM}{TEMPLATE_SUFFIX}"))
    }

    /// Output path for a mood, or for the default theme file when `None`.
    #[must_use]
    pub fn theme_path(&self, mood: Option<Mood>) -> PathBuf {
        let name = match mood {
            Some(mood) => format!("{THEME_STEM}-{mood}.json"),
            None => format!("{THEME_STEM}.json"),
        };
        self.themes_dir().join(name)
    }

    #[must_use]
    pub fn tokens_path(&self) -> PathBuf {
        self.root.join(TOKENS_FILE)
    }

    #[must_use]
    pub fn tokens_example_path(&self) -> PathBuf {
        self.root.join(TOKENS_EXAMPLE_FILE)
    }

    /// Read the tone from `tokens.json`, falling back to
    /// `tokens.example.json`. Never fails: an unreadable or malformed token
    /// file yields an empty tone, which resolves to the defaults.
    #[must_use]
    pub fn read_tokens(&self) -> ToneInput {
        let primary = self.tokens_path();
        let fallback = self.tokens_example_path();

        let (path, text) = match fs::read_to_string(&primary) {
            Ok(text) => (primary, text),
            Err(err) => {
                debug!(path = %primary.display(), %err, "tokens unreadable, trying example");
                match fs::read_to_string(&fallback) {
                    Ok(text) => (fallback, text),
                    Err(err) => {
                        warn!(path = %fallback.display(), %err, "no token file, using default tone");
                        return ToneInput::default();
                    }
                }
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(doc) => ToneInput::from_json(&doc),
            Err(err) => {
                warn!(path = %path.display(), %err, "token file is not JSON, using default tone");
                ToneInput::default()
            }
        }
    }
}
