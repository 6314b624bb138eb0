// SPDX-License-Identifier: MIT
//
// Theme generation: one tone, every mood, one rendered document per mood.

use std::fs;
use std::path::{Path, PathBuf};

use gratia_theme::template::unresolved;
use gratia_theme::{Mood, PaletteCache, ToneDefaults, render};
use tracing::{info, warn};

use crate::error::{GratiaError, Result};
use crate::project::Project;

/// Render the template for every mood.
///
/// Writes `<stem>-<mood>.json` for each mood and additionally `<stem>.json`
/// for the default mood. Returns every path written, in write order.
pub fn generate(project: &Project) -> Result<Vec<PathBuf>> {
    let template_path = project.template_path();
    if !template_path.is_file() {
        return Err(GratiaError::MissingTemplate(template_path));
    }
    let template = fs::read_to_string(&template_path)?;

    let tone = project.read_tokens().resolve(&ToneDefaults::THEME);
    let mut cache = PaletteCache::new(tone);
    let mut written = Vec::with_capacity(Mood::ALL.len() + 1);

    let unknown = unresolved(&template, cache.get(Mood::DEFAULT));
    if !unknown.is_empty() {
        warn!("template placeholders left as written: {}", unknown.join(", "));
    }

    for mood in Mood::ALL {
        let themed = render(&template, cache.get(mood));

        let out = project.theme_path(Some(mood));
        fs::write(&out, &themed)?;
        info!("Theme → {}", relative(project, &out));
        written.push(out);

        if mood == Mood::DEFAULT {
            let out = project.theme_path(None);
            fs::write(&out, &themed)?;
            written.push(out);
        }
    }

    Ok(written)
}

fn relative(project: &Project, path: &Path) -> String {
    path.strip_prefix(project.root()).unwrap_or(path).display().to_string()
}
