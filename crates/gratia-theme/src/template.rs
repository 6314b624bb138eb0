//! `${name}` placeholder substitution.
//!
//! Templates are plain text (in practice a VS Code theme JSON). Every
//! `${name}` whose name the palette knows is replaced by the color's hex
//! string; anything else is left exactly as written so a later lint pass
//! can see it.

use std::borrow::Cow;
use std::sync::LazyLock;

use gratia_color::Color;
use regex::{Captures, Regex};

use crate::palette::Palette;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([\w.]+)\}").expect("placeholder pattern is valid"));

/// Substitute palette colors into `template`.
#[must_use]
pub fn render(template: &str, palette: &Palette) -> String {
    render_with(template, |name| palette.lookup(name)).into_owned()
}

/// Substitute using an arbitrary lookup. Borrows the input when nothing
/// was replaced.
pub fn render_with<F>(template: &str, lookup: F) -> Cow<'_, str>
where
    F: Fn(&str) -> Option<Color>,
{
    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| match lookup(&caps[1]) {
        Some(color) => color.to_hex(),
        None => caps[0].to_owned(),
    })
}

/// Names referenced by `template` that `palette` cannot resolve, in order of
/// first appearance.
#[must_use]
pub fn unresolved<'t>(template: &'t str, palette: &Palette) -> Vec<&'t str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else { continue };
        if palette.lookup(name).is_none() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
