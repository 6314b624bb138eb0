//! # gratia-theme — Mood-aware palette engine
//!
//! Turns three seed colors and a mood into every named color a dark editor
//! theme needs, each legible against its background, then renders those
//! colors into a theme template.
//!
//! # Architecture
//!
//! ```text
//! tokens.json / stylesheet
//!     │
//!     ▼
//! tone.rs / tokens.rs:  seed colors, each falling back to a default
//!     │
//!     ▼
//! mood.rs:      tint strength + ANSI tuning for the chosen mood
//!     │
//!     ▼
//! palette.rs:   blend into the closed set of named colors
//!     │          ├─ contrast.rs: WCAG-checked selection foreground
//!     │          └─ ansi.rs:     hue-anchored 16-color terminal palette
//!     ▼
//! template.rs:  `${name}` substitution into a theme document
//!     │
//!     ▼
//! document.rs:  lint the rendered document, extract a mood overlay
//! ```
//!
//! # Purity
//!
//! Nothing in this crate touches the filesystem or the environment. Same
//! inputs, same bytes out.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// The palette deriver is one exhaustive match over every key.
#![allow(clippy::too_many_lines)]
// Several keys share a derivation rule and therefore a match arm body.
#![allow(clippy::match_same_arms)]

pub mod ansi;
pub mod cache;
pub mod contrast;
pub mod document;
pub mod mood;
pub mod palette;
pub mod template;
pub mod tokens;
pub mod tone;

pub use cache::PaletteCache;
pub use document::{LintReport, lint_document, mood_overlay};
pub use mood::{Mood, MoodProfile};
pub use palette::{Palette, PaletteKey};
pub use template::render;
pub use tone::{Tone, ToneDefaults, ToneInput};

/// Derive a palette from raw tone input and an optional mood name.
///
/// Never fails: malformed tone fields take the theme defaults, a missing
/// mood is the default mood, and an unknown mood tints like the default with
/// neutral ANSI tuning.
#[must_use]
pub fn derive_palette(input: &ToneInput, mood: Option<&str>) -> Palette {
    Palette::from_input(input, mood)
}
