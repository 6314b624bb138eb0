// SPDX-License-Identifier: MIT
//
// gratia — mood-aware editor theme generator.
//
// The palette engine lives in the workspace crates:
//
//   gratia-color → hex/OKLCH codec, blending, tuning
//   gratia-theme → contrast, moods, palette derivation, templates, lint
//
// This crate is the file-facing layer on top: it reads tokens and
// templates from a theme project, writes rendered themes and published
// tokens, and lints what it wrote.

pub mod error;
pub mod generate;
pub mod lint;
pub mod overlay;
pub mod project;
pub mod publish;

pub use error::{GratiaError, Result};
pub use project::Project;
