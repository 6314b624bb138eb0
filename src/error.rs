// SPDX-License-Identifier: MIT
//
// Error type for the file-facing side of gratia. The palette engine itself
// never fails; everything here is about reading and writing files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from generating, publishing or linting theme files.
#[derive(Error, Debug)]
pub enum GratiaError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document that must be JSON was not.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme template does not exist.
    #[error("theme template not found at {}", .0.display())]
    MissingTemplate(PathBuf),

    /// No stylesheet candidate and no example token file exist.
    #[error("no token source found; set GARDEN_TOKENS or provide tokens.example.json")]
    NoTokenSource,

    /// One or more theme documents failed the lint.
    #[error("theme lint failed in {0} file(s)")]
    LintFailed(usize),
}

pub type Result<T> = std::result::Result<T, GratiaError>;
