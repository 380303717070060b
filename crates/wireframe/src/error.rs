//! Error types for wireframe operations.
//!
//! [`WireframeError`] wraps every error condition of parsing and rendering.

use std::io;

use thiserror::Error;

use wireframe_parser::error::ParseError;

use crate::font::FontError;

/// The main error type for wireframe operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries structured diagnostics with source spans,
/// together with the source text they point into.
#[derive(Debug, Error)]
pub enum WireframeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl WireframeError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
