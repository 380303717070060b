//! Error and diagnostic system for the wireframe parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the document source
//! - Severity levels separating fatal errors from warnings
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with an optional error code, source
//! locations and help text. Fatal diagnostics are wrapped in [`ParseError`]
//! when returned from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use wireframe_parser::error::{Diagnostic, ErrorCode};
//! # use wireframe_parser::Span;
//!
//! let diag = Diagnostic::error("expected `,` or `}`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(42..43), "unexpected character")
//!     .with_help("check the JSON syntax near this position");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
