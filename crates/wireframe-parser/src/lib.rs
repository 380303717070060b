//! # Wireframe Parser
//!
//! Reads wireframe mockup documents (JSON) into the
//! [`wireframe_core::model`] types, reporting malformed input as diagnostics
//! with error codes and source spans.
//!
//! ## Usage
//!
//! ```
//! # use wireframe_parser::{check, parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{"mockup": {"mockupW": "100", "mockupH": "50",
//!         "controls": {"control": [{"ID": "1", "typeID": "Canvas", "zOrder": "0"}]}}}"#;
//!
//!     let wireframe = parse(source)?;
//!     assert!(check(&wireframe).is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;
mod span;
mod validate;

pub use span::Span;
pub use validate::check;

use log::debug;
use serde_json::error::Category;

use wireframe_core::model::Wireframe;

use error::{Diagnostic, ErrorCode, ParseError};

/// Parse JSON source text into a wireframe document.
///
/// Unknown keys are ignored and control values are kept as written, so only
/// JSON syntax errors and a missing or mistyped document skeleton fail here.
/// Use [`check`] for non-fatal warnings about the control tree.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying a single diagnostic with code
/// [`E100`](ErrorCode::E100) for syntax errors, [`E101`](ErrorCode::E101)
/// for truncated input or [`E102`](ErrorCode::E102) for a document shape
/// mismatch.
pub fn parse(source: &str) -> Result<Wireframe, ParseError> {
    let wireframe: Wireframe =
        serde_json::from_str(source).map_err(|err| json_diagnostic(&err, source))?;

    debug!(
        name = wireframe.name(),
        controls = wireframe.mockup().controls().len();
        "Parsed wireframe"
    );
    Ok(wireframe)
}

fn json_diagnostic(err: &serde_json::Error, source: &str) -> Diagnostic {
    let span = Span::at_line_column(source, err.line(), err.column());
    let (code, label, help) = match err.classify() {
        Category::Eof => (
            ErrorCode::E101,
            "document ends here",
            "the document is truncated; close every open object and array",
        ),
        Category::Data => (
            ErrorCode::E102,
            "unexpected value",
            "a wireframe document needs a `mockup` object with a `controls.control` array",
        ),
        Category::Syntax | Category::Io => (
            ErrorCode::E100,
            "invalid JSON",
            "check the JSON syntax near this position",
        ),
    };

    Diagnostic::error(json_message(err))
        .with_code(code)
        .with_label(span, label)
        .with_help(help)
}

/// The serde_json message without its trailing position, which the label
/// already shows.
fn json_message(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rsplit_once(" at line ") {
        Some((head, _)) => head.to_string(),
        None => message,
    }
}
