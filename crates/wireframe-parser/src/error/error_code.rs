//! Error codes for wireframe diagnostics.
//!
//! Codes are grouped by phase:
//! - `E1xx` - Reading the JSON document
//! - `E3xx` - Checking the control tree

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E1xx)
    // =========================================================================
    /// Invalid JSON syntax.
    E100,

    /// Incomplete input.
    ///
    /// The document ended before the JSON value was complete.
    E101,

    /// Document shape mismatch.
    ///
    /// The JSON is well formed but a required field is missing or has the
    /// wrong type, e.g. no `mockup` object.
    E102,

    // =========================================================================
    // Control Tree Warnings (E3xx)
    // =========================================================================
    /// Unsupported control type.
    ///
    /// The `typeID` has no drawing routine; the control and its subtree are
    /// skipped.
    E300,

    /// Children on a non-group control.
    ///
    /// Only `__group__` controls draw nested controls.
    E301,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid JSON syntax",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "invalid document structure",
            ErrorCode::E300 => "unsupported control type",
            ErrorCode::E301 => "children ignored on non-group control",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
