//! Geometric primitives for wireframe rendering.
//!
//! This module provides the geometric types used while turning wireframe
//! controls into SVG elements, plus the lenient numeric parsing that wireframe
//! documents rely on.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in mockup space
//! - [`Size`] - Width and height dimensions
//! - [`Viewport`] - The visible region of the output document
//! - [`parse_int`] / [`to_number`] - Numeric coercion of JSON values
//!
//! # Coordinate System
//!
//! Wireframe documents use the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! # Malformed Numbers
//!
//! Geometry fields are stored as decimal strings (or sometimes plain numbers).
//! A value that cannot be parsed becomes `NaN`, and `NaN` is carried through
//! every computation unchanged. Nothing is clamped or rejected.

use std::fmt;

use serde_json::Value;

/// A 2D point in mockup coordinate space.
///
/// Coordinates are `f64` so that arithmetic on them formats the same way the
/// source documents expect (e.g. `10 + 2.7 / 2` prints as `11.35`).
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::Point;
/// let group = Point::new(100.0, 50.0);
/// let child = Point::new(10.0, -5.0);
///
/// let absolute = group.add_point(child);
/// assert_eq!(absolute.x(), 110.0);
/// assert_eq!(absolute.y(), 45.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A point with both coordinates set to `NaN`.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Shrinks the size by `amount` in both dimensions.
    pub fn shrink(self, amount: f64) -> Self {
        Self {
            width: self.width - amount,
            height: self.height - amount,
        }
    }
}

/// The visible region of the rendered document, written to the `viewBox`
/// attribute of the root `svg` element.
///
/// The viewport re-centers content that overflowed its nominal canvas during
/// the layout that produced the document: the origin is shifted by the
/// overflow, and the size is the logical canvas grown by the padding on every
/// side.
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::{Size, Viewport};
/// let viewport = Viewport::for_canvas(
///     Size::new(200.0, 100.0),
///     Size::new(210.0, 110.0),
///     5.0,
/// );
/// assert_eq!(viewport.to_string(), "5 5 210 110");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Point,
    size: Size,
}

impl Viewport {
    /// Computes the viewport for a canvas.
    ///
    /// # Arguments
    ///
    /// * `canvas` - The logical canvas size (`mockupW`, `mockupH`).
    /// * `measured` - The measured canvas size (`measuredW`, `measuredH`).
    /// * `padding` - Uniform margin added around the logical canvas.
    pub fn for_canvas(canvas: Size, measured: Size, padding: f64) -> Self {
        let origin = Point::new(
            measured.width() - canvas.width() - padding,
            measured.height() - canvas.height() - padding,
        );
        let size = Size::new(
            canvas.width() + padding * 2.0,
            canvas.height() + padding * 2.0,
        );
        Self { origin, size }
    }

    pub fn origin(self) -> Point {
        self.origin
    }

    pub fn size(self) -> Size {
        self.size
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.origin.x(),
            self.origin.y(),
            self.size.width(),
            self.size.height()
        )
    }
}

/// Parses a JSON value as an integer the way wireframe documents expect.
///
/// Strings are read like an integer literal prefix: leading whitespace, an
/// optional sign, then decimal digits (or hex digits after `0x`). Everything
/// after the digits is ignored, so `"12.7px"` parses as `12`. Numbers are
/// truncated toward zero. Anything else, including a missing value, gives
/// `NaN`.
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use wireframe_core::geometry::parse_int;
/// assert_eq!(parse_int(Some(&json!("42"))), 42.0);
/// assert_eq!(parse_int(Some(&json!(" -7.9"))), -7.0);
/// assert_eq!(parse_int(Some(&json!(12.5))), 12.0);
/// assert!(parse_int(Some(&json!("wide"))).is_nan());
/// assert!(parse_int(None).is_nan());
/// ```
pub fn parse_int(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::String(text)) => parse_int_str(text),
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|number| number.is_finite())
            .map_or(f64::NAN, f64::trunc),
        _ => f64::NAN,
    };
    // Avoid printing "-0" for values such as "-0.5".
    if parsed == 0.0 { 0.0 } else { parsed }
}

fn parse_int_str(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut result: Option<f64> = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        result = Some(result.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
    }

    result.map_or(f64::NAN, |value| sign * value)
}

/// Converts a JSON value to a number the way arithmetic comparison does.
///
/// Unlike [`parse_int`], the whole string must be numeric (surrounding
/// whitespace is allowed and an empty string is zero). Strings may be signed
/// decimals, `Infinity`, or unsigned `0x`, `0o` and `0b` integers. `null` is
/// zero, a missing value or any other type is `NaN`.
///
/// ```
/// # use serde_json::json;
/// # use wireframe_core::geometry::to_number;
/// assert_eq!(to_number(Some(&json!("0x10"))), 16.0);
/// assert_eq!(to_number(Some(&json!("-Infinity"))), f64::NEG_INFINITY);
/// assert!(to_number(Some(&json!("12px"))).is_nan());
/// ```
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => to_number_str(text),
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Null) => 0.0,
        _ => f64::NAN,
    }
}

fn to_number_str(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |value, c| {
                c.to_digit(radix)
                    .map(|digit| value * f64::from(radix) + f64::from(digit))
            })
            .unwrap_or(f64::NAN);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY }
    } else if text.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}
