//! Stroke and line-style definitions.
//!
//! This module provides the stroke model shared by every outlined control
//! (rectangles, arrows, rules and icon glyphs).
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: Color, width, style, cap and join of a stroke
//! - [`StrokeStyle`]: Solid, dashed or dotted
//! - [`DashPattern`]: The concrete dash values a control type uses for each style
//! - [`StrokeCap`] / [`StrokeJoin`]: Line endpoint and corner rendering
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # Dash Patterns
//!
//! Dash values are not global: arrows and horizontal rules draw the same
//! `"dotted"` and `"dashed"` styles with different patterns, so the pattern
//! is chosen by the control type and the style by the control's `stroke`
//! property.
//!
//! | Pattern | Dotted | Dashed |
//! |---------|--------|--------|
//! | [`DashPattern::ARROW`] | `0.8 12` | `28 46` |
//! | [`DashPattern::RULE`] | `0.8, 8` | `18, 30` |
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke` |
//! | `width` | `stroke-width` |
//! | `style` + `pattern` | `stroke-dasharray` (omitted when solid) |
//! | `cap` | `stroke-linecap` (omitted when unset) |
//! | `join` | `stroke-linejoin` (omitted when unset) |

use std::str::FromStr;

/// The visual style of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Round dots (relies on round caps)
    Dotted,
}

impl StrokeStyle {
    /// Reads the `stroke` property of a control.
    ///
    /// Only `"dotted"` and `"dashed"` select a pattern; anything else,
    /// including a missing property, is solid.
    pub fn from_property(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

/// The dash values used for the dotted and dashed styles of one control type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashPattern {
    dotted: &'static str,
    dashed: &'static str,
}

impl DashPattern {
    /// Dash values for arrows.
    pub const ARROW: DashPattern = DashPattern {
        dotted: "0.8 12",
        dashed: "28 46",
    };

    /// Dash values for horizontal rules.
    pub const RULE: DashPattern = DashPattern {
        dotted: "0.8, 8",
        dashed: "18, 30",
    };

    /// Returns the `stroke-dasharray` value for `style`, or `None` when solid.
    pub fn dasharray(self, style: StrokeStyle) -> Option<&'static str> {
        match style {
            StrokeStyle::Solid => None,
            StrokeStyle::Dotted => Some(self.dotted),
            StrokeStyle::Dashed => Some(self.dashed),
        }
    }
}

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// The color is kept as the final SVG attribute value (`rgb(r,g,b)` or a hex
/// literal), since wireframe colors are resolved before they reach the
/// stroke.
///
/// # Examples
///
/// ```
/// use wireframe_core::draw::{DashPattern, StrokeDefinition, StrokeStyle};
///
/// let mut stroke = StrokeDefinition::rounded("rgb(0,0,0)", 4.0);
/// stroke.set_style(StrokeStyle::Dotted);
/// assert_eq!(stroke.dasharray(DashPattern::ARROW), Some("0.8 12"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: String,
    width: f64,
    style: StrokeStyle,
    cap: Option<StrokeCap>,
    join: Option<StrokeJoin>,
}

impl StrokeDefinition {
    /// Creates a solid stroke with no explicit cap or join.
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            style: StrokeStyle::Solid,
            cap: None,
            join: None,
        }
    }

    /// Creates a solid stroke with round caps and round joins.
    pub fn rounded(color: impl Into<String>, width: f64) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_cap(StrokeCap::Round);
        stroke.set_join(StrokeJoin::Round);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns the stroke cap style, if set.
    pub fn cap(&self) -> Option<StrokeCap> {
        self.cap
    }

    /// Returns the stroke join style, if set.
    pub fn join(&self) -> Option<StrokeJoin> {
        self.join
    }

    /// Returns the dasharray for this stroke's style under `pattern`.
    pub fn dasharray(&self, pattern: DashPattern) -> Option<&'static str> {
        pattern.dasharray(self.style)
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = Some(cap);
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = Some(join);
    }
}

/// Apply stroke attributes to an SVG element.
///
/// Sets `stroke` and `stroke-width`, then `stroke-linecap` and
/// `stroke-linejoin` when the definition has them. The three-argument form
/// also sets `stroke-dasharray` from the given [`DashPattern`] unless the
/// stroke is solid.
///
/// # Examples
///
/// ```
/// use wireframe_core::draw::{DashPattern, StrokeDefinition, StrokeStyle};
/// use svg::node::element as svg_element;
///
/// let mut stroke = StrokeDefinition::rounded("rgb(0,0,0)", 2.7);
/// stroke.set_style(StrokeStyle::Dashed);
///
/// let path = svg_element::Path::new().set("d", "M0 0L10 0");
/// let path = wireframe_core::apply_stroke!(path, &stroke, DashPattern::RULE);
/// assert!(path.to_string().contains(r#"stroke-dasharray="18, 30""#));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color())
            .set("stroke-width", $stroke.width());

        if let Some(cap) = $stroke.cap() {
            elem = elem.set("stroke-linecap", cap.to_svg_value());
        }
        if let Some(join) = $stroke.join() {
            elem = elem.set("stroke-linejoin", join.to_svg_value());
        }

        elem
    }};
    ($element:expr, $stroke:expr, $pattern:expr) => {{
        let mut elem = $crate::apply_stroke!($element, $stroke);

        if let Some(dasharray) = $stroke.dasharray($pattern) {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
