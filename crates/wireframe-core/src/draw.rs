//! Drawing primitives for wireframe rendering.
//!
//! This module provides the building blocks the renderer combines into SVG
//! elements: stroke definitions with their dash policies, font resolution and
//! text measurement, and the inline `{color:...}` markup parser.

mod markup;
mod stroke;
mod text;

pub use markup::{TextRun, parse_markup};
pub use stroke::{DashPattern, StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{
    ApproximateMeasure, FontSpec, FontStyle, FontWeight, SystemTextMeasure, TextMeasure,
    TextMetrics,
};
