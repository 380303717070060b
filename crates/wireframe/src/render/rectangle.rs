//! Rounded rectangle for container controls.

use serde_json::Value;
use svg::node::element as svg_element;

use wireframe_core::{
    apply_stroke,
    color::{Rgb, resolve_color},
    draw::StrokeDefinition,
    geometry::Point,
    model::{Control, Properties},
};

const BORDER_WIDTH: f64 = 2.7;
const CORNER_RADIUS: f64 = 10.0;

/// Builds the border rectangle of a `TextArea`, `Canvas` or `TextInput`.
///
/// The rectangle is inset by half the border width on every side so the
/// stroke stays inside the control bounds.
pub(super) fn rectangle(control: &Control, origin: Point) -> svg_element::Rectangle {
    let properties = control.properties();
    let inset = BORDER_WIDTH / 2.0;
    let size = control.size().shrink(BORDER_WIDTH);

    let stroke = StrokeDefinition::new(
        resolve_color(properties.get("borderColor"), Rgb::BLACK),
        BORDER_WIDTH,
    );

    let rect = svg_element::Rectangle::new()
        .set("x", origin.x() + inset)
        .set("y", origin.y() + inset)
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", CORNER_RADIUS)
        .set("fill", resolve_color(properties.get("color"), Rgb::WHITE))
        .set("fill-opacity", fill_opacity(properties));
    apply_stroke!(rect, &stroke)
}

/// Returns `backgroundAlpha` as written, or `1` when absent or null.
fn fill_opacity(properties: &Properties) -> String {
    match properties.get("backgroundAlpha") {
        None | Some(Value::Null) => "1".to_string(),
        Some(Value::String(alpha)) => alpha.clone(),
        Some(alpha) => alpha.to_string(),
    }
}
