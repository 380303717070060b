//! Icons: a filled circle with an optional glyph.

use serde_json::Value;
use svg::node::element as svg_element;

use wireframe_core::{
    apply_stroke,
    color::{Rgb, resolve_color},
    draw::StrokeDefinition,
    geometry::Point,
    model::Control,
};

const CIRCLE_RADIUS: f64 = 10.0;
const GLYPH_WIDTH: f64 = 3.5;
const GLYPH_COLOR: &str = "#fff";

/// The only icon with a glyph drawn over its circle.
const CHECK_CIRCLE: &str = "check-circle";

/// Builds the circle of an `Icon` and, for `check-circle`, its check mark.
pub(super) fn icon(
    control: &Control,
    origin: Point,
) -> (svg_element::Circle, Option<svg_element::Path>) {
    let properties = control.properties();

    let circle = svg_element::Circle::new()
        .set("cx", origin.x() + CIRCLE_RADIUS)
        .set("cy", origin.y() + CIRCLE_RADIUS)
        .set("r", CIRCLE_RADIUS)
        .set("fill", resolve_color(properties.get("color"), Rgb::BLACK));

    let icon_id = properties
        .get("icon")
        .and_then(|icon| icon.get("ID"))
        .and_then(Value::as_str);
    let glyph = (icon_id == Some(CHECK_CIRCLE)).then(|| check_mark(origin));

    (circle, glyph)
}

fn check_mark(origin: Point) -> svg_element::Path {
    let (x, y) = (origin.x(), origin.y());
    let stroke = StrokeDefinition::rounded(GLYPH_COLOR, GLYPH_WIDTH);

    let path = svg_element::Path::new()
        .set(
            "d",
            format!(
                "M{} {}L{} {} {} {}",
                x + 4.5,
                y + CIRCLE_RADIUS,
                x + 8.5,
                y + CIRCLE_RADIUS + 4.0,
                x + 15.0,
                y + CIRCLE_RADIUS - 2.5
            ),
        )
        .set("fill", "none");
    apply_stroke!(path, &stroke)
}
