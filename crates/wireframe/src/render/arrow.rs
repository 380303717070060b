//! Curved arrow connectors.

use svg::node::element as svg_element;

use wireframe_core::{
    apply_stroke,
    color::{Rgb, resolve_color},
    draw::{DashPattern, StrokeDefinition, StrokeStyle},
    geometry::Point,
    model::Control,
};

const ARROW_WIDTH: f64 = 4.0;

/// Scales the bend (`p1.y`) into a perpendicular control point offset.
const BEND_FACTOR: f64 = 3.6;

/// Builds the quadratic path of an `Arrow`.
///
/// `p0` and `p2` are the endpoints relative to the control. `p1.x` is the
/// position of the curve's apex along the chord (as a fraction of the chord)
/// and `p1.y` its sideways bend.
pub(super) fn arrow(control: &Control, origin: Point) -> svg_element::Path {
    let properties = control.properties();
    let p0 = properties.point("p0");
    let p1 = properties.point("p1");
    let p2 = properties.point("p2");

    let start = origin.add_point(p0);
    let end = origin.add_point(p2);
    let lever = p2.sub_point(p0).scale(p1.x());
    let control_x = start.x() + lever.x() + lever.y() * p1.y() * BEND_FACTOR;
    let control_y = start.y() + lever.y() + -lever.x() * p1.y() * BEND_FACTOR;

    let mut stroke =
        StrokeDefinition::rounded(resolve_color(properties.get("color"), Rgb::BLACK), ARROW_WIDTH);
    stroke.set_style(StrokeStyle::from_property(properties.str("stroke")));

    let path = svg_element::Path::new()
        .set(
            "d",
            format!(
                "M{} {}Q{} {} {} {}",
                start.x(),
                start.y(),
                control_x,
                control_y,
                end.x(),
                end.y()
            ),
        )
        .set("fill", "none");
    apply_stroke!(path, &stroke, DashPattern::ARROW)
}
