//! Horizontal rules.

use svg::node::element as svg_element;

use wireframe_core::{
    apply_stroke,
    color::{Rgb, resolve_color},
    draw::{DashPattern, StrokeDefinition, StrokeStyle},
    geometry::Point,
    model::Control,
};

const RULE_WIDTH: f64 = 2.7;

/// Builds the line of an `HRule`, spanning the control width at its top edge.
pub(super) fn horizontal_rule(control: &Control, origin: Point) -> svg_element::Path {
    let properties = control.properties();

    let mut stroke =
        StrokeDefinition::rounded(resolve_color(properties.get("color"), Rgb::BLACK), RULE_WIDTH);
    stroke.set_style(StrokeStyle::from_property(properties.str("stroke")));

    let path = svg_element::Path::new()
        .set(
            "d",
            format!(
                "M{} {}L{} {}",
                origin.x(),
                origin.y(),
                origin.x() + control.width(),
                origin.y()
            ),
        )
        .set("fill", "none");
    apply_stroke!(path, &stroke, DashPattern::RULE)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::render::test_utils::control;

    fn rule(stroke: Option<&str>) -> String {
        let mut value = json!({"typeID": "HRule", "x": "10", "y": "50", "w": "200"});
        if let Some(stroke) = stroke {
            value["properties"] = json!({"stroke": stroke});
        }
        let rule_control = control(value);
        horizontal_rule(&rule_control, rule_control.position()).to_string()
    }

    #[test]
    fn test_rule_path() {
        let output = rule(None);

        assert!(output.contains(r#"d="M10 50L210 50""#), "{output}");
        assert!(output.contains(r#"stroke-width="2.7""#));
        assert!(output.contains(r#"stroke="rgb(0,0,0)""#));
        assert!(!output.contains("stroke-dasharray"));
    }

    #[test]
    fn test_rule_dash_patterns() {
        assert!(rule(Some("dotted")).contains(r#"stroke-dasharray="0.8, 8""#));
        assert!(rule(Some("dashed")).contains(r#"stroke-dasharray="18, 30""#));
        assert!(!rule(Some("double")).contains("stroke-dasharray"));
    }

    #[test]
    fn test_rule_width_falls_back_to_measured() {
        let rule_control = control(json!({"typeID": "HRule", "x": "0", "y": "5", "measuredW": "80"}));
        let output = horizontal_rule(&rule_control, rule_control.position()).to_string();
        assert!(output.contains(r#"d="M0 5L80 5""#), "{output}");
    }
}
