//! Nested control groups.

use serde_json::Value;
use svg::node::element as svg_element;

use wireframe_core::{
    geometry::Point,
    model::{Control, z_ordered},
};

use super::Renderer;

impl Renderer<'_> {
    /// Builds the `g` element of a `__group__` with its children rendered
    /// inside, in z-order.
    ///
    /// `origin` is the group's absolute position and becomes the offset of
    /// every child. A non-empty `controlName` marks the group as clickable.
    pub(super) fn group(&self, control: &Control, origin: Point) -> svg_element::Group {
        let mut group = svg_element::Group::new();
        if let Some(name) = control_name(control) {
            group = group
                .set("class", "clickable-group")
                .set("data-group-id", name);
        }

        for child in z_ordered(control.children()) {
            self.render(child, origin, &mut group);
        }
        group
    }
}

fn control_name(control: &Control) -> Option<String> {
    match control.properties().get("controlName")? {
        Value::String(name) if !name.is_empty() => Some(name.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wireframe_core::draw::ApproximateMeasure;

    use super::*;
    use crate::render::test_utils::control;

    fn render(control: &Control, offset: Point) -> String {
        Renderer::new("sans-serif", &ApproximateMeasure)
            .group(control, offset.add_point(control.position()))
            .to_string()
    }

    #[test]
    fn test_named_group_attributes() {
        let group = control(json!({
            "typeID": "__group__", "x": "0", "y": "0",
            "properties": {"controlName": "login-form"}
        }));
        let output = render(&group, Point::default());

        assert!(output.contains(r#"class="clickable-group""#), "{output}");
        assert!(output.contains(r#"data-group-id="login-form""#), "{output}");
    }

    #[test]
    fn test_unnamed_group_has_no_attributes() {
        let group = control(json!({
            "typeID": "__group__", "x": "0", "y": "0",
            "properties": {"controlName": ""}
        }));
        assert_eq!(render(&group, Point::default()), "<g/>");
    }

    #[test]
    fn test_children_inherit_group_offset() {
        let group = control(json!({
            "typeID": "__group__", "x": "100", "y": "50",
            "children": {"controls": {"control": [
                {"typeID": "Icon", "x": "5", "y": "5"}
            ]}}
        }));
        let output = render(&group, Point::default());

        assert!(output.contains(r#"cx="115""#), "{output}");
        assert!(output.contains(r#"cy="65""#), "{output}");
    }

    #[test]
    fn test_nested_groups_accumulate_offsets() {
        let group = control(json!({
            "typeID": "__group__", "x": "100", "y": "100",
            "children": {"controls": {"control": [
                {"typeID": "__group__", "x": "20", "y": "30",
                 "children": {"controls": {"control": [
                    {"typeID": "Icon", "x": "1", "y": "2"}
                 ]}}}
            ]}}
        }));
        let output = render(&group, Point::new(1000.0, 0.0));

        assert!(output.contains(r#"cx="1131""#), "{output}");
        assert!(output.contains(r#"cy="142""#), "{output}");
    }

    #[test]
    fn test_children_sorted_by_z_order() {
        let group = control(json!({
            "typeID": "__group__", "x": "0", "y": "0",
            "children": {"controls": {"control": [
                {"typeID": "Icon", "zOrder": "2", "x": "2", "y": "0"},
                {"typeID": "Icon", "zOrder": "0", "x": "0", "y": "0"},
                {"typeID": "Icon", "zOrder": "1", "x": "1", "y": "0"}
            ]}}
        }));
        let output = render(&group, Point::default());

        let first = output.find(r#"cx="10""#).unwrap();
        let second = output.find(r#"cx="11""#).unwrap();
        let third = output.find(r#"cx="12""#).unwrap();
        assert!(first < second && second < third, "{output}");
    }

    #[test]
    fn test_unsupported_child_does_not_stop_siblings() {
        let group = control(json!({
            "typeID": "__group__", "x": "0", "y": "0",
            "children": {"controls": {"control": [
                {"typeID": "Icon", "zOrder": "0", "x": "0", "y": "0"},
                {"typeID": "Carousel", "zOrder": "1", "x": "0", "y": "0"},
                {"typeID": "Icon", "zOrder": "2", "x": "30", "y": "0"}
            ]}}
        }));
        let output = render(&group, Point::default());

        assert_eq!(output.matches("<circle").count(), 2, "{output}");
    }
}
