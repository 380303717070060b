//! The wireframe document model.
//!
//! These types mirror the JSON structure of an exported wireframe. The model
//! is read-only: the renderer computes absolute positions on the fly instead
//! of rewriting control coordinates, so one parsed document can be rendered
//! any number of times.
//!
//! # Overview
//!
//! - [`Wireframe`] - The root document
//! - [`Mockup`] - Canvas metadata and top-level controls
//! - [`Control`] - One renderable node (shape, text or group)
//! - [`ControlKind`] - The closed set of control types the renderer draws
//! - [`Properties`] - Free-form, type-specific control properties
//!
//! # Example
//!
//! ```
//! # use wireframe_core::model::{ControlKind, Wireframe};
//! let wireframe: Wireframe = serde_json::from_str(r#"{
//!     "mockup": {
//!         "mockupW": "200", "mockupH": "100",
//!         "measuredW": "200", "measuredH": "100",
//!         "controls": { "control": [
//!             { "ID": "1", "typeID": "Label", "zOrder": "0", "x": "10", "y": "20",
//!               "measuredW": "40", "measuredH": "21", "properties": { "text": "Hi" } }
//!         ]}
//!     }
//! }"#).unwrap();
//!
//! let label = &wireframe.mockup().controls()[0];
//! assert_eq!(label.kind(), ControlKind::Label);
//! assert_eq!(label.x(), 10.0);
//! ```

use std::{borrow::Cow, cmp::Ordering};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::geometry::{Point, Size, parse_int, to_number};

/// The root wireframe document.
#[derive(Debug, Clone, Deserialize)]
pub struct Wireframe {
    mockup: Mockup,

    #[serde(default)]
    attributes: Option<DocumentAttributes>,

    #[serde(rename = "branchID", default)]
    branch_id: Option<String>,

    #[serde(rename = "resourceID", default)]
    resource_id: Option<String>,

    #[serde(rename = "projectID", default)]
    project_id: Option<String>,

    #[serde(default)]
    version: Option<Value>,

    #[serde(rename = "groupOffset", default)]
    group_offset: Option<GroupOffset>,

    #[serde(default)]
    dependencies: Vec<Value>,
}

impl Wireframe {
    /// Returns the mockup canvas and its controls.
    pub fn mockup(&self) -> &Mockup {
        &self.mockup
    }

    /// Returns the document attributes, if present.
    pub fn attributes(&self) -> Option<&DocumentAttributes> {
        self.attributes.as_ref()
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.branch_id.as_deref()
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Returns the version stamp as written in the document.
    pub fn version(&self) -> Option<&Value> {
        self.version.as_ref()
    }

    /// Returns the offset of the document within its containing project.
    ///
    /// The offset is informational; rendering does not apply it.
    pub fn group_offset(&self) -> Option<Point> {
        self.group_offset
            .as_ref()
            .map(|offset| Point::new(to_number(Some(&offset.x)), to_number(Some(&offset.y))))
    }

    pub fn dependencies(&self) -> &[Value] {
        &self.dependencies
    }

    /// Returns the document name, or an empty string when it has none.
    pub fn name(&self) -> &str {
        self.attributes
            .as_ref()
            .map_or("", |attributes| attributes.name.as_str())
    }
}

/// Document metadata stored under `attributes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentAttributes {
    #[serde(default)]
    name: String,

    #[serde(default)]
    order: Option<Value>,

    #[serde(rename = "parentID", default)]
    parent_id: Option<String>,

    #[serde(default)]
    notes: Option<String>,
}

impl DocumentAttributes {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sort order of the document among its siblings.
    pub fn order(&self) -> f64 {
        to_number(self.order.as_ref())
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GroupOffset {
    #[serde(default)]
    x: Value,
    #[serde(default)]
    y: Value,
}

/// The mockup canvas: its logical and measured sizes, and the top-level
/// controls.
#[derive(Debug, Clone, Deserialize)]
pub struct Mockup {
    #[serde(rename = "mockupW", default)]
    mockup_w: Option<Value>,

    #[serde(rename = "mockupH", default)]
    mockup_h: Option<Value>,

    #[serde(rename = "measuredW", default)]
    measured_w: Option<Value>,

    #[serde(rename = "measuredH", default)]
    measured_h: Option<Value>,

    #[serde(default)]
    controls: ControlList,
}

impl Mockup {
    /// Returns the logical canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            parse_int(self.mockup_w.as_ref()),
            parse_int(self.mockup_h.as_ref()),
        )
    }

    /// Returns the measured canvas size, which can exceed the logical size
    /// when content overflowed during layout.
    pub fn measured_size(&self) -> Size {
        Size::new(
            parse_int(self.measured_w.as_ref()),
            parse_int(self.measured_h.as_ref()),
        )
    }

    /// Returns the top-level controls in document order.
    pub fn controls(&self) -> &[Control] {
        &self.controls.control
    }
}

/// The `{"control": [...]}` wrapper used for both top-level and nested
/// control collections.
#[derive(Debug, Clone, Default, Deserialize)]
struct ControlList {
    #[serde(default)]
    control: Vec<Control>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Children {
    #[serde(default)]
    controls: ControlList,
}

/// The control types the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Multi-line text area, drawn as a rounded rectangle
    TextArea,
    /// Plain rectangle
    Canvas,
    /// Left-aligned text
    Label,
    /// Rounded rectangle with centered text
    TextInput,
    /// Curved connector between two points
    Arrow,
    /// Filled circle with an optional glyph
    Icon,
    /// Horizontal line
    HRule,
    /// Container of nested controls
    Group,
    /// Any type tag without a drawing routine
    Unsupported,
}

impl ControlKind {
    /// Maps a `typeID` tag to its kind.
    pub fn from_type_id(type_id: &str) -> Self {
        match type_id {
            "TextArea" => Self::TextArea,
            "Canvas" => Self::Canvas,
            "Label" => Self::Label,
            "TextInput" => Self::TextInput,
            "Arrow" => Self::Arrow,
            "Icon" => Self::Icon,
            "HRule" => Self::HRule,
            "__group__" => Self::Group,
            _ => Self::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

/// A node in the wireframe render tree.
///
/// Coordinates are relative to the parent group (or to the canvas for
/// top-level controls). Sizes fall back from the explicit `w`/`h` to the
/// measured `measuredW`/`measuredH`.
#[derive(Debug, Clone, Deserialize)]
pub struct Control {
    #[serde(rename = "ID", default)]
    id: Value,

    #[serde(rename = "typeID", default)]
    type_id: String,

    #[serde(rename = "zOrder", default)]
    z_order: Option<Value>,

    #[serde(default)]
    x: Option<Value>,

    #[serde(default)]
    y: Option<Value>,

    #[serde(default)]
    w: Option<Value>,

    #[serde(default)]
    h: Option<Value>,

    #[serde(rename = "measuredW", default)]
    measured_w: Option<Value>,

    #[serde(rename = "measuredH", default)]
    measured_h: Option<Value>,

    #[serde(default)]
    properties: Properties,

    #[serde(default)]
    children: Option<Children>,
}

impl Control {
    /// Returns the control ID as written in the document.
    pub fn id(&self) -> &Value {
        &self.id
    }

    /// Returns the raw `typeID` tag.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn kind(&self) -> ControlKind {
        ControlKind::from_type_id(&self.type_id)
    }

    /// Returns the numeric z-order, `NaN` when it is not numeric.
    pub fn z_order(&self) -> f64 {
        to_number(self.z_order.as_ref())
    }

    /// Returns the x-coordinate relative to the parent.
    pub fn x(&self) -> f64 {
        parse_int(self.x.as_ref())
    }

    /// Returns the y-coordinate relative to the parent.
    pub fn y(&self) -> f64 {
        parse_int(self.y.as_ref())
    }

    /// Returns the position relative to the parent.
    pub fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    /// Returns the explicit width, falling back to the measured width.
    pub fn width(&self) -> f64 {
        parse_int(self.w.as_ref().or(self.measured_w.as_ref()))
    }

    /// Returns the explicit height, falling back to the measured height.
    pub fn height(&self) -> f64 {
        parse_int(self.h.as_ref().or(self.measured_h.as_ref()))
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the measured height, ignoring any explicit height.
    pub fn measured_height(&self) -> f64 {
        parse_int(self.measured_h.as_ref())
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the nested controls in document order.
    ///
    /// Only groups carry children; for other controls this is empty.
    pub fn children(&self) -> &[Control] {
        self.children
            .as_ref()
            .map(|children| children.controls.control.as_slice())
            .unwrap_or_default()
    }
}

/// Returns `controls` ordered by ascending z-order.
///
/// The sort is stable, so controls with equal z-order keep their document
/// order. Controls whose z-order is not numeric are painted after all others.
pub fn z_ordered(controls: &[Control]) -> Vec<&Control> {
    let mut ordered: Vec<&Control> = controls.iter().collect();
    ordered.sort_by(|a, b| compare_z_order(a.z_order(), b.z_order()));
    ordered
}

fn compare_z_order(a: f64, b: f64) -> Ordering {
    let key = |z: f64| if z.is_nan() { f64::INFINITY } else { z };
    key(a).total_cmp(&key(b))
}

/// Type-specific control properties.
///
/// Values are kept as raw JSON; each drawing routine reads only the keys it
/// understands and ignores the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` if it is a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns `true` when `key` holds a truthy value.
    ///
    /// `false`, `0`, `NaN`, `""` and `null` are falsy, as is a missing key.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Returns the text content, or an empty string.
    pub fn text(&self) -> Cow<'_, str> {
        match self.get("text") {
            Some(Value::String(text)) => Cow::Borrowed(text),
            Some(Value::Number(number)) => Cow::Owned(number.to_string()),
            Some(Value::Bool(flag)) => Cow::Owned(flag.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Returns the `{x, y}` point stored under `key`.
    ///
    /// Missing coordinates are `NaN`.
    pub fn point(&self, key: &str) -> Point {
        let coordinate = |axis: &str| {
            self.get(key)
                .and_then(|point| point.get(axis))
                .and_then(Value::as_f64)
                .unwrap_or(f64::NAN)
        };
        Point::new(coordinate("x"), coordinate("y"))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn control(value: Value) -> Control {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_control_kind_from_type_id() {
        assert_eq!(ControlKind::from_type_id("TextArea"), ControlKind::TextArea);
        assert_eq!(ControlKind::from_type_id("Canvas"), ControlKind::Canvas);
        assert_eq!(ControlKind::from_type_id("Label"), ControlKind::Label);
        assert_eq!(ControlKind::from_type_id("TextInput"), ControlKind::TextInput);
        assert_eq!(ControlKind::from_type_id("Arrow"), ControlKind::Arrow);
        assert_eq!(ControlKind::from_type_id("Icon"), ControlKind::Icon);
        assert_eq!(ControlKind::from_type_id("HRule"), ControlKind::HRule);
        assert_eq!(ControlKind::from_type_id("__group__"), ControlKind::Group);
        assert_eq!(ControlKind::from_type_id("Button"), ControlKind::Unsupported);
        assert_eq!(ControlKind::from_type_id("label"), ControlKind::Unsupported);
        assert!(!ControlKind::Unsupported.is_supported());
        assert!(ControlKind::Group.is_supported());
    }

    #[test]
    fn test_control_size_prefers_explicit() {
        let c = control(json!({
            "typeID": "Canvas", "x": "1", "y": "2",
            "w": "100", "h": "50", "measuredW": "80", "measuredH": "40"
        }));
        assert_eq!(c.size(), Size::new(100.0, 50.0));
        assert_eq!(c.measured_height(), 40.0);
    }

    #[test]
    fn test_control_size_falls_back_to_measured() {
        let c = control(json!({
            "typeID": "Canvas", "x": "1", "y": "2", "measuredW": "80", "measuredH": "40"
        }));
        assert_eq!(c.size(), Size::new(80.0, 40.0));
    }

    #[test]
    fn test_control_malformed_geometry_is_nan() {
        let c = control(json!({"typeID": "Canvas", "x": "left", "measuredW": "80"}));
        assert!(c.x().is_nan());
        assert!(c.y().is_nan());
        assert!(c.height().is_nan());
        assert_eq!(c.width(), 80.0);
    }

    #[test]
    fn test_control_numeric_geometry() {
        let c = control(json!({"typeID": "Canvas", "x": 12, "y": 7.9}));
        assert_eq!(c.position(), Point::new(12.0, 7.0));
    }

    #[test]
    fn test_children_only_on_groups() {
        let group = control(json!({
            "typeID": "__group__",
            "children": {"controls": {"control": [
                {"typeID": "Label"}, {"typeID": "Icon"}
            ]}}
        }));
        assert_eq!(group.children().len(), 2);
        assert_eq!(group.children()[1].kind(), ControlKind::Icon);

        let leaf = control(json!({"typeID": "Label"}));
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn test_z_ordered_is_stable() {
        let controls: Vec<Control> = vec![
            control(json!({"ID": "a", "typeID": "Label", "zOrder": "2"})),
            control(json!({"ID": "b", "typeID": "Label", "zOrder": "1"})),
            control(json!({"ID": "c", "typeID": "Label", "zOrder": "2"})),
            control(json!({"ID": "d", "typeID": "Label", "zOrder": "0"})),
            control(json!({"ID": "e", "typeID": "Label", "zOrder": "1"})),
        ];
        let ids: Vec<&Value> = z_ordered(&controls).iter().map(|c| c.id()).collect();
        assert_eq!(ids, [&json!("d"), &json!("b"), &json!("e"), &json!("a"), &json!("c")]);
    }

    #[test]
    fn test_z_ordered_compares_numerically() {
        let controls: Vec<Control> = vec![
            control(json!({"ID": "ten", "typeID": "Label", "zOrder": "10"})),
            control(json!({"ID": "nine", "typeID": "Label", "zOrder": 9})),
        ];
        let ids: Vec<&Value> = z_ordered(&controls).iter().map(|c| c.id()).collect();
        assert_eq!(ids, [&json!("nine"), &json!("ten")]);
    }

    #[test]
    fn test_z_ordered_accepts_hex_and_infinity() {
        let controls: Vec<Control> = vec![
            control(json!({"ID": "top", "typeID": "Label", "zOrder": "Infinity"})),
            control(json!({"ID": "hex", "typeID": "Label", "zOrder": "0x10"})),
            control(json!({"ID": "twelve", "typeID": "Label", "zOrder": "12"})),
        ];
        let ids: Vec<&Value> = z_ordered(&controls).iter().map(|c| c.id()).collect();
        assert_eq!(ids, [&json!("twelve"), &json!("hex"), &json!("top")]);
    }

    #[test]
    fn test_z_ordered_puts_non_numeric_last() {
        let controls: Vec<Control> = vec![
            control(json!({"ID": "x", "typeID": "Label", "zOrder": "top"})),
            control(json!({"ID": "y", "typeID": "Label", "zOrder": "3"})),
            control(json!({"ID": "z", "typeID": "Label"})),
        ];
        let ids: Vec<&Value> = z_ordered(&controls).iter().map(|c| c.id()).collect();
        assert_eq!(ids, [&json!("y"), &json!("x"), &json!("z")]);
    }

    #[test]
    fn test_properties_flag_truthiness() {
        let props: Properties = serde_json::from_value(json!({
            "t": true, "f": false, "one": 1, "zero": 0,
            "s": "yes", "empty": "", "null": null, "obj": {}
        }))
        .unwrap();
        assert!(props.flag("t"));
        assert!(!props.flag("f"));
        assert!(props.flag("one"));
        assert!(!props.flag("zero"));
        assert!(props.flag("s"));
        assert!(!props.flag("empty"));
        assert!(!props.flag("null"));
        assert!(props.flag("obj"));
        assert!(!props.flag("missing"));
    }

    #[test]
    fn test_properties_text() {
        let props: Properties = serde_json::from_value(json!({"text": "Hello"})).unwrap();
        assert_eq!(props.text(), "Hello");

        let props: Properties = serde_json::from_value(json!({"text": 42})).unwrap();
        assert_eq!(props.text(), "42");

        assert_eq!(Properties::default().text(), "");
    }

    #[test]
    fn test_properties_point() {
        let props: Properties =
            serde_json::from_value(json!({"p0": {"x": 1.5, "y": -2}})).unwrap();
        assert_eq!(props.point("p0"), Point::new(1.5, -2.0));
        assert!(props.point("p1").x().is_nan());
    }

    #[test]
    fn test_wireframe_metadata() {
        let wireframe: Wireframe = serde_json::from_value(json!({
            "mockup": {
                "mockupW": "640", "mockupH": "480",
                "measuredW": "650", "measuredH": "490",
                "controls": {"control": []}
            },
            "attributes": {"name": "Login", "order": 2, "parentID": null, "notes": ""},
            "branchID": "Master",
            "resourceID": "ABC",
            "projectID": "P1",
            "version": "1.0",
            "groupOffset": {"x": 0, "y": "12"},
            "dependencies": []
        }))
        .unwrap();

        assert_eq!(wireframe.name(), "Login");
        assert_eq!(wireframe.attributes().unwrap().order(), 2.0);
        assert_eq!(wireframe.attributes().unwrap().parent_id(), None);
        assert_eq!(wireframe.branch_id(), Some("Master"));
        assert_eq!(wireframe.resource_id(), Some("ABC"));
        assert_eq!(wireframe.project_id(), Some("P1"));
        assert_eq!(wireframe.version(), Some(&json!("1.0")));
        assert_eq!(wireframe.group_offset(), Some(Point::new(0.0, 12.0)));
        assert!(wireframe.dependencies().is_empty());
        assert_eq!(wireframe.mockup().canvas_size(), Size::new(640.0, 480.0));
        assert_eq!(wireframe.mockup().measured_size(), Size::new(650.0, 490.0));
        assert!(wireframe.mockup().controls().is_empty());
    }

    #[test]
    fn test_wireframe_requires_mockup() {
        let result: Result<Wireframe, _> = serde_json::from_value(json!({"version": "1"}));
        assert!(result.is_err());
    }
}
