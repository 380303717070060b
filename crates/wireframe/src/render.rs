//! Control rendering.
//!
//! [`Renderer`] walks the control tree and appends SVG elements for each
//! control to a container node. Control coordinates are relative to their
//! parent group; the renderer threads the accumulated offset of enclosing
//! groups through the recursion and never modifies the document.
//!
//! Each control type has its own drawing routine:
//!
//! | Type | Output |
//! |------|--------|
//! | `TextArea`, `Canvas` | inset rounded `rect` |
//! | `Label` | left-aligned `text` |
//! | `TextInput` | inset rounded `rect` and centered `text` |
//! | `Arrow` | quadratic `path` |
//! | `Icon` | `circle`, plus a check mark `path` for `check-circle` |
//! | `HRule` | straight `path` |
//! | `__group__` | `g` containing the rendered children |

mod arrow;
mod group;
mod icon;
mod rectangle;
mod rule;
mod text;

use log::{trace, warn};
use svg::Node;

use wireframe_core::{
    color::{Rgb, resolve_color},
    draw::TextMeasure,
    geometry::Point,
    model::{Control, ControlKind},
};

use text::TextAlign;

/// Draws controls into SVG container nodes.
///
/// # Example
///
/// ```
/// # use svg::node::element::Group;
/// # use wireframe::{Renderer, draw::ApproximateMeasure, geometry::Point, model::Control};
/// let control: Control = serde_json::from_str(
///     r#"{"ID": "1", "typeID": "Canvas", "x": "10", "y": "10", "w": "50", "h": "20"}"#,
/// ).unwrap();
///
/// let renderer = Renderer::new("sans-serif", &ApproximateMeasure);
/// let mut group = Group::new();
/// renderer.render(&control, Point::default(), &mut group);
/// assert!(group.to_string().contains(r#"x="11.35""#));
/// ```
pub struct Renderer<'a> {
    font_family: &'a str,
    measure: &'a dyn TextMeasure,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer drawing all text in `font_family`, measured with
    /// `measure`.
    pub fn new(font_family: &'a str, measure: &'a dyn TextMeasure) -> Self {
        Self {
            font_family,
            measure,
        }
    }

    pub fn font_family(&self) -> &str {
        self.font_family
    }

    /// Renders `control` into `container`.
    ///
    /// `offset` is the accumulated position of the enclosing groups; the
    /// control's own coordinates are added to it. Controls of an unsupported
    /// type are logged and skipped together with their children.
    pub fn render<C: Node>(&self, control: &Control, offset: Point, container: &mut C) {
        let origin = offset.add_point(control.position());
        let properties = control.properties();
        trace!(type_id = control.type_id(), x = origin.x(), y = origin.y(); "Rendering control");

        match control.kind() {
            ControlKind::TextArea | ControlKind::Canvas => {
                container.append(rectangle::rectangle(control, origin));
            }
            ControlKind::Label => {
                let fill = resolve_color(properties.get("color"), Rgb::BLACK);
                container.append(self.text(control, origin, &fill, TextAlign::Left));
            }
            ControlKind::TextInput => {
                container.append(rectangle::rectangle(control, origin));
                let fill = resolve_color(properties.get("textColor"), Rgb::BLACK);
                container.append(self.text(control, origin, &fill, TextAlign::Center));
            }
            ControlKind::Arrow => container.append(arrow::arrow(control, origin)),
            ControlKind::Icon => {
                let (circle, glyph) = icon::icon(control, origin);
                container.append(circle);
                if let Some(glyph) = glyph {
                    container.append(glyph);
                }
            }
            ControlKind::HRule => container.append(rule::horizontal_rule(control, origin)),
            ControlKind::Group => container.append(self.group(control, origin)),
            ControlKind::Unsupported => {
                warn!(
                    type_id = control.type_id();
                    "'{}' control type not implemented",
                    control.type_id()
                );
            }
        }
    }
}
