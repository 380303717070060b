//! Text placement and rich-text runs.

use svg::node::{Blob, Text as SvgText, element as svg_element};

use wireframe_core::{
    draw::{FontSpec, parse_markup},
    geometry::Point,
    model::Control,
};

use super::Renderer;

/// Horizontal placement of a control's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextAlign {
    /// Starts at the control's x-coordinate.
    Left,
    /// Centered on the control's width.
    Center,
}

impl Renderer<'_> {
    /// Builds the `text` element for a control's `text` property.
    ///
    /// The baseline sits half the text ascent below the vertical middle of
    /// the control's measured height. Inline `{color:...}` markup becomes one
    /// `tspan` per run; runs without their own color inherit `fill`. The runs
    /// are written back to back, see [`inline`].
    pub(super) fn text(
        &self,
        control: &Control,
        origin: Point,
        fill: &str,
        align: TextAlign,
    ) -> Blob {
        let properties = control.properties();
        let content = properties.text();
        let font = FontSpec::from_properties(properties, self.font_family);
        let metrics = self.measure.measure(&content, &font);

        let x = match align {
            TextAlign::Left => origin.x(),
            TextAlign::Center => origin.x() + control.width() / 2.0 - metrics.width() / 2.0,
        };
        let y = origin.y() + control.measured_height() / 2.0 + metrics.ascent() / 2.0;

        let mut text = svg_element::Text::new("")
            .set("x", x)
            .set("y", y)
            .set("fill", fill)
            .set("font-style", font.style().to_string())
            .set("font-weight", font.weight().to_string())
            .set("font-size", font.size());

        for run in parse_markup(&content) {
            let mut tspan = svg_element::TSpan::new("");
            if let Some(color) = run.color() {
                tspan = tspan.set("fill", color);
            }
            text = text.add(tspan.add(SvgText::new(run.text())));
        }

        inline(&text)
    }
}

/// Serializes a `text` element without whitespace between its children.
///
/// The svg crate writes every child of `text` on its own line, and viewers
/// render that line break as a space between adjacent runs.
fn inline(text: &svg_element::Text) -> Blob {
    let element: &svg_element::Element = text;
    let name = element.get_name();
    let mut attributes = element.get_attributes().iter().collect::<Vec<_>>();
    attributes.sort_by_key(|(name, _)| name.as_str());

    let mut markup = format!("<{name}");
    for (attribute, value) in attributes {
        let escaped = SvgText::new(value.to_string());
        markup.push_str(&format!(r#" {attribute}="{escaped}""#));
    }
    markup.push('>');
    for child in element.get_children() {
        markup.push_str(&child.to_string());
    }
    markup.push_str(&format!("</{name}>"));

    Blob::new(markup)
}
