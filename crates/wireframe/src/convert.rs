//! Converting a wireframe document into an SVG document.

use log::{debug, info, warn};
use svg::Document;

use wireframe_core::{
    draw::{ApproximateMeasure, SystemTextMeasure, TextMeasure},
    geometry::{Point, Viewport},
    model::{Wireframe, z_ordered},
};

use crate::{
    config::{ConvertOptions, TextMeasurement},
    error::WireframeError,
    font,
    render::Renderer,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Converts a wireframe document into an SVG document.
///
/// Text is measured with the backend selected by
/// [`ConvertOptions::text_measurement`]. With the system backend, the font
/// at [`ConvertOptions::font_url`] (if any) is loaded and registered under
/// the configured family before anything is drawn.
///
/// # Errors
///
/// Returns [`WireframeError::Font`] when the font cannot be loaded.
///
/// # Examples
///
/// ```
/// # use wireframe::{config::{ConvertOptions, TextMeasurement}, convert};
/// let wireframe = wireframe_parser::parse(
///     r#"{"mockup": {"mockupW": "200", "mockupH": "100",
///         "measuredW": "200", "measuredH": "100"}}"#,
/// ).unwrap();
///
/// let options = ConvertOptions::default().with_text_measurement(TextMeasurement::Approximate);
/// let document = convert(&wireframe, &options).unwrap();
/// assert!(document.to_string().contains(r#"viewBox="-5 -5 210 110""#));
/// ```
pub fn convert(wireframe: &Wireframe, options: &ConvertOptions) -> Result<Document, WireframeError> {
    match options.text_measurement() {
        TextMeasurement::System => {
            let measure = SystemTextMeasure::shared();
            if let Some(font_url) = options.font_url() {
                font::load_font(font_url, options.font_family(), measure)?;
            }
            Ok(convert_with(wireframe, options, measure))
        }
        TextMeasurement::Approximate => {
            if let Some(font_url) = options.font_url() {
                warn!(font_url = font_url; "Approximate text measurement ignores the configured font");
            }
            Ok(convert_with(wireframe, options, &ApproximateMeasure))
        }
    }
}

/// Converts a wireframe document using the given text measurement.
///
/// No font is loaded; [`ConvertOptions::font_url`] is ignored.
pub fn convert_with(
    wireframe: &Wireframe,
    options: &ConvertOptions,
    measure: &dyn TextMeasure,
) -> Document {
    let mockup = wireframe.mockup();
    let viewport = Viewport::for_canvas(
        mockup.canvas_size(),
        mockup.measured_size(),
        options.padding(),
    );
    info!(
        name = wireframe.name(),
        controls = mockup.controls().len(),
        viewport:% = viewport;
        "Converting wireframe"
    );

    let mut document = Document::new()
        .set("xmlns", SVG_NAMESPACE)
        .set("xmlns:xlink", XLINK_NAMESPACE)
        .set("viewBox", viewport.to_string())
        .set("style", format!("font-family: {}", options.font_family()));

    let renderer = Renderer::new(options.font_family(), measure);
    for control in z_ordered(mockup.controls()) {
        renderer.render(control, Point::default(), &mut document);
    }

    debug!("Wireframe converted");
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approximate() -> ConvertOptions {
        ConvertOptions::default().with_text_measurement(TextMeasurement::Approximate)
    }

    fn render(source: &str, options: &ConvertOptions) -> String {
        let wireframe = wireframe_parser::parse(source).unwrap();
        convert_with(&wireframe, options, &ApproximateMeasure).to_string()
    }

    #[test]
    fn test_root_attributes() {
        let output = render(
            r#"{"mockup": {"mockupW": "200", "mockupH": "100", "measuredW": "210", "measuredH": "110"}}"#,
            &approximate(),
        );

        assert!(output.starts_with("<svg"), "{output}");
        assert!(output.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(output.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(output.contains(r#"viewBox="5 5 210 110""#), "{output}");
        assert!(output.contains(r#"style="font-family: sans-serif""#), "{output}");
    }

    #[test]
    fn test_padding_and_family_options() {
        let options = approximate().with_padding(10.0).with_font_family("Inter");
        let output = render(
            r#"{"mockup": {"mockupW": "200", "mockupH": "100", "measuredW": "200", "measuredH": "100"}}"#,
            &options,
        );

        assert!(output.contains(r#"viewBox="-10 -10 220 120""#), "{output}");
        assert!(output.contains(r#"style="font-family: Inter""#), "{output}");
    }

    #[test]
    fn test_missing_canvas_size_is_nan() {
        let output = render(r#"{"mockup": {}}"#, &approximate());
        assert!(output.contains(r#"viewBox="NaN NaN NaN NaN""#), "{output}");
    }

    #[test]
    fn test_top_level_controls_sorted_by_z_order() {
        let output = render(
            r#"{"mockup": {"controls": {"control": [
                {"typeID": "Icon", "zOrder": "3", "x": "3", "y": "0"},
                {"typeID": "Icon", "zOrder": "1", "x": "1", "y": "0"},
                {"typeID": "Icon", "zOrder": "1", "x": "2", "y": "0"}
            ]}}}"#,
            &approximate(),
        );

        let positions: Vec<usize> = [r#"cx="11""#, r#"cx="12""#, r#"cx="13""#]
            .iter()
            .map(|needle| output.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{output}");
    }

    #[test]
    fn test_unsupported_control_does_not_stop_siblings() {
        let output = render(
            r#"{"mockup": {"controls": {"control": [
                {"typeID": "Canvas", "zOrder": "0", "x": "0", "y": "0", "w": "10", "h": "10"},
                {"typeID": "VideoPlayer", "zOrder": "1", "x": "0", "y": "0"},
                {"typeID": "HRule", "zOrder": "2", "x": "0", "y": "0", "w": "10"}
            ]}}}"#,
            &approximate(),
        );

        assert_eq!(output.matches("<rect").count(), 1);
        assert_eq!(output.matches("<path").count(), 1);
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let wireframe = wireframe_parser::parse(
            r#"{"mockup": {"mockupW": "100", "mockupH": "100", "measuredW": "100", "measuredH": "100",
                "controls": {"control": [
                {"typeID": "__group__", "zOrder": "0", "x": "10", "y": "10",
                 "children": {"controls": {"control": [
                    {"typeID": "Icon", "zOrder": "1", "x": "5", "y": "5"},
                    {"typeID": "Label", "zOrder": "0", "x": "0", "y": "0", "measuredH": "20",
                     "properties": {"text": "Hi"}}
                 ]}}}
            ]}}}"#,
        )
        .unwrap();
        let options = approximate();

        let first = convert_with(&wireframe, &options, &ApproximateMeasure).to_string();
        let second = convert_with(&wireframe, &options, &ApproximateMeasure).to_string();

        assert_eq!(first, second);
        assert!(first.contains(r#"cx="25""#), "{first}");
    }

    #[test]
    fn test_convert_reports_font_errors() {
        let wireframe = wireframe_parser::parse(r#"{"mockup": {}}"#).unwrap();
        let options = ConvertOptions::default().with_font_url("/definitely/missing/font.ttf");

        let err = convert(&wireframe, &options).unwrap_err();
        assert!(matches!(err, WireframeError::Font(_)), "{err}");
    }

    #[test]
    fn test_approximate_measurement_skips_font_loading() {
        let wireframe = wireframe_parser::parse(r#"{"mockup": {}}"#).unwrap();
        let options = approximate().with_font_url("/definitely/missing/font.ttf");

        assert!(convert(&wireframe, &options).is_ok());
    }
}
