//! Integration tests for the WireframeBuilder API

use wireframe::{
    WireframeBuilder, WireframeError,
    config::{AppConfig, ConvertOptions, TextMeasurement},
};

const DASHBOARD: &str = r#"{
    "mockup": {
        "mockupW": "300", "mockupH": "200", "measuredW": "300", "measuredH": "200",
        "controls": {"control": [
            {"ID": "0", "typeID": "Canvas", "zOrder": "0", "x": "0", "y": "0",
             "w": "300", "h": "200", "measuredW": "300", "measuredH": "200"},
            {"ID": "1", "typeID": "Label", "zOrder": "2", "x": "20", "y": "10",
             "measuredW": "80", "measuredH": "20",
             "properties": {"text": "Status: {color:green6}OK{color}", "bold": true}},
            {"ID": "2", "typeID": "HRule", "zOrder": "1", "x": "20", "y": "40",
             "w": "260", "measuredW": "260", "measuredH": "10",
             "properties": {"stroke": "dashed"}},
            {"ID": "3", "typeID": "__group__", "zOrder": "3", "x": "20", "y": "60",
             "measuredW": "120", "measuredH": "30",
             "properties": {"controlName": "actions"},
             "children": {"controls": {"control": [
                {"ID": "0", "typeID": "Icon", "zOrder": "0", "x": "0", "y": "0",
                 "measuredW": "20", "measuredH": "20",
                 "properties": {"icon": {"ID": "check-circle"}, "color": 5025616}},
                {"ID": "1", "typeID": "Arrow", "zOrder": "1", "x": "30", "y": "0",
                 "measuredW": "80", "measuredH": "20",
                 "properties": {"p0": {"x": 0, "y": 10}, "p1": {"x": 0.5, "y": 0},
                                "p2": {"x": 80, "y": 10}, "stroke": "dotted"}}
             ]}}}
        ]}
    }
}"#;

fn approximate_builder() -> WireframeBuilder {
    let options = ConvertOptions::default().with_text_measurement(TextMeasurement::Approximate);
    WireframeBuilder::new(AppConfig::new(options))
}

#[test]
fn test_builder_api_exists() {
    let _builder = WireframeBuilder::default();
}

#[test]
fn test_render_dashboard() {
    let builder = approximate_builder();
    let wireframe = builder.parse(DASHBOARD).expect("Failed to parse wireframe");
    let svg = builder.render_svg(&wireframe).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"viewBox="-5 -5 310 210""#));
    assert!(svg.contains(r##"fill="#389e0d""##), "palette shade in markup: {svg}");
    assert!(svg.contains(r#"stroke-dasharray="18, 30""#));
    assert!(svg.contains(r#"stroke-dasharray="0.8 12""#));
    assert!(svg.contains(r#"data-group-id="actions""#));
    assert!(svg.contains(r#"d="M24.5 70L28.5 74 35 67.5""#), "check mark: {svg}");
    assert!(svg.contains(r#"d="M50 70Q90 70 130 70""#), "arrow: {svg}");
}

#[test]
fn test_paint_order_follows_z_order() {
    let builder = approximate_builder();
    let wireframe = builder.parse(DASHBOARD).expect("Failed to parse wireframe");
    let svg = builder.render_svg(&wireframe).expect("Failed to render");

    let rect = svg.find("<rect").unwrap();
    let rule = svg.find(r#"stroke-dasharray="18, 30""#).unwrap();
    let label = svg.find("<text").unwrap();
    let group = svg.find("<g").unwrap();
    assert!(rect < rule && rule < label && label < group);
}

#[test]
fn test_system_measurement_renders() {
    let builder = WireframeBuilder::default();
    let wireframe = builder.parse(DASHBOARD).expect("Failed to parse wireframe");
    let svg = builder.render_svg(&wireframe).expect("Failed to render");

    assert!(svg.contains("Status: "));
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = WireframeBuilder::default();
    let result = builder.parse("{\"mockup\": ");

    match result {
        Err(WireframeError::Parse { err, src }) => {
            assert_eq!(src, "{\"mockup\": ");
            assert!(!err.diagnostics().is_empty());
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_check_reports_unsupported_controls() {
    let builder = WireframeBuilder::default();
    let wireframe = builder
        .parse(r#"{"mockup": {"controls": {"control": [{"typeID": "Map"}]}}}"#)
        .expect("Failed to parse wireframe");

    let warnings = builder.check(&wireframe);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].severity().is_warning());
}

#[test]
fn test_builder_reusability() {
    let builder = approximate_builder();

    let first = builder.parse(DASHBOARD).expect("Failed to parse");
    let second = builder
        .parse(r#"{"mockup": {"mockupW": "10", "mockupH": "10", "measuredW": "10", "measuredH": "10"}}"#)
        .expect("Failed to parse");

    let svg1 = builder.render_svg(&first).expect("Failed to render first");
    let svg2 = builder.render_svg(&second).expect("Failed to render second");
    let svg1_again = builder.render_svg(&first).expect("Failed to render first again");

    assert_ne!(svg1, svg2);
    assert_eq!(svg1, svg1_again);
}
