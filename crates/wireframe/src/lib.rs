//! Wireframe - render wireframe mockup documents to SVG.
//!
//! A wireframe document is a JSON tree of UI mockup controls (rectangles,
//! labels, text inputs, arrows, icons, rules and nested groups). This crate
//! parses such documents and draws them as scalable vector graphics.

pub mod config;
pub mod font;

mod convert;
mod error;
mod render;

pub use wireframe_core::{color, draw, geometry, model};

pub use convert::{convert, convert_with};
pub use error::WireframeError;
pub use render::Renderer;

use log::{debug, info, trace};

use wireframe_core::model::Wireframe;
use wireframe_parser::error::Diagnostic;

use config::AppConfig;

/// Builder for parsing and rendering wireframe documents.
///
/// # Examples
///
/// ```rust,no_run
/// use wireframe::{WireframeBuilder, config::AppConfig};
///
/// let source = std::fs::read_to_string("login.json").expect("Failed to read");
///
/// let builder = WireframeBuilder::new(AppConfig::default());
///
/// // Parse source to the document model
/// let wireframe = builder.parse(&source).expect("Failed to parse");
///
/// // Render the document to SVG
/// let svg = builder.render_svg(&wireframe).expect("Failed to render");
/// ```
#[derive(Default)]
pub struct WireframeBuilder {
    config: AppConfig,
}

impl WireframeBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse JSON source into a wireframe document.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Parse`] with diagnostics pointing into
    /// `source` when the JSON is malformed or lacks a `mockup`.
    pub fn parse(&self, source: &str) -> Result<Wireframe, WireframeError> {
        info!("Parsing wireframe");

        let wireframe = wireframe_parser::parse(source)
            .map_err(|err| WireframeError::new_parse_error(err, source))?;

        debug!("Wireframe parsed successfully");
        trace!(wireframe:?; "Parsed wireframe");

        Ok(wireframe)
    }

    /// Returns warnings about controls the renderer will skip.
    pub fn check(&self, wireframe: &Wireframe) -> Vec<Diagnostic> {
        wireframe_parser::check(wireframe)
    }

    /// Render a wireframe document to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`WireframeError::Font`] when the configured font cannot be
    /// loaded, or [`WireframeError::Export`] when serialization fails.
    pub fn render_svg(&self, wireframe: &Wireframe) -> Result<String, WireframeError> {
        let document = convert(wireframe, self.config.render())?;

        let mut buffer = Vec::new();
        svg::write(&mut buffer, &document)?;
        let svg = String::from_utf8(buffer).map_err(|err| WireframeError::Export(Box::new(err)))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
