//! Configuration types for wireframe conversion.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`ConvertOptions`] - Padding, font and text measurement settings.
//! - [`TextMeasurement`] - Which text measurement backend to use.
//!
//! # Example
//!
//! ```
//! # use wireframe::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().padding(), 5.0);
//! assert_eq!(config.render().font_family(), "sans-serif");
//! ```

use serde::Deserialize;

const DEFAULT_PADDING: f64 = 5.0;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Conversion settings section (`[render]`).
    #[serde(default)]
    render: ConvertOptions,
}

impl AppConfig {
    pub fn new(render: ConvertOptions) -> Self {
        Self { render }
    }

    /// Returns the conversion settings.
    pub fn render(&self) -> &ConvertOptions {
        &self.render
    }

    /// Returns the conversion settings for modification.
    pub fn render_mut(&mut self) -> &mut ConvertOptions {
        &mut self.render
    }
}

/// Text measurement backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMeasurement {
    /// Shape text with system and registered fonts.
    #[default]
    System,
    /// Estimate text extents from the font size alone.
    Approximate,
}

/// Options for converting one wireframe document.
///
/// # Example
///
/// ```
/// # use wireframe::config::ConvertOptions;
/// let options = ConvertOptions::default()
///     .with_padding(10.0)
///     .with_font_family("Inter");
/// assert_eq!(options.padding(), 10.0);
/// assert!(options.font_url().is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertOptions {
    /// Margin around the canvas in the output `viewBox`.
    #[serde(default = "default_padding")]
    padding: f64,

    /// Font family for all text, also written to the root `style`.
    #[serde(default = "default_font_family")]
    font_family: String,

    /// Font file to load and register under `font_family` before rendering.
    #[serde(default)]
    font_url: Option<String>,

    #[serde(default)]
    text_measurement: TextMeasurement,
}

fn default_padding() -> f64 {
    DEFAULT_PADDING
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_url: None,
            text_measurement: TextMeasurement::default(),
        }
    }
}

impl ConvertOptions {
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_font_url(mut self, font_url: impl Into<String>) -> Self {
        self.font_url = Some(font_url.into());
        self
    }

    pub fn with_text_measurement(mut self, text_measurement: TextMeasurement) -> Self {
        self.text_measurement = text_measurement;
        self
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font to load, treating an empty value as unset.
    pub fn font_url(&self) -> Option<&str> {
        self.font_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn text_measurement(&self) -> TextMeasurement {
        self.text_measurement
    }
}
