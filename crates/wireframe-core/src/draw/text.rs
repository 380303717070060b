//! Font resolution and text measurement.
//!
//! This module provides types for describing the font of a text control and
//! for measuring rendered text.
//!
//! # Overview
//!
//! - [`FontSpec`] - Style, weight, size and family resolved from control properties
//! - [`TextMeasure`] - Measurement backend returning [`TextMetrics`] (width and ascent)
//! - [`SystemTextMeasure`] - Shaping-based measurement using system and registered fonts
//! - [`ApproximateMeasure`] - Font-free, deterministic measurement
//!
//! # Quick Start
//!
//! ```
//! # use wireframe_core::draw::{ApproximateMeasure, FontSpec, TextMeasure};
//! # use wireframe_core::model::Properties;
//! let font = FontSpec::from_properties(&Properties::default(), "sans-serif");
//! assert_eq!(font.css_font(), "normal normal 13px sans-serif");
//!
//! let metrics = ApproximateMeasure.measure("Hello", &font);
//! assert!(metrics.width() > 0.0);
//! ```

use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{
    Attrs, Buffer, CacheKey, Command, Family, FontSystem, Metrics, Shaping, Style, SwashCache,
    Weight,
};
use log::{debug, info};
use serde_json::Value;

use crate::model::Properties;

/// Font size used when a control does not set `size`.
const DEFAULT_FONT_SIZE: &str = "13";

/// Font style of a text control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Italic => write!(f, "italic"),
        }
    }
}

/// Font weight of a text control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Bold => write!(f, "bold"),
        }
    }
}

/// The resolved font of a text control.
///
/// Style and weight come from the `italic` and `bold` properties, the size
/// from `size` (in pixels, default 13). The family is fixed per conversion and
/// cannot be overridden by a control.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    style: FontStyle,
    weight: FontWeight,
    size: String,
    family: String,
}

impl FontSpec {
    pub fn new(style: FontStyle, weight: FontWeight, size_px: &str, family: &str) -> Self {
        Self {
            style,
            weight,
            size: format!("{size_px}px"),
            family: family.to_string(),
        }
    }

    /// Resolves the font of a control from its properties.
    pub fn from_properties(properties: &Properties, family: &str) -> Self {
        let style = if properties.flag("italic") {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        let weight = if properties.flag("bold") {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        let size = match properties.get("size") {
            Some(Value::String(size)) if !size.is_empty() => size.clone(),
            Some(Value::Number(size)) if size.as_f64().is_some_and(|n| n != 0.0) => {
                size.to_string()
            }
            _ => DEFAULT_FONT_SIZE.to_string(),
        };
        Self::new(style, weight, &size, family)
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the CSS size value, e.g. `13px`.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the numeric pixel size, falling back to the default when the
    /// size value is not a number.
    pub fn size_px(&self) -> f32 {
        self.size
            .trim_end_matches("px")
            .trim()
            .parse()
            .ok()
            .filter(|size: &f32| size.is_finite() && *size > 0.0)
            .unwrap_or(13.0)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the CSS `font` shorthand, e.g. `italic bold 16px Arial`.
    pub fn css_font(&self) -> String {
        format!(
            "{} {} {} {}",
            self.style, self.weight, self.size, self.family
        )
    }
}

/// Measured dimensions of a text string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    width: f64,
    ascent: f64,
}

impl TextMetrics {
    pub fn new(width: f64, ascent: f64) -> Self {
        Self { width, ascent }
    }

    /// Rendered advance width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance from the baseline to the top of the inked glyphs in pixels.
    ///
    /// This depends on the text: `"xxx"` has a smaller ascent than `"Hello"`.
    pub fn ascent(&self) -> f64 {
        self.ascent
    }
}

/// A text measurement backend.
pub trait TextMeasure {
    /// Measures `text` rendered as a single line in `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics;
}

/// Font-free measurement with fixed per-character proportions.
///
/// Every character advances by `0.55` of the font size and the ascent is
/// `0.75` of the font size. Results do not depend on installed fonts, which
/// makes output reproducible across machines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMeasure;

impl ApproximateMeasure {
    const ADVANCE_RATIO: f64 = 0.55;
    const ASCENT_RATIO: f64 = 0.75;
}

impl TextMeasure for ApproximateMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }
        let size = f64::from(font.size_px());
        TextMetrics::new(
            text.chars().count() as f64 * size * Self::ADVANCE_RATIO,
            size * Self::ASCENT_RATIO,
        )
    }
}

/// Shaping-based measurement backed by a process-wide [`FontSystem`].
///
/// The font system is created on first use and loads the system fonts.
/// Additional fonts can be registered under a family name with
/// [`register_font`](Self::register_font); later measurements requesting
/// that family use the registered faces.
pub struct SystemTextMeasure {
    state: Mutex<FontState>,
}

struct FontState {
    font_system: FontSystem,
    /// Scaled glyph outlines, used for ink extents.
    swash_cache: SwashCache,
    /// Requested family name to the family name stored in the font faces.
    aliases: HashMap<String, String>,
}

static SYSTEM_TEXT_MEASURE: OnceLock<SystemTextMeasure> = OnceLock::new();

impl SystemTextMeasure {
    /// Returns the shared instance.
    pub fn shared() -> &'static Self {
        SYSTEM_TEXT_MEASURE.get_or_init(Self::new)
    }

    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            state: Mutex::new(FontState {
                font_system: FontSystem::new(),
                swash_cache: SwashCache::new(),
                aliases: HashMap::new(),
            }),
        }
    }

    /// Registers font data under `family`.
    ///
    /// Returns the family name found in the loaded faces, or `None` when the
    /// data contained no usable font face.
    pub fn register_font(&self, data: Vec<u8>, family: &str) -> Option<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let existing = state.font_system.db().len();
        state.font_system.db_mut().load_font_data(data);

        let loaded_family = state
            .font_system
            .db()
            .faces()
            .skip(existing)
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;

        debug!(family = family, loaded_family = loaded_family.as_str(); "Registered font");
        state
            .aliases
            .insert(family.to_string(), loaded_family.clone());
        Some(loaded_family)
    }
}

impl TextMeasure for SystemTextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let FontState {
            font_system,
            swash_cache,
            aliases,
        } = &mut *state;

        let family_name = aliases
            .get(font.family())
            .map_or(font.family(), String::as_str);
        let Some((width, glyphs)) = shape_line(font_system, text, font, family_name) else {
            // No shaping information available; estimate from the font size.
            return ApproximateMeasure.measure(text, font);
        };

        let ascent = glyphs
            .into_iter()
            .filter_map(|(cache_key, baseline_offset)| {
                glyph_top(font_system, swash_cache, cache_key).map(|top| top + baseline_offset)
            })
            .fold(0.0_f32, f32::max);

        TextMetrics::new(f64::from(width), f64::from(ascent))
    }
}

/// Shapes `text` as one line.
///
/// Returns the advance width and, per glyph, its cache key with the
/// vertical distance its origin sits above the baseline. `None` when
/// shaping produced no layout run.
fn shape_line(
    font_system: &mut FontSystem,
    text: &str,
    font: &FontSpec,
    family_name: &str,
) -> Option<(f32, Vec<(CacheKey, f32)>)> {
    let size = font.size_px();
    let mut buffer = Buffer::new(font_system, Metrics::new(size, size));
    let mut buffer = buffer.borrow_with(font_system);

    let attrs = Attrs::new()
        .family(family(family_name))
        .style(match font.style() {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
        })
        .weight(match font.weight() {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        });

    buffer.set_size(None, None);
    buffer.set_text(text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(true);

    let mut width: f32 = 0.0;
    let mut glyphs = Vec::new();
    let mut has_runs = false;
    for run in buffer.layout_runs() {
        has_runs = true;
        if let Some(last) = run.glyphs.last() {
            width = width.max(last.x + last.w);
        }
        for glyph in run.glyphs {
            let physical = glyph.physical((0.0, 0.0), 1.0);
            // Physical offsets grow downwards.
            glyphs.push((physical.cache_key, -(physical.y as f32)));
        }
    }

    has_runs.then_some((width, glyphs))
}

/// Returns the height of a glyph's ink above its origin.
///
/// Reads the scaled outline (y grows upwards) and takes the highest
/// on-curve point. Glyphs without an outline fall back to the top of their
/// rasterized image; blank glyphs such as spaces give `None`.
fn glyph_top(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    cache_key: CacheKey,
) -> Option<f32> {
    if let Some(commands) = swash_cache.get_outline_commands(font_system, cache_key) {
        return commands
            .iter()
            .filter_map(|command| match command {
                Command::MoveTo(point) | Command::LineTo(point) => Some(point.y),
                Command::QuadTo(_, point) | Command::CurveTo(_, _, point) => Some(point.y),
                Command::Close => None,
            })
            .reduce(f32::max);
    }

    swash_cache
        .get_image(font_system, cache_key)
        .as_ref()
        .filter(|image| image.placement.height > 0)
        .map(|image| image.placement.top as f32)
}

fn family(name: &str) -> Family<'_> {
    match name {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}
