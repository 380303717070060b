//! Color handling for wireframe controls
//!
//! Wireframe documents store colors as packed 24-bit integers (`0xRRGGBB`
//! written in decimal). This module decodes them into the `rgb(r,g,b)` form
//! written to SVG attributes, and provides the named shade palettes used by
//! the `{color:...}` rich-text markup.

use std::fmt;

use serde_json::Value;

use crate::geometry::to_number;

/// An opaque RGB color decoded from a packed integer.
///
/// Displays as `rgb(r,g,b)` with no spaces, which is the exact form written
/// to `fill` and `stroke` attributes.
///
/// # Examples
///
/// ```
/// use wireframe_core::color::Rgb;
///
/// let color = Rgb::from_packed(16_711_680.0);
/// assert_eq!(color.to_string(), "rgb(255,0,0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Decodes a packed `0xRRGGBB` value.
    ///
    /// The value is first wrapped to a 32-bit signed integer, as a bitwise
    /// operator would, so fractional, negative and out-of-range values still
    /// decode deterministically. `NaN` and infinities decode to black.
    pub fn from_packed(value: f64) -> Self {
        let packed = to_int32(value);
        Self {
            red: ((packed >> 16) & 255) as u8,
            green: ((packed >> 8) & 255) as u8,
            blue: (packed & 255) as u8,
        }
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Resolves a color property to its SVG attribute value.
///
/// A missing property gives `fallback`; anything else is decoded as a packed
/// integer (JSON numbers and numeric strings are both accepted).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wireframe_core::color::{Rgb, resolve_color};
///
/// assert_eq!(resolve_color(None, Rgb::WHITE), "rgb(255,255,255)");
/// assert_eq!(resolve_color(Some(&json!(255)), Rgb::WHITE), "rgb(0,0,255)");
/// ```
pub fn resolve_color(value: Option<&Value>, fallback: Rgb) -> String {
    match value {
        None => fallback.to_string(),
        Some(value) => Rgb::from_packed(to_number(Some(value))).to_string(),
    }
}

fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

/// Shade used when a markup code has no trailing digit.
pub const PRIMARY_SHADE: usize = 5;

/// A named ramp of ten shades, from lightest (`0`) to darkest (`9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    shades: [&'static str; 10],
}

impl Palette {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the shade at `index`, or `None` when it is out of range.
    pub fn shade(&self, index: usize) -> Option<&'static str> {
        self.shades.get(index).copied()
    }

    /// Returns the primary shade of the palette.
    pub fn primary(&self) -> &'static str {
        self.shades[PRIMARY_SHADE]
    }

    /// Looks up a palette by name.
    pub fn named(name: &str) -> Option<&'static Palette> {
        PALETTES.iter().find(|palette| palette.name == name)
    }
}

/// The default palettes available to `{color:<name><shade>}` markup.
pub static PALETTES: [Palette; 13] = [
    Palette {
        name: "red",
        shades: [
            "#fff1f0", "#ffccc7", "#ffa39e", "#ff7875", "#ff4d4f", "#f5222d", "#cf1322",
            "#a8071a", "#820014", "#5c0011",
        ],
    },
    Palette {
        name: "volcano",
        shades: [
            "#fff2e8", "#ffd8bf", "#ffbb96", "#ff9c6e", "#ff7a45", "#fa541c", "#d4380d",
            "#ad2102", "#871400", "#610b00",
        ],
    },
    Palette {
        name: "orange",
        shades: [
            "#fff7e6", "#ffe7ba", "#ffd591", "#ffc069", "#ffa940", "#fa8c16", "#d46b08",
            "#ad4e00", "#873800", "#612500",
        ],
    },
    Palette {
        name: "gold",
        shades: [
            "#fffbe6", "#fff1b8", "#ffe58f", "#ffd666", "#ffc53d", "#faad14", "#d48806",
            "#ad6800", "#874d00", "#613400",
        ],
    },
    Palette {
        name: "yellow",
        shades: [
            "#feffe6", "#ffffb8", "#fffb8f", "#fff566", "#ffec3d", "#fadb14", "#d4b106",
            "#ad8b00", "#876800", "#614700",
        ],
    },
    Palette {
        name: "lime",
        shades: [
            "#fcffe6", "#f4ffb8", "#eaff8f", "#d3f261", "#bae637", "#a0d911", "#7cb305",
            "#5b8c00", "#3f6600", "#254000",
        ],
    },
    Palette {
        name: "green",
        shades: [
            "#f6ffed", "#d9f7be", "#b7eb8f", "#95de64", "#73d13d", "#52c41a", "#389e0d",
            "#237804", "#135200", "#092b00",
        ],
    },
    Palette {
        name: "cyan",
        shades: [
            "#e6fffb", "#b5f5ec", "#87e8de", "#5cdbd3", "#36cfc9", "#13c2c2", "#08979c",
            "#006d75", "#00474f", "#002329",
        ],
    },
    Palette {
        name: "blue",
        shades: [
            "#e6f4ff", "#bae0ff", "#91caff", "#69b1ff", "#4096ff", "#1677ff", "#0958d9",
            "#003eb3", "#002c8c", "#001d66",
        ],
    },
    Palette {
        name: "geekblue",
        shades: [
            "#f0f5ff", "#d6e4ff", "#adc6ff", "#85a5ff", "#597ef7", "#2f54eb", "#1d39c4",
            "#10239e", "#061178", "#030852",
        ],
    },
    Palette {
        name: "purple",
        shades: [
            "#f9f0ff", "#efdbff", "#d3adf7", "#b37feb", "#9254de", "#722ed1", "#531dab",
            "#391085", "#22075e", "#120338",
        ],
    },
    Palette {
        name: "magenta",
        shades: [
            "#fff0f6", "#ffd6e7", "#ffadd2", "#ff85c0", "#f759ab", "#eb2f96", "#c41d7f",
            "#9e1068", "#780650", "#520339",
        ],
    },
    Palette {
        name: "grey",
        shades: [
            "#a6a6a6", "#999999", "#8c8c8c", "#808080", "#737373", "#666666", "#404040",
            "#1a1a1a", "#000000", "#000000",
        ],
    },
];

/// Resolves a palette code such as `red7` or `blue` to a hex color.
///
/// The trailing digit selects the shade; without one the
/// [primary shade](PRIMARY_SHADE) is used. Returns `None` when the palette
/// name is unknown.
///
/// # Examples
///
/// ```
/// use wireframe_core::color::resolve_palette_code;
///
/// assert_eq!(resolve_palette_code("red7"), Some("#a8071a"));
/// assert_eq!(resolve_palette_code("blue"), Some("#1677ff"));
/// assert_eq!(resolve_palette_code("chartreuse3"), None);
/// ```
pub fn resolve_palette_code(code: &str) -> Option<&'static str> {
    let trailing_digit = code
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as usize);

    match trailing_digit {
        Some(index) => Palette::named(&code[..code.len() - 1])?.shade(index),
        None => Palette::named(code).map(Palette::primary),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_rgb_display_has_no_spaces() {
        assert_eq!(Rgb::new(1, 22, 133).to_string(), "rgb(1,22,133)");
        assert_eq!(Rgb::WHITE.to_string(), "rgb(255,255,255)");
        assert_eq!(Rgb::BLACK.to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn test_from_packed_channels() {
        let color = Rgb::from_packed(f64::from(0x12_34_56));
        assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_from_packed_wraps_like_bitwise_ops() {
        // Above 24 bits only the low three bytes survive the mask.
        assert_eq!(Rgb::from_packed(f64::from(0x01_FF_00_00_u32)), Rgb::new(255, 0, 0));
        // -1 is all ones in two's complement.
        assert_eq!(Rgb::from_packed(-1.0), Rgb::WHITE);
        assert_eq!(Rgb::from_packed(255.9), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_packed(f64::NAN), Rgb::BLACK);
        assert_eq!(Rgb::from_packed(f64::INFINITY), Rgb::BLACK);
    }

    #[test]
    fn test_resolve_color_fallback() {
        assert_eq!(resolve_color(None, Rgb::WHITE), "rgb(255,255,255)");
        assert_eq!(resolve_color(None, Rgb::BLACK), "rgb(0,0,0)");
    }

    #[test]
    fn test_resolve_color_accepts_numbers_and_strings() {
        assert_eq!(resolve_color(Some(&json!(16777215)), Rgb::BLACK), "rgb(255,255,255)");
        assert_eq!(resolve_color(Some(&json!("65280")), Rgb::BLACK), "rgb(0,255,0)");
    }

    #[test]
    fn test_resolve_color_non_numeric_is_black() {
        assert_eq!(resolve_color(Some(&json!("teal")), Rgb::WHITE), "rgb(0,0,0)");
        assert_eq!(resolve_color(Some(&json!(null)), Rgb::WHITE), "rgb(0,0,0)");
    }

    #[test]
    fn test_palette_lookup() {
        let red = Palette::named("red").unwrap();
        assert_eq!(red.name(), "red");
        assert_eq!(red.primary(), "#f5222d");
        assert_eq!(red.shade(0), Some("#fff1f0"));
        assert_eq!(red.shade(9), Some("#5c0011"));
        assert_eq!(red.shade(10), None);
        assert!(Palette::named("crimson").is_none());
    }

    #[test]
    fn test_every_palette_has_distinct_name() {
        for (i, palette) in PALETTES.iter().enumerate() {
            assert!(
                PALETTES[i + 1..].iter().all(|other| other.name() != palette.name()),
                "duplicate palette {}",
                palette.name()
            );
            assert!(palette.shades.iter().all(|shade| shade.starts_with('#')));
        }
    }

    #[test]
    fn test_resolve_palette_code() {
        assert_eq!(resolve_palette_code("green0"), Some("#f6ffed"));
        assert_eq!(resolve_palette_code("green"), Some("#52c41a"));
        assert_eq!(resolve_palette_code("geekblue9"), Some("#030852"));
        assert_eq!(resolve_palette_code("grey"), Some("#666666"));
        assert_eq!(resolve_palette_code("unknown"), None);
        assert_eq!(resolve_palette_code("5"), None);
        assert_eq!(resolve_palette_code(""), None);
    }
}
