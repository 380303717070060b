//! Inline color markup for text controls.
//!
//! Text may embed color directives: `{color:<code>}` starts a colored run and
//! `{color}` ends it. A code starting with `#` is a literal hex color; any
//! other code names a palette shade such as `red6` or `blue` (see
//! [`resolve_palette_code`]).

use log::warn;

use crate::color::resolve_palette_code;

const COLOR_OPEN: &str = "{color:";
const COLOR_CLOSE: &str = "{color}";

/// A contiguous piece of text drawn with one fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun<'a> {
    text: &'a str,
    color: Option<&'a str>,
}

impl<'a> TextRun<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, color: None }
    }

    pub fn colored(text: &'a str, color: &'a str) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The run's own fill, or `None` to inherit the text element's fill.
    pub fn color(&self) -> Option<&'a str> {
        self.color
    }
}

/// Splits `text` into styled runs, preserving order.
///
/// Text without an opening `{color:` directive is returned as a single
/// uncolored run. Otherwise the text is cut at every `{color:` and `{color}`
/// marker. A segment containing `}` reads as `code}text`, where the run text
/// ends at the next `}`. Segments without `}` are uncolored runs, empty ones
/// included.
///
/// # Examples
///
/// ```
/// # use wireframe_core::draw::{TextRun, parse_markup};
/// let runs = parse_markup("A{color:#ff0000}B{color}C");
/// assert_eq!(
///     runs,
///     vec![
///         TextRun::plain("A"),
///         TextRun::colored("B", "#ff0000"),
///         TextRun::plain("C"),
///     ]
/// );
/// ```
pub fn parse_markup(text: &str) -> Vec<TextRun<'_>> {
    if !text.contains(COLOR_OPEN) {
        return vec![TextRun::plain(text)];
    }

    split_markers(text)
        .into_iter()
        .map(|segment| {
            let mut pieces = segment.split('}');
            match (pieces.next(), pieces.next()) {
                (Some(code), Some(run)) => match resolve_code(code) {
                    Some(color) => TextRun::colored(run, color),
                    None => TextRun::plain(run),
                },
                _ => TextRun::plain(segment),
            }
        })
        .collect()
}

fn resolve_code(code: &str) -> Option<&str> {
    if code.starts_with('#') {
        return Some(code);
    }
    let color = resolve_palette_code(code);
    if color.is_none() {
        warn!(code = code; "Unknown palette color in text markup");
    }
    color
}

/// Splits at every opening or closing marker, whichever comes first.
fn split_markers(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = text;
    loop {
        let next = [COLOR_OPEN, COLOR_CLOSE]
            .into_iter()
            .filter_map(|marker| rest.find(marker).map(|at| (at, marker.len())))
            .min_by_key(|(at, _)| *at);
        match next {
            Some((at, len)) => {
                segments.push(&rest[..at]);
                rest = &rest[at + len..];
            }
            None => {
                segments.push(rest);
                return segments;
            }
        }
    }
}
