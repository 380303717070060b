//! CLI logic for the wireframe renderer.
//!
//! This module reads a wireframe JSON document, applies configuration and
//! command-line overrides, and writes the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, mem};

use log::{info, warn};

use wireframe::{WireframeBuilder, WireframeError, config::AppConfig};

/// Run the wireframe CLI application
///
/// This function processes the input file through the wireframe pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `WireframeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Font loading errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WireframeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing wireframe"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, args);
    config::validate(&app_config)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = WireframeBuilder::new(app_config);
    let wireframe = builder.parse(&source)?;
    for diagnostic in builder.check(&wireframe) {
        warn!("{diagnostic}");
    }
    let svg = builder.render_svg(&wireframe)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Replaces configured render settings with the ones given on the command line.
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    let render = config.render_mut();
    let mut options = mem::take(render);
    if let Some(padding) = args.padding {
        options = options.with_padding(padding);
    }
    if let Some(font_family) = &args.font_family {
        options = options.with_font_family(font_family);
    }
    if let Some(font_url) = &args.font_url {
        options = options.with_font_url(font_url);
    }
    *render = options;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(overrides: &[&str]) -> Args {
        use clap::Parser;

        let mut argv = vec!["wireframe", "in.json"];
        argv.extend_from_slice(overrides);
        Args::parse_from(argv)
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args(&[]));

        assert_eq!(config.render().padding(), 5.0);
        assert_eq!(config.render().font_family(), "sans-serif");
        assert_eq!(config.render().font_url(), None);
    }

    #[test]
    fn test_overrides_replace_config() {
        let mut config = AppConfig::default();
        apply_overrides(
            &mut config,
            &args(&["--padding", "0", "--font-family", "Inter", "--font-url", "a.ttf"]),
        );

        assert_eq!(config.render().padding(), 0.0);
        assert_eq!(config.render().font_family(), "Inter");
        assert_eq!(config.render().font_url(), Some("a.ttf"));
    }
}
