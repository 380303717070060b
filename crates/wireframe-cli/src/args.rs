//! Command-line argument definitions for the wireframe CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, rendering overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the wireframe renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input wireframe JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Margin around the canvas, overriding the configuration
    #[arg(long)]
    pub padding: Option<f64>,

    /// Font family for all text, overriding the configuration
    #[arg(long)]
    pub font_family: Option<String>,

    /// Font file path or URL to load before rendering
    #[arg(long)]
    pub font_url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
