//! Loading custom fonts for text measurement.
//!
//! A font location is a filesystem path, a `file://` URL or, with the
//! `remote-fonts` feature, an `http(s)://` URL. The font data is registered
//! with the shared [`SystemTextMeasure`] under the configured family name,
//! so text measured in that family uses the loaded faces.

use std::{fmt, fs, io, path::PathBuf};

use log::{debug, info};
use thiserror::Error;
use url::Url;

use wireframe_core::draw::SystemTextMeasure;

/// Errors raised while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("unsupported font URL scheme `{0}`")]
    UnsupportedScheme(String),

    #[error("invalid font URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to read font `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no usable font face in `{0}`")]
    NoFaces(String),

    #[error("failed to fetch font `{url}`: {reason}")]
    Fetch { url: String, reason: String },
}

/// Where font data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A local file, given as a path or a `file://` URL.
    Path(PathBuf),
    /// A remote file.
    Http(Url),
}

impl FontSource {
    /// Resolves a font location.
    ///
    /// Strings that are not absolute URLs are treated as filesystem paths.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::UnsupportedScheme`] for URL schemes other than
    /// `file`, `http` and `https`, and [`FontError::InvalidUrl`] for
    /// malformed URLs.
    pub fn parse(location: &str) -> Result<Self, FontError> {
        match Url::parse(location) {
            Ok(url) => match url.scheme() {
                "file" => url
                    .to_file_path()
                    .map(Self::Path)
                    .map_err(|()| FontError::InvalidUrl {
                        url: location.to_string(),
                        reason: "not a local file path".to_string(),
                    }),
                "http" | "https" => Ok(Self::Http(url)),
                // A Windows path such as `C:\fonts\a.ttf` parses with a
                // single-letter scheme.
                scheme if scheme.len() == 1 => Ok(Self::Path(PathBuf::from(location))),
                scheme => Err(FontError::UnsupportedScheme(scheme.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Self::Path(PathBuf::from(location)))
            }
            Err(err) => Err(FontError::InvalidUrl {
                url: location.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Reads the font data.
    pub fn load(&self) -> Result<Vec<u8>, FontError> {
        match self {
            Self::Path(path) => fs::read(path).map_err(|source| FontError::Io {
                path: path.clone(),
                source,
            }),
            Self::Http(url) => fetch(url),
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(feature = "remote-fonts")]
fn fetch(url: &Url) -> Result<Vec<u8>, FontError> {
    let fetch_error = |err: reqwest::Error| FontError::Fetch {
        url: url.to_string(),
        reason: err.to_string(),
    };

    debug!(url = url.as_str(); "Fetching font");
    let response = reqwest::blocking::get(url.as_str())
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_error)?;
    let bytes = response.bytes().map_err(fetch_error)?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "remote-fonts"))]
fn fetch(url: &Url) -> Result<Vec<u8>, FontError> {
    Err(FontError::Fetch {
        url: url.to_string(),
        reason: "remote fonts require the `remote-fonts` feature".to_string(),
    })
}

/// Loads the font at `location` and registers it under `family`.
///
/// Returns the family name stored in the font file.
///
/// # Errors
///
/// Fails when the location cannot be resolved or read, or when the data
/// holds no font face.
pub fn load_font(
    location: &str,
    family: &str,
    measure: &SystemTextMeasure,
) -> Result<String, FontError> {
    let source = FontSource::parse(location)?;
    debug!(source:% = source; "Loading font");

    let data = source.load()?;
    let loaded_family = measure
        .register_font(data, family)
        .ok_or_else(|| FontError::NoFaces(source.to_string()))?;

    info!(family = family, loaded_family = loaded_family.as_str(); "Font registered");
    Ok(loaded_family)
}
