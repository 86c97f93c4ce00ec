//! Error types for loading site configuration and content.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or the project catalog.
///
/// Rendering never fails; these only surface at startup.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid project `{title}`: {reason}")]
    InvalidProject { title: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Reads a file into a string, keeping the path for the error message.
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
