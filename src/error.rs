//! Errors raised at the I/O edges of the renderer.
//!
//! Geometry and shading never fail; only reading configuration and writing
//! images can.

use std::path::PathBuf;

/// Renderer error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        source: toml::de::Error,
    },

    /// Encoding a PNG failed
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result alias for renderer operations.
pub type Result<T> = std::result::Result<T, Error>;
