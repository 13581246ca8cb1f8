//! Error types for `CoiLab`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `CoiLab` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Source Document Errors ====================
    /// A required source document does not exist on disk.
    #[error("source document not found: {path}")]
    SourceNotFound {
        /// The expected path to the document.
        path: PathBuf,
    },

    /// A source document exists but could not be parsed.
    #[error("failed to parse {path}: {source}")]
    SourceParseFailed {
        /// The document path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    // ==================== Configuration Errors ====================
    /// The config file could not be parsed.
    #[error("failed to parse config {path}: {message}")]
    ConfigParseFailed {
        /// The config file path.
        path: PathBuf,
        /// The TOML error message.
        message: String,
    },

    /// A config value is out of range.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// What is invalid.
        message: String,
    },

    // ==================== Sprite Sheet Errors ====================
    /// Failed to encode or write the sprite sheet.
    #[error("failed to write sprite sheet {path}: {message}")]
    SheetWriteFailed {
        /// The sheet output path.
        path: PathBuf,
        /// The encoder error message.
        message: String,
    },

    /// The sprite sheet dimensions overflow the canvas size.
    #[error("sprite sheet too large: {icons} icons at {tile_size}px")]
    SheetTooLarge {
        /// Number of icons requested.
        icons: usize,
        /// Tile edge length in pixels.
        tile_size: u32,
    },

    // ==================== Parsing Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `CoiLab` operations.
pub type Result<T> = std::result::Result<T, Error>;
