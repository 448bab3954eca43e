//! Error types for map document loading.

use thiserror::Error;

/// Process exit code used when the map cannot be loaded.
pub const EXIT_CODE_LOAD_FAILED: u8 = 111;

/// Errors that can occur while loading the map document.
///
/// All of these are fatal: the world cannot be constructed without a map,
/// so the loader reports the error and asks the process to exit.
#[derive(Debug, Error)]
pub enum MapLoadError {
    /// File could not be read.
    #[error("failed to read map '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("invalid map '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The document parsed but contained no usable tile or block entries.
    #[error("map '{path}' contains no tiles")]
    Empty { path: String },
}
