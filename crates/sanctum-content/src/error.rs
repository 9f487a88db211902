//! Content error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or looking up course content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The course file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The course source is not valid JSON for the content schema.
    #[error("invalid JSON course: {0}")]
    Json(#[from] serde_json::Error),

    /// The course source is not valid YAML for the content schema.
    #[error("invalid YAML course: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension names no supported format.
    #[error("unsupported course format: {0}")]
    UnsupportedFormat(String),

    /// No lesson has the requested identifier.
    #[error("lesson not found: {0}")]
    LessonNotFound(String),
}
