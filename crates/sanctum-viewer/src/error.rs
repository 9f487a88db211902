//! Sanctum viewer — error types.

use sanctum_content::ContentError;
use thiserror::Error;

/// Startup and rendering errors for the viewer.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The course could not be loaded or the lesson was not found.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Strict mode rejected a course with validation issues.
    #[error("course has {0} validation issue(s)")]
    Validation(usize),

    /// The course has no lessons to show.
    #[error("course has no lessons")]
    EmptyCourse,

    /// The page could not be written as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
