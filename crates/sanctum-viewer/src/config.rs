//! Viewer configuration, read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Settings for one viewer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Course file to load (`COURSE_PATH`).
    pub course_path: PathBuf,
    /// Lesson to render (`LESSON_ID`); the first lesson when unset.
    pub lesson_id: Option<String>,
    /// Fail on validation issues instead of warning (`COURSE_STRICT`).
    pub strict: bool,
}

impl ViewerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `COURSE_PATH` is unset or
    /// `COURSE_STRICT` is not a boolean.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `COURSE_PATH` is unset or
    /// `COURSE_STRICT` is not a boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let course_path = lookup("COURSE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config("COURSE_PATH environment variable must be set".to_owned())
            })?;
        let lesson_id = lookup("LESSON_ID").filter(|id| !id.trim().is_empty());
        let strict = match lookup("COURSE_STRICT").as_deref().map(str::trim) {
            None | Some("" | "0" | "false") => false,
            Some("1" | "true") => true,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "COURSE_STRICT must be true, false, 1 or 0, got {other:?}"
                )));
            }
        };
        Ok(Self {
            course_path,
            lesson_id,
            strict,
        })
    }
}
