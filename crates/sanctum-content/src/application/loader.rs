//! Course loading from JSON and YAML sources.
//!
//! The loader is the content provider boundary: it parses authored files into
//! the immutable course tree and logs what it found. It does not validate;
//! see [`crate::application::validation`].

use std::path::Path;

use crate::domain::course::Course;
use crate::error::ContentError;

/// Parses a course from a JSON document.
///
/// # Errors
///
/// Returns `ContentError::Json` if the document does not match the schema.
pub fn parse_course_json(source: &str) -> Result<Course, ContentError> {
    let course: Course = serde_json::from_str(source)?;
    log_loaded(&course, "json");
    Ok(course)
}

/// Parses a course from a YAML document.
///
/// # Errors
///
/// Returns `ContentError::Yaml` if the document does not match the schema.
pub fn parse_course_yaml(source: &str) -> Result<Course, ContentError> {
    let course: Course = serde_yaml::from_str(source)?;
    log_loaded(&course, "yaml");
    Ok(course)
}

/// Reads and parses a course file, choosing the format by extension
/// (`.json`, `.yaml` or `.yml`).
///
/// # Errors
///
/// Returns `ContentError::UnsupportedFormat` for other extensions,
/// `ContentError::Io` if the file cannot be read, and a parse error if its
/// content does not match the schema.
pub fn load_course(path: &Path) -> Result<Course, ContentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<Course, ContentError> = match extension.as_str() {
        "json" => parse_course_json,
        "yaml" | "yml" => parse_course_yaml,
        _ => {
            return Err(ContentError::UnsupportedFormat(path.display().to_string()));
        }
    };

    let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read course file");
    parse(&source)
}

fn log_loaded(course: &Course, format: &'static str) {
    let lessons: usize = course.modules.iter().map(|m| m.lessons.len()).sum();
    let blocks: usize = course
        .modules
        .iter()
        .flat_map(|m| &m.lessons)
        .map(|l| l.blocks.len())
        .sum();
    tracing::info!(
        format,
        modules = course.modules.len(),
        lessons,
        blocks,
        resources = course.resources.len(),
        "course loaded"
    );
}
