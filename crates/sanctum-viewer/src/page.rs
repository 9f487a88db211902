//! The JSON page handed to a rendering surface.

use std::sync::Arc;

use sanctum_content::application::navigation::LessonRef;
use sanctum_content::application::validation::validate_course;
use sanctum_content::{Course, Resource};
use sanctum_render::{LessonHost, View};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;

/// Everything a surface needs to draw one lesson.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<&'a str>,
    pub module: ModuleSummary<'a>,
    pub lesson: LessonSummary<'a>,
    pub previous_lesson: Option<LessonLink<'a>>,
    pub next_lesson: Option<LessonLink<'a>>,
    pub resources: &'a [Resource],
    pub blocks: Vec<View>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

/// Lesson header fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub duration: &'a str,
    pub icon: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<&'a str>,
    /// One-based position in the course.
    pub number: usize,
    pub lesson_count: usize,
}

/// A navigation link to a neighbouring lesson.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonLink<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

impl<'a> From<LessonRef<'a>> for LessonLink<'a> {
    fn from(found: LessonRef<'a>) -> Self {
        Self {
            id: &found.lesson.id,
            title: &found.lesson.title,
        }
    }
}

/// Logs every validation issue as a warning.
///
/// # Errors
///
/// Returns `AppError::Validation` if `strict` is set and any issue was found.
pub fn check_content(course: &Course, strict: bool) -> Result<(), AppError> {
    let issues = validate_course(course);
    for issue in &issues {
        warn!(issue = %issue, "content issue");
    }
    if strict && !issues.is_empty() {
        return Err(AppError::Validation(issues.len()));
    }
    Ok(())
}

/// Renders the lesson `lesson_id` (or the first lesson) as a page.
///
/// # Errors
///
/// Returns `AppError::Content` if the lesson does not exist and
/// `AppError::EmptyCourse` if no lesson was requested and the course has none.
pub fn build_page<'a>(
    course: &'a Course,
    lesson_id: Option<&str>,
) -> Result<LessonPage<'a>, AppError> {
    let found = match lesson_id {
        Some(id) => course.lesson(id)?,
        None => course.first_lesson().ok_or(AppError::EmptyCourse)?,
    };
    let lesson = found.lesson;

    let host = LessonHost::with_system_defaults(Arc::new(lesson.clone()));
    let blocks = host.render();
    info!(
        lesson_id = %lesson.id,
        blocks = blocks.len(),
        "lesson rendered"
    );

    Ok(LessonPage {
        course: course.title.as_deref(),
        module: ModuleSummary {
            id: &found.module.id,
            title: &found.module.title,
        },
        lesson: LessonSummary {
            id: &lesson.id,
            title: &lesson.title,
            subtitle: &lesson.subtitle,
            duration: &lesson.duration,
            icon: &lesson.icon,
            banner_image: lesson.banner_image.as_deref(),
            number: found.position + 1,
            lesson_count: course.lesson_count(),
        },
        previous_lesson: course.previous_lesson(&lesson.id).map(LessonLink::from),
        next_lesson: course.next_lesson(&lesson.id).map(LessonLink::from),
        resources: &course.resources,
        blocks,
    })
}
