//! Lesson lookup and course-order navigation.

use crate::domain::course::{Course, Lesson, Module};
use crate::error::ContentError;

/// A lesson located within its course.
#[derive(Debug, Clone, Copy)]
pub struct LessonRef<'a> {
    /// The module containing the lesson.
    pub module: &'a Module,
    /// The lesson itself.
    pub lesson: &'a Lesson,
    /// Index of the module within the course.
    pub module_index: usize,
    /// Index of the lesson within its module.
    pub lesson_index: usize,
    /// Index of the lesson in course order across all modules.
    pub position: usize,
}

impl Course {
    /// Iterates lessons in course order, module by module.
    pub fn lessons(&self) -> impl Iterator<Item = LessonRef<'_>> {
        self.modules
            .iter()
            .enumerate()
            .flat_map(|(module_index, module)| {
                module
                    .lessons
                    .iter()
                    .enumerate()
                    .map(move |(lesson_index, lesson)| (module_index, module, lesson_index, lesson))
            })
            .enumerate()
            .map(
                |(position, (module_index, module, lesson_index, lesson))| LessonRef {
                    module,
                    lesson,
                    module_index,
                    lesson_index,
                    position,
                },
            )
    }

    /// Total number of lessons across all modules.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// The first lesson of the course, if any.
    #[must_use]
    pub fn first_lesson(&self) -> Option<LessonRef<'_>> {
        self.lessons().next()
    }

    /// Finds a lesson by identifier.
    #[must_use]
    pub fn find_lesson(&self, lesson_id: &str) -> Option<LessonRef<'_>> {
        self.lessons().find(|r| r.lesson.id == lesson_id)
    }

    /// Looks up a lesson by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::LessonNotFound` if no lesson has the identifier.
    pub fn lesson(&self, lesson_id: &str) -> Result<LessonRef<'_>, ContentError> {
        self.find_lesson(lesson_id)
            .ok_or_else(|| ContentError::LessonNotFound(lesson_id.to_owned()))
    }

    /// The lesson after `lesson_id` in course order, crossing module
    /// boundaries. `None` for the last lesson or an unknown identifier.
    #[must_use]
    pub fn next_lesson(&self, lesson_id: &str) -> Option<LessonRef<'_>> {
        let current = self.find_lesson(lesson_id)?;
        self.lessons().nth(current.position + 1)
    }

    /// The lesson before `lesson_id` in course order, crossing module
    /// boundaries. `None` for the first lesson or an unknown identifier.
    #[must_use]
    pub fn previous_lesson(&self, lesson_id: &str) -> Option<LessonRef<'_>> {
        let current = self.find_lesson(lesson_id)?;
        let previous = current.position.checked_sub(1)?;
        self.lessons().nth(previous)
    }
}
