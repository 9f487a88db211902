//! Authoring checks over a loaded course.
//!
//! Validation reports problems; it never alters content and the renderer
//! never calls it. Callers decide whether issues are warnings or fatal.

use std::collections::HashSet;
use std::fmt;

use crate::domain::blocks::ContentBlock;
use crate::domain::course::{Course, Lesson};

/// What is wrong with a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Two modules share an identifier.
    DuplicateModuleId(String),
    /// Two lessons share an identifier.
    DuplicateLessonId(String),
    /// A quiz does not have exactly one correct option.
    QuizCorrectCount(usize),
    /// A quiz has no options to choose from.
    QuizWithoutOptions,
    /// A slideshow has no slides.
    EmptySlideshow,
    /// A heading level outside 2..=4.
    HeadingLevel(u8),
    /// A table row whose width differs from the header count.
    TableRowWidth {
        /// Row index within the table body.
        row: usize,
        /// Cells in the row.
        cells: usize,
        /// Header count.
        headers: usize,
    },
    /// A word game with nothing to solve.
    EmptyWordList,
    /// A word game word that contains no letters.
    WordWithoutLetters(usize),
    /// Two debate postures share an identifier.
    DuplicatePostureId(String),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::DuplicateModuleId(id) => write!(f, "duplicate module id {id}"),
            IssueKind::DuplicateLessonId(id) => write!(f, "duplicate lesson id {id}"),
            IssueKind::QuizCorrectCount(n) => {
                write!(f, "quiz has {n} correct options, expected exactly one")
            }
            IssueKind::QuizWithoutOptions => write!(f, "quiz has no options"),
            IssueKind::EmptySlideshow => write!(f, "slideshow has no slides"),
            IssueKind::HeadingLevel(level) => write!(f, "heading level {level} outside 2..=4"),
            IssueKind::TableRowWidth {
                row,
                cells,
                headers,
            } => write!(f, "table row {row} has {cells} cells for {headers} headers"),
            IssueKind::EmptyWordList => write!(f, "word game has no words"),
            IssueKind::WordWithoutLetters(index) => {
                write!(f, "word game word {index} has no letters")
            }
            IssueKind::DuplicatePostureId(id) => write!(f, "duplicate debate posture id {id}"),
        }
    }
}

/// One validation finding, located in the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// The lesson containing the problem, if it is inside a lesson.
    pub lesson_id: Option<String>,
    /// The block position within the lesson, if it is inside a block.
    pub block: Option<usize>,
    pub kind: IssueKind,
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lesson_id, self.block) {
            (Some(lesson), Some(block)) => write!(f, "{lesson}[{block}]: {}", self.kind),
            (Some(lesson), None) => write!(f, "{lesson}: {}", self.kind),
            _ => write!(f, "course: {}", self.kind),
        }
    }
}

/// Checks a course for authoring mistakes.
#[must_use]
pub fn validate_course(course: &Course) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let mut module_ids = HashSet::new();
    for module in &course.modules {
        if !module_ids.insert(module.id.as_str()) {
            issues.push(ContentIssue {
                lesson_id: None,
                block: None,
                kind: IssueKind::DuplicateModuleId(module.id.clone()),
            });
        }
    }

    let mut lesson_ids = HashSet::new();
    for lesson in course.modules.iter().flat_map(|m| &m.lessons) {
        if !lesson_ids.insert(lesson.id.as_str()) {
            issues.push(ContentIssue {
                lesson_id: Some(lesson.id.clone()),
                block: None,
                kind: IssueKind::DuplicateLessonId(lesson.id.clone()),
            });
        }
        validate_lesson(lesson, &mut issues);
    }

    issues
}

fn validate_lesson(lesson: &Lesson, issues: &mut Vec<ContentIssue>) {
    for (index, block) in lesson.blocks.iter().enumerate() {
        for kind in block_issues(block) {
            issues.push(ContentIssue {
                lesson_id: Some(lesson.id.clone()),
                block: Some(index),
                kind,
            });
        }
    }
}

fn block_issues(block: &ContentBlock) -> Vec<IssueKind> {
    let mut found = Vec::new();
    match block {
        ContentBlock::Heading { level, .. } => {
            if !(2..=4).contains(level) {
                found.push(IssueKind::HeadingLevel(*level));
            }
        }
        ContentBlock::Quiz { options, .. } => {
            if options.is_empty() {
                found.push(IssueKind::QuizWithoutOptions);
            } else {
                let correct = options.iter().filter(|o| o.is_correct).count();
                if correct != 1 {
                    found.push(IssueKind::QuizCorrectCount(correct));
                }
            }
        }
        ContentBlock::Slideshow { items } => {
            if items.is_empty() {
                found.push(IssueKind::EmptySlideshow);
            }
        }
        ContentBlock::Table { headers, rows } => {
            for (row, cells) in rows.iter().enumerate() {
                if cells.len() != headers.len() {
                    found.push(IssueKind::TableRowWidth {
                        row,
                        cells: cells.len(),
                        headers: headers.len(),
                    });
                }
            }
        }
        ContentBlock::WordGame(game) => {
            let words = game.words();
            if words.is_empty() {
                found.push(IssueKind::EmptyWordList);
            }
            for (index, word) in words.iter().enumerate() {
                if word.chars().all(char::is_whitespace) {
                    found.push(IssueKind::WordWithoutLetters(index));
                }
            }
        }
        ContentBlock::Debate { postures } => {
            let mut ids = HashSet::new();
            for posture in postures {
                if !ids.insert(posture.id.as_str()) {
                    found.push(IssueKind::DuplicatePostureId(posture.id.clone()));
                }
            }
        }
        ContentBlock::Paragraph { .. }
        | ContentBlock::Timeline { .. }
        | ContentBlock::Flipcards { .. }
        | ContentBlock::Note { .. }
        | ContentBlock::Image { .. }
        | ContentBlock::Video { .. }
        | ContentBlock::Accordion { .. }
        | ContentBlock::List { .. }
        | ContentBlock::Unknown => {}
    }
    found
}
