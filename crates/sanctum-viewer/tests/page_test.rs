//! Page rendering over the sample Levítico course.

use std::path::PathBuf;

use sanctum_content::application::loader::load_course;
use sanctum_content::{ContentBlock, Course, QuizOption};
use sanctum_viewer::error::AppError;
use sanctum_viewer::page::{build_page, check_content};

fn course() -> Course {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/levitico.yaml");
    load_course(&path).unwrap()
}

#[test]
fn test_default_page_is_first_lesson() {
    // Arrange
    let course = course();

    // Act
    let page = build_page(&course, None).unwrap();

    // Assert
    assert_eq!(page.lesson.id, "lesson1");
    assert_eq!(page.module.id, "module1");
    assert_eq!(page.lesson.number, 1);
    assert!(page.previous_lesson.is_none());
    assert_eq!(page.next_lesson.as_ref().unwrap().id, "lesson2");
}

#[test]
fn test_page_json_has_surface_shape() {
    // Arrange
    let course = course();

    // Act
    let page = build_page(&course, Some("lesson7")).unwrap();
    let json = serde_json::to_value(&page).unwrap();

    // Assert
    assert_eq!(json["lesson"]["id"], "lesson7");
    assert_eq!(json["previousLesson"]["id"], "lesson6");
    assert!(json["nextLesson"].is_null());
    assert_eq!(json["resources"].as_array().unwrap().len(), 2);
    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[1]["widget"], "wordGame");
    assert_eq!(blocks[1]["phase"], "idle");
    assert_eq!(blocks[1]["timeLeft"], 90);
    assert_eq!(blocks[3]["widget"], "empty");
}

#[test]
fn test_unknown_lesson_is_a_content_error() {
    let course = course();

    let result = build_page(&course, Some("lesson99"));

    assert!(matches!(result, Err(AppError::Content(_))));
}

#[test]
fn test_fixture_passes_strict_check() {
    assert!(check_content(&course(), true).is_ok());
}

#[test]
fn test_strict_check_rejects_ambiguous_quiz() {
    // Arrange
    let mut course = course();
    course.modules[1].lessons[1].blocks[1] = ContentBlock::Quiz {
        question: "¿Cuál?".to_owned(),
        options: vec![
            QuizOption {
                text: "A".to_owned(),
                is_correct: true,
            },
            QuizOption {
                text: "B".to_owned(),
                is_correct: true,
            },
        ],
        explanation: None,
    };

    // Act & Assert
    assert!(check_content(&course, false).is_ok());
    assert!(matches!(
        check_content(&course, true),
        Err(AppError::Validation(1))
    ));
}
