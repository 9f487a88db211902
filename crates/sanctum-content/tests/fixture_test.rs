//! Integration tests over the sample Levítico course.

use std::path::PathBuf;

use sanctum_content::application::loader::{load_course, parse_course_json};
use sanctum_content::application::validation::validate_course;
use sanctum_content::{BlockKind, ContentBlock, Course};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/levitico.yaml")
}

fn load_fixture() -> Course {
    load_course(&fixture_path()).unwrap()
}

#[test]
fn test_fixture_loads_modules_lessons_and_resources() {
    let course = load_fixture();

    assert_eq!(course.title.as_deref(), Some("Levítico y el Pentateuco"));
    assert_eq!(course.modules.len(), 3);
    assert_eq!(course.lesson_count(), 5);
    assert_eq!(course.resources.len(), 2);
    assert_eq!(course.resources[0].kind, "PDF");
}

#[test]
fn test_fixture_covers_every_block_kind() {
    let course = load_fixture();

    let kinds: Vec<Option<BlockKind>> = course
        .lessons()
        .flat_map(|r| r.lesson.blocks.iter())
        .map(ContentBlock::kind)
        .collect();

    for kind in BlockKind::ALL {
        assert!(kinds.contains(&Some(kind)), "fixture lacks {}", kind.tag());
    }
    assert!(kinds.contains(&None), "fixture lacks an unknown block");
}

#[test]
fn test_fixture_passes_validation() {
    let course = load_fixture();

    assert_eq!(validate_course(&course), Vec::new());
}

#[test]
fn test_fixture_survives_json_round_trip() {
    let course = load_fixture();

    let json = serde_json::to_string(&course).unwrap();
    let reparsed = parse_course_json(&json).unwrap();

    assert_eq!(reparsed, course);
}

#[test]
fn test_fixture_navigation_follows_course_order() {
    let course = load_fixture();

    let next = course.next_lesson("lesson5").unwrap();
    assert_eq!(next.lesson.id, "lesson6");
    assert_eq!(next.module.id, "module3");
    assert_eq!(course.previous_lesson("lesson2").unwrap().lesson.id, "lesson1");
}
