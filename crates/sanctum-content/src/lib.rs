//! Sanctum — course content.
//!
//! Responsible for the typed course tree (modules, lessons, content blocks),
//! loading it from JSON or YAML, validating authored content, navigating
//! between lessons, and content identity digests.

pub mod application;
pub mod domain;
pub mod error;

pub use domain::blocks::{
    AccordionItem, BlockKind, ContentBlock, FlipCardItem, Posture, QuizOption, Slide,
    TimelineItem, WordGameBlock,
};
pub use domain::course::{Course, Lesson, Module, Resource};
pub use domain::digest::ContentDigest;
pub use error::ContentError;
