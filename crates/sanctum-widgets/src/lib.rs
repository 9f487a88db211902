//! Sanctum — widget state machines.
//!
//! Each stateful widget owns one of these structs. Transitions are plain
//! methods, independent of any rendering surface, so the interaction rules
//! can be exercised directly.

pub mod flip;
pub mod quiz;
pub mod selection;
pub mod slideshow;
pub mod tracked;

pub use flip::FlipDeck;
pub use quiz::{Feedback, OptionStyle, QuizState};
pub use selection::SingleSelection;
pub use slideshow::SlideshowState;
pub use tracked::Tracked;
