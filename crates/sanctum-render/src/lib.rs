//! Sanctum — block dispatcher, view tree and lesson host.
//!
//! Maps content blocks to serializable [`View`]s, accepts [`Action`]s from a
//! rendering surface, and keeps the widget state of a mounted lesson.

pub mod action;
pub mod dispatch;
pub mod host;
pub mod markdown;
pub mod state;
pub mod view;

pub use action::{Action, WidgetEvent};
pub use dispatch::render_block;
pub use host::LessonHost;
pub use markdown::Span;
pub use state::WidgetState;
pub use view::View;
