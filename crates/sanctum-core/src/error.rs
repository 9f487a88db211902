//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a rendering surface addresses widgets incorrectly.
///
/// Content problems never surface here; rendering is infallible.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No block is mounted at the addressed position.
    #[error("no block mounted at index {0}")]
    BlockNotFound(usize),

    /// The action does not apply to the widget mounted at the position.
    #[error("action {action} does not apply to {widget} block at index {block}")]
    ActionMismatch {
        /// The addressed block position.
        block: usize,
        /// The widget kind mounted there.
        widget: &'static str,
        /// The action name that was dispatched.
        action: &'static str,
    },

    /// No running word game session has this identifier.
    #[error("word game session not found: {0}")]
    SessionNotFound(Uuid),

    /// An infrastructure error, such as a poisoned lock.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
