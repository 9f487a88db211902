//! Event-sourced state machine abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for widget state machines whose state is a fold over their events.
///
/// Commands record events; `apply` is the pure `(state, event) -> state`
/// transition, so replaying a session's events into a fresh machine
/// reproduces its state.
pub trait StateMachine: Send + Sync {
    /// The event type this machine produces and consumes.
    type Event: DomainEvent;

    /// Returns the session identifier.
    fn session_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the last drain.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears recorded events after they have been observed.
    fn clear_uncommitted_events(&mut self);
}
