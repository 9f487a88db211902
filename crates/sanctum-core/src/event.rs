//! Domain event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Metadata attached to every widget event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name for logging and routing.
    pub event_type: String,
    /// Session (state machine instance) this event belongs to.
    pub session_id: Uuid,
    /// Monotonically increasing version within the session stream.
    pub sequence_number: i64,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Metadata for the next event of a session, stamped by `clock`.
    #[must_use]
    pub fn new(
        event_type: &str,
        session_id: Uuid,
        sequence_number: i64,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_owned(),
            session_id,
            sequence_number,
            occurred_at: clock.now(),
        }
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    #[test]
    fn test_new_metadata_gets_fresh_id_and_timestamp() {
        // Arrange
        let session_id = Uuid::new_v4();
        let before = Utc::now();

        // Act
        let first = EventMetadata::new("word_game.game_started", session_id, 1, &SystemClock);
        let second = EventMetadata::new("word_game.word_presented", session_id, 2, &SystemClock);

        // Assert
        assert_ne!(first.event_id, second.event_id);
        assert_eq!(first.session_id, session_id);
        assert_eq!(second.sequence_number, 2);
        assert!(first.occurred_at >= before);
    }
}
