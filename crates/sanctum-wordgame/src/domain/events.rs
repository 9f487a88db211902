//! Domain events for the word game.

use sanctum_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Event type name for `GameStarted`.
pub const GAME_STARTED_EVENT_TYPE: &str = "word_game.game_started";
/// Event type name for `WordPresented`.
pub const WORD_PRESENTED_EVENT_TYPE: &str = "word_game.word_presented";
/// Event type name for `TilePlaced`.
pub const TILE_PLACED_EVENT_TYPE: &str = "word_game.tile_placed";
/// Event type name for `TileRejected`.
pub const TILE_REJECTED_EVENT_TYPE: &str = "word_game.tile_rejected";
/// Event type name for `WordCompleted`.
pub const WORD_COMPLETED_EVENT_TYPE: &str = "word_game.word_completed";
/// Event type name for `ClockTicked`.
pub const CLOCK_TICKED_EVENT_TYPE: &str = "word_game.clock_ticked";
/// Event type name for `TimeExpired`.
pub const TIME_EXPIRED_EVENT_TYPE: &str = "word_game.time_expired";
/// Event type name for `GameWon`.
pub const GAME_WON_EVENT_TYPE: &str = "word_game.game_won";

/// Emitted when a game starts or restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStarted {
    /// Seconds on the clock at the start.
    pub time_limit_secs: u32,
    /// Number of words in the round.
    pub word_count: usize,
}

/// Emitted when a word is laid out with freshly shuffled tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPresented {
    /// Position of the word in the configured list.
    pub word_index: usize,
    /// Tile letters in shuffled order.
    pub tiles: Vec<char>,
}

/// Emitted when a tile fills the next empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlaced {
    pub tile: usize,
    pub slot: usize,
    pub letter: char,
}

/// Emitted when a tile was clicked out of order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRejected {
    pub tile: usize,
    pub letter: char,
    pub expected: char,
}

/// Emitted when every slot of a non-final word is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCompleted {
    pub word_index: usize,
}

/// Emitted once per elapsed second while time remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTicked {
    /// Seconds left after this tick.
    pub time_left: u32,
}

/// Emitted when the clock reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeExpired {
    /// Index of the word that was on screen.
    pub word_index: usize,
}

/// Emitted when the final word is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWon {
    /// Seconds left on the clock at victory.
    pub time_left: u32,
}

/// Event payload variants for the word game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordGameEventKind {
    /// A game has started.
    GameStarted(GameStarted),
    /// A word has been laid out.
    WordPresented(WordPresented),
    /// A tile has been placed.
    TilePlaced(TilePlaced),
    /// A tile click was rejected.
    TileRejected(TileRejected),
    /// A word has been completed.
    WordCompleted(WordCompleted),
    /// The clock ticked down.
    ClockTicked(ClockTicked),
    /// The clock ran out.
    TimeExpired(TimeExpired),
    /// The last word was completed.
    GameWon(GameWon),
}

impl WordGameEventKind {
    /// The event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            WordGameEventKind::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            WordGameEventKind::WordPresented(_) => WORD_PRESENTED_EVENT_TYPE,
            WordGameEventKind::TilePlaced(_) => TILE_PLACED_EVENT_TYPE,
            WordGameEventKind::TileRejected(_) => TILE_REJECTED_EVENT_TYPE,
            WordGameEventKind::WordCompleted(_) => WORD_COMPLETED_EVENT_TYPE,
            WordGameEventKind::ClockTicked(_) => CLOCK_TICKED_EVENT_TYPE,
            WordGameEventKind::TimeExpired(_) => TIME_EXPIRED_EVENT_TYPE,
            WordGameEventKind::GameWon(_) => GAME_WON_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the word game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGameEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: WordGameEventKind,
}

impl DomainEvent for WordGameEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("WordGameEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctum_core::clock::Clock;
    use sanctum_test_support::fixed_clock;
    use uuid::Uuid;

    fn event(kind: WordGameEventKind) -> WordGameEvent {
        WordGameEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                session_id: Uuid::new_v4(),
                sequence_number: 1,
                occurred_at: fixed_clock().now(),
            },
            kind,
        }
    }

    #[test]
    fn test_event_type_matches_payload_variant() {
        let started = event(WordGameEventKind::GameStarted(GameStarted {
            time_limit_secs: 90,
            word_count: 5,
        }));
        let won = event(WordGameEventKind::GameWon(GameWon { time_left: 12 }));

        assert_eq!(started.event_type(), GAME_STARTED_EVENT_TYPE);
        assert_eq!(won.event_type(), GAME_WON_EVENT_TYPE);
        assert_eq!(started.metadata().event_type, "word_game.game_started");
    }

    #[test]
    fn test_payload_deserializes_back_to_kind() {
        // Arrange
        let placed = event(WordGameEventKind::TilePlaced(TilePlaced {
            tile: 3,
            slot: 0,
            letter: 'P',
        }));

        // Act
        let payload = placed.to_payload();
        let kind: WordGameEventKind = serde_json::from_value(payload.clone()).unwrap();

        // Assert
        assert_eq!(kind, placed.kind);
        assert_eq!(payload["TilePlaced"]["letter"], "P");
    }
}
