//! Sanctum — the letter-scramble word game.
//!
//! The domain layer is a pure, event-sourced state machine (puzzle, shuffle,
//! game phases). The application layer wraps it in a session that owns the
//! one-second countdown task.

pub mod application;
pub mod domain;

pub use application::countdown::{Countdown, CountdownTick};
pub use application::session::{SharedRng, WordGameSession};
pub use domain::events::{WordGameEvent, WordGameEventKind};
pub use domain::machine::{GamePhase, WordGame, WordGameConfig};
pub use domain::puzzle::{Placement, Puzzle, Slot, Tile};
