//! Pure word game logic.

pub mod events;
pub mod machine;
pub mod puzzle;
pub mod shuffle;
