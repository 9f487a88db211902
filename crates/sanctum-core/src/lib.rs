//! Sanctum Core — shared abstractions.
//!
//! This crate defines the traits and types that the content, widget,
//! word game and rendering crates depend on. It contains no rendering code.

pub mod clock;
pub mod error;
pub mod event;
pub mod machine;
pub mod rng;
