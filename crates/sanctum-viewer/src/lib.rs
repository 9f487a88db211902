//! Sanctum course viewer: the bridge between course files and a rendering
//! surface.

pub mod config;
pub mod error;
pub mod page;
