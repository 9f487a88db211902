//! Session runtime around the word game machine.

pub mod countdown;
pub mod session;
