//! Content model types.

pub mod blocks;
pub mod course;
pub mod digest;
