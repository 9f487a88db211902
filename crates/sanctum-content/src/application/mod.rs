//! Operations over loaded courses.

pub mod loader;
pub mod navigation;
pub mod validation;
