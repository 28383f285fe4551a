//! UI components.

pub mod page;
pub mod starfield;
