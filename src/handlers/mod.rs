//! HTTP handlers for record create and list.

pub mod records;
pub use records::*;
