//! Request extractors.

pub mod json;
pub use json::{payload_from_value, JsonBody};
