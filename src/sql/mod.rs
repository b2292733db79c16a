//! Statement builder: identifiers from entity definitions only, values as parameters.

mod builder;
pub use builder::*;
