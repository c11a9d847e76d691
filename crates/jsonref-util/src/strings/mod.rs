//! String utilities.

mod escape;

pub use escape::{escape_into, write_quoted};
