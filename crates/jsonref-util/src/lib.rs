//! jsonref-util - helpers shared by the jsonref renderer.

pub mod json_size;
pub mod strings;

pub use json_size::string_size;
pub use strings::{escape_into, write_quoted};
