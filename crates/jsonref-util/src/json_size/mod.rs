//! JSON size calculation utilities.
//!
//! Used to size output buffers before rendering.

mod json;

pub use json::string_size;
