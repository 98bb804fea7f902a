//! Address processing logic.
//!
//! - [`parse`] - validation of raw address literals
//! - [`render`] - groups and canonical text in a given radix
//! - [`mask`] - subnet mask expansion

mod mask;
mod parse;
mod render;

// Re-export public functions
pub use mask::{mask_bits, render_mask};
pub use parse::parse;
pub use render::{render, to_string};
