//! Output formatting for parsed addresses.
//!
//! - [`table`] - per-radix rows of address and mask groups
//! - [`terminal`] - terminal field and error formatting

mod table;
mod terminal;

pub use table::{AddressTable, TableRow};
pub use terminal::{format_error, format_field};
