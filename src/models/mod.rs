//! Domain models for address parsing and formatting.
//!
//! - [`ParsedAddress`] - validated IPv4/IPv6 address with mask length
//! - [`IpVersion`] - address family and its layout constants
//! - [`Radix`] - numeric base used to write groups
//! - [`ValidationError`] and [`RadixError`] - error types

mod address;
mod error;
mod radix;
mod version;

// Re-export public types
pub use address::ParsedAddress;
pub use error::{ErrorKind, RadixError, ValidationError};
pub use radix::Radix;
pub use version::IpVersion;
