// cargo watch -x 'fmt' -x 'test'

//! Parse, validate and reformat IPv4/IPv6 address literals with an optional
//! CIDR mask.
//!
//! ```
//! use ip_address_format::{parse, render_mask, to_string, Radix};
//! let addr = parse("10.0.0.0/24").unwrap();
//! assert_eq!(render_mask(&addr, Radix::DECIMAL), vec!["255", "255", "255", "0"]);
//! assert_eq!(to_string(&addr, None), "10.0.0.0/24");
//! ```

pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{ErrorKind, IpVersion, ParsedAddress, Radix, RadixError, ValidationError};
pub use processing::{mask_bits, parse, render, render_mask, to_string};
