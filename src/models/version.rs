//! IP version and its per-version constants.

use super::Radix;
use serde::Serialize;
use std::fmt;

/// The two address families understood by the parser.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    /// Dotted decimal, 4 groups of 8 bits.
    V4,
    /// Colon hex, 8 groups of 16 bits.
    V6,
}

impl IpVersion {
    /// Number of groups in a complete address.
    pub const fn group_count(self) -> usize {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 8,
        }
    }

    /// Bits carried by one group.
    pub const fn group_bits(self) -> u8 {
        match self {
            IpVersion::V4 => 8,
            IpVersion::V6 => 16,
        }
    }

    /// Largest value a single group may hold.
    pub const fn group_max(self) -> u16 {
        match self {
            IpVersion::V4 => u8::MAX as u16,
            IpVersion::V6 => u16::MAX,
        }
    }

    /// Address width in bits, which is also the largest mask length.
    pub const fn max_mask(self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }

    /// Group separator.
    pub const fn separator(self) -> char {
        match self {
            IpVersion::V4 => '.',
            IpVersion::V6 => ':',
        }
    }

    /// Radix groups are written in when none is requested.
    pub const fn default_radix(self) -> Radix {
        match self {
            IpVersion::V4 => Radix::DECIMAL,
            IpVersion::V6 => Radix::HEXADECIMAL,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}
