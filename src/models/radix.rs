//! Numeric base used when writing groups out.

use super::{IpVersion, RadixError};
use std::fmt;

/// A numeric base in the range `2..=36`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Largest base that still has a single character digit per value.
    pub const MAX: u32 = 36;

    /// Create a [`Radix`], rejecting bases that cannot be written with `0-9a-z`.
    ///
    /// # Examples
    /// ```
    /// use ip_address_format::Radix;
    /// assert_eq!(Radix::new(16).unwrap(), Radix::HEXADECIMAL);
    /// assert!(Radix::new(1).is_err());
    /// ```
    pub fn new(base: u32) -> Result<Radix, RadixError> {
        if (2..=Self::MAX).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(RadixError::Unsupported { base })
        }
    }

    /// The base as a plain number.
    pub const fn base(self) -> u32 {
        self.0
    }

    /// Write `value` in this base, lowercase, without padding.
    pub fn format(self, value: u32) -> String {
        if value == 0 {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        let mut rest = value;
        while rest > 0 {
            // from_digit only fails for digit >= radix, which the modulo rules out
            if let Some(c) = char::from_digit(rest % self.0, self.0) {
                digits.push(c);
            }
            rest /= self.0;
        }
        digits.iter().rev().collect()
    }

    /// Width every group is padded to for `version`: the digit count of the
    /// largest group value.
    pub fn pad_width(self, version: IpVersion) -> usize {
        self.format(u32::from(version.group_max())).len()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{}", self.0)
    }
}
