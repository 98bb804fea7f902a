//! Validated address value produced by the parser.
//!
//! A [`ParsedAddress`] is only ever built from a fully validated literal, so
//! every instance holds the right number of in-range groups and a mask no
//! wider than the address.

use super::{IpVersion, ValidationError};
use crate::processing;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IPv4 or IPv6 address with its mask length.
#[derive(Eq, Debug, Clone, Hash, PartialEq)]
pub struct ParsedAddress {
    version: IpVersion,
    groups: Vec<u16>,
    mask_len: u8,
}

impl ParsedAddress {
    /// Assemble a value whose parts were already checked by the parser.
    pub(crate) fn from_validated(version: IpVersion, groups: Vec<u16>, mask_len: u8) -> Self {
        debug_assert_eq!(groups.len(), version.group_count());
        debug_assert!(groups.iter().all(|g| *g <= version.group_max()));
        debug_assert!(mask_len <= version.max_mask());
        ParsedAddress {
            version,
            groups,
            mask_len,
        }
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// Group values, 4 for IPv4 and 8 for IPv6.
    pub fn groups(&self) -> &[u16] {
        &self.groups
    }

    /// Mask length, the full address width when no mask was given.
    pub fn mask_len(&self) -> u8 {
        self.mask_len
    }

    /// Convert to the standard library address type, dropping the mask.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self.version {
            IpVersion::V4 => {
                let mut octets = [0u8; 4];
                for (octet, group) in octets.iter_mut().zip(&self.groups) {
                    *octet = *group as u8;
                }
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            IpVersion::V6 => {
                let mut segments = [0u16; 8];
                segments.copy_from_slice(&self.groups);
                IpAddr::V6(Ipv6Addr::from(segments))
            }
        }
    }
}

impl From<IpAddr> for ParsedAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => ParsedAddress::from_validated(
                IpVersion::V4,
                v4.octets().iter().map(|o| u16::from(*o)).collect(),
                IpVersion::V4.max_mask(),
            ),
            IpAddr::V6(v6) => ParsedAddress::from_validated(
                IpVersion::V6,
                v6.segments().to_vec(),
                IpVersion::V6.max_mask(),
            ),
        }
    }
}

impl FromStr for ParsedAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        processing::parse(s)
    }
}

impl std::fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", processing::to_string(self, None))
    }
}

impl Serialize for ParsedAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ParsedAddress {
    fn deserialize<D>(deserializer: D) -> Result<ParsedAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        processing::parse(&s)
            .map_err(|e| de::Error::custom(format!("invalid address '{}': {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let addr: ParsedAddress = "10.0.0.1/24".parse().unwrap();
        assert_eq!(addr.version(), IpVersion::V4);
        assert_eq!(addr.groups(), &[10, 0, 0, 1]);
        assert_eq!(addr.mask_len(), 24);
        assert!("10.0.0".parse::<ParsedAddress>().is_err());
    }

    #[test]
    fn test_display() {
        let addr: ParsedAddress = "010.000.000.001".parse().unwrap();
        assert_eq!(addr.to_string(), "10.0.0.1");
        let addr: ParsedAddress = "FE80::1/64".parse().unwrap();
        assert_eq!(addr.to_string(), "fe80:0:0:0:0:0:0:1/64");
    }

    #[test]
    fn test_to_ip_addr() {
        let addr: ParsedAddress = "192.168.1.42/24".parse().unwrap();
        assert_eq!(
            addr.to_ip_addr(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42))
        );
        let addr: ParsedAddress = "2001:db8::ff".parse().unwrap();
        assert_eq!(
            addr.to_ip_addr(),
            IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0xff))
        );
    }

    #[test]
    fn test_from_ip_addr() {
        let addr = ParsedAddress::from(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)));
        assert_eq!(addr, "10.1.2.3/32".parse().unwrap());
        let addr = ParsedAddress::from(IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(addr, "::1".parse().unwrap());
    }

    #[test]
    fn test_serde() {
        let addr: ParsedAddress = "10.0.0.0/8".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#""10.0.0.0/8""#);
        let back: ParsedAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        let err = serde_json::from_str::<ParsedAddress>(r#""10.0.0.0/33""#).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 32"));
    }
}
