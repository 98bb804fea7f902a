//! Writing address groups out in a given radix.

use crate::models::{ParsedAddress, Radix};
use itertools::Itertools;

/// Render each group of `addr` in `radix`.
///
/// With `padded`, every group is left padded with `0` to the digit count of
/// the largest group value for the address version (8/3/2 for IPv4 and
/// 16/5/4 for IPv6 in base 2/10/16).
///
/// # Examples
/// ```
/// use ip_address_format::{parse, render, Radix};
/// let addr = parse("10.0.0.1").unwrap();
/// assert_eq!(render(&addr, Radix::HEXADECIMAL, true), vec!["0a", "00", "00", "01"]);
/// ```
pub fn render(addr: &ParsedAddress, radix: Radix, padded: bool) -> Vec<String> {
    let width = if padded {
        radix.pad_width(addr.version())
    } else {
        0
    };
    log::trace!("render({addr:?}, {radix}, width={width})");

    addr.groups()
        .iter()
        .map(|group| format!("{:0>width$}", radix.format(u32::from(*group))))
        .collect()
}

/// Canonical text of `addr`: groups in `radix` (the version default when
/// `None`) joined with the version separator, no padding and no `::`
/// compression.
///
/// A mask shorter than the address width is appended as `/len`.
pub fn to_string(addr: &ParsedAddress, radix: Option<Radix>) -> String {
    let version = addr.version();
    let radix = radix.unwrap_or(version.default_radix());
    let mut text = render(addr, radix, false)
        .iter()
        .join(&version.separator().to_string());
    if addr.mask_len() < version.max_mask() {
        text.push_str(&format!("/{}", addr.mask_len()));
    }
    text
}
