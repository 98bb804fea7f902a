//! Subnet mask expansion from a mask length.

use crate::models::{ParsedAddress, Radix};

/// Mask group values for `addr`: `mask_len` leading one bits over the full
/// address width, cut into the version's groups.
///
/// # Examples
/// ```
/// use ip_address_format::{mask_bits, parse};
/// let addr = parse("10.0.0.0/20").unwrap();
/// assert_eq!(mask_bits(&addr), vec![255, 255, 240, 0]);
/// ```
pub fn mask_bits(addr: &ParsedAddress) -> Vec<u16> {
    let version = addr.version();
    let bits = version.group_bits();

    (0..version.group_count())
        .map(|i| {
            let start = i as u8 * bits;
            let ones = addr.mask_len().saturating_sub(start).min(bits);
            let value = ((1u32 << ones) - 1) << (bits - ones);
            value as u16
        })
        .collect()
}

/// Render the mask of `addr` per group.
///
/// Base 2 gives every group at full group width (`11111111`, `00000000`);
/// any other radix writes the group value without padding.
pub fn render_mask(addr: &ParsedAddress, radix: Radix) -> Vec<String> {
    let width = if radix == Radix::BINARY {
        addr.version().group_bits() as usize
    } else {
        0
    };
    log::trace!("render_mask({addr:?}, {radix})");

    mask_bits(addr)
        .into_iter()
        .map(|group| format!("{:0>width$}", radix.format(u32::from(group))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse;

    #[test]
    fn test_mask_bits_v4() {
        let mask = |raw: &str| mask_bits(&parse(raw).unwrap());
        assert_eq!(mask("10.0.0.0/0"), vec![0, 0, 0, 0]);
        assert_eq!(mask("10.0.0.0/8"), vec![255, 0, 0, 0]);
        assert_eq!(mask("10.0.0.0/16"), vec![255, 255, 0, 0]);
        assert_eq!(mask("10.0.0.0/25"), vec![255, 255, 255, 128]);
        assert_eq!(mask("10.0.0.0/31"), vec![255, 255, 255, 254]);
        assert_eq!(mask("10.0.0.0"), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_mask_bits_v6() {
        let mask = |raw: &str| mask_bits(&parse(raw).unwrap());
        assert_eq!(
            mask("fe80::/64"),
            vec![0xffff, 0xffff, 0xffff, 0xffff, 0, 0, 0, 0]
        );
        assert_eq!(mask("::/1"), vec![0x8000, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(mask("::/127")[7], 0xfffe);
        assert_eq!(mask("::"), vec![0xffff; 8]);
    }

    #[test]
    fn test_render_mask() {
        let addr = parse("10.0.0.0/24").unwrap();
        assert_eq!(
            render_mask(&addr, Radix::DECIMAL),
            vec!["255", "255", "255", "0"]
        );
        assert_eq!(
            render_mask(&addr, Radix::BINARY),
            vec!["11111111", "11111111", "11111111", "00000000"]
        );
        assert_eq!(
            render_mask(&addr, Radix::HEXADECIMAL),
            vec!["ff", "ff", "ff", "0"]
        );

        let addr = parse("2001:db8::/36").unwrap();
        assert_eq!(
            render_mask(&addr, Radix::HEXADECIMAL),
            vec!["ffff", "ffff", "f000", "0", "0", "0", "0", "0"]
        );
        assert_eq!(render_mask(&addr, Radix::BINARY)[2], "1111000000000000");
    }
}
