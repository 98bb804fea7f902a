//! Per-radix view of an address and its mask.
//!
//! This is the display a front end shows for each parsed input: one row per
//! radix with the address groups next to the mask groups.

use super::terminal::format_field;
use crate::models::{IpVersion, ParsedAddress, Radix};
use crate::processing::{render, render_mask, to_string};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Address and mask groups rendered in one radix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub radix: u32,
    pub address: Vec<String>,
    pub mask: Vec<String>,
}

/// Everything a display needs for one parsed address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressTable {
    pub canonical: String,
    pub version: IpVersion,
    pub groups: Vec<u16>,
    pub mask_len: u8,
    pub rows: Vec<TableRow>,
}

impl AddressTable {
    /// Build the rows for `addr` in each of `radixes`.
    ///
    /// `padded` applies to the address groups only; binary mask groups are
    /// always full width.
    pub fn new(addr: &ParsedAddress, radixes: &[Radix], padded: bool) -> AddressTable {
        let rows = radixes
            .iter()
            .map(|radix| TableRow {
                radix: radix.base(),
                address: render(addr, *radix, padded),
                mask: render_mask(addr, *radix),
            })
            .collect();

        AddressTable {
            canonical: to_string(addr, None),
            version: addr.version(),
            groups: addr.groups().to_vec(),
            mask_len: addr.mask_len(),
            rows,
        }
    }

    /// Widest rendered group, used to align columns.
    fn column_width(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.address.iter().chain(row.mask.iter()))
            .map(|group| group.len())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for AddressTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.column_width();
        let separator = self.version.separator().to_string();
        writeln!(
            f,
            "{} {} (mask /{})",
            self.version.to_string().as_str().bold(),
            self.canonical,
            self.mask_len
        )?;
        for row in &self.rows {
            let address = row
                .address
                .iter()
                .map(|group| format_field(group, width))
                .join(&separator);
            let mask = row
                .mask
                .iter()
                .map(|group| format_field(group, width))
                .join(&separator);
            writeln!(f, "  base{:<2} addr {address}", row.radix)?;
            writeln!(f, "  base{:<2} mask {mask}", row.radix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse;

    #[test]
    fn test_table_rows() {
        let addr = parse("10.0.0.1/24").unwrap();
        let table = AddressTable::new(
            &addr,
            &[Radix::BINARY, Radix::DECIMAL, Radix::HEXADECIMAL],
            false,
        );
        assert_eq!(table.canonical, "10.0.0.1/24");
        assert_eq!(table.version, IpVersion::V4);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].radix, 2);
        assert_eq!(table.rows[0].address, vec!["1010", "0", "0", "1"]);
        assert_eq!(
            table.rows[0].mask,
            vec!["11111111", "11111111", "11111111", "00000000"]
        );
        assert_eq!(table.rows[1].mask, vec!["255", "255", "255", "0"]);
        assert_eq!(table.rows[2].address, vec!["a", "0", "0", "1"]);
    }

    #[test]
    fn test_table_display() {
        colored::control::set_override(false);
        let addr = parse("1.2.3.4/8").unwrap();
        let table = AddressTable::new(&addr, &[Radix::DECIMAL], true);
        assert_eq!(
            table.to_string(),
            "IPv4 1.2.3.4/8 (mask /8)\n  base10 addr 001.002.003.004\n  base10 mask 255.  0.  0.  0\n"
        );
    }

    #[test]
    fn test_table_json() {
        let addr = parse("::1").unwrap();
        let table = AddressTable::new(&addr, &[Radix::HEXADECIMAL], false);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["version"], "V6");
        assert_eq!(json["mask_len"], 128);
        assert_eq!(json["canonical"], "0:0:0:0:0:0:0:1");
        assert_eq!(json["rows"][0]["mask"][7], "ffff");
    }
}
