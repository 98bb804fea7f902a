//! Address literal parsing and validation.
//!
//! Checks run in a fixed order and the first failure is returned. Nothing is
//! assembled until every check has passed.

use crate::models::{IpVersion, ParsedAddress, ValidationError};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Characters outside `[0-9./]`.
static V4_INVALID_CHAR: OnceLock<Regex> = OnceLock::new();
/// Characters outside `[0-9a-fA-F:/]`.
static V6_INVALID_CHAR: OnceLock<Regex> = OnceLock::new();

fn invalid_char_regex(version: IpVersion) -> &'static Regex {
    match version {
        IpVersion::V4 => V4_INVALID_CHAR
            .get_or_init(|| Regex::new(r"[^0-9./]").expect("Invalid Regex")),
        IpVersion::V6 => V6_INVALID_CHAR
            .get_or_init(|| Regex::new(r"[^0-9a-fA-F:/]").expect("Invalid Regex")),
    }
}

/// Parse an IPv4 or IPv6 literal with an optional `/mask` suffix.
///
/// IPv6 `::` compression is expanded. The mask defaults to the full address
/// width.
///
/// # Examples
/// ```
/// use ip_address_format::{parse, IpVersion};
/// let addr = parse("1::1/64").unwrap();
/// assert_eq!(addr.version(), IpVersion::V6);
/// assert_eq!(addr.groups(), &[1, 0, 0, 0, 0, 0, 0, 1]);
/// assert_eq!(addr.mask_len(), 64);
/// ```
pub fn parse(raw: &str) -> Result<ParsedAddress, ValidationError> {
    log::debug!("parse({raw})");
    let result = parse_address(raw);
    match &result {
        Ok(addr) => log::debug!("parse({raw}) -> {addr}"),
        Err(e) => log::debug!("parse({raw}) rejected {:?}: {e}", e.kind()),
    }
    result
}

fn parse_address(raw: &str) -> Result<ParsedAddress, ValidationError> {
    let version = detect_version(raw)?;
    check_characters(raw, version)?;
    let (addr, mask_len) = split_mask(raw, version)?;

    let (text, compressed) = match version {
        IpVersion::V4 => {
            if addr.contains("..") {
                return Err(ValidationError::DoubleSeparator);
            }
            (Cow::Borrowed(addr), false)
        }
        IpVersion::V6 => expand_compression(addr)?,
    };

    let segments: Vec<&str> = text.split(version.separator()).collect();
    log::trace!("{version} segments={:?}", segments);
    if segments.len() != version.group_count() {
        return Err(ValidationError::WrongGroupCount {
            expected: version.group_count(),
            found: segments.len(),
            version,
        });
    }

    let groups = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| parse_group(i + 1, segment, version, compressed))
        .collect::<Result<Vec<u16>, _>>()?;

    Ok(ParsedAddress::from_validated(version, groups, mask_len))
}

fn detect_version(raw: &str) -> Result<IpVersion, ValidationError> {
    if raw.contains('.') {
        Ok(IpVersion::V4)
    } else if raw.contains(':') {
        Ok(IpVersion::V6)
    } else {
        Err(ValidationError::AmbiguousFormat {
            raw: raw.to_string(),
        })
    }
}

fn check_characters(raw: &str, version: IpVersion) -> Result<(), ValidationError> {
    match invalid_char_regex(version).find(raw) {
        Some(m) => Err(ValidationError::InvalidCharacter {
            character: m.as_str().chars().next().unwrap_or_default(),
            position: raw[..m.start()].chars().count() + 1,
            version,
        }),
        None => Ok(()),
    }
}

/// Split off the mask, returning the address part and the mask length.
fn split_mask(raw: &str, version: IpVersion) -> Result<(&str, u8), ValidationError> {
    match raw.split_once('/') {
        None => Ok((raw, version.max_mask())),
        Some((_, mask)) if mask.contains('/') => Err(ValidationError::DuplicateMaskSeparator),
        Some((addr, mask)) => Ok((addr, parse_mask(mask, version)?)),
    }
}

fn parse_mask(text: &str, version: IpVersion) -> Result<u8, ValidationError> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if text.strip_prefix('-').is_some_and(all_digits) {
        return Err(ValidationError::NegativeMask {
            text: text.to_string(),
        });
    }
    if !all_digits(text) {
        return Err(ValidationError::InvalidMask {
            text: text.to_string(),
        });
    }
    // Only overflow can fail here, and an overflowing mask is too large anyway
    text.parse::<u32>()
        .ok()
        .filter(|len| *len <= u32::from(version.max_mask()))
        .map(|len| len as u8)
        .ok_or_else(|| ValidationError::MaskTooLarge {
            text: text.to_string(),
            max: version.max_mask(),
            version,
        })
}

/// Replace a single `::` with enough colons to give 8 groups.
///
/// Returns the expanded text and whether a compression was present.
fn expand_compression(addr: &str) -> Result<(Cow<'_, str>, bool), ValidationError> {
    let count = addr.matches("::").count();
    if count > 1 {
        return Err(ValidationError::MultipleCompression { count });
    }
    if count == 0 {
        return Ok((Cow::Borrowed(addr), false));
    }
    if addr.contains(":::") {
        return Err(ValidationError::TripleColon);
    }

    let version = IpVersion::V6;
    let current = addr.split(':').count();
    let colons = (2 + version.group_count()).checked_sub(current).ok_or(
        ValidationError::WrongGroupCount {
            expected: version.group_count(),
            found: current,
            version,
        },
    )?;
    let expanded = addr.replacen("::", &":".repeat(colons), 1);
    log::trace!("expanded '{addr}' -> '{expanded}'");
    Ok((Cow::Owned(expanded), true))
}

/// Parse one group; `index` is 1-based and only used for error reporting.
fn parse_group(
    index: usize,
    text: &str,
    version: IpVersion,
    compressed: bool,
) -> Result<u16, ValidationError> {
    // Empty groups left over from `::` expansion stand for zero
    if text.is_empty() && compressed {
        return Ok(0);
    }

    let base = version.default_radix().base();
    if text.is_empty() || !text.chars().all(|c| c.is_digit(base)) {
        return Err(ValidationError::NotANumber {
            group: index,
            text: text.to_string(),
            base,
        });
    }

    u32::from_str_radix(text, base)
        .ok()
        .filter(|value| *value <= u32::from(version.group_max()))
        .map(|value| value as u16)
        .ok_or_else(|| ValidationError::GroupOutOfRange {
            group: index,
            text: text.to_string(),
            max: version.group_max(),
        })
}
