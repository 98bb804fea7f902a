//! Error types returned by the parser and the formatters.

use super::IpVersion;
use serde::Serialize;

/// The reason an address literal was rejected.
///
/// Exactly one error is produced per parse, the first violation found.
/// The `Display` text is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Cannot tell IPv4 from IPv6 in '{raw}': no '.' or ':' found")]
    AmbiguousFormat { raw: String },

    #[error("Invalid character '{character}' at position {position} for {version}")]
    InvalidCharacter {
        character: char,
        position: usize,
        version: IpVersion,
    },

    #[error("Only one '/' mask separator is allowed")]
    DuplicateMaskSeparator,

    #[error("Mask '{text}' is not a decimal number")]
    InvalidMask { text: String },

    #[error("Mask '{text}' must not be negative")]
    NegativeMask { text: String },

    #[error("Mask '{text}' exceeds the maximum of {max} for {version}")]
    MaskTooLarge {
        text: String,
        max: u8,
        version: IpVersion,
    },

    #[error("Empty group: '..' is not allowed in IPv4")]
    DoubleSeparator,

    #[error("'::' may appear only once, found {count}")]
    MultipleCompression { count: usize },

    #[error("':::' is not allowed, use '::' to compress zero groups")]
    TripleColon,

    #[error("Expected {expected} groups for {version}, found {found}")]
    WrongGroupCount {
        expected: usize,
        found: usize,
        version: IpVersion,
    },

    /// `group` is 1-based.
    #[error("Group {group} ('{text}') is not a base-{base} number")]
    NotANumber {
        group: usize,
        text: String,
        base: u32,
    },

    /// `group` is 1-based.
    #[error("Group {group} ('{text}') is out of range, maximum is {max}")]
    GroupOutOfRange {
        group: usize,
        text: String,
        max: u16,
    },
}

/// Fieldless tag of a [`ValidationError`], for callers that only branch on
/// the kind of failure.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AmbiguousFormat,
    InvalidCharacter,
    DuplicateMaskSeparator,
    InvalidMask,
    NegativeMask,
    MaskTooLarge,
    DoubleSeparator,
    MultipleCompression,
    TripleColon,
    WrongGroupCount,
    NotANumber,
    GroupOutOfRange,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::AmbiguousFormat { .. } => ErrorKind::AmbiguousFormat,
            ValidationError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            ValidationError::DuplicateMaskSeparator => ErrorKind::DuplicateMaskSeparator,
            ValidationError::InvalidMask { .. } => ErrorKind::InvalidMask,
            ValidationError::NegativeMask { .. } => ErrorKind::NegativeMask,
            ValidationError::MaskTooLarge { .. } => ErrorKind::MaskTooLarge,
            ValidationError::DoubleSeparator => ErrorKind::DoubleSeparator,
            ValidationError::MultipleCompression { .. } => ErrorKind::MultipleCompression,
            ValidationError::TripleColon => ErrorKind::TripleColon,
            ValidationError::WrongGroupCount { .. } => ErrorKind::WrongGroupCount,
            ValidationError::NotANumber { .. } => ErrorKind::NotANumber,
            ValidationError::GroupOutOfRange { .. } => ErrorKind::GroupOutOfRange,
        }
    }
}

/// Rejected numeric base.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    #[error("Unsupported radix {base}, expected 2..=36")]
    Unsupported { base: u32 },
}
