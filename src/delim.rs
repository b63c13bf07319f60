//! The reserved ASCII control characters that make up the wire grammar.
//!
//! | Role | Character | Byte |
//! |------|-----------|------|
//! | Comment marker | DLE | `0x10` |
//! | Group separator | GS | `0x1D` |
//! | Record separator | RS | `0x1E` |
//! | Unit (field) separator | US | `0x1F` |
//!
//! None of these are configurable. Any other byte is literal field content.

/// Data Link Escape. As the first byte of a line it marks the line as a comment.
pub const COMMENT: u8 = 0x10;

/// Group Separator. Delineates groups of records (think tables).
pub const GROUP_SEP: u8 = 0x1D;

/// Record Separator. Terminates a record (think a row).
pub const RECORD_SEP: u8 = 0x1E;

/// Unit Separator. Separates fields within a record.
pub const UNIT_SEP: u8 = 0x1F;

/// Bytes that may never appear inside an encoded field.
pub const RESERVED: [u8; 3] = [GROUP_SEP, RECORD_SEP, UNIT_SEP];

/// Returns `true` if `byte` is one of the separators a field may not contain.
#[inline]
#[must_use]
pub const fn is_reserved(byte: u8) -> bool {
    matches!(byte, GROUP_SEP | RECORD_SEP | UNIT_SEP)
}

/// Returns the first reserved separator found in `field`, if any.
///
/// ```rust
/// use ccdv::delim::{find_reserved, RECORD_SEP};
///
/// assert_eq!(find_reserved(b"plain, \"quoted\"\r\n"), None);
/// assert_eq!(find_reserved(b"fo\x1eo"), Some(RECORD_SEP));
/// ```
#[inline]
#[must_use]
pub fn find_reserved(field: &[u8]) -> Option<u8> {
    field.iter().copied().find(|&b| is_reserved(b))
}
