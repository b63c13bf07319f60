//! Error types for CCDV encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: A decoded record broke the configured field-count policy.
//!   Carries the line the record started on and the line the fault was detected on.
//! - **Invalid Fields**: A field handed to the encoder contains a reserved separator.
//! - **I/O Errors**: The underlying reader or writer failed. The original
//!   [`std::io::Error`] is kept intact.
//! - **UTF-8 Errors**: A field was requested as `&str` but is not valid UTF-8.
//!
//! Running out of input is not an error: decoding returns `Ok(None)`.
//!
//! ## Examples
//!
//! ```rust
//! use ccdv::{from_str_with_options, DecoderOptions, FieldCount, Error};
//!
//! let options = DecoderOptions::new().with_field_count(FieldCount::Infer);
//! let result = from_str_with_options("a\x1fb\x1fc\x1ed\x1fe\x1e", options);
//!
//! match result {
//!     Err(Error::Parse(err)) => {
//!         assert_eq!(err.start_line, 2);
//!         assert_eq!(err.line, 2);
//!     }
//!     other => panic!("expected a parse error, got {:?}", other),
//! }
//! ```

use std::io;
use std::str::Utf8Error;
use std::sync::Arc;
use thiserror::Error;

/// What went wrong while decoding a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The record's field count disagrees with the configured or inferred count.
    #[error("wrong number of fields: expected {expected}, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// A fault in the structure of the decoded stream.
///
/// `start_line` is the line the offending record began on. `line` is the line
/// the fault was detected on; the two differ only when the record's fields
/// contain embedded newlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record on line {start_line}: parse error on line {line}: {kind}")]
pub struct ParseError {
    pub start_line: usize,
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Represents all possible errors that can occur during CCDV encoding/decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The underlying reader or writer failed.
    ///
    /// Shared so the encoder can hold it as its sticky fault and still hand
    /// it back on every query.
    #[error("IO error: {0}")]
    Io(#[source] Arc<io::Error>),

    /// A decoded record violated the field-count policy.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A field contains a reserved separator and cannot be encoded.
    #[error("invalid field {field}: contains reserved separator 0x{delimiter:02X}")]
    InvalidField { field: usize, delimiter: u8 },

    /// A field is not valid UTF-8.
    #[error("field {field} is not valid UTF-8: {source}")]
    Utf8 {
        field: usize,
        #[source]
        source: Utf8Error,
    },
}

impl Error {
    /// Creates a field-count parse error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccdv::Error;
    ///
    /// let err = Error::field_count(2, 3, 3, 2);
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("expected 3, found 2"));
    /// ```
    pub fn field_count(start_line: usize, line: usize, expected: usize, found: usize) -> Self {
        Error::Parse(ParseError {
            start_line,
            line,
            kind: ParseErrorKind::FieldCount { expected, found },
        })
    }

    /// Creates an invalid-field error for the field at `field` within its record.
    pub fn invalid_field(field: usize, delimiter: u8) -> Self {
        Error::InvalidField { field, delimiter }
    }

    /// Returns the underlying I/O error, if this is one.
    #[must_use]
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the parse error, if this is one.
    #[must_use]
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` for [`Error::InvalidField`].
    #[must_use]
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Error::InvalidField { .. })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
