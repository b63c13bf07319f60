//! # ccdv
//!
//! Control-Character Delimited Values: a record-oriented text format that
//! delimits with reserved ASCII control characters instead of commas and
//! newlines.
//!
//! ## What is CCDV?
//!
//! CSV needs quoting and escaping because its delimiters are ordinary text.
//! CCDV uses bytes that never occur in legitimate text:
//!
//! | Role | Character | Byte |
//! |------|-----------|------|
//! | Comment marker | DLE | `0x10` |
//! | Group separator | GS | `0x1D` |
//! | Record separator | RS | `0x1E` |
//! | Unit (field) separator | US | `0x1F` |
//!
//! so fields containing newlines, carriage returns, quotes and commas pass
//! through literally. There is no quoting syntax at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use ccdv::{from_str, to_string};
//!
//! let records = vec![
//!     vec!["id", "comment"],
//!     vec!["1", "multi\nline, with \"quotes\""],
//! ];
//!
//! let encoded = to_string(&records).unwrap();
//! assert_eq!(encoded, "id\x1fcomment\x1e1\x1fmulti\nline, with \"quotes\"\x1e");
//!
//! let decoded = from_str(&encoded).unwrap();
//! assert_eq!(decoded[1], ["1", "multi\nline, with \"quotes\""]);
//! ```
//!
//! ### Streaming
//!
//! [`Decoder`] reads one record per call from any [`std::io::Read`];
//! [`Encoder`] writes records to any [`std::io::Write`]:
//!
//! ```rust
//! use ccdv::{Decoder, DecoderOptions, Encoder, FieldCount};
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(["a", "b"]).unwrap();
//! encoder.encode(["c", "d"]).unwrap();
//! let bytes = encoder.into_inner().unwrap();
//!
//! let options = DecoderOptions::new().with_field_count(FieldCount::Infer);
//! let mut decoder = Decoder::with_options(&bytes[..], options);
//! while let Some(record) = decoder.decode().unwrap() {
//!     assert_eq!(record.len(), 2);
//! }
//! ```
//!
//! ## Rules
//!
//! - A record ends at a Record Separator or at the end of input.
//! - A line beginning with DLE is a comment and is skipped.
//! - An empty line is skipped.
//! - The encoder rejects any field containing GS, RS or US.
//! - A record made of one empty field encodes as a lone RS and therefore
//!   decodes as a blank line.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at `trace`
//! and `debug` level. Install any logger to see them.

pub mod de;
pub mod delim;
pub mod error;
pub mod macros;
pub mod options;
pub mod record;
pub mod ser;

pub use de::{Decoder, Records};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use options::{DecoderOptions, FieldCount};
pub use record::Record;
pub use ser::Encoder;

use std::io;

/// Decodes every record in a string with default options.
///
/// # Examples
///
/// ```rust
/// use ccdv::from_str;
///
/// let records = from_str("a\x1fb\x1fc\x1e\x1ed\x1fe\x1ff\x1e\x1e").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0], ["a", "b", "c"]);
/// assert_eq!(records[1], ["d", "e", "f"]);
/// ```
///
/// # Errors
///
/// With default options decoding in-memory input cannot fail; see
/// [`from_str_with_options`] for the errors a field-count policy can raise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Vec<Record>> {
    from_slice(s.as_bytes())
}

/// Decodes every record in a string with custom options.
///
/// # Errors
///
/// Returns [`Error::Parse`] at the first record that breaks the field-count policy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: DecoderOptions) -> Result<Vec<Record>> {
    from_reader_with_options(s.as_bytes(), options)
}

/// Decodes every record in a byte slice with default options.
///
/// # Examples
///
/// ```rust
/// use ccdv::from_slice;
///
/// let records = from_slice(b"x09\x41\xb4\x1c\x1faktau").unwrap();
/// assert_eq!(records[0], [&b"x09A\xb4\x1c"[..], &b"aktau"[..]]);
/// ```
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Vec<Record>> {
    from_reader(v)
}

/// Decodes every record from an I/O stream with default options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    from_reader_with_options(reader, DecoderOptions::default())
}

/// Decodes every record from an I/O stream with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Parse`] at the first
/// record that breaks the field-count policy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(
    reader: R,
    options: DecoderOptions,
) -> Result<Vec<Record>> {
    Decoder::with_options(reader, options).decode_all()
}

/// Encodes records into a writer and flushes it.
///
/// Output is committed only after every record has been accepted. If a field
/// is rejected, nothing from the batch reaches the writer.
///
/// # Examples
///
/// ```rust
/// use ccdv::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, [["a", "b"], ["c", "d"]]).unwrap();
/// assert_eq!(buffer, b"a\x1fb\x1ec\x1fd\x1e");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidField`] if a field contains a reserved separator,
/// or [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, I, R, F>(writer: W, records: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    Encoder::new(writer).encode_all(records)
}

/// Encodes records into a byte vector.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] if a field contains a reserved separator.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<I, R, F>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut buffer = Vec::with_capacity(256);
    to_writer(&mut buffer, records)?;
    Ok(buffer)
}

/// Encodes records into a `String`.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] if a field contains a reserved separator,
/// or [`Error::Utf8`] if the encoded fields are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<I, R, F>(records: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let bytes = to_vec(records)?;
    String::from_utf8(bytes).map_err(|err| {
        let head = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        let record_start = head
            .iter()
            .rposition(|&b| b == delim::RECORD_SEP)
            .map_or(0, |i| i + 1);
        let field = head[record_start..]
            .iter()
            .filter(|&&b| b == delim::UNIT_SEP)
            .count();
        Error::Utf8 {
            field,
            source: err.utf8_error(),
        }
    })
}
