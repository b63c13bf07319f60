//! CCDV decoding.
//!
//! This module provides the [`Decoder`], a streaming tokenizer that splits a
//! byte stream into records.
//!
//! ## Overview
//!
//! - **Records** end at a Record Separator (`0x1E`) or at the end of the stream.
//! - **Fields** end at a Unit Separator (`0x1F`). A trailing field with no
//!   separator after it still counts.
//! - **Comment lines** start with DLE (`0x10`) and are dropped before splitting.
//! - **Blank lines** (nothing between two Record Separators) are dropped.
//! - `\r`, `\n`, quotes, commas and every other byte are literal field content.
//!   There is no quoting or escaping.
//!
//! Line numbers in errors are 1-based. Every line read, including comment and
//! blank lines, consumes one line plus one more for each `\n` it contains.
//!
//! ## Usage
//!
//! ```rust
//! use ccdv::Decoder;
//!
//! let input = "a\x1fb\nb\x1fc\x1e\x10skipped\x1e\x1ed\x1fe\x1ff";
//! let mut decoder = Decoder::new(input.as_bytes());
//!
//! let first = decoder.decode().unwrap().unwrap();
//! assert_eq!(*first, ["a", "b\nb", "c"]);
//!
//! let second = decoder.decode().unwrap().unwrap();
//! assert_eq!(*second, ["d", "e", "f"]);
//!
//! assert!(decoder.decode().unwrap().is_none());
//! ```

use crate::delim::{COMMENT, RECORD_SEP, UNIT_SEP};
use crate::{DecoderOptions, Error, FieldCount, Record, Result};
use log::{debug, trace};
use std::borrow::Cow;
use std::io::{self, BufRead, BufReader};
use std::mem;

/// The CCDV decoder.
///
/// Owns all per-stream state: the line counter, the enforced field count and,
/// with [`DecoderOptions::reuse_record`], the record buffer handed out on each
/// call. Create one per stream.
pub struct Decoder<R> {
    reader: BufReader<R>,
    options: DecoderOptions,
    expected: Option<usize>,
    line: usize,
    raw: Vec<u8>,
    record: Record,
}

impl<R: io::Read> Decoder<R> {
    /// Creates a decoder with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecoderOptions::default())
    }

    /// Creates a decoder with the given options.
    pub fn with_options(reader: R, options: DecoderOptions) -> Self {
        let expected = match options.field_count {
            FieldCount::Exact(n) => Some(n),
            FieldCount::Any | FieldCount::Infer => None,
        };
        Decoder {
            reader: BufReader::new(reader),
            options,
            expected,
            line: 0,
            raw: Vec::with_capacity(256),
            record: Record::new(),
        }
    }

    /// Decodes the next record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. With
    /// [`DecoderOptions::reuse_record`] set the record is borrowed from the
    /// decoder and must be copied before the next call if it is needed
    /// afterwards; otherwise it is freshly allocated.
    ///
    /// A parse error only affects the record it names: calling `decode` again
    /// continues with the following line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the record breaks the field-count policy,
    /// and [`Error::Io`] when the underlying reader fails.
    pub fn decode(&mut self) -> Result<Option<Cow<'_, Record>>> {
        if !self.read_record()? {
            return Ok(None);
        }
        if self.options.reuse_record {
            Ok(Some(Cow::Borrowed(&self.record)))
        } else {
            Ok(Some(Cow::Owned(mem::take(&mut self.record))))
        }
    }

    /// Decodes every remaining record.
    ///
    /// Stops at the first fault and returns only that fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccdv::Decoder;
    ///
    /// let mut decoder = Decoder::new(&b"a\x1fb\x1e\x1ec\x1fd"[..]);
    /// let records = decoder.decode_all().unwrap();
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[1], ["c", "d"]);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`].
    pub fn decode_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while self.read_record()? {
            records.push(mem::take(&mut self.record));
        }
        Ok(records)
    }

    /// Returns an iterator over the remaining records, each owned.
    ///
    /// The iterator ends after yielding the first error.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            decoder: self,
            done: false,
        }
    }

    // Reads the next line (without its Record Separator) into `raw` and
    // returns the line number it started on.
    fn read_line(&mut self) -> Result<Option<usize>> {
        self.raw.clear();
        if self.reader.read_until(RECORD_SEP, &mut self.raw)? == 0 {
            return Ok(None);
        }
        if self.raw.last() == Some(&RECORD_SEP) {
            self.raw.pop();
        }

        let start_line = self.line + 1;
        let newlines = self.raw.iter().filter(|&&b| b == b'\n').count();
        self.line = start_line + newlines;
        Ok(Some(start_line))
    }

    // Fills `record` with the next accepted record.
    fn read_record(&mut self) -> Result<bool> {
        let start_line = loop {
            let Some(start_line) = self.read_line()? else {
                return Ok(false);
            };
            match self.raw.first() {
                Some(&COMMENT) => trace!("skipping comment on line {}", start_line),
                None => trace!("skipping blank line {}", start_line),
                Some(_) => break start_line,
            }
        };

        self.record.clear();
        self.record.extend(self.raw.split(|&b| b == UNIT_SEP));
        if self.options.trim_leading_space {
            self.record.trim_leading_space();
        }

        let found = self.record.len();
        match self.expected {
            Some(expected) if expected != found => {
                return Err(Error::field_count(start_line, self.line, expected, found));
            }
            Some(_) => {}
            None if self.options.field_count == FieldCount::Infer => {
                debug!(
                    "inferred {} fields per record from line {}",
                    found, start_line
                );
                self.expected = Some(found);
            }
            None => {}
        }
        Ok(true)
    }
}

impl<R> Decoder<R> {
    /// Lines consumed so far, comment and blank lines included.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The field count every record is currently checked against, if any.
    ///
    /// With [`FieldCount::Infer`] this is `None` until the first record is read.
    #[must_use]
    pub fn expected_field_count(&self) -> Option<usize> {
        self.expected
    }

    /// The options this decoder was built with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }

    /// Unwraps the underlying reader. Input that was buffered but not yet
    /// decoded is lost.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Iterator over owned records, created by [`Decoder::records`].
pub struct Records<'d, R> {
    decoder: &'d mut Decoder<R>,
    done: bool,
}

impl<R: io::Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.read_record() {
            Ok(true) => Some(Ok(mem::take(&mut self.decoder.record))),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
