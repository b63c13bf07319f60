//! CCDV encoding.
//!
//! This module provides the [`Encoder`], which writes records with a Unit
//! Separator (`0x1F`) between fields and a Record Separator (`0x1E`) after each
//! record. Fields are written byte-for-byte; nothing is quoted or escaped.
//!
//! ## Validation
//!
//! A field that contains a Group, Record or Unit Separator would corrupt the
//! stream, so it is rejected with [`Error::InvalidField`]. Rejection stops the
//! current record at that field: the fields and separators already written for
//! it stay in the buffer. Empty fields always pass.
//!
//! ## Buffering and Errors
//!
//! Output is buffered. Call [`Encoder::flush`] to push it to the writer and
//! [`Encoder::error`] to learn whether any write or flush has failed. The first
//! I/O failure is kept and every later call reports it again.
//!
//! Dropping an encoder discards whatever has not been flushed. A batch cut
//! short by a rejected field never reaches the writer half-written.
//!
//! ```rust
//! use ccdv::Encoder;
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(["abc", "line\nbreak"]).unwrap();
//! encoder.encode(["\"quoted\", with comma"]).unwrap();
//!
//! let bytes = encoder.into_inner().unwrap();
//! assert_eq!(bytes, b"abc\x1fline\nbreak\x1e\"quoted\", with comma\x1e");
//! ```

use crate::delim::{find_reserved, RECORD_SEP, UNIT_SEP};
use crate::{Error, Result};
use log::debug;
use std::io::{self, Write};

const DEFAULT_CAPACITY: usize = 8 * 1024;

/// The CCDV encoder.
///
/// Buffers output itself rather than through [`std::io::BufWriter`], whose
/// `Drop` would commit a partially encoded record.
pub struct Encoder<W: Write> {
    writer: W,
    buf: Vec<u8>,
    capacity: usize,
    fault: Option<Error>,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with a default-sized output buffer.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, writer)
    }

    /// Creates an encoder whose output buffer holds `capacity` bytes.
    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Encoder {
            writer,
            buf: Vec::with_capacity(capacity),
            capacity,
            fault: None,
        }
    }

    /// Encodes a single record.
    ///
    /// Output is buffered; call [`Encoder::flush`] when done.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccdv::{Encoder, Record};
    ///
    /// let mut encoder = Encoder::new(Vec::new());
    /// encoder.encode(&Record::from(vec!["a", "", "c"])).unwrap();
    /// encoder.encode(vec![b"x09\x41\xb4".to_vec()]).unwrap();
    /// assert_eq!(encoder.into_inner().unwrap(), b"a\x1f\x1fc\x1ex09A\xb4\x1e");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if a field contains a reserved
    /// separator, or [`Error::Io`] if the writer has failed.
    pub fn encode<I, F>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        self.check()?;
        for (i, field) in record.into_iter().enumerate() {
            let field = field.as_ref();
            if i > 0 {
                self.write(&[UNIT_SEP])?;
            }
            if let Some(delimiter) = find_reserved(field) {
                debug!("rejecting field {} containing 0x{:02X}", i, delimiter);
                return Err(Error::invalid_field(i, delimiter));
            }
            self.write(field)?;
        }
        self.write(&[RECORD_SEP])
    }

    /// Encodes every record, then flushes.
    ///
    /// Stops at the first fault without flushing.
    ///
    /// # Errors
    ///
    /// Returns the first fault from [`Encoder::encode`] or from the flush.
    pub fn encode_all<I, R, F>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        for record in records {
            self.encode(record)?;
        }
        self.try_flush()
    }

    /// Writes any buffered output to the underlying writer.
    ///
    /// A failure is not returned here; it becomes the sticky fault reported by
    /// [`Encoder::error`].
    pub fn flush(&mut self) {
        // Failure is recorded in `fault`.
        let _ = self.try_flush();
    }

    /// Reports the fault left by any earlier write or flush.
    ///
    /// # Errors
    ///
    /// Returns the sticky [`Error::Io`] if one has been recorded.
    pub fn error(&mut self) -> Result<()> {
        self.check()?;
        // An empty write surfaces a writer that has started failing.
        let res = self.writer.write_all(&[]);
        self.record(res)
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Number of encoded bytes not yet handed to the writer.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Flushes and unwraps the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the sticky fault, or the fault raised by the final flush.
    pub fn into_inner(mut self) -> Result<W> {
        self.try_flush()?;
        Ok(self.writer)
    }

    fn try_flush(&mut self) -> Result<()> {
        self.check()?;
        self.flush_buf()?;
        let res = self.writer.flush();
        self.record(res)
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let res = self.writer.write_all(&self.buf);
        self.buf.clear();
        self.record(res)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if self.buf.len() + bytes.len() > self.capacity {
            self.flush_buf()?;
        }
        if bytes.len() >= self.capacity {
            let res = self.writer.write_all(bytes);
            return self.record(res);
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        match &self.fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }

    fn record(&mut self, res: io::Result<()>) -> Result<()> {
        res.map_err(|err| {
            debug!("encoder writer failed: {}", err);
            let err = Error::from(err);
            self.fault = Some(err.clone());
            err
        })
    }
}
