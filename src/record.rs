//! The [`Record`] type: an ordered sequence of byte fields.
//!
//! All fields of a record live in one contiguous buffer, with the end offset of
//! each field kept alongside. Clearing a record keeps both allocations, which is
//! what lets the decoder hand out the same record again and again when buffer
//! reuse is enabled.

use crate::{Error, Result};
use std::fmt;
use std::ops::Range;

/// A single record: zero or more fields, each an arbitrary byte string.
///
/// # Examples
///
/// ```rust
/// use ccdv::Record;
///
/// let record = Record::from(vec!["a", "b\nb", ""]);
/// assert_eq!(record.len(), 3);
/// assert_eq!(record.get(1), Some(&b"b\nb"[..]));
/// assert_eq!(record.get_str(2).unwrap(), Some(""));
/// assert_eq!(record, vec!["a", "b\nb", ""]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    data: Vec<u8>,
    ends: Vec<usize>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `fields` fields totalling `bytes` bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize, fields: usize) -> Self {
        Record {
            data: Vec::with_capacity(bytes),
            ends: Vec::with_capacity(fields),
        }
    }

    /// Number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Appends a field.
    pub fn push_field(&mut self, field: &[u8]) {
        self.data.extend_from_slice(field);
        self.ends.push(self.data.len());
    }

    /// Removes all fields, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.data.clear();
        self.ends.clear();
    }

    fn range(&self, i: usize) -> Option<Range<usize>> {
        let end = *self.ends.get(i)?;
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        Some(start..end)
    }

    /// Returns the field at index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        self.range(i).map(|r| &self.data[r])
    }

    /// Returns the field at index `i` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Utf8`] if the field is not valid UTF-8.
    pub fn get_str(&self, i: usize) -> Result<Option<&str>> {
        match self.get(i) {
            Some(bytes) => std::str::from_utf8(bytes)
                .map(Some)
                .map_err(|source| Error::Utf8 { field: i, source }),
            None => Ok(None),
        }
    }

    /// Iterates over the fields as byte slices.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            record: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copies every field into an owned `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Utf8`] naming the first field that is not valid UTF-8.
    pub fn to_string_vec(&self) -> Result<Vec<String>> {
        self.iter()
            .enumerate()
            .map(|(field, bytes)| {
                std::str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|source| Error::Utf8 { field, source })
            })
            .collect()
    }

    /// The raw concatenation of every field, without separators.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    // Removes leading spaces and tabs from every field in place.
    pub(crate) fn trim_leading_space(&mut self) {
        if self.data.is_empty() {
            return;
        }
        let mut write = 0;
        let mut start = 0;
        for end in &mut self.ends {
            let skip = self.data[start..*end]
                .iter()
                .take_while(|&&b| b == b' ' || b == b'\t')
                .count();
            let kept = *end - start - skip;
            // Fields only shrink, so the copy never overtakes unread bytes.
            self.data.copy_within(start + skip..*end, write);
            start = *end;
            write += kept;
            *end = write;
        }
        self.data.truncate(write);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|field| String::from_utf8_lossy(field)))
            .finish()
    }
}

/// Iterator over the fields of a [`Record`].
#[derive(Clone)]
pub struct Iter<'r> {
    record: &'r Record,
    front: usize,
    back: usize,
}

impl<'r> Iterator for Iter<'r> {
    type Item = &'r [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let field = self.record.get(self.front);
        self.front += 1;
        field
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.record.get(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'r> IntoIterator for &'r Record {
    type Item = &'r [u8];
    type IntoIter = Iter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for Record {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut record = Record::new();
        for field in iter {
            record.push_field(field.as_ref());
        }
        record
    }
}

impl<T: AsRef<[u8]>> Extend<T> for Record {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for field in iter {
            self.push_field(field.as_ref());
        }
    }
}

impl<T: AsRef<[u8]>> From<Vec<T>> for Record {
    fn from(fields: Vec<T>) -> Self {
        fields.into_iter().collect()
    }
}

impl<T: AsRef<[u8]>> From<&[T]> for Record {
    fn from(fields: &[T]) -> Self {
        fields.iter().collect()
    }
}

impl<T: AsRef<[u8]>> PartialEq<[T]> for Record {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a == AsRef::<[u8]>::as_ref(b))
    }
}

impl<T: AsRef<[u8]>> PartialEq<Vec<T>> for Record {
    fn eq(&self, other: &Vec<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T: AsRef<[u8]>, const N: usize> PartialEq<[T; N]> for Record {
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}
