//! Configuration options for CCDV decoding.
//!
//! This module provides:
//!
//! - [`FieldCount`]: how many fields each record must carry
//! - [`DecoderOptions`]: main configuration struct, fixed before the first decode
//!
//! The delimiters themselves are not configurable; see [`crate::delim`].
//!
//! ## Examples
//!
//! ```rust
//! use ccdv::{from_str_with_options, DecoderOptions, FieldCount};
//!
//! let options = DecoderOptions::new()
//!     .with_field_count(FieldCount::Exact(3))
//!     .with_trim_leading_space(true);
//!
//! let records = from_str_with_options(" a\x1f  b\x1f   c\x1e", options).unwrap();
//! assert_eq!(records[0], ["a", "b", "c"]);
//! ```
//!
//! Options can be loaded from any serde format:
//!
//! ```rust
//! use ccdv::{DecoderOptions, FieldCount};
//!
//! let options: DecoderOptions =
//!     serde_json::from_str(r#"{ "field_count": { "exact": 4 }, "reuse_record": true }"#).unwrap();
//! assert_eq!(options.field_count, FieldCount::Exact(4));
//! assert!(options.reuse_record);
//! assert!(!options.trim_leading_space);
//! ```

use serde::{Deserialize, Serialize};

/// Field-count policy applied to every accepted record.
///
/// Comment lines and blank lines are never checked and never count toward
/// inference.
///
/// # Examples
///
/// ```rust
/// use ccdv::FieldCount;
///
/// assert_eq!(FieldCount::from_raw(-1), FieldCount::Any);
/// assert_eq!(FieldCount::from_raw(0), FieldCount::Infer);
/// assert_eq!(FieldCount::from_raw(4), FieldCount::Exact(4));
/// assert_eq!(FieldCount::Exact(4).as_raw(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCount {
    /// Records may have differing field counts.
    #[default]
    Any,
    /// The first accepted record fixes the count for the rest of the stream.
    Infer,
    /// Every record must have exactly this many fields.
    Exact(usize),
}

impl FieldCount {
    /// Converts the conventional integer knob: negative is [`FieldCount::Any`],
    /// zero is [`FieldCount::Infer`], anything else is [`FieldCount::Exact`].
    #[must_use]
    pub fn from_raw(n: i64) -> Self {
        match n {
            n if n < 0 => FieldCount::Any,
            0 => FieldCount::Infer,
            n => FieldCount::Exact(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    /// The inverse of [`FieldCount::from_raw`].
    #[must_use]
    pub fn as_raw(&self) -> i64 {
        match *self {
            FieldCount::Any => -1,
            FieldCount::Infer => 0,
            FieldCount::Exact(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

/// Configuration options for a [`Decoder`](crate::Decoder).
///
/// # Examples
///
/// ```rust
/// use ccdv::{DecoderOptions, FieldCount};
///
/// // Defaults: any field count, no trimming, fresh record per call
/// let options = DecoderOptions::new();
/// assert_eq!(options.field_count, FieldCount::Any);
///
/// let options = DecoderOptions::new()
///     .with_field_count(FieldCount::Infer)
///     .with_reuse_record(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    pub field_count: FieldCount,
    /// Strip leading spaces and tabs from every field.
    pub trim_leading_space: bool,
    /// Hand out one internal record that is overwritten on every call instead
    /// of allocating a fresh one.
    pub reuse_record: bool,
}

impl DecoderOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field-count policy.
    #[must_use]
    pub fn with_field_count(mut self, field_count: FieldCount) -> Self {
        self.field_count = field_count;
        self
    }

    /// Enables or disables leading-space trimming.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccdv::DecoderOptions;
    ///
    /// let options = DecoderOptions::new().with_trim_leading_space(true);
    /// assert!(options.trim_leading_space);
    /// ```
    #[must_use]
    pub fn with_trim_leading_space(mut self, trim: bool) -> Self {
        self.trim_leading_space = trim;
        self
    }

    /// Enables or disables record buffer reuse.
    ///
    /// With reuse on, [`Decoder::decode`](crate::Decoder::decode) returns a
    /// borrowed record that is only valid until the next call.
    #[must_use]
    pub fn with_reuse_record(mut self, reuse: bool) -> Self {
        self.reuse_record = reuse;
        self
    }
}
