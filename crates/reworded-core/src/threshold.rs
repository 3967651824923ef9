// Minimum-length threshold.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

/// Threshold substituted when the supplied text is not a positive integer.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Smallest subset size that is enumerated.
///
/// Any value is representable; [`MinLength::range`] clamps it against the
/// word length. A value of 0 behaves like 1, and a value larger than the
/// word length selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinLength(usize);

/// Outcome of parsing a threshold from text.
///
/// When the text was rejected, `substituted` holds the raw input and
/// `value` is [`DEFAULT_MIN_LENGTH`]. Callers are expected to surface this
/// rather than silently proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdResolution {
    pub value: MinLength,
    pub substituted: Option<String>,
}

impl ThresholdResolution {
    /// Whether the default replaced the supplied text.
    pub fn is_substituted(&self) -> bool {
        self.substituted.is_some()
    }
}

impl MinLength {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Parse a threshold, falling back to [`DEFAULT_MIN_LENGTH`] when the
    /// trimmed text is not an integer of at least 1.
    ///
    /// A positive integer too large for `usize` is still a valid threshold;
    /// it saturates to `usize::MAX` and selects nothing.
    pub fn parse(text: &str) -> ThresholdResolution {
        match text.trim().parse::<usize>() {
            Ok(v) if v >= 1 => ThresholdResolution {
                value: Self(v),
                substituted: None,
            },
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => ThresholdResolution {
                value: Self(usize::MAX),
                substituted: None,
            },
            _ => ThresholdResolution {
                value: Self(DEFAULT_MIN_LENGTH),
                substituted: Some(text.to_string()),
            },
        }
    }

    /// Subset sizes to enumerate for a word of `word_len` letters:
    /// `clamp(m, 1, n)..=n`, empty when `m > n`.
    pub fn range(self, word_len: usize) -> RangeInclusive<usize> {
        self.0.max(1)..=word_len
    }
}

impl Default for MinLength {
    fn default() -> Self {
        Self(DEFAULT_MIN_LENGTH)
    }
}

impl From<usize> for MinLength {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for MinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
