// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error};

/// A validated, half-open byte range into UTF-8 text.
///
/// A `TextRange` upholds:
///
/// - `start <= end`
/// - `end` is within the text it was validated against
/// - both endpoints lie on UTF-8 character boundaries
///
/// The range does not remember which text it was validated against. Only reuse it with the same
/// text (or with a text that has the validated text as a prefix, which is what appending does).
///
/// ```
/// use attributed_text::TextRange;
///
/// let range = TextRange::new("Hello!", 0..5).unwrap();
/// assert_eq!(range.len(), 5);
/// assert!(TextRange::new("Hello!", 0..7).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// The empty range at the start of any text.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Validates `range` against `text`.
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The range covering all of `text`.
    #[inline]
    pub fn full(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// Creates a `TextRange` without validation.
    ///
    /// Intended for callers that derive ranges from the text itself, such as substring search.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of bytes covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Moves both endpoints forward by `offset` bytes.
    #[must_use]
    #[inline]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

impl core::fmt::Display for TextRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, len));
    }
    if range.end > len {
        return Err(Error::invalid_bounds(range.start, range.end, len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::Start,
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::End,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::TextRange;
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn accepts_empty_and_full() {
        assert!(TextRange::new("", 0..0).is_ok());
        assert_eq!(TextRange::new("abc", 0..3).unwrap(), TextRange::full("abc"));
        assert!(TextRange::EMPTY.is_empty());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_reversed() {
        let err = TextRange::new("Hello!", 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!((err.start(), err.end(), err.len()), (4, 3, 6));
    }

    #[test]
    fn rejects_past_end() {
        let err = TextRange::new("Hello!", 2..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    }

    #[test]
    fn rejects_split_character() {
        // "é" is 2 bytes in UTF-8.
        let err = TextRange::new("éclair", 0..1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::End);
        assert_eq!((b.char_start, b.char_end), (0, 2));
    }

    #[test]
    fn shifting_keeps_length() {
        let r = TextRange::new("abcdef", 1..3).unwrap().shifted(10);
        assert_eq!(r.as_range(), 11..13);
        assert_eq!(r.len(), 2);
    }
}
