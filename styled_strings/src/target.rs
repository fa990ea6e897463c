// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Range, RangeFull};

use attributed_text::TextRange;

use crate::Error;

/// Which part of a text a styling call applies to.
///
/// A target names an explicit byte range, a substring to search for, or neither (the whole
/// text). Naming both is an error that [`resolve`](Self::resolve) reports rather than picking one.
///
/// The common cases convert directly:
///
/// ```
/// use styled_strings::Target;
///
/// let text = "Hello, world";
/// assert_eq!(Target::from(..).resolve(text).unwrap().as_range(), 0..12);
/// assert_eq!(Target::from(7..12).resolve(text).unwrap().as_range(), 7..12);
/// assert_eq!(Target::from("world").resolve(text).unwrap().as_range(), 7..12);
///
/// // A missing substring resolves to the empty range at the start.
/// assert!(Target::from("moon").resolve(text).unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Target<'a> {
    range: Option<Range<usize>>,
    substring: Option<&'a str>,
}

impl<'a> Target<'a> {
    /// The whole text.
    pub const fn full() -> Self {
        Self {
            range: None,
            substring: None,
        }
    }

    /// An explicit byte range.
    pub fn range(range: Range<usize>) -> Self {
        Self::full().with_range(range)
    }

    /// The first occurrence of `substring`.
    pub fn substring(substring: &'a str) -> Self {
        Self::full().with_substring(substring)
    }

    /// Adds an explicit byte range.
    #[must_use]
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Adds a substring to search for.
    #[must_use]
    pub fn with_substring(mut self, substring: &'a str) -> Self {
        self.substring = Some(substring);
        self
    }

    /// Resolves the target against `text`.
    ///
    /// - Both a range and a substring: [`ErrorKind::ConflictingTarget`](crate::ErrorKind).
    /// - A substring: the first literal, case-sensitive occurrence, or [`TextRange::EMPTY`] when
    ///   there is none.
    /// - A range: the range, validated against `text`.
    /// - Neither: the whole text.
    pub fn resolve(&self, text: &str) -> Result<TextRange, Error> {
        match (&self.range, self.substring) {
            (Some(_), Some(_)) => Err(Error::conflicting_target()),
            (None, Some(needle)) => Ok(text.find(needle).map_or(TextRange::EMPTY, |start| {
                TextRange::new_unchecked(start, start + needle.len())
            })),
            (Some(range), None) => Ok(TextRange::new(text, range.clone())?),
            (None, None) => Ok(TextRange::full(text)),
        }
    }
}

impl From<RangeFull> for Target<'_> {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<usize>> for Target<'_> {
    fn from(range: Range<usize>) -> Self {
        Self::range(range)
    }
}

impl From<TextRange> for Target<'_> {
    fn from(range: TextRange) -> Self {
        Self::range(range.as_range())
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(substring: &'a str) -> Self {
        Self::substring(substring)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(substring: &'a String) -> Self {
        Self::substring(substring)
    }
}

#[cfg(test)]
mod tests {
    use attributed_text::TextRange;

    use super::Target;
    use crate::ErrorKind;

    #[test]
    fn no_target_is_the_full_span() {
        assert_eq!(Target::full().resolve("Title").unwrap().as_range(), 0..5);
        assert_eq!(Target::full().resolve("").unwrap(), TextRange::EMPTY);
    }

    #[test]
    fn substring_finds_first_occurrence() {
        let hit = Target::substring("ab").resolve("xxabyyab").unwrap();
        assert_eq!(hit.as_range(), 2..4);
    }

    #[test]
    fn substring_search_is_case_sensitive() {
        let miss = Target::substring("TITLE").resolve("Title").unwrap();
        assert_eq!(miss, TextRange::EMPTY);
    }

    #[test]
    fn range_and_substring_conflict() {
        let target = Target::range(0..1).with_substring("a");
        let err = target.resolve("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingTarget);
        // Even when the substring is absent from the text.
        let err = Target::substring("zzz").with_range(0..1).resolve("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingTarget);
    }

    #[test]
    fn explicit_range_is_validated() {
        let err = Target::range(2..9).resolve("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);

        // 'é' is two bytes wide.
        let err = Target::range(0..2).resolve("aé").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(
            err.range_error().map(attributed_text::Error::kind),
            Some(attributed_text::ErrorKind::NotOnCharBoundary)
        );
    }
}
