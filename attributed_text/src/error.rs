// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a byte range cannot be used with a piece of text.
///
/// Carries a non-exhaustive [`ErrorKind`] together with the range that was attempted and the
/// length of the text it was checked against. Boundary failures also record the character that
/// the offending index falls inside of.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the text that was checked, not of the error."
)]
impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Start of the rejected range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes of the text the range was checked against.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The offending endpoint for [`ErrorKind::NotOnCharBoundary`] errors.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn with_kind(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::with_kind(ErrorKind::InvalidBounds, start, end, len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::with_kind(ErrorKind::InvalidRange, start, end, len)
    }

    pub(crate) fn not_on_char_boundary(
        text: &str,
        start: usize,
        end: usize,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => start,
            Endpoint::End => end,
        };
        let (char_start, char_end) = enclosing_char(text, index);
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
            ..Self::with_kind(ErrorKind::NotOnCharBoundary, start, end, text.len())
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (start, end) = (self.start, self.end);
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => {
                write!(f, "range {start}..{end} out of bounds for len {}", self.len)
            }
            (ErrorKind::InvalidRange, _) => write!(f, "invalid range {start}..{end}: start > end"),
            (ErrorKind::NotOnCharBoundary, Some(b)) => write!(
                f,
                "range {start}..{end}: {} index {} splits the character at {}..{}",
                b.which, b.index, b.char_start, b.char_end
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// One of the endpoints lies past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// One of the endpoints lies inside a multi-byte character.
    NotOnCharBoundary,
}

/// Which endpoint of a range was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint.
    Start,

    /// The `end` endpoint.
    End,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Location of an index that fell inside a character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was rejected.
    pub which: Endpoint,

    /// The rejected byte index.
    pub index: usize,

    /// Start of the character containing `index`.
    pub char_start: usize,

    /// End (exclusive) of the character containing `index`.
    pub char_end: usize,
}

/// Returns the byte span of the character that contains `index`.
///
/// `index` must be in bounds; callers only reach this after the bounds check.
fn enclosing_char(text: &str, index: usize) -> (usize, usize) {
    text.char_indices()
        .map(|(start, c)| (start, start + c.len_utf8()))
        .find(|&(start, end)| start <= index && index < end)
        .unwrap_or((index, index))
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, Error, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn boundary_error_reports_enclosing_char() {
        // "ü" occupies bytes 1..3.
        let err = Error::not_on_char_boundary("Tüte", 2, 4, Endpoint::Start);
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!((b.char_start, b.char_end), (1, 3));
        assert_eq!(err.len(), 5);
        let msg = err.to_string();
        assert!(msg.contains("start index 2"), "{msg}");
        assert!(msg.contains("1..3"), "{msg}");
    }

    #[test]
    fn bounds_message_mentions_length() {
        let err = Error::invalid_bounds(0, 9, 4);
        assert_eq!(err.to_string(), "range 0..9 out of bounds for len 4");
        assert!(err.boundary().is_none());
    }
}
