// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// Error returned by the fallible styling operations.
///
/// The fluent [`StyleExt`](crate::StyleExt) methods never return this; they log it and hand the
/// text back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    source: Option<Source>,
    input: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Source {
    Range(attributed_text::Error),
    Url(url::ParseError),
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The text that failed to parse, for [`ErrorKind::MalformedUri`].
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The underlying range error, for [`ErrorKind::InvalidRange`].
    pub fn range_error(&self) -> Option<&attributed_text::Error> {
        match &self.source {
            Some(Source::Range(err)) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn conflicting_target() -> Self {
        Self {
            kind: ErrorKind::ConflictingTarget,
            source: None,
            input: None,
        }
    }

    pub(crate) fn malformed_uri(input: &str, err: url::ParseError) -> Self {
        Self {
            kind: ErrorKind::MalformedUri,
            source: Some(Source::Url(err)),
            input: Some(input.to_owned()),
        }
    }
}

impl From<attributed_text::Error> for Error {
    fn from(err: attributed_text::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            source: Some(Source::Range(err)),
            input: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.source) {
            (ErrorKind::ConflictingTarget, _) => {
                f.write_str("an explicit range and a substring cannot both be given")
            }
            (ErrorKind::MalformedUri, Some(Source::Url(err))) => write!(
                f,
                "malformed URI {:?}: {err}",
                self.input.as_deref().unwrap_or_default()
            ),
            (ErrorKind::MalformedUri, _) => f.write_str("malformed URI"),
            (ErrorKind::InvalidRange, Some(Source::Range(err))) => {
                write!(f, "invalid target: {err}")
            }
            (ErrorKind::InvalidRange, _) => f.write_str("invalid target range"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(Source::Range(err)) => Some(err),
            Some(Source::Url(err)) => Some(err),
            None => None,
        }
    }
}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An explicit range and a substring were both supplied to a targeting call.
    ConflictingTarget,

    /// The text passed to [`as_link`](crate::StyleExt::as_link) is not a valid URI.
    MalformedUri,

    /// An explicit range is out of bounds, reversed, or splits a character.
    InvalidRange,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{Error, ErrorKind};

    #[test]
    fn range_errors_keep_their_source() {
        let inner = attributed_text::TextRange::new("abc", 1..9).unwrap_err();
        let err = Error::from(inner.clone());
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range_error(), Some(&inner));
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid target: range 1..9 out of bounds for len 3"
        );
    }

    #[test]
    fn malformed_uri_reports_input() {
        let parse = url::Url::parse("not a url!!").unwrap_err();
        let err = Error::malformed_uri("not a url!!", parse);
        assert_eq!(err.kind(), ErrorKind::MalformedUri);
        assert_eq!(err.input(), Some("not a url!!"));
        assert!(err.to_string().starts_with("malformed URI \"not a url!!\""));
    }

    #[test]
    fn conflicting_target_has_no_source() {
        let err = Error::conflicting_target();
        assert!(err.source().is_none());
        assert!(err.range_error().is_none());
    }
}
