// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use crate::{SharedStyledString, StyledString};

/// Any of the three forms of text the styling operations accept.
///
/// Every form converts to the canonical [`StyledString`] with [`into_mutable`]: plain text
/// becomes unstyled text, shared styled text is copied, and a `MutableStyled` value is handed
/// over as is.
///
/// [`into_mutable`]: TextFragment::into_mutable
#[derive(Clone, Debug, PartialEq)]
pub enum TextFragment {
    /// Text without attributes.
    Plain(String),
    /// Immutable styled text.
    Styled(SharedStyledString),
    /// Owned, mutable styled text.
    MutableStyled(StyledString),
}

/// The form of a [`TextFragment`], ordered by promotion.
///
/// Combining two forms yields the greater of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    /// [`TextFragment::Plain`].
    Plain,
    /// [`TextFragment::Styled`].
    Styled,
    /// [`TextFragment::MutableStyled`].
    MutableStyled,
}

impl FragmentKind {
    /// The form that both `self` and `other` promote to.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        self.max(other)
    }
}

impl TextFragment {
    /// Empty, unstyled [`TextFragment::MutableStyled`] text.
    pub fn empty_mutable_styled() -> Self {
        Self::MutableStyled(StyledString::empty())
    }

    /// The form of this fragment.
    pub fn kind(&self) -> FragmentKind {
        match self {
            Self::Plain(_) => FragmentKind::Plain,
            Self::Styled(_) => FragmentKind::Styled,
            Self::MutableStyled(_) => FragmentKind::MutableStyled,
        }
    }

    /// The raw text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Styled(styled) => styled.as_str(),
            Self::MutableStyled(styled) => styled.as_str(),
        }
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// The raw text, with any attributes dropped.
    pub fn to_plain_text(&self) -> String {
        self.as_str().to_owned()
    }

    /// An immutable styled view of the fragment.
    pub fn to_styled(&self) -> SharedStyledString {
        match self {
            Self::Plain(text) => StyledString::new(text.as_str()).into_shared(),
            Self::Styled(styled) => styled.clone(),
            Self::MutableStyled(styled) => styled.clone().into_shared(),
        }
    }

    /// A fresh mutable copy, leaving this fragment untouched.
    pub fn to_mutable(&self) -> StyledString {
        match self {
            Self::Plain(text) => StyledString::new(text.as_str()),
            Self::Styled(styled) => styled.to_mutable(),
            Self::MutableStyled(styled) => styled.clone(),
        }
    }

    /// The canonical mutable form.
    ///
    /// A `MutableStyled` fragment gives up its own value; the other forms allocate.
    pub fn into_mutable(self) -> StyledString {
        match self {
            Self::Plain(text) => StyledString::new(text),
            Self::Styled(styled) => styled.to_mutable(),
            Self::MutableStyled(styled) => styled,
        }
    }
}

impl Default for TextFragment {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for TextFragment {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for TextFragment {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<SharedStyledString> for TextFragment {
    fn from(styled: SharedStyledString) -> Self {
        Self::Styled(styled)
    }
}

impl From<StyledString> for TextFragment {
    fn from(styled: StyledString) -> Self {
        Self::MutableStyled(styled)
    }
}

impl From<TextFragment> for StyledString {
    fn from(fragment: TextFragment) -> Self {
        fragment.into_mutable()
    }
}

impl fmt::Display for TextFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FragmentKind, TextFragment};
    use crate::{StyleKey, StyledString, attrs};

    #[test]
    fn promotion_order() {
        assert!(FragmentKind::Plain < FragmentKind::Styled);
        assert!(FragmentKind::Styled < FragmentKind::MutableStyled);
        assert_eq!(
            FragmentKind::Plain.join(FragmentKind::Styled),
            FragmentKind::Styled
        );
        assert_eq!(
            FragmentKind::MutableStyled.join(FragmentKind::Plain),
            FragmentKind::MutableStyled
        );
    }

    #[test]
    fn plain_converts_to_unstyled() {
        let fragment = TextFragment::from("plain");
        let styled = fragment.to_mutable();
        assert_eq!(styled.as_str(), "plain");
        assert_eq!(styled.spans().len(), 0);
        assert_eq!(fragment.to_styled().as_str(), "plain");
    }

    #[test]
    fn styled_conversion_keeps_attributes() {
        let shared = StyledString::with_attributes("ab", &attrs::kern(1.0)).into_shared();
        let fragment = TextFragment::from(shared.clone());
        let mut mutable = fragment.into_mutable();
        assert!(mutable.attributes_at(0).contains(StyleKey::Kern));

        // The copy is independent of the shared original.
        mutable.push_str("c");
        assert_eq!(shared.as_str(), "ab");
    }

    #[test]
    fn mutable_is_handed_over() {
        let styled = StyledString::with_attributes("x", &attrs::tracking(2.0));
        let fragment = TextFragment::from(styled.clone());
        assert_eq!(fragment.kind(), FragmentKind::MutableStyled);
        assert_eq!(fragment.into_mutable(), styled);
    }

    #[test]
    fn plain_text_drops_attributes() {
        let fragment = TextFragment::from(StyledString::with_attributes("hi", &attrs::kern(1.0)));
        assert_eq!(fragment.to_plain_text(), "hi");
        assert!(TextFragment::empty_mutable_styled().is_empty());
    }
}
