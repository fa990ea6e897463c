// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concatenation across plain and styled text, and over optional operands.
//!
//! - Plain text joined with plain text stays plain.
//! - As soon as one operand is styled (shared or mutable), the result is a [`StyledString`]
//!   holding the left text followed by the right text, each with its own attributes.
//! - An absent operand contributes no text but still its type: two absent operands give an
//!   absent result, and a single present operand takes the form the two operand types join to.
//!   `concat(None::<SharedStyledString>, Some("b"))` is therefore styled.
//!
//! `+` is implemented for [`StyledString`], [`SharedStyledString`] and [`TextFragment`] on the
//! left, and for `&str` on the left of styled text. The optional forms go through
//! [`concat()`] and [`concat_plain`], since `Option` cannot carry operator impls from this crate.

use std::ops::{Add, AddAssign};

use crate::{FragmentKind, SharedStyledString, StyledString, TextFragment};

/// An operand of [`concat()`], with the form its type stands for.
pub trait TextLike: Into<TextFragment> {
    /// The least form a value of this type takes.
    ///
    /// [`TextFragment`] decides its form per value, so its `KIND` is [`FragmentKind::Plain`].
    const KIND: FragmentKind;
}

impl TextLike for &str {
    const KIND: FragmentKind = FragmentKind::Plain;
}

impl TextLike for String {
    const KIND: FragmentKind = FragmentKind::Plain;
}

impl TextLike for SharedStyledString {
    const KIND: FragmentKind = FragmentKind::Styled;
}

impl TextLike for StyledString {
    const KIND: FragmentKind = FragmentKind::MutableStyled;
}

impl TextLike for TextFragment {
    const KIND: FragmentKind = FragmentKind::Plain;
}

/// Text that can be appended to a [`StyledString`], attributes included.
pub trait Appendable {
    /// Appends `self` after the end of `target`.
    fn append_to(self, target: &mut StyledString);
}

impl Appendable for &str {
    fn append_to(self, target: &mut StyledString) {
        target.push_str(self);
    }
}

impl Appendable for String {
    fn append_to(self, target: &mut StyledString) {
        target.push_str(&self);
    }
}

impl Appendable for &StyledString {
    fn append_to(self, target: &mut StyledString) {
        target.append(self);
    }
}

impl Appendable for StyledString {
    fn append_to(self, target: &mut Self) {
        target.append(&self);
    }
}

impl Appendable for &SharedStyledString {
    fn append_to(self, target: &mut StyledString) {
        target.append(self);
    }
}

impl Appendable for SharedStyledString {
    fn append_to(self, target: &mut StyledString) {
        target.append(&self);
    }
}

impl Appendable for &TextFragment {
    fn append_to(self, target: &mut StyledString) {
        match self {
            TextFragment::Plain(text) => target.push_str(text),
            TextFragment::Styled(styled) => target.append(styled),
            TextFragment::MutableStyled(styled) => target.append(styled),
        }
    }
}

impl Appendable for TextFragment {
    fn append_to(self, target: &mut StyledString) {
        (&self).append_to(target);
    }
}

impl<R: Appendable> Add<R> for StyledString {
    type Output = Self;

    fn add(mut self, rhs: R) -> Self {
        rhs.append_to(&mut self);
        self
    }
}

impl<R: Appendable> Add<R> for &StyledString {
    type Output = StyledString;

    fn add(self, rhs: R) -> StyledString {
        self.clone() + rhs
    }
}

impl<R: Appendable> Add<R> for SharedStyledString {
    type Output = StyledString;

    fn add(self, rhs: R) -> StyledString {
        self.into_mutable() + rhs
    }
}

impl<R: Appendable> Add<R> for &SharedStyledString {
    type Output = StyledString;

    fn add(self, rhs: R) -> StyledString {
        self.to_mutable() + rhs
    }
}

impl<R: Appendable> AddAssign<R> for StyledString {
    fn add_assign(&mut self, rhs: R) {
        rhs.append_to(self);
    }
}

impl Add<StyledString> for &str {
    type Output = StyledString;

    fn add(self, rhs: StyledString) -> StyledString {
        StyledString::new(self) + rhs
    }
}

impl Add<&StyledString> for &str {
    type Output = StyledString;

    fn add(self, rhs: &StyledString) -> StyledString {
        StyledString::new(self) + rhs
    }
}

impl Add<SharedStyledString> for &str {
    type Output = StyledString;

    fn add(self, rhs: SharedStyledString) -> StyledString {
        StyledString::new(self) + rhs
    }
}

impl<R: Into<TextFragment>> Add<R> for TextFragment {
    type Output = Self;

    fn add(self, rhs: R) -> Self {
        match (self, rhs.into()) {
            (Self::Plain(mut lhs), Self::Plain(rhs)) => {
                lhs.push_str(&rhs);
                Self::Plain(lhs)
            }
            (lhs, rhs) => Self::MutableStyled(lhs.into_mutable() + rhs),
        }
    }
}

/// Concatenates two optional pieces of text.
///
/// The result form is the join of both operand types, even when one of them is absent.
///
/// ```
/// use styled_strings::{SharedStyledString, StyledString, TextFragment, attrs, concat};
///
/// assert_eq!(concat(None::<&str>, None::<&str>), None);
/// assert_eq!(concat(Some("a"), None::<&str>), Some(TextFragment::from("a")));
/// assert_eq!(concat(Some("a"), Some("b")), Some(TextFragment::from("ab")));
///
/// let bold = StyledString::with_attributes("x", &attrs::kern(1.0)).into_shared();
/// let joined = concat(None::<&str>, Some(bold.clone())).unwrap();
/// assert_eq!(joined, TextFragment::MutableStyled(bold.to_mutable()));
///
/// let absent = None::<SharedStyledString>;
/// let promoted = concat(absent, Some("b")).unwrap();
/// assert_eq!(promoted, TextFragment::MutableStyled(StyledString::new("b")));
/// ```
pub fn concat<L, R>(lhs: Option<L>, rhs: Option<R>) -> Option<TextFragment>
where
    L: TextLike,
    R: TextLike,
{
    let kind = L::KIND.join(R::KIND);
    match (lhs.map(Into::into), rhs.map(Into::into)) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(promote(only, kind)),
        (Some(lhs), Some(rhs)) => Some(promote(lhs + rhs, kind)),
    }
}

/// Concatenates two optional plain strings.
pub fn concat_plain(lhs: Option<&str>, rhs: Option<&str>) -> Option<String> {
    match (lhs, rhs) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
        (Some(lhs), Some(rhs)) => Some([lhs, rhs].concat()),
    }
}

/// Plain text stays plain only when `kind` is plain too; anything else becomes mutable.
fn promote(fragment: TextFragment, kind: FragmentKind) -> TextFragment {
    match fragment.kind().join(kind) {
        FragmentKind::Plain => fragment,
        _ => TextFragment::MutableStyled(fragment.into_mutable()),
    }
}

/// Extension methods for optional text.
pub trait OptionTextExt {
    /// The text, or empty mutable styled text when absent.
    fn or_empty(self) -> TextFragment;
}

impl<T: Into<TextFragment>> OptionTextExt for Option<T> {
    fn or_empty(self) -> TextFragment {
        self.map_or_else(TextFragment::empty_mutable_styled, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionTextExt, concat, concat_plain};
    use crate::{
        Attribute, Font, FontWeight, FragmentKind, SharedStyledString, StyleKey, StyledString,
        TextFragment, attrs,
    };

    fn bold() -> crate::AttributeSet {
        attrs::font(Font::system(12.0).with_weight(FontWeight::BOLD))
    }

    #[test]
    fn absent_operands() {
        assert_eq!(concat_plain(None, None), None);
        assert_eq!(concat_plain(None, Some("b")).as_deref(), Some("b"));
        assert_eq!(concat_plain(Some("a"), None).as_deref(), Some("a"));
        assert_eq!(concat_plain(Some("a"), Some("b")).as_deref(), Some("ab"));
    }

    #[test]
    fn plain_stays_plain() {
        let joined = concat(Some("a"), Some(String::from("b"))).unwrap();
        assert_eq!(joined.kind(), FragmentKind::Plain);
        assert_eq!(joined.as_str(), "ab");
        let single = concat(None::<&str>, Some("b")).unwrap();
        assert_eq!(single.kind(), FragmentKind::Plain);
    }

    #[test]
    fn styled_operand_promotes() {
        let shared = StyledString::with_attributes("x", &bold()).into_shared();
        let joined = concat(Some("a"), Some(shared.clone())).unwrap();
        assert_eq!(joined.kind(), FragmentKind::MutableStyled);
        let styled = joined.into_mutable();
        assert_eq!(styled.as_str(), "ax");
        assert!(styled.attributes_at(0).is_empty());
        assert!(styled.attributes_at(1).contains(StyleKey::Font));

        let alone = concat(Some(shared.clone()), None::<&str>).unwrap();
        assert_eq!(alone, TextFragment::MutableStyled(shared.to_mutable()));
    }

    #[test]
    fn absent_styled_operand_decides_the_form() {
        let joined = concat(None::<SharedStyledString>, Some("b")).unwrap();
        assert_eq!(joined.kind(), FragmentKind::MutableStyled);
        assert_eq!(joined.into_mutable(), StyledString::new("b"));

        let joined = concat(Some(String::from("a")), None::<StyledString>).unwrap();
        assert_eq!(joined, TextFragment::MutableStyled(StyledString::new("a")));

        // Fragments carry their form per value.
        let joined = concat(Some("a"), None::<TextFragment>).unwrap();
        assert_eq!(joined.kind(), FragmentKind::Plain);
        assert_eq!(concat(None::<StyledString>, None::<&str>), None);
    }

    #[test]
    fn attributes_stay_with_their_text() {
        let lhs = StyledString::with_attributes("A", &bold());
        let joined = &lhs + "B";
        assert_eq!(joined.as_str(), "AB");
        assert_eq!(
            joined.attributes_at(0).get(StyleKey::Font),
            bold().get(StyleKey::Font)
        );
        assert!(joined.attributes_at(1).is_empty());
        // The borrowed left operand is untouched.
        assert_eq!(lhs.as_str(), "A");
    }

    #[test]
    fn right_attributes_are_shifted() {
        let rhs = StyledString::with_attributes("cd", &attrs::kern(1.0));
        let joined = "ab" + &rhs;
        let runs: Vec<_> = joined
            .runs()
            .into_iter()
            .map(|run| (run.range.as_range(), run.attributes.get(StyleKey::Kern).cloned()))
            .collect();
        assert_eq!(runs, [(0..2, None), (2..4, Some(Attribute::Kern(1.0)))]);
    }

    #[test]
    fn add_assign_appends_in_place() {
        let mut text = StyledString::new("a");
        text += "b";
        text += StyledString::with_attributes("c", &attrs::kern(1.0));
        assert_eq!(text.as_str(), "abc");
        assert!(text.attributes_at(2).contains(StyleKey::Kern));
    }

    #[test]
    fn fragments_join_by_kind() {
        let plain = TextFragment::from("a") + "b";
        assert_eq!(plain, TextFragment::Plain("ab".into()));
        let styled = TextFragment::from("a") + StyledString::new("b").into_shared();
        assert_eq!(styled.kind(), FragmentKind::MutableStyled);
    }

    #[test]
    fn or_empty() {
        assert_eq!(
            None::<&str>.or_empty(),
            TextFragment::empty_mutable_styled()
        );
        assert_eq!(Some("x").or_empty(), TextFragment::from("x"));
    }
}
