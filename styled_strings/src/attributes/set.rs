// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::ops::{Add, AddAssign};

use peniko::Color;
use smallvec::SmallVec;

use super::{
    Attachment, Attribute, Font, GlyphForm, Ligatures, LineStyle, Link, Shadow, StyleKey,
    TextEffect, WritingDirection,
};
use crate::{ParagraphStyle, ParagraphStyleOp};

/// A set of attributes with at most one entry per [`StyleKey`].
///
/// Entries are kept in key order, so two sets holding the same attributes compare equal no matter
/// how they were built.
///
/// ```
/// use styled_strings::{Attribute, AttributeSet, Font, StyleKey, attrs};
/// use peniko::color::palette::css;
///
/// let title = AttributeSet::new()
///     .font(Font::system(24.0))
///     .foreground_color(css::BLACK);
/// let warning = title.clone() + attrs::foreground_color(css::RED);
///
/// assert_eq!(warning.len(), 2);
/// assert_eq!(
///     warning.get(StyleKey::ForegroundColor),
///     Some(&Attribute::ForegroundColor(css::RED))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    attributes: SmallVec<[Attribute; 4]>,
}

impl AttributeSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the set holds no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Iterates over the keys present, in order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = StyleKey> + '_ {
        self.attributes.iter().map(Attribute::key)
    }

    fn position(&self, key: StyleKey) -> Result<usize, usize> {
        self.attributes.binary_search_by_key(&key, Attribute::key)
    }

    /// The attribute stored under `key`.
    pub fn get(&self, key: StyleKey) -> Option<&Attribute> {
        self.position(key).ok().map(|ix| &self.attributes[ix])
    }

    /// Returns `true` if an attribute is stored under `key`.
    pub fn contains(&self, key: StyleKey) -> bool {
        self.position(key).is_ok()
    }

    /// The paragraph style attribute, if present.
    pub fn find_paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(StyleKey::ParagraphStyle) {
            Some(Attribute::ParagraphStyle(style)) => Some(style),
            _ => None,
        }
    }

    /// Stores `attribute`, replacing any attribute with the same key wholesale.
    ///
    /// Returns the replaced attribute.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        match self.position(attribute.key()) {
            Ok(ix) => Some(core::mem::replace(&mut self.attributes[ix], attribute)),
            Err(ix) => {
                self.attributes.insert(ix, attribute);
                None
            }
        }
    }

    /// Removes the attribute stored under `key`.
    pub fn remove(&mut self, key: StyleKey) -> Option<Attribute> {
        self.position(key)
            .ok()
            .map(|ix| self.attributes.remove(ix))
    }

    /// Right-biased merge in place: every attribute of `other` replaces the entry with its key.
    pub fn merge_from(&mut self, other: &Self) {
        for attribute in &other.attributes {
            self.insert(attribute.clone());
        }
    }

    /// Right-biased merge: `other`'s attributes win on key collisions.
    ///
    /// Merging is associative but not commutative.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.merge_from(other);
        self
    }

    /// Merges every set in `sets`, in order, onto this one.
    #[must_use]
    pub fn apply(self, sets: impl IntoIterator<Item = Self>) -> Self {
        self + sets.into_iter().collect::<Self>()
    }

    /// Folds `ops` onto this set's paragraph style (the default style if there is none) and
    /// stores the result back into the set.
    #[must_use]
    pub fn mutate_paragraph_style(self, ops: impl IntoIterator<Item = ParagraphStyleOp>) -> Self {
        let style = self.find_paragraph_style().cloned().unwrap_or_default();
        self.paragraph_style(style.mutate(ops))
    }

    /// Adds or replaces a single attribute.
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.insert(attribute);
        self
    }

    /// Sets [`Attribute::Font`].
    #[must_use]
    pub fn font(self, font: Font) -> Self {
        self.with(Attribute::Font(font))
    }

    /// Sets [`Attribute::ParagraphStyle`], replacing any previous paragraph style.
    #[must_use]
    pub fn paragraph_style(self, style: ParagraphStyle) -> Self {
        self.with(Attribute::ParagraphStyle(style))
    }

    /// Sets [`Attribute::ForegroundColor`].
    #[must_use]
    pub fn foreground_color(self, color: Color) -> Self {
        self.with(Attribute::ForegroundColor(color))
    }

    /// Sets [`Attribute::BackgroundColor`].
    #[must_use]
    pub fn background_color(self, color: Color) -> Self {
        self.with(Attribute::BackgroundColor(color))
    }

    /// Sets [`Attribute::Ligature`].
    #[must_use]
    pub fn ligature(self, ligatures: Ligatures) -> Self {
        self.with(Attribute::Ligature(ligatures))
    }

    /// Sets [`Attribute::Kern`].
    #[must_use]
    pub fn kern(self, kern: f32) -> Self {
        self.with(Attribute::Kern(kern))
    }

    /// Sets [`Attribute::Tracking`].
    #[must_use]
    pub fn tracking(self, tracking: f32) -> Self {
        self.with(Attribute::Tracking(tracking))
    }

    /// Sets [`Attribute::StrikethroughStyle`].
    #[must_use]
    pub fn strikethrough_style(self, style: LineStyle) -> Self {
        self.with(Attribute::StrikethroughStyle(style))
    }

    /// Sets [`Attribute::UnderlineStyle`].
    #[must_use]
    pub fn underline_style(self, style: LineStyle) -> Self {
        self.with(Attribute::UnderlineStyle(style))
    }

    /// Sets [`Attribute::StrokeColor`].
    #[must_use]
    pub fn stroke_color(self, color: Color) -> Self {
        self.with(Attribute::StrokeColor(color))
    }

    /// Sets [`Attribute::StrokeWidth`].
    #[must_use]
    pub fn stroke_width(self, width: f32) -> Self {
        self.with(Attribute::StrokeWidth(width))
    }

    /// Sets [`Attribute::Shadow`].
    #[must_use]
    pub fn shadow(self, shadow: Shadow) -> Self {
        self.with(Attribute::Shadow(shadow))
    }

    /// Sets [`Attribute::TextEffect`].
    #[must_use]
    pub fn text_effect(self, effect: TextEffect) -> Self {
        self.with(Attribute::TextEffect(effect))
    }

    /// Sets [`Attribute::Attachment`].
    #[must_use]
    pub fn attachment(self, attachment: Attachment) -> Self {
        self.with(Attribute::Attachment(attachment))
    }

    /// Sets [`Attribute::Link`].
    #[must_use]
    pub fn link(self, link: impl Into<Link>) -> Self {
        self.with(Attribute::Link(link.into()))
    }

    /// Sets [`Attribute::BaselineOffset`].
    #[must_use]
    pub fn baseline_offset(self, offset: f32) -> Self {
        self.with(Attribute::BaselineOffset(offset))
    }

    /// Sets [`Attribute::UnderlineColor`].
    #[must_use]
    pub fn underline_color(self, color: Color) -> Self {
        self.with(Attribute::UnderlineColor(color))
    }

    /// Sets [`Attribute::StrikethroughColor`].
    #[must_use]
    pub fn strikethrough_color(self, color: Color) -> Self {
        self.with(Attribute::StrikethroughColor(color))
    }

    /// Sets [`Attribute::Obliqueness`].
    #[must_use]
    pub fn obliqueness(self, obliqueness: f32) -> Self {
        self.with(Attribute::Obliqueness(obliqueness))
    }

    /// Sets [`Attribute::Expansion`].
    #[must_use]
    pub fn expansion(self, expansion: f32) -> Self {
        self.with(Attribute::Expansion(expansion))
    }

    /// Sets [`Attribute::WritingDirection`].
    #[must_use]
    pub fn writing_direction(self, levels: impl IntoIterator<Item = WritingDirection>) -> Self {
        self.with(Attribute::WritingDirection(levels.into_iter().collect()))
    }

    /// Sets [`Attribute::VerticalGlyphForm`].
    #[must_use]
    pub fn vertical_glyph_form(self, form: GlyphForm) -> Self {
        self.with(Attribute::VerticalGlyphForm(form))
    }
}

impl From<Attribute> for AttributeSet {
    fn from(attribute: Attribute) -> Self {
        Self::new().with(attribute)
    }
}

impl FromIterator<Attribute> for AttributeSet {
    /// Later attributes replace earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl FromIterator<Self> for AttributeSet {
    /// Folds the sets with right-biased merges, starting from the empty set.
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, set| acc + set)
    }
}

impl Add for AttributeSet {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for attribute in rhs.attributes {
            self.insert(attribute);
        }
        self
    }
}

impl Add<&Self> for AttributeSet {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        self.merge(rhs)
    }
}

impl AddAssign for AttributeSet {
    fn add_assign(&mut self, rhs: Self) {
        for attribute in rhs.attributes {
            self.insert(attribute);
        }
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = smallvec::IntoIter<[Attribute; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for attribute in &self.attributes {
            write!(f, " {attribute};")?;
        }
        f.write_str(" }")
    }
}
