// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{Error, Segments, TextRange};

/// Owned text with attributes applied to byte ranges.
///
/// Attributes are kept in the order they were applied, and may overlap. Resolving overlapping
/// attributes into a single effective value is left to the caller; [`segments`] reports the
/// spans active over each piece of the text in application order, so that the later span can
/// win.
///
/// [`segments`]: AttributedText::segments
#[derive(Clone, Debug, Default)]
pub struct AttributedText<Attr: Debug> {
    text: String,
    attributes: Vec<(TextRange, Attr)>,
}

impl<Attr: Debug> AttributedText<Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Borrow the underlying text as `&str`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The range spanning the whole text.
    pub fn full_range(&self) -> TextRange {
        TextRange::full(&self.text)
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Finds the first occurrence of `needle`.
    ///
    /// The search is literal and case-sensitive. An empty needle matches at the start.
    pub fn find(&self, needle: &str) -> Option<TextRange> {
        self.text
            .find(needle)
            .map(|start| TextRange::new_unchecked(start, start + needle.len()))
    }

    /// Apply an `attribute` to a validated `range`.
    ///
    /// Applying to an empty range records nothing. Returns whether a span was recorded.
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) -> bool {
        debug_assert!(
            range.end() <= self.text.len(),
            "range {range} was validated against a different text (len {})",
            self.text.len()
        );
        if range.is_empty() {
            return false;
        }
        self.attributes.push((range, attribute));
        true
    }

    /// Apply an `attribute` to a raw byte `range`, validating it first.
    pub fn apply_attribute_bytes(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
    ) -> Result<bool, Error> {
        let range = self.range(range)?;
        Ok(self.apply_attribute(range, attribute))
    }

    /// Iterate over all attributes and the ranges they apply to, in application order.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (TextRange, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (*range, attr))
    }

    /// Attributes covering byte `index`, in application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(range, _)| range.start() <= index && index < range.end())
            .map(|(_, attr)| attr)
    }

    /// Attributes overlapping `range`, in application order.
    pub fn attributes_for_range(&self, range: TextRange) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(span, _)| span.start() < range.end() && span.end() > range.start())
            .map(|(_, attr)| attr)
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Keeps only the spans for which `keep` returns `true`, in application order.
    ///
    /// `keep` may edit the attribute it is given.
    pub fn retain_attributes(&mut self, mut keep: impl FnMut(TextRange, &mut Attr) -> bool) {
        self.attributes.retain_mut(|(range, attr)| keep(*range, attr));
    }

    /// Appends unattributed text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends `other`'s text and its attribute spans, moved past the current end.
    pub fn append(&mut self, other: &Self)
    where
        Attr: Clone,
    {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.attributes.extend(
            other
                .attributes
                .iter()
                .map(|(range, attr)| (range.shifted(offset), attr.clone())),
        );
    }

    /// Splits the text into contiguous segments at every span boundary.
    ///
    /// See [`Segments`].
    pub fn segments(&self) -> Segments<'_, Attr> {
        Segments::new(self)
    }
}
