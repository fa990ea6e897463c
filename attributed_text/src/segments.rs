// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary segmentation for [`AttributedText`].
//!
//! Overlapping attribute spans are cut into non-overlapping, contiguous segments. Each segment
//! reports the spans active over it in application order.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::AttributedText;

/// A contiguous piece of text and the attributes active over all of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<'a, Attr> {
    range: Range<usize>,
    active: Vec<&'a Attr>,
}

impl<'a, Attr> Segment<'a, Attr> {
    /// The byte range of this segment. Never empty.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Active attributes in application order (first applied first).
    pub fn active(&self) -> &[&'a Attr] {
        &self.active
    }
}

/// Iterator over the segments of an [`AttributedText`].
///
/// Created by [`AttributedText::segments`]. Boundaries are the start and end of the text plus
/// the endpoints of every span, so an empty text has no segments and a text without spans has
/// exactly one.
///
/// ```
/// use attributed_text::AttributedText;
///
/// let mut text = AttributedText::new("hello");
/// text.apply_attribute_bytes(0..2, "red").unwrap();
/// text.apply_attribute_bytes(1..5, "blue").unwrap();
///
/// let segments: Vec<_> = text
///     .segments()
///     .map(|s| (s.range(), s.active().to_vec()))
///     .collect();
/// assert_eq!(
///     segments,
///     [
///         (0..1, vec![&"red"]),
///         (1..2, vec![&"red", &"blue"]),
///         (2..5, vec![&"blue"]),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Segments<'a, Attr: Debug> {
    attributed: &'a AttributedText<Attr>,
    boundaries: Vec<usize>,
    index: usize,
}

impl<'a, Attr: Debug> Segments<'a, Attr> {
    pub(crate) fn new(attributed: &'a AttributedText<Attr>) -> Self {
        let mut boundaries = Vec::with_capacity(2 + attributed.attributes_len() * 2);
        boundaries.push(0);
        boundaries.push(attributed.len());
        for (range, _) in attributed.attributes_iter() {
            boundaries.push(range.start());
            boundaries.push(range.end());
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            attributed,
            boundaries,
            index: 0,
        }
    }
}

impl<'a, Attr: Debug> Iterator for Segments<'a, Attr> {
    type Item = Segment<'a, Attr>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&start, &end) = (
            self.boundaries.get(self.index)?,
            self.boundaries.get(self.index + 1)?,
        );
        self.index += 1;
        let active = self
            .attributed
            .attributes_iter()
            .filter(|(range, _)| range.start() < end && range.end() > start)
            .map(|(_, attr)| attr)
            .collect();
        Some(Segment {
            range: start..end,
            active,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.boundaries.len().saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }
}

impl<Attr: Debug> ExactSizeIterator for Segments<'_, Attr> {}

#[cfg(test)]
mod tests {
    use crate::AttributedText;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Color {
        Red,
        Blue,
        Green,
    }

    #[test]
    fn empty_text_has_no_segments() {
        let at = AttributedText::<Color>::new("");
        assert_eq!(at.segments().len(), 0);
        assert!(at.segments().next().is_none());
    }

    #[test]
    fn unstyled_text_is_one_segment() {
        let at = AttributedText::<Color>::new("hello");
        let segments: Vec<_> = at.segments().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].range(), 0..5);
        assert!(segments[0].active().is_empty());
    }

    #[test]
    fn overlapping_spans_keep_order() {
        let mut at = AttributedText::new("abcdef");
        at.apply_attribute_bytes(0..6, Color::Red).unwrap();
        at.apply_attribute_bytes(2..4, Color::Blue).unwrap();
        at.apply_attribute_bytes(0..6, Color::Green).unwrap();

        let mut segments = at.segments();
        assert_eq!(segments.size_hint(), (3, Some(3)));

        let first = segments.next().unwrap();
        assert_eq!(first.range(), 0..2);
        assert_eq!(first.active(), [&Color::Red, &Color::Green]);

        let middle = segments.next().unwrap();
        assert_eq!(middle.range(), 2..4);
        assert_eq!(middle.active(), [&Color::Red, &Color::Blue, &Color::Green]);

        let last = segments.next().unwrap();
        assert_eq!(last.range(), 4..6);
        assert_eq!(segments.len(), 0);
        assert!(segments.next().is_none());
    }

    #[test]
    fn adjacent_spans_do_not_bleed() {
        let mut at = AttributedText::new("abcdef");
        at.apply_attribute_bytes(0..3, Color::Red).unwrap();
        at.apply_attribute_bytes(3..6, Color::Blue).unwrap();
        let active: Vec<_> = at.segments().map(|s| s.active().to_vec()).collect();
        assert_eq!(active, [[&Color::Red], [&Color::Blue]]);
    }
}
