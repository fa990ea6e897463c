// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use attributed_text::{AttributedText, TextRange};
use url::Url;

use crate::{Attribute, AttributeSet, Error, Link, ParagraphStyle, ParagraphStyleOp, Target};

/// Owned, mutable styled text: a string plus attribute sets applied to byte ranges.
///
/// Attribute sets are stored in the order they were applied and may overlap. The effective style
/// at any position is the right-biased merge of every set covering it, so a later write wins key
/// by key and keys it does not mention are left alone.
///
/// ```
/// use styled_strings::{Font, StyleKey, StyledString, attrs};
///
/// let mut title = StyledString::new("Title");
/// title.try_apply(&attrs::font(Font::system(24.0)), ..).unwrap();
/// title.try_apply(&attrs::kern(1.0), "le").unwrap();
///
/// assert!(title.attributes_at(0).contains(StyleKey::Font));
/// assert!(!title.attributes_at(0).contains(StyleKey::Kern));
/// assert!(title.attributes_at(3).contains(StyleKey::Kern));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledString {
    text: AttributedText<AttributeSet>,
}

/// A maximal range of a [`StyledString`] over which the effective attributes do not change.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// Byte range covered by the run. Never empty.
    pub range: TextRange,
    /// Effective attributes over the whole run.
    pub attributes: AttributeSet,
}

impl StyledString {
    /// Creates styled text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: AttributedText::new(text),
        }
    }

    /// Empty styled text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates styled text with `attributes` over all of it.
    pub fn with_attributes(text: impl Into<String>, attributes: &AttributeSet) -> Self {
        let mut styled = Self::new(text);
        let full = styled.full_range();
        styled.add_attributes(full, attributes);
        styled
    }

    /// The plain text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The range spanning the whole text.
    pub fn full_range(&self) -> TextRange {
        self.text.full_range()
    }

    /// The effective attributes at byte `index`.
    ///
    /// Empty when `index` is past the end of the text.
    pub fn attributes_at(&self, index: usize) -> AttributeSet {
        self.text
            .attributes_at(index)
            .fold(AttributeSet::new(), AttributeSet::merge)
    }

    /// The effective paragraph style at byte `index`, if one is attached there.
    pub fn paragraph_style_at(&self, index: usize) -> Option<ParagraphStyle> {
        self.text
            .attributes_at(index)
            .filter_map(AttributeSet::find_paragraph_style)
            .last()
            .cloned()
    }

    /// Raw attribute spans in application order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (TextRange, &AttributeSet)> {
        self.text.attributes_iter()
    }

    /// Splits the text into runs of equal effective attributes.
    ///
    /// Adjacent segments that resolve to the same attributes are coalesced. Unstyled stretches
    /// are reported as runs with an empty set.
    ///
    /// Each segment rescans every span, so this is quadratic in the number of spans.
    pub fn runs(&self) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::new();
        for segment in self.text.segments() {
            let attributes = segment
                .active()
                .iter()
                .fold(AttributeSet::new(), |acc, set| acc.merge(set));
            let range = segment.range();
            match runs.last_mut() {
                Some(last) if last.attributes == attributes => {
                    last.range = TextRange::new_unchecked(last.range.start(), range.end);
                }
                _ => runs.push(StyleRun {
                    range: TextRange::new_unchecked(range.start, range.end),
                    attributes,
                }),
            }
        }
        runs
    }

    /// Writes `attributes` over a validated `range`.
    ///
    /// Writing an empty set, or over an empty range, records nothing. Returns whether anything
    /// was recorded.
    ///
    /// Earlier spans lying inside `range` lose the keys this write sets, and are dropped once
    /// empty, so restyling the same text does not grow the span list.
    pub fn add_attributes(&mut self, range: TextRange, attributes: &AttributeSet) -> bool {
        if attributes.is_empty() || range.is_empty() {
            return false;
        }
        self.text.retain_attributes(|span, existing| {
            if range.start() <= span.start() && span.end() <= range.end() {
                for key in attributes.keys() {
                    existing.remove(key);
                }
            }
            !existing.is_empty()
        });
        self.text.apply_attribute(range, attributes.clone())
    }

    /// Writes `attributes` over the resolved `target`.
    ///
    /// Returns the range that was resolved; it is empty when a substring target was not found,
    /// in which case nothing is written.
    pub fn try_apply<'t>(
        &mut self,
        attributes: &AttributeSet,
        target: impl Into<Target<'t>>,
    ) -> Result<TextRange, Error> {
        let range = target.into().resolve(self.as_str())?;
        self.add_attributes(range, attributes);
        Ok(range)
    }

    /// Edits the paragraph style and writes it back over the resolved `target`.
    ///
    /// The style that is edited is the one attached at the start of the whole text, whatever
    /// the target is; when there is none the default style is used. Empty text is left
    /// unchanged, as is a target that resolves to an empty range.
    pub fn try_mutate_paragraph_style<'t>(
        &mut self,
        ops: impl IntoIterator<Item = ParagraphStyleOp>,
        target: impl Into<Target<'t>>,
    ) -> Result<TextRange, Error> {
        let range = target.into().resolve(self.as_str())?;
        if self.is_empty() || range.is_empty() {
            return Ok(range);
        }
        let style = self.paragraph_style_at(0).unwrap_or_default().mutate(ops);
        self.add_attributes(range, &Attribute::ParagraphStyle(style).into());
        Ok(range)
    }

    /// Parses the whole text as a URL and links all of it there.
    pub fn try_as_link(&mut self) -> Result<(), Error> {
        let url =
            Url::parse(self.as_str()).map_err(|err| Error::malformed_uri(self.as_str(), err))?;
        let full = self.full_range();
        self.add_attributes(full, &Attribute::Link(Link::Url(url)).into());
        Ok(())
    }

    /// Appends unstyled text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends `other`, carrying its attributes along.
    pub fn append(&mut self, other: &Self) {
        self.text.append(&other.text);
    }

    /// Freezes this text into a cheaply clonable, immutable value.
    pub fn into_shared(self) -> SharedStyledString {
        SharedStyledString(Arc::new(self))
    }

    /// A human-readable rendering of the text and its runs.
    pub fn describe(&self) -> Describe<'_> {
        Describe(self)
    }
}

impl PartialEq for StyledString {
    /// Equal text and equal effective attributes everywhere, however the spans were written.
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.runs() == other.runs()
    }
}

impl fmt::Display for StyledString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StyledString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Rendering returned by [`StyledString::describe`].
#[derive(Clone, Copy, Debug)]
pub struct Describe<'a>(&'a StyledString);

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.as_str();
        write!(f, "{text:?}")?;
        for run in self.0.runs() {
            if run.attributes.is_empty() {
                continue;
            }
            write!(f, " {:?} {}", &text[run.range.as_range()], run.attributes)?;
        }
        Ok(())
    }
}

/// Immutable styled text, shared by reference counting.
///
/// Obtained from [`StyledString::into_shared`]. Styling operations on a shared value never
/// touch it; they work on a fresh [`StyledString`] copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedStyledString(Arc<StyledString>);

impl SharedStyledString {
    /// A mutable copy of the text and its attributes.
    pub fn to_mutable(&self) -> StyledString {
        StyledString::clone(&self.0)
    }

    /// The mutable value, without copying if this is the only reference.
    pub fn into_mutable(self) -> StyledString {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| StyledString::clone(&shared))
    }
}

impl Deref for SharedStyledString {
    type Target = StyledString;

    fn deref(&self) -> &StyledString {
        &self.0
    }
}

impl From<StyledString> for SharedStyledString {
    fn from(styled: StyledString) -> Self {
        styled.into_shared()
    }
}

impl fmt::Display for SharedStyledString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use crate::{
        Attribute, AttributeSet, ErrorKind, Font, ParagraphStyleOp, StyleKey, StyledString,
        TextAlignment, attrs,
    };

    #[test]
    fn later_writes_win_key_by_key() {
        let mut text = StyledString::new("abcdef");
        text.try_apply(&(attrs::kern(1.0) + attrs::foreground_color(css::RED)), ..)
            .unwrap();
        text.try_apply(&attrs::kern(2.0), 2..4).unwrap();

        let at_zero = text.attributes_at(0);
        let at_three = text.attributes_at(3);
        assert_eq!(at_zero.get(StyleKey::Kern), Some(&Attribute::Kern(1.0)));
        assert_eq!(at_three.get(StyleKey::Kern), Some(&Attribute::Kern(2.0)));
        assert_eq!(
            at_three.get(StyleKey::ForegroundColor),
            Some(&Attribute::ForegroundColor(css::RED))
        );
    }

    #[test]
    fn restyling_replaces_covered_spans() {
        let mut text = StyledString::new("abcdef");
        for step in 0_u8..50 {
            text.try_apply(&attrs::kern(f32::from(step)), ..).unwrap();
        }
        assert_eq!(text.spans().len(), 1);
        assert_eq!(
            text.attributes_at(5).get(StyleKey::Kern),
            Some(&Attribute::Kern(49.0))
        );
    }

    #[test]
    fn covered_spans_keep_keys_not_rewritten() {
        let mut text = StyledString::new("abcdef");
        text.try_apply(&(attrs::kern(1.0) + attrs::foreground_color(css::RED)), 1..3)
            .unwrap();
        text.try_apply(&attrs::tracking(1.0), 0..6).unwrap();
        text.try_apply(&attrs::kern(2.0), 0..4).unwrap();

        let spans: Vec<_> = text
            .spans()
            .map(|(range, set)| (range.as_range(), set.keys().collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            spans,
            [
                (1..3, vec![StyleKey::ForegroundColor]),
                (0..6, vec![StyleKey::Tracking]),
                (0..4, vec![StyleKey::Kern]),
            ]
        );
        let at_two = text.attributes_at(2);
        assert_eq!(at_two.get(StyleKey::Kern), Some(&Attribute::Kern(2.0)));
        assert!(at_two.contains(StyleKey::ForegroundColor));
        assert!(at_two.contains(StyleKey::Tracking));
    }

    #[test]
    fn runs_coalesce_equal_neighbours() {
        let mut text = StyledString::new("abcdef");
        text.try_apply(&attrs::kern(1.0), 0..3).unwrap();
        text.try_apply(&attrs::kern(1.0), 3..5).unwrap();

        let runs: Vec<_> = text.runs().into_iter().map(|r| r.range.as_range()).collect();
        assert_eq!(runs, [0..5, 5..6]);
        assert!(text.runs()[1].attributes.is_empty());
    }

    #[test]
    fn equality_compares_effective_style() {
        let mut one = StyledString::new("ab");
        one.try_apply(&attrs::kern(1.0), 0..1).unwrap();
        one.try_apply(&attrs::kern(1.0), 1..2).unwrap();
        let two = StyledString::with_attributes("ab", &attrs::kern(1.0));
        assert_eq!(one, two);
        assert_ne!(one, StyledString::new("ab"));
    }

    #[test]
    fn empty_writes_record_nothing() {
        let mut text = StyledString::new("abc");
        assert!(!text.add_attributes(text.full_range(), &AttributeSet::new()));
        let range = text.try_apply(&attrs::kern(1.0), "zzz").unwrap();
        assert!(range.is_empty());
        assert_eq!(text.spans().len(), 0);
    }

    #[test]
    fn bad_range_leaves_text_untouched() {
        let mut text = StyledString::new("abc");
        let err = text.try_apply(&attrs::kern(1.0), 1..10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(text.spans().len(), 0);
    }

    #[test]
    fn paragraph_style_is_read_from_the_start() {
        let mut text = StyledString::new("one\ntwo");
        text.try_mutate_paragraph_style([ParagraphStyleOp::LineSpacing(4.0)], 0..4)
            .unwrap();
        text.try_mutate_paragraph_style(
            [ParagraphStyleOp::Alignment(TextAlignment::Right)],
            "two",
        )
        .unwrap();

        let second = text.paragraph_style_at(4).unwrap();
        // The line spacing was inherited from position 0.
        assert_eq!(second.line_spacing, 4.0);
        assert_eq!(second.alignment, TextAlignment::Right);
        let first = text.paragraph_style_at(0).unwrap();
        assert_eq!(first.alignment, TextAlignment::Natural);
    }

    #[test]
    fn paragraph_style_replaces_only_that_key() {
        let mut text = StyledString::with_attributes("Hi", &attrs::font(Font::system(12.0)));
        text.try_mutate_paragraph_style([ParagraphStyleOp::LineHeight(20.0)], ..)
            .unwrap();
        let set = text.attributes_at(1);
        assert!(set.contains(StyleKey::Font));
        assert_eq!(set.find_paragraph_style().unwrap().maximum_line_height, 20.0);
    }

    #[test]
    fn empty_text_keeps_no_paragraph_style() {
        let mut text = StyledString::empty();
        text.try_mutate_paragraph_style([ParagraphStyleOp::LineSpacing(1.0)], ..)
            .unwrap();
        assert_eq!(text.spans().len(), 0);

        let err = text
            .try_mutate_paragraph_style(
                [ParagraphStyleOp::LineSpacing(1.0)],
                crate::Target::range(0..0).with_substring(""),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingTarget);
    }

    #[test]
    fn as_link_parses_whole_text() {
        let mut text = StyledString::new("https://linebender.org/");
        text.try_as_link().unwrap();
        match text.attributes_at(0).get(StyleKey::Link) {
            Some(Attribute::Link(crate::Link::Url(url))) => {
                assert_eq!(url.host_str(), Some("linebender.org"));
            }
            other => panic!("expected a URL link, got {other:?}"),
        }

        let mut bad = StyledString::new("not a url!!");
        let err = bad.try_as_link().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUri);
        assert_eq!(bad.spans().len(), 0);
    }

    #[test]
    fn shared_copies_are_independent() {
        let shared = StyledString::with_attributes("ab", &attrs::kern(1.0)).into_shared();
        let mut copy = shared.to_mutable();
        copy.push_str("c");
        assert_eq!(shared.as_str(), "ab");
        assert_eq!(copy.as_str(), "abc");
        assert!(copy.attributes_at(2).is_empty());
    }

    #[test]
    fn describe_lists_styled_runs() {
        let mut text = StyledString::new("AB");
        text.try_apply(&attrs::kern(2.0), 0..1).unwrap();
        assert_eq!(text.describe().to_string(), "\"AB\" \"A\" { kern = 2; }");
    }
}
