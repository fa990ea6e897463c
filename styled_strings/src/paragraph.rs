// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph-level layout values and the edits that modify them.
//!
//! A [`ParagraphStyle`] is a plain value with one field per paragraph property. Edits are
//! expressed as [`ParagraphStyleOp`]s and applied with [`ParagraphStyle::apply`] or folded with
//! [`ParagraphStyle::mutate`]; later edits to the same field win. Tab stop edits
//! ([`ParagraphStyleOp::AddTabStop`] and [`ParagraphStyleOp::RemoveTabStop`]) change the current
//! collection instead of replacing it.

use std::ops::BitOr;

use smallvec::SmallVec;

/// Horizontal alignment of the lines in a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Leading edge of the writing direction.
    #[default]
    Natural,
    /// Left edge.
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
    /// Both edges; the last line uses natural alignment.
    Justified,
}

/// What happens to a line that does not fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping,
    /// Wrap at character boundaries.
    CharWrapping,
    /// Cut off at the edge.
    Clipping,
    /// Elide the start of the line.
    TruncatingHead,
    /// Elide the end of the line.
    TruncatingTail,
    /// Elide the middle of the line.
    TruncatingMiddle,
}

/// Base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseWritingDirection {
    /// Determined by the content (first strong character).
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// A tab stop: an alignment at a location measured from the leading margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTab {
    /// How text is aligned against the stop.
    pub alignment: TextAlignment,
    /// Distance from the leading margin, in points.
    pub location: f32,
}

impl TextTab {
    /// Creates a tab stop.
    pub const fn new(alignment: TextAlignment, location: f32) -> Self {
        Self {
            alignment,
            location,
        }
    }

    /// A left-aligned stop at `location`.
    pub const fn left(location: f32) -> Self {
        Self::new(TextAlignment::Left, location)
    }
}

/// Tab stops ordered by location.
pub type TabStops = SmallVec<[TextTab; 12]>;

/// Interval between the default tab stops, in points.
pub const DEFAULT_TAB_SPACING: f32 = 28.0;

/// Number of tab stops in a default paragraph style.
pub const DEFAULT_TAB_COUNT: u8 = 12;

/// Heuristics the line breaker may use, combined with `|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineBreakStrategy(u8);

impl LineBreakStrategy {
    /// No special handling.
    pub const NONE: Self = Self(0);
    /// Push out individual lines to avoid single words on the last line.
    pub const PUSH_OUT: Self = Self(1 << 0);
    /// Prohibit breaking between Hangul characters.
    pub const HANGUL_WORD_PRIORITY: Self = Self(1 << 1);
    /// The platform's standard heuristics.
    pub const STANDARD: Self = Self(0xff);

    /// Returns `true` if all of `other`'s heuristics are enabled.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no heuristics are enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LineBreakStrategy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Paragraph layout properties.
///
/// The default value matches the host's default paragraph style: zero spacing and indents,
/// natural alignment and direction, word wrapping, and twelve left tab stops every
/// [`DEFAULT_TAB_SPACING`] points.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between lines, in points.
    pub line_spacing: f32,
    /// Space after the paragraph, in points.
    pub paragraph_spacing: f32,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
    /// Indent of the first line.
    pub first_line_head_indent: f32,
    /// Indent of the lines after the first.
    pub head_indent: f32,
    /// Trailing indent; values `<= 0` are measured from the trailing margin.
    pub tail_indent: f32,
    /// Wrapping and truncation.
    pub line_break_mode: LineBreakMode,
    /// Minimum line height; 0 means no minimum.
    pub minimum_line_height: f32,
    /// Maximum line height; 0 means no maximum.
    pub maximum_line_height: f32,
    /// Base writing direction.
    pub base_writing_direction: BaseWritingDirection,
    /// Multiplier for the natural line height; 0 means unset.
    pub line_height_multiple: f32,
    /// Space before the paragraph, in points.
    pub paragraph_spacing_before: f32,
    /// Hyphenation threshold in `0.0..=1.0`.
    pub hyphenation_factor: f32,
    /// Whether the host's default hyphenation rules apply.
    pub uses_default_hyphenation: bool,
    /// Tab stops ordered by location.
    pub tab_stops: TabStops,
    /// Interval of the implicit tab stops after the last explicit one; 0 means none.
    pub default_tab_interval: f32,
    /// Whether the host may tighten letter spacing before truncating.
    pub allows_default_tightening_for_truncation: bool,
    /// Line breaking heuristics.
    pub line_break_strategy: LineBreakStrategy,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            line_spacing: 0.0,
            paragraph_spacing: 0.0,
            alignment: TextAlignment::Natural,
            first_line_head_indent: 0.0,
            head_indent: 0.0,
            tail_indent: 0.0,
            line_break_mode: LineBreakMode::WordWrapping,
            minimum_line_height: 0.0,
            maximum_line_height: 0.0,
            base_writing_direction: BaseWritingDirection::Natural,
            line_height_multiple: 0.0,
            paragraph_spacing_before: 0.0,
            hyphenation_factor: 0.0,
            uses_default_hyphenation: false,
            tab_stops: (1..=DEFAULT_TAB_COUNT)
                .map(|i| TextTab::left(f32::from(i) * DEFAULT_TAB_SPACING))
                .collect(),
            default_tab_interval: 0.0,
            allows_default_tightening_for_truncation: false,
            line_break_strategy: LineBreakStrategy::NONE,
        }
    }
}

/// A single edit to a [`ParagraphStyle`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParagraphStyleOp {
    /// Sets [`ParagraphStyle::line_spacing`].
    LineSpacing(f32),
    /// Sets [`ParagraphStyle::paragraph_spacing`].
    ParagraphSpacing(f32),
    /// Sets [`ParagraphStyle::alignment`].
    Alignment(TextAlignment),
    /// Sets [`ParagraphStyle::first_line_head_indent`].
    FirstLineHeadIndent(f32),
    /// Sets [`ParagraphStyle::head_indent`].
    HeadIndent(f32),
    /// Sets [`ParagraphStyle::tail_indent`].
    TailIndent(f32),
    /// Sets [`ParagraphStyle::line_break_mode`].
    LineBreakMode(LineBreakMode),
    /// Sets both the minimum and the maximum line height.
    LineHeight(f32),
    /// Sets [`ParagraphStyle::minimum_line_height`].
    MinimumLineHeight(f32),
    /// Sets [`ParagraphStyle::maximum_line_height`].
    MaximumLineHeight(f32),
    /// Sets [`ParagraphStyle::base_writing_direction`].
    BaseWritingDirection(BaseWritingDirection),
    /// Sets [`ParagraphStyle::line_height_multiple`].
    LineHeightMultiple(f32),
    /// Sets [`ParagraphStyle::paragraph_spacing_before`].
    ParagraphSpacingBefore(f32),
    /// Sets [`ParagraphStyle::hyphenation_factor`].
    HyphenationFactor(f32),
    /// Sets [`ParagraphStyle::uses_default_hyphenation`].
    UsesDefaultHyphenation(bool),
    /// Replaces all tab stops.
    TabStops(Vec<TextTab>),
    /// Sets [`ParagraphStyle::default_tab_interval`].
    DefaultTabInterval(f32),
    /// Sets [`ParagraphStyle::allows_default_tightening_for_truncation`].
    AllowsDefaultTighteningForTruncation(bool),
    /// Sets [`ParagraphStyle::line_break_strategy`].
    LineBreakStrategy(LineBreakStrategy),
    /// Inserts a tab stop, keeping the stops ordered by location.
    AddTabStop(TextTab),
    /// Removes the first tab stop equal to the given one, if any.
    RemoveTabStop(TextTab),
}

impl ParagraphStyle {
    /// Creates a default paragraph style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single edit in place.
    pub fn apply(&mut self, op: ParagraphStyleOp) {
        match op {
            ParagraphStyleOp::LineSpacing(v) => self.line_spacing = v,
            ParagraphStyleOp::ParagraphSpacing(v) => self.paragraph_spacing = v,
            ParagraphStyleOp::Alignment(v) => self.alignment = v,
            ParagraphStyleOp::FirstLineHeadIndent(v) => self.first_line_head_indent = v,
            ParagraphStyleOp::HeadIndent(v) => self.head_indent = v,
            ParagraphStyleOp::TailIndent(v) => self.tail_indent = v,
            ParagraphStyleOp::LineBreakMode(v) => self.line_break_mode = v,
            ParagraphStyleOp::LineHeight(v) => {
                self.minimum_line_height = v;
                self.maximum_line_height = v;
            }
            ParagraphStyleOp::MinimumLineHeight(v) => self.minimum_line_height = v,
            ParagraphStyleOp::MaximumLineHeight(v) => self.maximum_line_height = v,
            ParagraphStyleOp::BaseWritingDirection(v) => self.base_writing_direction = v,
            ParagraphStyleOp::LineHeightMultiple(v) => self.line_height_multiple = v,
            ParagraphStyleOp::ParagraphSpacingBefore(v) => self.paragraph_spacing_before = v,
            ParagraphStyleOp::HyphenationFactor(v) => self.hyphenation_factor = v,
            ParagraphStyleOp::UsesDefaultHyphenation(v) => self.uses_default_hyphenation = v,
            ParagraphStyleOp::TabStops(tabs) => self.tab_stops = tabs.into_iter().collect(),
            ParagraphStyleOp::DefaultTabInterval(v) => self.default_tab_interval = v,
            ParagraphStyleOp::AllowsDefaultTighteningForTruncation(v) => {
                self.allows_default_tightening_for_truncation = v;
            }
            ParagraphStyleOp::LineBreakStrategy(v) => self.line_break_strategy = v,
            ParagraphStyleOp::AddTabStop(tab) => {
                // After any stops at the same location, so repeated adds keep insertion order.
                let ix = self
                    .tab_stops
                    .partition_point(|stop| stop.location <= tab.location);
                self.tab_stops.insert(ix, tab);
            }
            ParagraphStyleOp::RemoveTabStop(tab) => {
                if let Some(ix) = self.tab_stops.iter().position(|stop| *stop == tab) {
                    self.tab_stops.remove(ix);
                }
            }
        }
    }

    /// Folds `ops` onto a copy of this style, left to right.
    #[must_use]
    pub fn mutate(mut self, ops: impl IntoIterator<Item = ParagraphStyleOp>) -> Self {
        for op in ops {
            self.apply(op);
        }
        self
    }

    fn with(self, op: ParagraphStyleOp) -> Self {
        self.mutate([op])
    }

    /// Sets the extra space between lines.
    #[must_use]
    pub fn line_spacing(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::LineSpacing(value))
    }

    /// Sets the space after the paragraph.
    #[must_use]
    pub fn paragraph_spacing(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::ParagraphSpacing(value))
    }

    /// Sets the alignment.
    #[must_use]
    pub fn alignment(self, value: TextAlignment) -> Self {
        self.with(ParagraphStyleOp::Alignment(value))
    }

    /// Sets the first line indent.
    #[must_use]
    pub fn first_line_head_indent(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::FirstLineHeadIndent(value))
    }

    /// Sets the indent of the lines after the first.
    #[must_use]
    pub fn head_indent(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::HeadIndent(value))
    }

    /// Sets the trailing indent.
    #[must_use]
    pub fn tail_indent(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::TailIndent(value))
    }

    /// Sets the line break mode.
    #[must_use]
    pub fn line_break_mode(self, value: LineBreakMode) -> Self {
        self.with(ParagraphStyleOp::LineBreakMode(value))
    }

    /// Pins the line height: sets both the minimum and the maximum.
    #[must_use]
    pub fn line_height(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::LineHeight(value))
    }

    /// Sets the minimum line height.
    #[must_use]
    pub fn minimum_line_height(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::MinimumLineHeight(value))
    }

    /// Sets the maximum line height.
    #[must_use]
    pub fn maximum_line_height(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::MaximumLineHeight(value))
    }

    /// Sets the base writing direction.
    #[must_use]
    pub fn base_writing_direction(self, value: BaseWritingDirection) -> Self {
        self.with(ParagraphStyleOp::BaseWritingDirection(value))
    }

    /// Sets the line height multiple.
    #[must_use]
    pub fn line_height_multiple(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::LineHeightMultiple(value))
    }

    /// Sets the space before the paragraph.
    #[must_use]
    pub fn paragraph_spacing_before(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::ParagraphSpacingBefore(value))
    }

    /// Sets the hyphenation factor.
    #[must_use]
    pub fn hyphenation_factor(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::HyphenationFactor(value))
    }

    /// Enables or disables the host's default hyphenation.
    #[must_use]
    pub fn uses_default_hyphenation(self, value: bool) -> Self {
        self.with(ParagraphStyleOp::UsesDefaultHyphenation(value))
    }

    /// Replaces the tab stops.
    #[must_use]
    pub fn tab_stops(self, value: impl IntoIterator<Item = TextTab>) -> Self {
        self.with(ParagraphStyleOp::TabStops(value.into_iter().collect()))
    }

    /// Sets the default tab interval.
    #[must_use]
    pub fn default_tab_interval(self, value: f32) -> Self {
        self.with(ParagraphStyleOp::DefaultTabInterval(value))
    }

    /// Allows or forbids tightening before truncation.
    #[must_use]
    pub fn allows_default_tightening_for_truncation(self, value: bool) -> Self {
        self.with(ParagraphStyleOp::AllowsDefaultTighteningForTruncation(value))
    }

    /// Sets the line break heuristics.
    #[must_use]
    pub fn line_break_strategy(self, value: LineBreakStrategy) -> Self {
        self.with(ParagraphStyleOp::LineBreakStrategy(value))
    }

    /// Adds a tab stop.
    #[must_use]
    pub fn add_tab_stop(self, tab: TextTab) -> Self {
        self.with(ParagraphStyleOp::AddTabStop(tab))
    }

    /// Removes a tab stop.
    #[must_use]
    pub fn remove_tab_stop(self, tab: TextTab) -> Self {
        self.with(ParagraphStyleOp::RemoveTabStop(tab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_twelve_left_stops() {
        let style = ParagraphStyle::default();
        assert_eq!(style.tab_stops.len(), 12);
        assert_eq!(style.tab_stops[0], TextTab::left(28.0));
        assert_eq!(style.tab_stops[11], TextTab::left(336.0));
        assert_eq!(style.alignment, TextAlignment::Natural);
        assert_eq!(style.line_break_mode, LineBreakMode::WordWrapping);
    }

    #[test]
    fn last_edit_of_a_field_wins() {
        let style = ParagraphStyle::new().mutate([
            ParagraphStyleOp::Alignment(TextAlignment::Center),
            ParagraphStyleOp::LineSpacing(4.0),
            ParagraphStyleOp::Alignment(TextAlignment::Left),
        ]);
        assert_eq!(style.alignment, TextAlignment::Left);
        assert_eq!(style.line_spacing, 4.0);
    }

    #[test]
    fn line_height_pins_min_and_max() {
        let style = ParagraphStyle::new().line_height(40.0);
        assert_eq!(style.minimum_line_height, 40.0);
        assert_eq!(style.maximum_line_height, 40.0);

        // A later single-sided edit only moves that side.
        let style = style.maximum_line_height(50.0);
        assert_eq!(style.minimum_line_height, 40.0);
        assert_eq!(style.maximum_line_height, 50.0);
    }

    #[test]
    fn tab_stop_edits_are_incremental() {
        let style = ParagraphStyle::new()
            .tab_stops([TextTab::left(10.0), TextTab::left(30.0)])
            .add_tab_stop(TextTab::new(TextAlignment::Right, 20.0))
            .remove_tab_stop(TextTab::left(10.0));
        let locations: Vec<_> = style.tab_stops.iter().map(|t| t.location).collect();
        assert_eq!(locations, [20.0, 30.0]);
        assert_eq!(style.tab_stops[0].alignment, TextAlignment::Right);
    }

    #[test]
    fn removing_a_missing_tab_stop_is_a_no_op() {
        let before = ParagraphStyle::new();
        let after = before.clone().remove_tab_stop(TextTab::left(29.0));
        assert_eq!(before, after);
    }

    #[test]
    fn tab_stops_op_replaces_everything() {
        let style = ParagraphStyle::new().tab_stops([]);
        assert!(style.tab_stops.is_empty());
        let style = style.add_tab_stop(TextTab::left(12.0));
        assert_eq!(style.tab_stops.as_slice(), [TextTab::left(12.0)]);
    }

    #[test]
    fn strategies_combine() {
        let s = LineBreakStrategy::PUSH_OUT | LineBreakStrategy::HANGUL_WORD_PRIORITY;
        assert!(s.contains(LineBreakStrategy::PUSH_OUT));
        assert!(!LineBreakStrategy::NONE.contains(LineBreakStrategy::PUSH_OUT));
        assert!(LineBreakStrategy::default().is_empty());
    }
}
