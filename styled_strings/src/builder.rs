// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fluent styling facade.
//!
//! [`StyleExt`] is implemented for every kind of text the crate accepts. Each call converts the
//! receiver to its canonical [`StyledString`], writes one attribute over a [`Target`] and returns
//! the styled text, so calls chain:
//!
//! ```
//! use styled_strings::{Font, StyleExt, StyleKey, TextAlignment, ParagraphStyleOp};
//! use peniko::color::palette::css;
//!
//! let title = "Hello, world"
//!     .font(Font::system(24.0), ..)
//!     .foreground_color(css::RED, "world")
//!     .mutate_paragraph_style([ParagraphStyleOp::Alignment(TextAlignment::Center)], ..);
//!
//! assert!(title.attributes_at(0).contains(StyleKey::Font));
//! assert!(!title.attributes_at(0).contains(StyleKey::ForegroundColor));
//! assert!(title.attributes_at(7).contains(StyleKey::ForegroundColor));
//! ```
//!
//! A `StyledString` receiver is moved into the call and styled in place; the other receivers
//! are copied first. Keep a `clone()` if the unstyled original is still needed.
//!
//! None of these calls fail. When a target cannot be resolved, or [`as_link`] is called on text
//! that is not a URL, the problem is logged at `warn` level and the text comes back unchanged.
//! Use the `try_` methods on [`StyledString`] to handle the error instead.
//!
//! [`as_link`]: StyleExt::as_link

use peniko::Color;

use crate::{
    Attachment, AttributeSet, Font, GlyphForm, Ligatures, LineStyle, Link, ParagraphStyle,
    ParagraphStyleOp, Shadow, SharedStyledString, StyledString, Target, TextEffect,
    TextFragment, WritingDirection, attrs,
};

/// Prefix used by [`StyleExt::debug`] when none is given.
pub const DEFAULT_DEBUG_PREFIX: &str = "styled_strings: ";

/// Fluent styling for text.
///
/// See the [module documentation](self) for an overview.
pub trait StyleExt: Sized {
    /// The canonical mutable form of this text.
    fn into_styled(self) -> StyledString;

    /// Writes every attribute in `attributes` over `target`.
    fn apply<'t>(self, attributes: &AttributeSet, target: impl Into<Target<'t>>) -> StyledString {
        let mut styled = self.into_styled();
        if let Err(err) = styled.try_apply(attributes, target) {
            log::warn!("not applying {attributes} to {:?}: {err}", styled.as_str());
        }
        styled
    }

    /// Reads the paragraph style at the start of the text, applies `ops` to it and writes the
    /// result over `target`.
    ///
    /// See [`StyledString::try_mutate_paragraph_style`].
    fn mutate_paragraph_style<'t>(
        self,
        ops: impl IntoIterator<Item = ParagraphStyleOp>,
        target: impl Into<Target<'t>>,
    ) -> StyledString {
        let mut styled = self.into_styled();
        if let Err(err) = styled.try_mutate_paragraph_style(ops, target) {
            log::warn!(
                "not changing the paragraph style of {:?}: {err}",
                styled.as_str()
            );
        }
        styled
    }

    /// Links the whole text to the URL it spells.
    ///
    /// Text that does not parse as a URL is returned unchanged.
    fn as_link(self) -> StyledString {
        let mut styled = self.into_styled();
        if let Err(err) = styled.try_as_link() {
            log::warn!("{err}");
        }
        styled
    }

    /// Logs a rendering of the text and its runs at `debug` level and returns it unchanged.
    ///
    /// Uses [`DEFAULT_DEBUG_PREFIX`] when `prefix` is `None`.
    fn debug(self, prefix: Option<&str>) -> StyledString {
        let styled = self.into_styled();
        log::debug!(
            "{}{}",
            prefix.unwrap_or(DEFAULT_DEBUG_PREFIX),
            styled.describe()
        );
        styled
    }

    /// Sets the font over `target`.
    fn font<'t>(self, font: Font, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::font(font), target)
    }

    /// Replaces the paragraph style over `target`.
    fn paragraph_style<'t>(
        self,
        style: ParagraphStyle,
        target: impl Into<Target<'t>>,
    ) -> StyledString {
        self.apply(&attrs::paragraph_style(style), target)
    }

    /// Sets the glyph color over `target`.
    fn foreground_color<'t>(self, color: Color, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::foreground_color(color), target)
    }

    /// Sets the background color over `target`.
    fn background_color<'t>(self, color: Color, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::background_color(color), target)
    }

    /// Sets the ligature policy over `target`.
    fn ligature<'t>(self, ligatures: Ligatures, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::ligature(ligatures), target)
    }

    /// Sets the kerning over `target`.
    fn kern<'t>(self, kern: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::kern(kern), target)
    }

    /// Sets the tracking over `target`.
    fn tracking<'t>(self, tracking: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::tracking(tracking), target)
    }

    /// Strikes through `target`.
    fn strikethrough_style<'t>(
        self,
        style: LineStyle,
        target: impl Into<Target<'t>>,
    ) -> StyledString {
        self.apply(&attrs::strikethrough_style(style), target)
    }

    /// Underlines `target`.
    fn underline_style<'t>(self, style: LineStyle, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::underline_style(style), target)
    }

    /// Sets the outline color over `target`.
    fn stroke_color<'t>(self, color: Color, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::stroke_color(color), target)
    }

    /// Sets the outline width over `target`.
    fn stroke_width<'t>(self, width: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::stroke_width(width), target)
    }

    /// Casts a shadow under `target`.
    fn shadow<'t>(self, shadow: Shadow, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::shadow(shadow), target)
    }

    /// Applies a text effect over `target`.
    fn text_effect<'t>(self, effect: TextEffect, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::text_effect(effect), target)
    }

    /// Attaches an inline object over `target`.
    fn attachment<'t>(self, attachment: Attachment, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::attachment(attachment), target)
    }

    /// Links `target` to `link`.
    fn link<'t>(self, link: impl Into<Link>, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::link(link), target)
    }

    /// Shifts `target` off the baseline.
    fn baseline_offset<'t>(self, offset: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::baseline_offset(offset), target)
    }

    /// Sets the underline color over `target`.
    fn underline_color<'t>(self, color: Color, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::underline_color(color), target)
    }

    /// Sets the strikethrough color over `target`.
    fn strikethrough_color<'t>(self, color: Color, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::strikethrough_color(color), target)
    }

    /// Skews the glyphs of `target`.
    fn obliqueness<'t>(self, obliqueness: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::obliqueness(obliqueness), target)
    }

    /// Stretches the glyphs of `target`.
    fn expansion<'t>(self, expansion: f32, target: impl Into<Target<'t>>) -> StyledString {
        self.apply(&attrs::expansion(expansion), target)
    }

    /// Sets the nested writing direction levels over `target`.
    fn writing_direction<'t>(
        self,
        levels: impl IntoIterator<Item = WritingDirection>,
        target: impl Into<Target<'t>>,
    ) -> StyledString {
        self.apply(&attrs::writing_direction(levels), target)
    }

    /// Sets horizontal or vertical glyphs over `target`.
    fn vertical_glyph_form<'t>(
        self,
        form: GlyphForm,
        target: impl Into<Target<'t>>,
    ) -> StyledString {
        self.apply(&attrs::vertical_glyph_form(form), target)
    }
}

impl StyleExt for StyledString {
    fn into_styled(self) -> Self {
        self
    }
}

impl StyleExt for SharedStyledString {
    fn into_styled(self) -> StyledString {
        self.to_mutable()
    }
}

impl StyleExt for &SharedStyledString {
    fn into_styled(self) -> StyledString {
        self.to_mutable()
    }
}

impl StyleExt for TextFragment {
    fn into_styled(self) -> StyledString {
        self.into_mutable()
    }
}

impl StyleExt for &str {
    fn into_styled(self) -> StyledString {
        StyledString::new(self)
    }
}

impl StyleExt for String {
    fn into_styled(self) -> StyledString {
        StyledString::new(self)
    }
}

impl<T: Into<TextFragment>> StyleExt for Option<T> {
    /// Absent text is styled as empty text, so every write is a no-op.
    fn into_styled(self) -> StyledString {
        self.map_or_else(StyledString::empty, |text| text.into().into_mutable())
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::StyleExt;
    use crate::{Attribute, Font, LineStyle, StyleKey, StyledString, Target, attrs};

    #[test]
    fn plain_receivers_are_copied() {
        let plain = String::from("copy");
        let styled = plain.clone().kern(1.0, ..);
        assert_eq!(plain, "copy");
        assert!(styled.attributes_at(0).contains(StyleKey::Kern));
    }

    #[test]
    fn styled_receivers_are_styled_in_place() {
        let mut text = StyledString::new("abc");
        text = text.kern(1.0, 0..1).tracking(2.0, 1..2);
        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn shared_receivers_are_left_alone() {
        let shared = StyledString::new("abc").into_shared();
        let styled = (&shared).underline_style(LineStyle::SINGLE, ..);
        assert_eq!(shared.spans().len(), 0);
        assert_eq!(styled.spans().len(), 1);
    }

    #[test]
    fn failures_return_text_unchanged() {
        let base = "abc".foreground_color(css::RED, ..);
        let styled = base
            .clone()
            .kern(1.0, Target::range(0..1).with_substring("a"))
            .kern(1.0, 0..99)
            .as_link();
        assert_eq!(styled, base);
        assert_eq!(styled.spans().len(), 1);
    }

    #[test]
    fn apply_merges_a_whole_set() {
        let set = attrs::font(Font::system(9.0)) + attrs::kern(3.0);
        let styled = "xy".apply(&set, "y");
        assert!(styled.attributes_at(0).is_empty());
        assert_eq!(styled.attributes_at(1), set);
    }

    #[test]
    fn link_accepts_text_or_url() {
        let text = "docs".link("local:docs", ..);
        assert_eq!(
            text.attributes_at(0).get(StyleKey::Link),
            Some(&Attribute::Link(crate::Link::Text("local:docs".into())))
        );
        let url = url::Url::parse("https://example.com/").unwrap();
        let linked = "site".link(url.clone(), ..);
        assert_eq!(
            linked.attributes_at(0).get(StyleKey::Link),
            Some(&Attribute::Link(crate::Link::Url(url)))
        );
    }

    #[test]
    fn absent_text_styles_to_empty() {
        let styled = None::<&str>.font(Font::system(10.0), ..);
        assert!(styled.is_empty());
        assert_eq!(styled.spans().len(), 0);
        let present = Some("x").kern(1.0, ..);
        assert!(present.attributes_at(0).contains(StyleKey::Kern));
    }

    #[test]
    fn debug_is_a_passthrough() {
        let text = "abc".kern(1.0, "b");
        assert_eq!(text.clone().debug(None), text);
        assert_eq!(text.clone().debug(Some("title: ")), text);
    }
}
