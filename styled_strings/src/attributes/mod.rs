// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attribute vocabulary and [`AttributeSet`], the unit of style.
//!
//! Every [`StyleKey`] has exactly one value type, fixed by the matching [`Attribute`] variant.
//! An [`AttributeSet`] holds at most one attribute per key. Merging two sets is a right-biased
//! union: the right-hand set's attributes replace whole entries of the left-hand set, and keys
//! only present on the left survive.

mod set;
mod values;

use std::fmt;

use peniko::Color;

use crate::ParagraphStyle;

pub use set::AttributeSet;
pub use values::{
    Attachment, Direction, DirectionFormat, Font, FontFamily, FontStyle, FontWeight,
    GenericFamily, GlyphForm, Ligatures, LineKind, LinePattern, LineStyle, Link, Shadow,
    TextEffect, WritingDirection, WritingDirections,
};

/// Names a presentation attribute.
///
/// Keys are ordered; an [`AttributeSet`] keeps its entries in key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    /// [`Attribute::Font`].
    Font,
    /// [`Attribute::ParagraphStyle`].
    ParagraphStyle,
    /// [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// [`Attribute::BackgroundColor`].
    BackgroundColor,
    /// [`Attribute::Ligature`].
    Ligature,
    /// [`Attribute::Kern`].
    Kern,
    /// [`Attribute::Tracking`].
    Tracking,
    /// [`Attribute::StrikethroughStyle`].
    StrikethroughStyle,
    /// [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// [`Attribute::StrokeColor`].
    StrokeColor,
    /// [`Attribute::StrokeWidth`].
    StrokeWidth,
    /// [`Attribute::Shadow`].
    Shadow,
    /// [`Attribute::TextEffect`].
    TextEffect,
    /// [`Attribute::Attachment`].
    Attachment,
    /// [`Attribute::Link`].
    Link,
    /// [`Attribute::BaselineOffset`].
    BaselineOffset,
    /// [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// [`Attribute::StrikethroughColor`].
    StrikethroughColor,
    /// [`Attribute::Obliqueness`].
    Obliqueness,
    /// [`Attribute::Expansion`].
    Expansion,
    /// [`Attribute::WritingDirection`].
    WritingDirection,
    /// [`Attribute::VerticalGlyphForm`].
    VerticalGlyphForm,
}

impl StyleKey {
    /// Every key, in key order.
    pub const ALL: [Self; 22] = [
        Self::Font,
        Self::ParagraphStyle,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::Ligature,
        Self::Kern,
        Self::Tracking,
        Self::StrikethroughStyle,
        Self::UnderlineStyle,
        Self::StrokeColor,
        Self::StrokeWidth,
        Self::Shadow,
        Self::TextEffect,
        Self::Attachment,
        Self::Link,
        Self::BaselineOffset,
        Self::UnderlineColor,
        Self::StrikethroughColor,
        Self::Obliqueness,
        Self::Expansion,
        Self::WritingDirection,
        Self::VerticalGlyphForm,
    ];

    /// The snake-case name used when rendering attributes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::ParagraphStyle => "paragraph_style",
            Self::ForegroundColor => "foreground_color",
            Self::BackgroundColor => "background_color",
            Self::Ligature => "ligature",
            Self::Kern => "kern",
            Self::Tracking => "tracking",
            Self::StrikethroughStyle => "strikethrough_style",
            Self::UnderlineStyle => "underline_style",
            Self::StrokeColor => "stroke_color",
            Self::StrokeWidth => "stroke_width",
            Self::Shadow => "shadow",
            Self::TextEffect => "text_effect",
            Self::Attachment => "attachment",
            Self::Link => "link",
            Self::BaselineOffset => "baseline_offset",
            Self::UnderlineColor => "underline_color",
            Self::StrikethroughColor => "strikethrough_color",
            Self::Obliqueness => "obliqueness",
            Self::Expansion => "expansion",
            Self::WritingDirection => "writing_direction",
            Self::VerticalGlyphForm => "vertical_glyph_form",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A presentation attribute: a [`StyleKey`] together with its typed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Font of the glyphs.
    Font(Font),
    /// Paragraph layout.
    ParagraphStyle(ParagraphStyle),
    /// Glyph fill color.
    ForegroundColor(Color),
    /// Color behind the glyphs.
    BackgroundColor(Color),
    /// Ligature policy.
    Ligature(Ligatures),
    /// Extra space after each glyph, in points; disables the font's own kerning when set.
    Kern(f32),
    /// Uniform spacing added between glyphs, in points.
    Tracking(f32),
    /// Strikethrough decoration.
    StrikethroughStyle(LineStyle),
    /// Underline decoration.
    UnderlineStyle(LineStyle),
    /// Glyph outline color.
    StrokeColor(Color),
    /// Outline width as a percentage of the font size; negative values also fill.
    StrokeWidth(f32),
    /// Drop shadow.
    Shadow(Shadow),
    /// Special effect.
    TextEffect(TextEffect),
    /// Inline object.
    Attachment(Attachment),
    /// Link target.
    Link(Link),
    /// Vertical shift from the baseline, in points.
    BaselineOffset(f32),
    /// Underline color; the foreground color if absent.
    UnderlineColor(Color),
    /// Strikethrough color; the foreground color if absent.
    StrikethroughColor(Color),
    /// Skew applied to the glyphs.
    Obliqueness(f32),
    /// Log of the horizontal stretch factor.
    Expansion(f32),
    /// Nested bidi levels, outermost first.
    WritingDirection(WritingDirections),
    /// Horizontal or vertical glyphs.
    VerticalGlyphForm(GlyphForm),
}

impl Attribute {
    /// The key this attribute is stored under.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Font(_) => StyleKey::Font,
            Self::ParagraphStyle(_) => StyleKey::ParagraphStyle,
            Self::ForegroundColor(_) => StyleKey::ForegroundColor,
            Self::BackgroundColor(_) => StyleKey::BackgroundColor,
            Self::Ligature(_) => StyleKey::Ligature,
            Self::Kern(_) => StyleKey::Kern,
            Self::Tracking(_) => StyleKey::Tracking,
            Self::StrikethroughStyle(_) => StyleKey::StrikethroughStyle,
            Self::UnderlineStyle(_) => StyleKey::UnderlineStyle,
            Self::StrokeColor(_) => StyleKey::StrokeColor,
            Self::StrokeWidth(_) => StyleKey::StrokeWidth,
            Self::Shadow(_) => StyleKey::Shadow,
            Self::TextEffect(_) => StyleKey::TextEffect,
            Self::Attachment(_) => StyleKey::Attachment,
            Self::Link(_) => StyleKey::Link,
            Self::BaselineOffset(_) => StyleKey::BaselineOffset,
            Self::UnderlineColor(_) => StyleKey::UnderlineColor,
            Self::StrikethroughColor(_) => StyleKey::StrikethroughColor,
            Self::Obliqueness(_) => StyleKey::Obliqueness,
            Self::Expansion(_) => StyleKey::Expansion,
            Self::WritingDirection(_) => StyleKey::WritingDirection,
            Self::VerticalGlyphForm(_) => StyleKey::VerticalGlyphForm,
        }
    }
}

fn write_color(f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
    let c = color.to_rgba8();
    write!(f, "#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.key())?;
        match self {
            Self::Font(font) => write!(f, "{font}"),
            Self::Link(link) => write!(f, "{link}"),
            Self::ForegroundColor(c)
            | Self::BackgroundColor(c)
            | Self::StrokeColor(c)
            | Self::UnderlineColor(c)
            | Self::StrikethroughColor(c) => write_color(f, *c),
            Self::Kern(v)
            | Self::Tracking(v)
            | Self::StrokeWidth(v)
            | Self::BaselineOffset(v)
            | Self::Obliqueness(v)
            | Self::Expansion(v) => write!(f, "{v}"),
            Self::ParagraphStyle(p) => write!(
                f,
                "{:?} spacing {} line height {}..{}",
                p.alignment, p.line_spacing, p.minimum_line_height, p.maximum_line_height
            ),
            Self::Ligature(v) => write!(f, "{v:?}"),
            Self::StrikethroughStyle(v) | Self::UnderlineStyle(v) => write!(f, "{v:?}"),
            Self::Shadow(v) => write!(f, "{v:?}"),
            Self::TextEffect(v) => write!(f, "{v:?}"),
            Self::Attachment(v) => write!(f, "attachment of {} bytes", v.contents.len()),
            Self::WritingDirection(v) => write!(f, "{:?}", v.as_slice()),
            Self::VerticalGlyphForm(v) => write!(f, "{v:?}"),
        }
    }
}

/// Singleton constructors, one per [`StyleKey`].
///
/// Each returns an [`AttributeSet`] holding just that attribute. Combine them with `+`
/// (right-biased merge), or chain the builder methods on [`AttributeSet`] instead.
///
/// ```
/// use styled_strings::attrs;
/// use styled_strings::{Font, StyleKey};
///
/// let body = attrs::font(Font::system(17.0)) + attrs::kern(0.5);
/// assert!(body.contains(StyleKey::Font));
/// assert!(body.contains(StyleKey::Kern));
/// ```
pub mod attrs {
    use peniko::Color;

    use super::{
        Attachment, Attribute, AttributeSet, Font, GlyphForm, Ligatures, LineStyle, Link, Shadow,
        TextEffect, WritingDirection,
    };
    use crate::ParagraphStyle;

    /// A set holding [`Attribute::Font`].
    pub fn font(font: Font) -> AttributeSet {
        Attribute::Font(font).into()
    }

    /// A set holding [`Attribute::ParagraphStyle`].
    pub fn paragraph_style(style: ParagraphStyle) -> AttributeSet {
        Attribute::ParagraphStyle(style).into()
    }

    /// A set holding [`Attribute::ForegroundColor`].
    pub fn foreground_color(color: Color) -> AttributeSet {
        Attribute::ForegroundColor(color).into()
    }

    /// A set holding [`Attribute::BackgroundColor`].
    pub fn background_color(color: Color) -> AttributeSet {
        Attribute::BackgroundColor(color).into()
    }

    /// A set holding [`Attribute::Ligature`].
    pub fn ligature(ligatures: Ligatures) -> AttributeSet {
        Attribute::Ligature(ligatures).into()
    }

    /// A set holding [`Attribute::Kern`].
    pub fn kern(kern: f32) -> AttributeSet {
        Attribute::Kern(kern).into()
    }

    /// A set holding [`Attribute::Tracking`].
    pub fn tracking(tracking: f32) -> AttributeSet {
        Attribute::Tracking(tracking).into()
    }

    /// A set holding [`Attribute::StrikethroughStyle`].
    pub fn strikethrough_style(style: LineStyle) -> AttributeSet {
        Attribute::StrikethroughStyle(style).into()
    }

    /// A set holding [`Attribute::UnderlineStyle`].
    pub fn underline_style(style: LineStyle) -> AttributeSet {
        Attribute::UnderlineStyle(style).into()
    }

    /// A set holding [`Attribute::StrokeColor`].
    pub fn stroke_color(color: Color) -> AttributeSet {
        Attribute::StrokeColor(color).into()
    }

    /// A set holding [`Attribute::StrokeWidth`].
    pub fn stroke_width(width: f32) -> AttributeSet {
        Attribute::StrokeWidth(width).into()
    }

    /// A set holding [`Attribute::Shadow`].
    pub fn shadow(shadow: Shadow) -> AttributeSet {
        Attribute::Shadow(shadow).into()
    }

    /// A set holding [`Attribute::TextEffect`].
    pub fn text_effect(effect: TextEffect) -> AttributeSet {
        Attribute::TextEffect(effect).into()
    }

    /// A set holding [`Attribute::Attachment`].
    pub fn attachment(attachment: Attachment) -> AttributeSet {
        Attribute::Attachment(attachment).into()
    }

    /// A set holding [`Attribute::Link`].
    pub fn link(link: impl Into<Link>) -> AttributeSet {
        Attribute::Link(link.into()).into()
    }

    /// A set holding [`Attribute::BaselineOffset`].
    pub fn baseline_offset(offset: f32) -> AttributeSet {
        Attribute::BaselineOffset(offset).into()
    }

    /// A set holding [`Attribute::UnderlineColor`].
    pub fn underline_color(color: Color) -> AttributeSet {
        Attribute::UnderlineColor(color).into()
    }

    /// A set holding [`Attribute::StrikethroughColor`].
    pub fn strikethrough_color(color: Color) -> AttributeSet {
        Attribute::StrikethroughColor(color).into()
    }

    /// A set holding [`Attribute::Obliqueness`].
    pub fn obliqueness(obliqueness: f32) -> AttributeSet {
        Attribute::Obliqueness(obliqueness).into()
    }

    /// A set holding [`Attribute::Expansion`].
    pub fn expansion(expansion: f32) -> AttributeSet {
        Attribute::Expansion(expansion).into()
    }

    /// A set holding [`Attribute::WritingDirection`].
    pub fn writing_direction(levels: impl IntoIterator<Item = WritingDirection>) -> AttributeSet {
        Attribute::WritingDirection(levels.into_iter().collect()).into()
    }

    /// A set holding [`Attribute::VerticalGlyphForm`].
    pub fn vertical_glyph_form(form: GlyphForm) -> AttributeSet {
        Attribute::VerticalGlyphForm(form).into()
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::{Attribute, StyleKey, attrs};
    use crate::{Font, FontWeight, GenericFamily};

    #[test]
    fn keys_are_unique_and_sorted() {
        let mut keys = StyleKey::ALL.to_vec();
        keys.dedup();
        assert_eq!(keys.len(), StyleKey::ALL.len());
        assert!(StyleKey::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(StyleKey::VerticalGlyphForm.to_string(), "vertical_glyph_form");
    }

    #[test]
    fn constructors_produce_singletons() {
        let set = attrs::writing_direction([]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.keys().next(), Some(StyleKey::WritingDirection));
    }

    #[test]
    fn display_renders_key_and_value() {
        let font = Font::new(GenericFamily::Monospace, 11.0).with_weight(FontWeight::BOLD);
        assert_eq!(
            Attribute::Font(font).to_string(),
            "font = monospace 11pt weight 700"
        );
        assert_eq!(
            Attribute::UnderlineColor(css::BLUE).to_string(),
            "underline_color = #0000ffff"
        );
    }
}
