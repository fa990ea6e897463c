// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed values carried by [`Attribute`](super::Attribute).

use std::fmt;
use std::sync::Arc;

use peniko::Color;
use peniko::kurbo::{Rect, Vec2};
use smallvec::SmallVec;
use url::Url;

/// A generic font family, resolved by the host to a concrete face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// The platform's user interface face.
    SystemUi,
    /// A face with serifs.
    Serif,
    /// A face without serifs.
    SansSerif,
    /// A fixed-pitch face.
    Monospace,
}

/// Font family: a named face or a generic family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A family name such as `"Helvetica Neue"`.
    Named(Arc<str>),
    /// A generic family.
    Generic(GenericFamily),
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(family: GenericFamily) -> Self {
        Self::Generic(family)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "\"{name}\""),
            Self::Generic(GenericFamily::SystemUi) => f.write_str("system-ui"),
            Self::Generic(GenericFamily::Serif) => f.write_str("serif"),
            Self::Generic(GenericFamily::SansSerif) => f.write_str("sans-serif"),
            Self::Generic(GenericFamily::Monospace) => f.write_str("monospace"),
        }
    }
}

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);
    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);
    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);
    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);
    /// Weight value of 800.
    pub const HEAVY: Self = Self(800.0);
    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Upright or slanted glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
    /// Synthesized slant of the upright glyphs.
    Oblique,
}

/// A font: family, point size, weight and style.
///
/// ```
/// use styled_strings::{Font, FontWeight, GenericFamily};
///
/// let title = Font::new(GenericFamily::SystemUi, 24.0).with_weight(FontWeight::HEAVY);
/// assert_eq!(title.size, 24.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family to draw with.
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    /// Weight class.
    pub weight: FontWeight,
    /// Upright or slanted.
    pub style: FontStyle,
}

impl Font {
    /// A regular-weight, upright font.
    pub fn new(family: impl Into<FontFamily>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The system user interface font at `size`.
    pub fn system(size: f32) -> Self {
        Self::new(GenericFamily::SystemUi, size)
    }

    /// Returns a copy with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns a copy with the given style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt weight {}", self.family, self.size, self.weight.0)?;
        match self.style {
            FontStyle::Normal => Ok(()),
            FontStyle::Italic => f.write_str(" italic"),
            FontStyle::Oblique => f.write_str(" oblique"),
        }
    }
}

/// Which ligatures the renderer may form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ligatures {
    /// Only ligatures required for correct rendering.
    None,
    /// The font's default ligatures.
    #[default]
    Default,
    /// All available ligatures.
    All,
}

/// Thickness and count of a decoration line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// No line is drawn.
    None,
    /// A single thin line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}

/// Dash pattern of a decoration line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinePattern {
    /// A continuous line.
    #[default]
    Solid,
    /// Dots.
    Dot,
    /// Dashes.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// A dash followed by two dots.
    DashDotDot,
}

/// Style of an underline or strikethrough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineStyle {
    /// Thickness and count.
    pub kind: LineKind,
    /// Dash pattern.
    pub pattern: LinePattern,
    /// Skip whitespace between words.
    pub by_word: bool,
}

impl LineStyle {
    /// No decoration.
    pub const NONE: Self = Self::new(LineKind::None);
    /// A single solid line.
    pub const SINGLE: Self = Self::new(LineKind::Single);
    /// A single thick solid line.
    pub const THICK: Self = Self::new(LineKind::Thick);
    /// Two solid lines.
    pub const DOUBLE: Self = Self::new(LineKind::Double);

    /// A solid line of the given kind.
    pub const fn new(kind: LineKind) -> Self {
        Self {
            kind,
            pattern: LinePattern::Solid,
            by_word: false,
        }
    }

    /// Returns a copy with the given dash pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Returns a copy that skips whitespace.
    #[must_use]
    pub const fn by_word(mut self) -> Self {
        self.by_word = true;
        self
    }
}

/// A drop shadow behind the glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the glyphs, in points.
    pub offset: Vec2,
    /// Blur radius, in points.
    pub blur_radius: f64,
    /// Shadow color; the host default (translucent black) if `None`.
    pub color: Option<Color>,
}

impl Shadow {
    /// A shadow with the given offset and blur, using the host's default color.
    pub fn new(offset: Vec2, blur_radius: f64) -> Self {
        Self {
            offset,
            blur_radius,
            color: None,
        }
    }

    /// Returns a copy with an explicit color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A special effect applied to the glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextEffect {
    /// Glyphs look pressed into the background.
    Letterpress,
}

/// An inline object (usually an image) drawn in place of a character.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    /// Encoded contents, such as PNG bytes.
    pub contents: Arc<[u8]>,
    /// Bounds relative to the baseline, in points.
    pub bounds: Rect,
    /// Uniform type of `contents`, when known.
    pub file_type: Option<String>,
}

impl Attachment {
    /// An attachment with untyped contents.
    pub fn new(contents: impl Into<Arc<[u8]>>, bounds: Rect) -> Self {
        Self {
            contents: contents.into(),
            bounds,
            file_type: None,
        }
    }
}

/// Link target of a run of text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// A parsed URL.
    Url(Url),
    /// Link text passed through to the host as-is.
    Text(String),
}

impl From<Url> for Link {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for Link {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Link {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url.as_str()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Direction of an embedding or override level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// How a [`WritingDirection`] level is expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DirectionFormat {
    /// Like a Unicode embedding (LRE/RLE).
    #[default]
    Embedding,
    /// Like a Unicode override (LRO/RLO).
    Override,
}

/// One nested bidi level of the `writing_direction` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WritingDirection {
    /// Direction of the level.
    pub direction: Direction,
    /// Embedding or override.
    pub format: DirectionFormat,
}

impl WritingDirection {
    /// A left-to-right embedding.
    pub const LTR_EMBEDDING: Self = Self::new(Direction::Ltr, DirectionFormat::Embedding);
    /// A right-to-left embedding.
    pub const RTL_EMBEDDING: Self = Self::new(Direction::Rtl, DirectionFormat::Embedding);
    /// A left-to-right override.
    pub const LTR_OVERRIDE: Self = Self::new(Direction::Ltr, DirectionFormat::Override);
    /// A right-to-left override.
    pub const RTL_OVERRIDE: Self = Self::new(Direction::Rtl, DirectionFormat::Override);

    /// Creates a level.
    pub const fn new(direction: Direction, format: DirectionFormat) -> Self {
        Self { direction, format }
    }
}

/// Nested writing direction levels, outermost first.
pub type WritingDirections = SmallVec<[WritingDirection; 2]>;

/// Horizontal or vertical glyph forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlyphForm {
    /// Horizontal text.
    #[default]
    Horizontal,
    /// Vertical text.
    Vertical,
}
