// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chained, declarative construction of styled text.
//!
//! - [`AttributeSet`] maps each [`StyleKey`] to one typed [`Attribute`]. Sets combine with `+`,
//!   a right-biased merge: the right-hand set's entries replace the left-hand set's wholesale.
//! - [`ParagraphStyle`] is edited with [`ParagraphStyleOp`]s, folded left to right.
//! - [`Target`] picks the part of a text a call applies to: an explicit byte range, the first
//!   occurrence of a substring, or everything.
//! - [`StyledString`] is owned, mutable styled text built on [`attributed_text`].
//!   [`SharedStyledString`] is its immutable, reference-counted form.
//! - [`TextFragment`] is any of plain text, shared styled text or mutable styled text.
//! - [`StyleExt`] is the fluent facade over all of them, and [`concat()`] joins optional text.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//!
//! ## Overlaps
//!
//! Attribute sets are stored in the order they were written. Where writes overlap, the effective
//! attributes are their right-biased merge in that order, so the last writer wins for each key.
//!
//! ## Ownership
//!
//! Styling a [`StyledString`] moves it into the call, which edits it in place and hands it back.
//! Styling any other kind of text styles a fresh copy. `+` never changes a borrowed operand.
//!
//! ## Example
//!
//! ```
//! use styled_strings::{Font, FontWeight, StyleExt, StyleKey, StyledString, concat};
//! use peniko::color::palette::css;
//!
//! let name = Some("Ferris");
//! let greeting = concat(Some("Hello, "), name)
//!     .map(|text| {
//!         text.font(Font::system(17.0), ..)
//!             .foreground_color(css::ORANGE, "Ferris")
//!     })
//!     .unwrap_or_default();
//!
//! assert_eq!(greeting.as_str(), "Hello, Ferris");
//! assert!(greeting.attributes_at(7).contains(StyleKey::ForegroundColor));
//!
//! let shout = greeting + "!".font(Font::system(17.0).with_weight(FontWeight::BOLD), ..);
//! assert_eq!(shout.runs().len(), 3);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attributes;
mod builder;
mod concat;
mod error;
mod fragment;
mod paragraph;
mod styled_string;
mod target;


pub use attributed_text::{self, TextRange};

pub use attributes::{
    Attachment, Attribute, AttributeSet, Direction, DirectionFormat, Font, FontFamily, FontStyle,
    FontWeight, GenericFamily, GlyphForm, Ligatures, LineKind, LinePattern, LineStyle, Link,
    Shadow, StyleKey, TextEffect, WritingDirection, WritingDirections, attrs,
};
pub use builder::{DEFAULT_DEBUG_PREFIX, StyleExt};
pub use concat::{Appendable, OptionTextExt, TextLike, concat, concat_plain};
pub use error::{Error, ErrorKind};
pub use fragment::{FragmentKind, TextFragment};
pub use paragraph::{
    BaseWritingDirection, DEFAULT_TAB_COUNT, DEFAULT_TAB_SPACING, LineBreakMode,
    LineBreakStrategy, ParagraphStyle, ParagraphStyleOp, TabStops, TextAlignment, TextTab,
};
pub use styled_string::{Describe, SharedStyledString, StyleRun, StyledString};
pub use target::Target;
