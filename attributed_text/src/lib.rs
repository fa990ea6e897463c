// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text stores owned text together with attributes applied to byte ranges.
//!
//! It is the storage layer under `styled_strings`: it validates ranges, records spans in
//! application order, supports appending one attributed text onto another, and cuts overlapping
//! spans into contiguous [`Segments`] so that callers can resolve which attribute wins.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod attributed_text;
mod error;
mod segments;
mod text_range;

pub use crate::attributed_text::AttributedText;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::segments::{Segment, Segments};
pub use crate::text_range::TextRange;
