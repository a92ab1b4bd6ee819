/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `glyph_path` describes vector drawing paths - ordered sequences of
//! move/line/quadratic/cubic/close operations in the style of an SVG path -
//! without requiring any particular rendering implementation.
//!
//! ```
//! # use glyph_path::*;
//! #
//! let mut path = Path::new();
//! path.move_to(0.0, 0.0);
//! path.line_to(10.0, 0.0);
//! path.close();
//!
//! assert_eq!(path.to_path_data(2), "M0 0L10 0Z");
//! ```
//!
//! A `Path` is built by appending operations and can then be traversed in
//! several independent ways:
//!
//! * `bounding_box()` measures the true extent of the path, curve interiors
//!   included, using the `glyph_curves` companion crate
//! * `to_path_data()` and `to_svg()` write the compact SVG encodings, and
//!   `to_element()` builds a live element through the `DomDocument` trait
//! * `flatten()` approximates the path as a decimated run of straight-line
//!   sample points
//! * `draw()` replays the path onto anything that implements the
//!   `GraphicsContext` trait
//!
//! All of the traversals are read-only: a path can be measured, serialized,
//! flattened and drawn any number of times, in any order, with the same
//! results. Paths are typically used to represent glyph outlines, but nothing
//! here is specific to fonts.
//!

#[macro_use]
extern crate serde_derive;

mod bounds;
mod consts;
mod context;
mod element;
mod flatten;
mod path;
mod svg;

pub use self::context::*;
pub use self::element::*;
pub use self::flatten::*;
pub use self::path::*;
pub use self::svg::*;

pub use glyph_curves as curves;
pub use glyph_curves::Bounds;
