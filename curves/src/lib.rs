/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Geometry support for vector glyph outlines
//!
//! ```
//! # use glyph_curves::*;
//! #
//! let mut bounds = Bounds::empty();
//! bounds.add_bezier(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
//!
//! assert!(!bounds.is_empty());
//! assert!((bounds.max_y() - 7.5).abs() < 1e-9);
//! ```
//!
//! This crate provides the geometric building blocks used by `glyph_path`: the
//! `Bounds` accumulator, which builds an axis-aligned bounding box by having
//! points applied to it one at a time, and the `bezier` module, which evaluates
//! quadratic and cubic Bezier curves one axis at a time.
//!
//! `Bounds` knows how to cover the true extent of a curve, not just its control
//! points: `add_quad()` and `add_bezier()` solve for the parameters where the
//! curve's derivative vanishes and apply the interior extrema along with the
//! end points.
//!

#[macro_use]
extern crate serde_derive;

pub mod bezier;
pub mod geo;

pub use self::geo::*;
