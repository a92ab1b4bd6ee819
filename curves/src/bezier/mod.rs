/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for evaluating Bezier curves
//!
//! ```
//! # use glyph_curves::bezier::*;
//! #
//! let mid_x = quad_basis(0.5, 0.0, 5.0, 10.0);
//!
//! assert!((mid_x - 5.0).abs() < 1e-9);
//! ```
//!
//! Curves are evaluated one axis at a time: a 2-dimensional curve is just the
//! same basis function applied to the x weights and then to the y weights. The
//! `quad_extrema()` and `cubic_extrema()` functions find the parameters where
//! an axis reaches an interior extremum, which is what lets a `Bounds` cover
//! the true extent of a curve rather than the hull of its control points.
//!

mod basis;
mod bounds;

pub use self::basis::*;
pub use self::bounds::*;

pub use super::geo::*;
