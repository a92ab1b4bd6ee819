/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! The `Bounds` type describes an axis-aligned bounding box as a mutable
//! accumulator: it starts out empty and grows as coordinates are applied to
//! it. The curve-aware operations that extend a `Bounds` over the interior of
//! a Bezier curve live in the `bezier` module.
//!

mod bounding_box;

pub use self::bounding_box::*;
