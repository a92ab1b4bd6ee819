/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use roots::{find_roots_linear, find_roots_quadratic};
use smallvec::SmallVec;

use super::super::geo::*;
use super::basis::*;

///
/// Finds the parameters where one axis of a quadratic Bezier curve reaches an
/// interior extremum
///
/// The derivative of the quadratic basis is linear, so there is at most one
/// such parameter. Only parameters strictly between 0 and 1 are returned: the
/// values at the ends of the curve are the end points themselves.
///
pub fn quad_extrema(w1: f64, w2: f64, w3: f64) -> SmallVec<[f64; 2]> {
    // d/dt = 2((w1 - 2w2 + w3)t + (w2 - w1))
    find_roots_linear(w1 - 2.0 * w2 + w3, w2 - w1)
        .as_ref()
        .iter()
        .copied()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}

///
/// Finds the parameters where one axis of a cubic Bezier curve reaches an
/// interior extremum
///
/// The derivative of the cubic basis is quadratic, so there are at most two
/// such parameters. Only parameters strictly between 0 and 1 are returned.
///
pub fn cubic_extrema(w1: f64, w2: f64, w3: f64, w4: f64) -> SmallVec<[f64; 2]> {
    // d/dt = 3((d1 - 2d2 + d3)t^2 + 2(d2 - d1)t + d1) where dN are the
    // differences between consecutive weights
    let d1 = w2 - w1;
    let d2 = w3 - w2;
    let d3 = w4 - w3;

    find_roots_quadratic(d1 - 2.0 * d2 + d3, 2.0 * (d2 - d1), d1)
        .as_ref()
        .iter()
        .copied()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}

impl Bounds {
    ///
    /// Extends the box to cover a quadratic Bezier curve, interior included
    ///
    /// The start point is supplied by the caller as curves only store the
    /// points that follow the current position.
    ///
    pub fn add_quad(
        &mut self,
        start_x: f64,
        start_y: f64,
        cp_x: f64,
        cp_y: f64,
        end_x: f64,
        end_y: f64,
    ) {
        self.add_point(start_x, start_y);
        self.add_point(end_x, end_y);

        for t in quad_extrema(start_x, cp_x, end_x) {
            self.add_x(quad_basis(t, start_x, cp_x, end_x));
        }
        for t in quad_extrema(start_y, cp_y, end_y) {
            self.add_y(quad_basis(t, start_y, cp_y, end_y));
        }
    }

    ///
    /// Extends the box to cover a cubic Bezier curve, interior included
    ///
    pub fn add_bezier(
        &mut self,
        start_x: f64,
        start_y: f64,
        cp1_x: f64,
        cp1_y: f64,
        cp2_x: f64,
        cp2_y: f64,
        end_x: f64,
        end_y: f64,
    ) {
        self.add_point(start_x, start_y);
        self.add_point(end_x, end_y);

        for t in cubic_extrema(start_x, cp1_x, cp2_x, end_x) {
            self.add_x(cubic_basis(t, start_x, cp1_x, cp2_x, end_x));
        }
        for t in cubic_extrema(start_y, cp1_y, cp2_y, end_y) {
            self.add_y(cubic_basis(t, start_y, cp1_y, cp2_y, end_y));
        }
    }
}
