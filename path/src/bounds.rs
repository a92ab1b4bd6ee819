/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glyph_curves::Bounds;

use super::path::*;

impl Path {
    ///
    /// Finds the bounding box of this path
    ///
    /// Curve operations contribute their true extent, interior extrema
    /// included, with the pen position before the operation as their start
    /// point. A close operation only returns the pen to the start of the
    /// subpath: the segment it implies is not measured. An empty path produces
    /// a box containing just the origin, so the result is never empty.
    ///
    pub fn bounding_box(&self) -> Bounds {
        let mut bounds = Bounds::empty();

        let (mut start_x, mut start_y) = (0.0, 0.0);
        let (mut prev_x, mut prev_y) = (0.0, 0.0);

        for op in self.ops() {
            match op {
                PathOp::Move(x, y) => {
                    bounds.add_point(*x, *y);

                    start_x = *x;
                    start_y = *y;
                    prev_x = *x;
                    prev_y = *y;
                }

                PathOp::Line(x, y) => {
                    bounds.add_point(*x, *y);

                    prev_x = *x;
                    prev_y = *y;
                }

                PathOp::QuadCurve((cp_x, cp_y), (x, y)) => {
                    bounds.add_quad(prev_x, prev_y, *cp_x, *cp_y, *x, *y);

                    prev_x = *x;
                    prev_y = *y;
                }

                PathOp::BezierCurve(((cp1_x, cp1_y), (cp2_x, cp2_y)), (x, y)) => {
                    bounds.add_bezier(prev_x, prev_y, *cp1_x, *cp1_y, *cp2_x, *cp2_y, *x, *y);

                    prev_x = *x;
                    prev_y = *y;
                }

                PathOp::ClosePath => {
                    prev_x = start_x;
                    prev_y = start_y;
                }
            }
        }

        if bounds.is_empty() {
            bounds.add_point(0.0, 0.0);
        }

        bounds
    }
}
