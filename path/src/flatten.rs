/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glyph_curves::bezier::*;

use super::consts::*;
use super::path::*;

///
/// Sampling density used when a path is flattened
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FlattenOptions {
    /// Samples taken along each straight segment
    pub line_samples: usize,

    /// Samples taken along each quadratic or cubic curve segment
    pub curve_samples: usize,
}

impl Default for FlattenOptions {
    fn default() -> FlattenOptions {
        FlattenOptions {
            line_samples: 5,
            curve_samples: 10,
        }
    }
}

///
/// Evaluates one sample of an operation at parameter `t`, starting from the
/// pen position `(start_x, start_y)`
///
/// `close_target` is the end point of the first operation of the whole
/// sequence, which is where a close operation heads.
///
fn op_point(
    op: &PathOp,
    t: f64,
    start_x: f64,
    start_y: f64,
    close_target: (f64, f64),
) -> (f64, f64) {
    match op {
        PathOp::Move(x, y) => (*x, *y),

        PathOp::Line(x, y) => (
            start_x + (*x - start_x) * t,
            start_y + (*y - start_y) * t,
        ),

        PathOp::QuadCurve((cp_x, cp_y), (x, y)) => (
            quad_basis(t, start_x, *cp_x, *x),
            quad_basis(t, start_y, *cp_y, *y),
        ),

        PathOp::BezierCurve(((cp1_x, cp1_y), (cp2_x, cp2_y)), (x, y)) => (
            cubic_basis(t, start_x, *cp1_x, *cp2_x, *x),
            cubic_basis(t, start_y, *cp1_y, *cp2_y, *y),
        ),

        PathOp::ClosePath => (
            start_x + (close_target.0 - start_x) * t,
            start_y + (close_target.1 - start_y) * t,
        ),
    }
}

impl Path {
    ///
    /// Approximates this path as a flat run of straight-line sample points
    ///
    /// Every operation is evaluated at evenly spaced parameters and the
    /// samples are decimated: one closer than 5 units to the previously
    /// accepted sample is dropped. Accepted points are returned as a flat
    /// `[x, y, x, y, ...]` list in drawing order. Each call recomputes from
    /// scratch; nothing is cached on the path.
    ///
    /// Close operations are sampled toward the end point of the first
    /// operation of the whole path, not the start of their own subpath, so a
    /// path with several subpaths closes each of them toward its overall
    /// first point.
    ///
    pub fn flatten(&self, options: &FlattenOptions) -> Vec<f64> {
        let close_target = self
            .ops()
            .first()
            .and_then(|op| op.end_point())
            .unwrap_or((0.0, 0.0));

        let mut points = vec![];

        // Pen position, tracked from the operation end points
        let (mut last_x, mut last_y) = (0.0, 0.0);

        // Most recently accepted sample, which decimation measures against
        let (mut current_x, mut current_y) = (0.0, 0.0);

        for op in self.ops() {
            if let PathOp::Move(x, y) = op {
                // A move lifts the pen, so it contributes no samples of its own
                last_x = *x;
                last_y = *y;
                continue;
            }

            let num_samples = match op {
                PathOp::Move(_, _) | PathOp::ClosePath => 1,
                PathOp::Line(_, _) => options.line_samples,
                PathOp::QuadCurve(_, _) | PathOp::BezierCurve(_, _) => options.curve_samples,
            };

            for step in 0..=num_samples {
                let t = step as f64 / num_samples as f64;
                let (sample_x, sample_y) = op_point(op, t, last_x, last_y, close_target);

                let (dist_x, dist_y) = (sample_x - current_x, sample_y - current_y);
                let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();

                if distance > MIN_SAMPLE_DISTANCE {
                    points.push(sample_x);
                    points.push(sample_y);

                    current_x = sample_x;
                    current_y = sample_y;
                }
            }

            // The pen ends up at the operation's end point whether or not any
            // of its samples survived decimation
            let (end_x, end_y) = op.end_point().unwrap_or(close_target);
            last_x = end_x;
            last_y = end_y;
        }

        points
    }
}
