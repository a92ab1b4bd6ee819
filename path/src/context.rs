/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;

///
/// A 2D drawing surface that paths can be replayed onto
///
/// This mirrors the familiar canvas-style drawing context: a path is begun,
/// built up out of move/line/curve calls, then filled and/or stroked.
/// Implementations supply the actual rendering; this crate only describes the
/// calls to make.
///
pub trait GraphicsContext {
    /// Begins a new path on this surface
    fn begin_path(&mut self);

    /// Moves to a point without drawing
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight line to a point
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a quadratic Bezier curve through a control point to an end point
    fn quadratic_curve_to(&mut self, cp_x: f64, cp_y: f64, x: f64, y: f64);

    /// Adds a cubic Bezier curve through two control points to an end point
    fn bezier_curve_to(&mut self, cp1_x: f64, cp1_y: f64, cp2_x: f64, cp2_y: f64, x: f64, y: f64);

    /// Closes the current subpath
    fn close_path(&mut self);

    /// Sets the colour used by `fill()`
    fn set_fill_color(&mut self, color: &str);

    /// Sets the colour used by `stroke()`
    fn set_stroke_color(&mut self, color: &str);

    /// Sets the width of stroked lines
    fn set_line_width(&mut self, width: f64);

    /// Fills the current path
    fn fill(&mut self);

    /// Strokes the outline of the current path
    fn stroke(&mut self);
}

impl Path {
    ///
    /// Draws this path onto a graphics context
    ///
    /// The operations are replayed in order, then the path is filled if a fill
    /// colour is set and stroked if a stroke colour is set. Filling and
    /// stroking are independent: a path with both gets both.
    ///
    pub fn draw(&self, gc: &mut impl GraphicsContext) {
        gc.begin_path();

        for op in self.ops() {
            match op {
                PathOp::Move(x, y) => gc.move_to(*x, *y),
                PathOp::Line(x, y) => gc.line_to(*x, *y),
                PathOp::QuadCurve((cp_x, cp_y), (x, y)) => {
                    gc.quadratic_curve_to(*cp_x, *cp_y, *x, *y)
                }
                PathOp::BezierCurve(((cp1_x, cp1_y), (cp2_x, cp2_y)), (x, y)) => {
                    gc.bezier_curve_to(*cp1_x, *cp1_y, *cp2_x, *cp2_y, *x, *y)
                }
                PathOp::ClosePath => gc.close_path(),
            }
        }

        if let Some(fill) = &self.fill {
            gc.set_fill_color(fill);
            gc.fill();
        }

        if let Some(stroke) = &self.stroke {
            gc.set_stroke_color(stroke);
            gc.set_line_width(self.stroke_width);
            gc.stroke();
        }
    }
}
