/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glyph_curves::Bounds;

///
/// Operations that define the outline of a path
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Move to a new point, beginning a new subpath
    Move(f64, f64),

    /// Line to point
    Line(f64, f64),

    /// Quadratic Bezier curve through a control point to an end point
    QuadCurve((f64, f64), (f64, f64)),

    /// Cubic Bezier curve through two control points to an end point
    BezierCurve(((f64, f64), (f64, f64)), (f64, f64)),

    /// Closes the current subpath
    ClosePath,
}

impl PathOp {
    ///
    /// The point this operation leaves the pen at, if it carries one
    ///
    /// Close operations carry no coordinates of their own, so they have no
    /// end point here even though they do move the pen.
    ///
    #[inline]
    pub fn end_point(&self) -> Option<(f64, f64)> {
        match self {
            PathOp::Move(x, y) => Some((*x, *y)),
            PathOp::Line(x, y) => Some((*x, *y)),
            PathOp::QuadCurve(_, (x, y)) => Some((*x, *y)),
            PathOp::BezierCurve(_, (x, y)) => Some((*x, *y)),
            PathOp::ClosePath => None,
        }
    }
}

///
/// Source of path operations for `Path::extend()`
///
/// Implemented for other paths, for plain operation lists and for bounding
/// boxes, which contribute their rectangle outline.
///
pub trait IntoPathOps {
    /// The operations this value contributes to a path
    fn into_path_ops(self) -> Vec<PathOp>;
}

impl IntoPathOps for Vec<PathOp> {
    fn into_path_ops(self) -> Vec<PathOp> {
        self
    }
}

impl<'a> IntoPathOps for &'a [PathOp] {
    fn into_path_ops(self) -> Vec<PathOp> {
        self.to_vec()
    }
}

impl<'a> IntoPathOps for &'a Path {
    fn into_path_ops(self) -> Vec<PathOp> {
        self.ops.clone()
    }
}

impl<'a> IntoPathOps for &'a Bounds {
    ///
    /// The rectangle outline of a bounding box, as a closed subpath starting
    /// at the minimum corner and visiting the corners in a fixed order
    ///
    fn into_path_ops(self) -> Vec<PathOp> {
        vec![
            PathOp::Move(self.min_x(), self.min_y()),
            PathOp::Line(self.max_x(), self.min_y()),
            PathOp::Line(self.max_x(), self.max_y()),
            PathOp::Line(self.min_x(), self.max_y()),
            PathOp::ClosePath,
        ]
    }
}

///
/// A vector drawing path, plus the presentation attributes used when it is
/// rendered or written out as SVG
///
/// The operation list is append-only: operations are added at the end and
/// never edited in place, and their order is the drawing order. Nothing here
/// validates the geometry - a path whose first operation is not a move, or one
/// containing non-finite coordinates, is stored exactly as given.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Path {
    pub(crate) ops: Vec<PathOp>,

    /// Colour token the path is filled with (None fills nothing)
    pub fill: Option<String>,

    /// Colour token the path is stroked with (None strokes nothing)
    pub stroke: Option<String>,

    /// Width of the stroke, used only when `stroke` is set
    pub stroke_width: f64,
}

impl Default for Path {
    fn default() -> Path {
        Path {
            ops: vec![],
            fill: Some("black".to_string()),
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl Path {
    ///
    /// Creates a new, empty path with the default presentation attributes
    ///
    pub fn new() -> Path {
        Path::default()
    }

    ///
    /// The operations that make up this path, in drawing order
    ///
    #[inline]
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    ///
    /// Number of operations in this path
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    ///
    /// True if this path contains no operations
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    ///
    /// Appends a raw operation
    ///
    #[inline]
    pub fn push(&mut self, op: PathOp) {
        self.ops.push(op);
    }

    ///
    /// Moves to a new point, beginning a new subpath
    ///
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::Move(x, y));
    }

    ///
    /// Draws a straight line to a point
    ///
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::Line(x, y));
    }

    ///
    /// Draws a quadratic Bezier curve through a control point to an end point
    ///
    pub fn quad_to(&mut self, cp_x: f64, cp_y: f64, x: f64, y: f64) {
        self.ops.push(PathOp::QuadCurve((cp_x, cp_y), (x, y)));
    }

    ///
    /// Draws a cubic Bezier curve through two control points to an end point
    ///
    pub fn curve_to(&mut self, cp1_x: f64, cp1_y: f64, cp2_x: f64, cp2_y: f64, x: f64, y: f64) {
        self.ops
            .push(PathOp::BezierCurve(((cp1_x, cp1_y), (cp2_x, cp2_y)), (x, y)));
    }

    ///
    /// Closes the current subpath
    ///
    pub fn close(&mut self) {
        self.ops.push(PathOp::ClosePath);
    }

    ///
    /// Appends the operations of another path, an operation list or the
    /// rectangle outline of a bounding box
    ///
    pub fn extend<Ops: IntoPathOps>(&mut self, ops: Ops) {
        self.ops.extend(ops.into_path_ops());
    }
}
