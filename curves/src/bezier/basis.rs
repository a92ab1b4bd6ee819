/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Evaluates one axis of a quadratic Bezier curve at parameter `t`
///
/// `w1` is the start point, `w2` the control point and `w3` the end point.
///
#[inline]
pub fn quad_basis(t: f64, w1: f64, w2: f64, w3: f64) -> f64 {
    let one_minus_t = 1.0 - t;

    one_minus_t * one_minus_t * w1 + 2.0 * one_minus_t * t * w2 + t * t * w3
}

///
/// Evaluates one axis of a cubic Bezier curve at parameter `t`
///
/// `w1` is the start point, `w2` and `w3` the control points and `w4` the end
/// point.
///
#[inline]
pub fn cubic_basis(t: f64, w1: f64, w2: f64, w3: f64, w4: f64) -> f64 {
    let t_squared = t * t;
    let t_cubed = t_squared * t;
    let one_minus_t = 1.0 - t;
    let one_minus_t_squared = one_minus_t * one_minus_t;
    let one_minus_t_cubed = one_minus_t_squared * one_minus_t;

    one_minus_t_cubed * w1
        + 3.0 * one_minus_t_squared * t * w2
        + 3.0 * one_minus_t * t_squared * w3
        + t_cubed * w4
}
