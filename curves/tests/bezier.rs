/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate glyph_curves;

use glyph_curves::bezier::*;

#[test]
fn quad_basis_hits_end_points() {
    assert!((quad_basis(0.0, 1.0, 5.0, 9.0) - 1.0).abs() < 1e-12);
    assert!((quad_basis(1.0, 1.0, 5.0, 9.0) - 9.0).abs() < 1e-12);
}

#[test]
fn quad_basis_midpoint() {
    // Symmetric weights peak halfway between the control point and the chord
    assert!((quad_basis(0.5, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-12);
}

#[test]
fn cubic_basis_hits_end_points() {
    assert!((cubic_basis(0.0, 2.0, 4.0, 6.0, 8.0) - 2.0).abs() < 1e-12);
    assert!((cubic_basis(1.0, 2.0, 4.0, 6.0, 8.0) - 8.0).abs() < 1e-12);
}

#[test]
fn cubic_basis_midpoint() {
    assert!((cubic_basis(0.5, 0.0, 0.0, 10.0, 10.0) - 5.0).abs() < 1e-12);
}

#[test]
fn quad_extremum_for_symmetric_weights() {
    let extrema = quad_extrema(0.0, 10.0, 0.0);

    assert!(extrema.len() == 1);
    assert!((extrema[0] - 0.5).abs() < 1e-12);
}

#[test]
fn monotone_quad_has_no_extrema() {
    let extrema = quad_extrema(0.0, 5.0, 10.0);

    assert!(extrema.is_empty());
}

#[test]
fn cubic_with_one_interior_extremum() {
    let extrema = cubic_extrema(0.0, 10.0, 10.0, 0.0);

    assert!(extrema.len() == 1);
    assert!((extrema[0] - 0.5).abs() < 1e-12);
}

#[test]
fn cubic_with_two_interior_extrema() {
    let extrema = cubic_extrema(0.0, 10.0, -10.0, 0.0);

    assert!(extrema.len() == 2);
    assert!(extrema.iter().all(|t| *t > 0.0 && *t < 1.0));
}

#[test]
fn monotone_cubic_has_no_extrema() {
    let extrema = cubic_extrema(0.0, 3.0, 7.0, 10.0);

    assert!(extrema.is_empty());
}

#[test]
fn add_quad_covers_the_interior() {
    let mut bounds = Bounds::empty();

    bounds.add_quad(0.0, 0.0, 5.0, 10.0, 10.0, 0.0);

    // The chord's own box is flat: the curve's peak is what sets max_y
    assert!((bounds.max_y() - 5.0).abs() < 1e-9);
    assert!(bounds.min_y() == 0.0);
    assert!(bounds.min_x() == 0.0 && bounds.max_x() == 10.0);
}

#[test]
fn add_bezier_covers_the_interior() {
    let mut bounds = Bounds::empty();

    bounds.add_bezier(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);

    // Both end points sit at y=0 and the controls at y=10; the curve itself
    // tops out at 7.5
    assert!((bounds.max_y() - 7.5).abs() < 1e-9);
    assert!(bounds.min_y() == 0.0);
}

#[test]
fn add_bezier_covers_a_dip_below_the_chord() {
    let mut bounds = Bounds::empty();

    bounds.add_bezier(0.0, 0.0, 0.0, -10.0, 10.0, -10.0, 10.0, 0.0);

    assert!((bounds.min_y() - (-7.5)).abs() < 1e-9);
    assert!(bounds.max_y() == 0.0);
}

#[test]
fn collinear_quad_is_just_its_chord() {
    let mut bounds = Bounds::empty();

    bounds.add_quad(0.0, 0.0, 5.0, 5.0, 10.0, 10.0);

    assert!(bounds.min_x() == 0.0 && bounds.min_y() == 0.0);
    assert!(bounds.max_x() == 10.0 && bounds.max_y() == 10.0);
}
