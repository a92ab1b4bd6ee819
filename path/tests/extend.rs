/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate glyph_path;

use glyph_path::*;

#[test]
fn bounds_extend_as_five_operations() {
    let bounds = Bounds::from_min_max(1.0, 2.0, 11.0, 22.0);
    let mut path = Path::new();

    path.extend(&bounds);

    assert!(path.len() == 5);
    assert!(
        path.ops()
            == &[
                PathOp::Move(1.0, 2.0),
                PathOp::Line(11.0, 2.0),
                PathOp::Line(11.0, 22.0),
                PathOp::Line(1.0, 22.0),
                PathOp::ClosePath,
            ]
    );
}

#[test]
fn bounds_rectangle_measures_back_to_the_same_box() {
    let bounds = Bounds::from_min_max(-4.0, 1.5, 10.0, 9.0);
    let mut path = Path::new();

    path.extend(&bounds);

    let recomputed = path.bounding_box();

    assert!(recomputed.min_x() == bounds.min_x() && recomputed.min_y() == bounds.min_y());
    assert!(recomputed.max_x() == bounds.max_x() && recomputed.max_y() == bounds.max_y());
}

#[test]
fn extending_with_another_path_appends_its_operations() {
    let mut first = Path::new();
    first.move_to(0.0, 0.0);
    first.line_to(5.0, 5.0);

    let mut second = Path::new();
    second.quad_to(6.0, 6.0, 7.0, 7.0);
    second.close();

    first.extend(&second);

    assert!(
        first.ops()
            == &[
                PathOp::Move(0.0, 0.0),
                PathOp::Line(5.0, 5.0),
                PathOp::QuadCurve((6.0, 6.0), (7.0, 7.0)),
                PathOp::ClosePath,
            ]
    );
}

#[test]
fn extending_with_an_operation_list() {
    let mut path = Path::new();
    path.move_to(1.0, 1.0);

    path.extend(vec![PathOp::Line(2.0, 2.0), PathOp::ClosePath]);

    assert!(path.len() == 3);
    assert!(path.ops()[1] == PathOp::Line(2.0, 2.0));
}

#[test]
fn extending_with_a_slice() {
    let ops = [PathOp::Move(0.0, 0.0), PathOp::Line(3.0, 4.0)];
    let mut path = Path::new();

    path.extend(&ops[..]);

    assert!(path.ops() == &ops[..]);
}

#[test]
fn extending_does_not_change_presentation_attributes() {
    let mut decorated = Path::new();
    decorated.fill = Some("red".to_string());
    decorated.move_to(0.0, 0.0);

    let mut path = Path::new();
    path.extend(&decorated);

    assert!(path.fill == Some("black".to_string()));
    assert!(path.len() == 1);
}
