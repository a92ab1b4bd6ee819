/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glyph_path::*;

///
/// Builds a small glyph-like outline and prints its SVG form, bounding box
/// and flattened sample points
///
pub fn main() {
    // A rounded triangle, roughly the counter of an 'A'
    let mut path = Path::new();

    path.move_to(50.0, 0.0);
    path.curve_to(80.0, 20.0, 90.0, 60.0, 80.0, 100.0);
    path.line_to(20.0, 100.0);
    path.quad_to(0.0, 50.0, 50.0, 0.0);
    path.close();

    println!("{}", path.to_svg(2));

    let bounds = path.bounding_box();
    println!(
        "bounds: ({}, {}) - ({}, {})",
        bounds.min_x(),
        bounds.min_y(),
        bounds.max_x(),
        bounds.max_y()
    );

    let points = path.flatten(&FlattenOptions::default());
    println!("flattened to {} points", points.len() / 2);
}
