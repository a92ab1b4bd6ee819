/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;

/// Fractional digits written for a non-whole coordinate when the caller has no
/// preference of its own
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

///
/// Formats one coordinate: a value equal to its own rounding is written as an
/// integer, anything else with exactly `decimal_places` fractional digits
///
fn format_coord(value: f64, decimal_places: usize) -> String {
    if value.round() == value {
        format!("{}", value)
    } else {
        format!("{:.*}", decimal_places, value)
    }
}

///
/// Appends a command's argument list in packed form: no separator by default,
/// with a space only before a non-negative value that is not the first of the
/// list (a leading minus sign already separates values)
///
fn push_coords(out: &mut String, coords: &[f64], decimal_places: usize) {
    for (index, coord) in coords.iter().enumerate() {
        if index > 0 && *coord >= 0.0 {
            out.push(' ');
        }
        out.push_str(&format_coord(*coord, decimal_places));
    }
}

impl Path {
    ///
    /// Writes this path as compact SVG path data
    ///
    /// Every operation becomes its command letter (`M`, `L`, `Q`, `C` or `Z`)
    /// followed immediately by its packed argument values. Calling this twice
    /// on an unchanged path yields identical strings.
    ///
    pub fn to_path_data(&self, decimal_places: usize) -> String {
        let mut data = String::new();

        for op in self.ops() {
            match op {
                PathOp::Move(x, y) => {
                    data.push('M');
                    push_coords(&mut data, &[*x, *y], decimal_places);
                }

                PathOp::Line(x, y) => {
                    data.push('L');
                    push_coords(&mut data, &[*x, *y], decimal_places);
                }

                PathOp::QuadCurve((cp_x, cp_y), (x, y)) => {
                    data.push('Q');
                    push_coords(&mut data, &[*cp_x, *cp_y, *x, *y], decimal_places);
                }

                PathOp::BezierCurve(((cp1_x, cp1_y), (cp2_x, cp2_y)), (x, y)) => {
                    data.push('C');
                    push_coords(
                        &mut data,
                        &[*cp1_x, *cp1_y, *cp2_x, *cp2_y, *x, *y],
                        decimal_places,
                    );
                }

                PathOp::ClosePath => {
                    data.push('Z');
                }
            }
        }

        data
    }

    ///
    /// Wraps the path data in a self-closing SVG `<path>` element
    ///
    /// The fill attribute is only written when it says something: `fill="none"`
    /// when the path has no fill at all, `fill="..."` when the fill differs
    /// from the default black, and nothing otherwise. Stroke and stroke-width
    /// appear together, and only when a stroke colour is set.
    ///
    pub fn to_svg(&self, decimal_places: usize) -> String {
        let mut svg = String::new();

        svg.push_str("<path d=\"");
        svg.push_str(&self.to_path_data(decimal_places));
        svg.push('"');

        match &self.fill {
            None => svg.push_str(" fill=\"none\""),
            Some(color) if color != "black" => {
                svg.push_str(" fill=\"");
                svg.push_str(color);
                svg.push('"');
            }
            Some(_) => {}
        }

        if let Some(color) = &self.stroke {
            svg.push_str(" stroke=\"");
            svg.push_str(color);
            svg.push_str("\" stroke-width=\"");
            svg.push_str(&format!("{}", self.stroke_width));
            svg.push('"');
        }

        svg.push_str("/>");

        svg
    }
}
