/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// An axis-aligned bounding box, built up by applying coordinates one at a time
///
/// A freshly created box is empty: no coordinate has been applied to it yet, and
/// `is_empty()` reports true until both axes have been touched. Coordinates are
/// accepted as-is; nothing here checks for non-finite values.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    ///
    /// Creates a new, empty bounding box
    ///
    pub fn empty() -> Bounds {
        Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    ///
    /// Creates a bounding box that already covers the two corners of a rectangle
    ///
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Bounds {
        let mut bounds = Bounds::empty();

        bounds.add_point(min_x, min_y);
        bounds.add_point(max_x, max_y);

        bounds
    }

    ///
    /// True until a point has been applied along both axes
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    ///
    /// Extends the box along the x axis
    ///
    #[inline]
    pub fn add_x(&mut self, x: f64) {
        self.min_x = f64::min(self.min_x, x);
        self.max_x = f64::max(self.max_x, x);
    }

    ///
    /// Extends the box along the y axis
    ///
    #[inline]
    pub fn add_y(&mut self, y: f64) {
        self.min_y = f64::min(self.min_y, y);
        self.max_y = f64::max(self.max_y, y);
    }

    ///
    /// Extends the box to cover a point
    ///
    #[inline]
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.add_x(x);
        self.add_y(y);
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    ///
    /// Width of the box (negative while the x axis is untouched)
    ///
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    ///
    /// Height of the box (negative while the y axis is untouched)
    ///
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
