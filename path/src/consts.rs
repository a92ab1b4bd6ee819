/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Minimum distance between accepted samples when a path is flattened (samples
/// closer than this to the last accepted point are dropped)
pub const MIN_SAMPLE_DISTANCE: f64 = 5.0;
