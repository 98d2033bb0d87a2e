// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an escape result into a pixel colour.
//!
//! Points inside the set are black.  Escaping points fade from black
//! toward white through cyan the longer they take to escape, so the
//! slow escapers hugging the boundary of the set are the brightest.

use image::Rgb;
use num::clamp;

use crate::escape::EscapeResult;

/// The colour of points inside the set.
pub const INSIDE: Rgb<u8> = Rgb([0, 0, 0]);

/// Red, green and blue intensities in `[0, 1]`.
pub fn channels(result: &EscapeResult) -> [f64; 3] {
    if !result.escaped {
        return [0.0, 0.0, 0.0];
    }
    let inverse = 1.0 / (result.iterations as f64);
    let rb = clamp(1.0 - inverse, 0.0, 1.0);
    let g = clamp(1.0 - inverse.sqrt(), 0.0, 1.0);
    [rb, g, rb]
}

fn to_byte(intensity: f64) -> u8 {
    (clamp(intensity, 0.0, 1.0) * 255.0).round() as u8
}

/// The buffer colour of one escape result.
pub fn colourize(result: &EscapeResult) -> Rgb<u8> {
    let [r, g, b] = channels(result);
    Rgb([to_byte(r), to_byte(g), to_byte(b)])
}
