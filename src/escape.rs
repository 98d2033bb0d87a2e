// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test for a single point.
//!
//! Starting from zero, the point `c` is fed through `z = z * z + c`
//! over and over.  Once the orbit lands further than the bound radius
//! from the origin it is guaranteed to run off to infinity, and the
//! number of steps it took is the "velocity" used to colour the pixel.
//! Orbits that are still bounded when the iteration budget runs out are
//! taken to be inside the set.

use crate::complex::Complex;
use crate::config::BOUND_RADIUS;

/// The outcome of iterating one point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscapeResult {
    /// Whether the orbit left the bound radius.
    pub escaped: bool,
    /// The step at which the orbit escaped (at least one), or the
    /// iteration cap if it never did.
    pub iterations: i64,
}

impl EscapeResult {
    fn escaped(iterations: i64) -> EscapeResult {
        EscapeResult {
            escaped: true,
            iterations,
        }
    }

    fn bounded(max_iterations: i64) -> EscapeResult {
        EscapeResult {
            escaped: false,
            iterations: max_iterations,
        }
    }
}

/// Iterates `c` for steps `1..max_iterations`, stopping at the first
/// step whose magnitude strictly exceeds the bound radius.
///
/// A cap of one or less runs no steps at all, so the point is reported
/// as bounded whatever it is.  That includes the zero and negative caps
/// reachable by zooming out repeatedly.
pub fn evaluate(c: Complex, max_iterations: i64) -> EscapeResult {
    let mut z = Complex::default();
    for i in 1..max_iterations {
        z = z * z + c;
        if z.magnitude() > BOUND_RADIUS {
            return EscapeResult::escaped(i);
        }
    }
    EscapeResult::bounded(max_iterations)
}
