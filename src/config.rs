// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Default settings for the explorer, and the little text parsers the
//! command line uses to read them back in.

use std::str::FromStr;

use crate::complex::Complex;
use crate::error::{MandelError, Result};

/// Real part of the lower-left corner of the startup view.
pub const DEFAULT_LOWER_LEFT_RE: f64 = -2.0;

/// Imaginary part of the lower-left corner of the startup view.  The
/// reference view is anchored at +1.5 and drawn downward, since screen
/// rows grow down while the imaginary axis grows up.
pub const DEFAULT_LOWER_LEFT_IM: f64 = 1.5;

/// Width of the startup view on the complex plane.
pub const DEFAULT_WIDTH: f64 = 3.0;

/// Iteration cap of the startup view.
pub const DEFAULT_MAX_ITERATIONS: i64 = 200;

/// How much a zoom in or out scales the view width.
pub const ZOOM_FACTOR: f64 = 2.0;

/// How much a zoom in adds to (and a zoom out removes from) the
/// iteration cap.
pub const ITERATION_STEP: i64 = 100;

/// Once an orbit is further than this from the origin it will diverge.
pub const BOUND_RADIUS: f64 = 2.0;

/// Buffer size used by the command-line host when none is given.
pub const DEFAULT_SIZE: (usize, usize) = (800, 600);

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (
            T::from_str(s[..index].trim()),
            T::from_str(s[index + 1..].trim()),
        ) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
pub fn parse_complex(s: &str) -> Option<Complex> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

/// Parses a `WIDTHxHEIGHT` buffer size.  Both sides must be non-zero.
pub fn parse_size(s: &str) -> Result<(usize, usize)> {
    match parse_pair::<usize>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(MandelError::Parse(format!("image size '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_with_separator() {
        assert_eq!(parse_pair::<usize>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<f64>("-2, 1.5", ','), Some((-2.0, 1.5)));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert_eq!(parse_pair::<usize>("800", 'x'), None);
        assert_eq!(parse_pair::<usize>("800x", 'x'), None);
        assert_eq!(parse_pair::<usize>("ax600", 'x'), None);
    }

    #[test]
    fn parses_complex_values() {
        assert_eq!(parse_complex("-2,1.5"), Some(Complex::new(-2.0, 1.5)));
        assert_eq!(parse_complex("-2;1.5"), None);
    }

    #[test]
    fn size_must_be_nonzero() {
        assert_eq!(parse_size("10x20").unwrap(), (10, 20));
        assert!(parse_size("0x20").is_err());
        assert!(parse_size("tall").is_err());
    }
}
