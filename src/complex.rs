// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small complex number value type.  It carries exactly the arithmetic
//! the escape-time iteration and the view transforms need, and every
//! operator hands back a fresh value.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num::{One, Zero};

use crate::config::parse_complex;
use crate::error::{MandelError, Result};

/// A point on the complex plane.  The real part is the x-component and
/// the imaginary part is the y-component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl Complex {
    /// Builds a complex number from its two components.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// The mirror image across the real axis.
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Squared distance from the origin.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Distance from the origin.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Raises to a non-negative integer power by repeated multiplication,
    /// starting from one.  Linear in `n`.
    pub fn pow(self, n: u32) -> Complex {
        (0..n).fold(Complex::one(), |acc, _| acc * self)
    }

    /// Division that refuses an exactly-zero divisor instead of
    /// producing NaN or infinite components.
    pub fn checked_div(self, rhs: Complex) -> Result<Complex> {
        if rhs.is_zero() {
            return Err(MandelError::DivideByZero);
        }
        Ok(self / rhs)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        self + (-rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Multiplies through by the conjugate of the divisor.  A zero divisor
/// yields non-finite components; use `checked_div` to catch it.
impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let conj = rhs.conj();
        let numerator = self * conj;
        // (b * conj(b)) is real.
        let denominator = (rhs * conj).re;
        Complex::new(numerator.re / denominator, numerator.im / denominator)
    }
}

impl Zero for Complex {
    fn zero() -> Complex {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Complex {
        Complex::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "({} + {}i)", self.re, self.im)
        } else {
            write!(f, "({} - {}i)", self.re, -self.im)
        }
    }
}

/// Reads the `re,im` form used on the command line.
impl FromStr for Complex {
    type Err = MandelError;

    fn from_str(s: &str) -> Result<Complex> {
        parse_complex(s).ok_or_else(|| MandelError::Parse(format!("complex number '{}'", s)))
    }
}
