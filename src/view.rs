// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the ViewState struct, which describes which window of the
//! complex plane is currently mapped onto the pixel buffer, and how
//! deep to iterate inside it.  Maps pixels on the integral plane to
//! points on the complex plane and back, and moves the window around
//! when the user zooms.
//!
//! The window is anchored at `lower_left`, which is the complex point
//! under pixel (0, 0).  Pixel rows grow downward while the imaginary
//! axis grows upward, so walking down the buffer subtracts from the
//! imaginary part.  Both axes share one scale, `width / pixel width`,
//! whatever the buffer's aspect ratio: a tall window shows more of the
//! plane rather than stretching it.

use log::debug;
use num::clamp;

use crate::complex::Complex;
use crate::config::{
    DEFAULT_LOWER_LEFT_IM, DEFAULT_LOWER_LEFT_RE, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH,
    ITERATION_STEP, ZOOM_FACTOR,
};
use crate::error::{MandelError, Result};

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

impl IntegralPlane {
    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }
}

/// Describes the x, y of a pixel, with y growing downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The visible window of the complex plane plus the iteration cap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    lower_left: Complex,
    width: f64,
    max_iterations: i64,
}

impl Default for ViewState {
    /// A 3-wide window that holds the entire set.
    fn default() -> ViewState {
        ViewState {
            lower_left: Complex::new(DEFAULT_LOWER_LEFT_RE, DEFAULT_LOWER_LEFT_IM),
            width: DEFAULT_WIDTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ViewState {
    /// Constructor.  The width must be a positive, finite number of
    /// plane units.
    pub fn new(lower_left: Complex, width: f64, max_iterations: i64) -> Result<ViewState> {
        if !(width.is_finite() && width > 0.0) {
            return Err(MandelError::InvalidWidth(width));
        }
        Ok(ViewState {
            lower_left,
            width,
            max_iterations,
        })
    }

    /// The complex point under pixel (0, 0).
    pub fn lower_left(&self) -> Complex {
        self.lower_left
    }

    /// Plane units spanned by the buffer's horizontal extent.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Plane units spanned by the buffer's vertical extent.
    pub fn height(&self, plane: &IntegralPlane) -> f64 {
        self.width * (plane.1 as f64) / (plane.0 as f64)
    }

    /// The complex point at the far corner of the buffer, one pixel
    /// past the last row and column.
    pub fn far_corner(&self, plane: &IntegralPlane) -> Complex {
        Complex::new(
            self.lower_left.re + self.width,
            self.lower_left.im - self.height(plane),
        )
    }

    /// The iteration cap.  Can be zero or negative after enough zooming
    /// out; the evaluator treats that as "iterate nothing".
    pub fn max_iterations(&self) -> i64 {
        self.max_iterations
    }

    /// Replaces the iteration cap, as the iteration dialog does.
    pub fn set_max_iterations(&mut self, max_iterations: i64) {
        self.max_iterations = max_iterations;
    }

    #[inline]
    fn scale(&self, plane: &IntegralPlane) -> f64 {
        self.width / (plane.0 as f64)
    }

    /// Given a pixel on the integral cartesian plane, map that to the
    /// equivalent point on the complex cartesian plane.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel, plane: &IntegralPlane) -> Complex {
        let scale = self.scale(plane);
        Complex::new(
            scale * (pixel.0 as f64) + self.lower_left.re,
            -scale * (pixel.1 as f64) + self.lower_left.im,
        )
    }

    /// Given a complex number, find the nearest pixel on the integral
    /// plane, or `None` when the point lies outside the buffer.
    pub fn point_to_pixel(&self, point: &Complex, plane: &IntegralPlane) -> Option<Pixel> {
        let scale = self.scale(plane);
        let left = ((point.re - self.lower_left.re) / scale).round();
        let top = ((self.lower_left.im - point.im) / scale).round();
        if !(left >= 0.0 && top >= 0.0 && left < plane.0 as f64 && top < plane.1 as f64) {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }

    /// Like `point_to_pixel`, but points off the buffer are pulled onto
    /// its nearest edge.
    pub fn nearest_pixel(&self, point: &Complex, plane: &IntegralPlane) -> Pixel {
        let scale = self.scale(plane);
        let left = ((point.re - self.lower_left.re) / scale).round();
        let top = ((self.lower_left.im - point.im) / scale).round();
        let clamp_to = |v: f64, len: usize| clamp(v, 0.0, len.saturating_sub(1) as f64) as usize;
        Pixel(clamp_to(left, plane.0), clamp_to(top, plane.1))
    }

    /// Puts `center` at the middle of a window `width` wide.
    fn recenter(&mut self, center: Complex, width: f64) {
        self.width = width;
        self.lower_left = Complex::new(center.re - width / 2.0, center.im + width / 2.0);
    }

    /// Halves the window around the clicked pixel and iterates deeper.
    pub fn zoom_in(&mut self, click: &Pixel, plane: &IntegralPlane) {
        let center = self.pixel_to_point(click, plane);
        let width = self.width / ZOOM_FACTOR;
        self.recenter(center, width);
        self.max_iterations += ITERATION_STEP;
        debug!(
            "zoom in at {} -> width {}, {} iterations",
            center, self.width, self.max_iterations
        );
    }

    /// Doubles the window around the clicked pixel and iterates less.
    /// The cap is not clamped, so it can reach zero or go negative.
    pub fn zoom_out(&mut self, click: &Pixel, plane: &IntegralPlane) {
        let center = self.pixel_to_point(click, plane);
        let width = self.width * ZOOM_FACTOR;
        self.recenter(center, width);
        self.max_iterations -= ITERATION_STEP;
        debug!(
            "zoom out at {} -> width {}, {} iterations",
            center, self.width, self.max_iterations
        );
    }
}
