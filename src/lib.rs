#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot explorer core
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring and adding `c`, starting from zero,
//! never runs off to infinity.  Points outside the set escape at some
//! "velocity", the number of steps it takes before the orbit is
//! provably diverging, and that velocity is what gives the picture its
//! colour.
//!
//! This crate holds everything an interactive explorer needs apart
//! from the window itself: a small complex number type, the
//! escape-time test, a view of the plane that can map pixels to points
//! and zoom around a click, and a renderer that fills an RGB buffer
//! from a view.  `Explorer` bundles these behind the few calls a
//! windowing toolkit makes.

pub mod buffer;
pub mod colour;
pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod host;
pub mod render;
pub mod view;

pub use buffer::PixelBuffer;
pub use complex::Complex;
pub use error::{MandelError, Result};
pub use escape::{evaluate, EscapeResult};
pub use host::{Explorer, MouseButton};
pub use render::{render, CancelToken, Renderer};
pub use view::{IntegralPlane, Pixel, ViewState};
