// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The handful of things that can go wrong in the explorer core.

use failure::Fail;

/// Everything the library can report back to a host.
#[derive(Debug, Fail)]
pub enum MandelError {
    /// Checked division by a complex number that is exactly zero.
    #[fail(display = "division by a zero complex number")]
    DivideByZero,

    /// A view must span a positive, finite width of the complex plane.
    #[fail(display = "view width must be positive and finite, got {}", _0)]
    InvalidWidth(f64),

    /// The pixel buffer has no pixels to render or save.
    #[fail(display = "pixel buffer is empty")]
    EmptyBuffer,

    /// A render pass was abandoned before every pixel was written.
    #[fail(display = "render cancelled")]
    Cancelled,

    /// No image format could be determined for a save.
    #[fail(display = "unknown image format: {}", _0)]
    UnknownFormat(String),

    /// The image encoder failed.
    #[fail(display = "could not save image: {}", _0)]
    Image(#[cause] image::ImageError),

    /// A value supplied as text could not be understood.
    #[fail(display = "could not parse {}", _0)]
    Parse(String),
}

impl From<image::ImageError> for MandelError {
    fn from(err: image::ImageError) -> Self {
        MandelError::Image(err)
    }
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, MandelError>;
