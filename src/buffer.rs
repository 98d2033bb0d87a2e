// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The RGB pixel grid the explorer draws into.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::{debug, info};

use crate::error::{MandelError, Result};
use crate::view::{IntegralPlane, Pixel};

/// Placeholder colour for pixels that have never been rendered.
pub const BLANK: Rgb<u8> = Rgb([255, 255, 255]);

/// A grid of RGB pixels with its origin at the top left.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// A buffer of the given size with every pixel blank.
    pub fn new(plane: IntegralPlane) -> PixelBuffer {
        PixelBuffer {
            image: RgbImage::from_pixel(plane.0 as u32, plane.1 as u32, BLANK),
        }
    }

    /// The buffer's size in pixels.
    pub fn plane(&self) -> IntegralPlane {
        IntegralPlane(self.image.width() as usize, self.image.height() as usize)
    }

    /// Reads one pixel.  Panics if the pixel is outside the buffer.
    pub fn get(&self, pixel: &Pixel) -> Rgb<u8> {
        *self.image.get_pixel(pixel.0 as u32, pixel.1 as u32)
    }

    /// Writes one pixel.  Panics if the pixel is outside the buffer.
    pub fn put(&mut self, pixel: &Pixel, colour: Rgb<u8>) {
        self.image.put_pixel(pixel.0 as u32, pixel.1 as u32, colour);
    }

    /// The underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Raw row-major RGB bytes, three per pixel.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    /// Changes the buffer size.  Whatever overlaps the old contents is
    /// kept in place at the top left; everything newly exposed is blank.
    pub fn resize(&mut self, plane: IntegralPlane) {
        if self.plane() == plane {
            return;
        }
        debug!("resizing buffer from {:?} to {:?}", self.plane(), plane);
        let old = &self.image;
        let (keep_w, keep_h) = (
            old.width().min(plane.0 as u32),
            old.height().min(plane.1 as u32),
        );
        let mut image = RgbImage::from_pixel(plane.0 as u32, plane.1 as u32, BLANK);
        for y in 0..keep_h {
            for x in 0..keep_w {
                image.put_pixel(x, y, *old.get_pixel(x, y));
            }
        }
        self.image = image;
    }

    /// Writes the buffer to `path`.  Without an explicit format, the
    /// path's extension picks one.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: Option<ImageFormat>) -> Result<()> {
        let path = path.as_ref();
        if self.plane().is_empty() {
            return Err(MandelError::EmptyBuffer);
        }
        let format = match format {
            Some(format) => format,
            None => ImageFormat::from_path(path)
                .map_err(|_| MandelError::UnknownFormat(path.display().to_string()))?,
        };
        self.image.save_with_format(path, format)?;
        info!("saved {:?} image to {}", format, path.display());
        Ok(())
    }
}

/// Looks up an image format by its usual file extension, such as
/// `png`, `jpg`, `bmp` or `ppm`.
pub fn format_from_name(name: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(name.to_lowercase())
        .ok_or_else(|| MandelError::UnknownFormat(name.to_string()))
}
