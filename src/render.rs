// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fills a pixel buffer with the part of the Mandelbrot set a view
//! looks at.
//!
//! Every pixel is mapped to the complex plane through the view, run
//! through the escape-time test and coloured.  Pixels never depend on
//! each other, so the threaded renderer hands each thread its own band
//! of rows and the output is identical to the sequential one.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use itertools::iproduct;
use log::{debug, info};

use crate::buffer::PixelBuffer;
use crate::colour::colourize;
use crate::error::{MandelError, Result};
use crate::escape::evaluate;
use crate::view::{IntegralPlane, Pixel, ViewState};

/// A shared flag a host can raise to abandon a render in flight.  It is
/// checked between rows, never in the middle of one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been raised.
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Asks every render watching this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Lowers the flag again so the next render can run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The colour of one pixel under `view`.
#[inline]
fn shade(view: &ViewState, pixel: &Pixel, plane: &IntegralPlane) -> image::Rgb<u8> {
    let c = view.pixel_to_point(pixel, plane);
    colourize(&evaluate(c, view.max_iterations()))
}

/// The reference single-threaded render: walks every column, and every
/// pixel down that column, overwriting the whole buffer.
pub fn render(buffer: &mut PixelBuffer, view: &ViewState) {
    let plane = buffer.plane();
    for (x, y) in iproduct!(0..plane.0, 0..plane.1) {
        let pixel = Pixel(x, y);
        buffer.put(&pixel, shade(view, &pixel, &plane));
    }
}

/// Renders one horizontal band of raw RGB rows, starting at `first_row`.
fn render_rows(
    band: &mut [u8],
    first_row: usize,
    view: &ViewState,
    plane: &IntegralPlane,
    cancel: &CancelToken,
) -> Result<()> {
    for (offset, row) in band.chunks_mut(plane.0 * 3).enumerate() {
        if cancel.is_cancelled() {
            return Err(MandelError::Cancelled);
        }
        let y = first_row + offset;
        for (x, rgb) in row.chunks_mut(3).enumerate() {
            rgb.copy_from_slice(&shade(view, &Pixel(x, y), plane).0);
        }
    }
    Ok(())
}

/// Renders with a fixed number of threads, each taking a contiguous
/// band of rows.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    threads: usize,
}

impl Default for Renderer {
    /// One thread per CPU.
    fn default() -> Renderer {
        Renderer::new(num_cpus::get())
    }
}

impl Renderer {
    /// A renderer using `threads` threads; zero is treated as one.
    pub fn new(threads: usize) -> Renderer {
        Renderer {
            threads: threads.max(1),
        }
    }

    /// How many threads a render will use at most.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Overwrites every pixel of `buffer` with the view.
    pub fn render(&self, buffer: &mut PixelBuffer, view: &ViewState) -> Result<()> {
        self.render_cancellable(buffer, view, &CancelToken::new())
    }

    /// As `render`, but gives up with `Cancelled` as soon as `cancel` is
    /// raised.  A cancelled buffer is only partly drawn.
    pub fn render_cancellable(
        &self,
        buffer: &mut PixelBuffer,
        view: &ViewState,
        cancel: &CancelToken,
    ) -> Result<()> {
        let plane = buffer.plane();
        if plane.is_empty() {
            debug!("nothing to render into an empty buffer");
            return Ok(());
        }

        let start = Instant::now();
        let rows_per_band = (plane.1 + self.threads - 1) / self.threads;
        let raw = buffer.raw_mut();

        let outcome = if self.threads == 1 {
            render_rows(raw, 0, view, &plane, cancel)
        } else {
            let band_len = rows_per_band * plane.0 * 3;
            let plane = &plane;
            crossbeam::scope(|spawner| {
                let handles: Vec<_> = raw
                    .chunks_mut(band_len)
                    .enumerate()
                    .map(|(i, band)| {
                        spawner.spawn(move |_| {
                            render_rows(band, i * rows_per_band, view, plane, cancel)
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                    .collect::<Result<()>>()
            })
            .unwrap_or_else(|e| panic::resume_unwind(e))
        };

        match outcome {
            Ok(()) => info!(
                "rendered {}x{} at {} iterations in {:?} on {} thread(s)",
                plane.0,
                plane.1,
                view.max_iterations(),
                start.elapsed(),
                self.threads
            ),
            Err(MandelError::Cancelled) => info!("render cancelled after {:?}", start.elapsed()),
            Err(_) => (),
        }
        outcome
    }
}
