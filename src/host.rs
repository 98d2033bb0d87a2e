// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The thin adapter a windowing toolkit drives.
//!
//! An `Explorer` owns the view, the pixel buffer and a renderer, and
//! turns the handful of things a window can tell it (it was resized, it
//! was double-clicked, it needs painting, save me to disk) into view
//! transitions and render passes.  Everything here runs on the caller's
//! thread; a render holds `&mut self` until it has finished, so no
//! interaction can land in the middle of one.

use std::path::Path;

use image::ImageFormat;
use log::{debug, info};

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::render::{CancelToken, Renderer};
use crate::view::{IntegralPlane, Pixel, ViewState};

/// Which mouse button a click came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Zooms in.
    Left,
    /// Zooms out.
    Right,
    /// Ignored.
    Middle,
}

/// View, buffer and renderer for one explorer window.
#[derive(Debug)]
pub struct Explorer {
    view: ViewState,
    buffer: PixelBuffer,
    renderer: Renderer,
    cancel: CancelToken,
    buffer_initialized: bool,
}

impl Explorer {
    /// Starts on the default full-set view with a blank buffer.  Nothing
    /// is rendered until the first `paint`.
    pub fn new(plane: IntegralPlane, renderer: Renderer) -> Explorer {
        Explorer::with_view(ViewState::default(), plane, renderer)
    }

    /// Starts on an arbitrary view.
    pub fn with_view(view: ViewState, plane: IntegralPlane, renderer: Renderer) -> Explorer {
        Explorer {
            view,
            buffer: PixelBuffer::new(plane),
            renderer,
            cancel: CancelToken::new(),
            buffer_initialized: false,
        }
    }

    /// The current view.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current buffer, whatever state it is in.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Whether a render pass has run to completion since startup.
    pub fn is_initialized(&self) -> bool {
        self.buffer_initialized
    }

    /// A handle another thread can use to cancel the render in flight.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The window changed size.  The buffer keeps what it had at the top
    /// left and blanks the rest; the view is left alone, so the same
    /// plane scale now covers a differently shaped region.  Does not
    /// render.
    pub fn on_resize(&mut self, plane: IntegralPlane) {
        debug!("window resized to {}x{}", plane.0, plane.1);
        self.buffer.resize(plane);
    }

    /// A double click zooms toward (left) or away from (right) the
    /// clicked pixel and redraws.  Other buttons, and clicks on an empty
    /// buffer, do nothing.
    pub fn on_double_click(&mut self, button: MouseButton, click: Pixel) -> Result<()> {
        let plane = self.buffer.plane();
        if plane.is_empty() {
            return Ok(());
        }
        match button {
            MouseButton::Left => self.view.zoom_in(&click, &plane),
            MouseButton::Right => self.view.zoom_out(&click, &plane),
            MouseButton::Middle => return Ok(()),
        }
        self.render()
    }

    /// The buffer to put on screen.  The very first paint renders it.
    pub fn paint(&mut self) -> Result<&PixelBuffer> {
        if !self.buffer_initialized {
            self.render()?;
        }
        Ok(&self.buffer)
    }

    /// Redraws the whole buffer from the current view.
    pub fn render(&mut self) -> Result<()> {
        self.cancel.reset();
        self.buffer_initialized = false;
        self.renderer
            .render_cancellable(&mut self.buffer, &self.view, &self.cancel)?;
        self.buffer_initialized = true;
        Ok(())
    }

    /// Goes back to the startup view and redraws.
    pub fn reset_view(&mut self) -> Result<()> {
        info!("resetting to the full-set view");
        self.view = ViewState::default();
        self.render()
    }

    /// The iteration cap, for an iteration dialog to show.
    pub fn max_iterations(&self) -> i64 {
        self.view.max_iterations()
    }

    /// Sets the iteration cap.  Takes effect on the next render.
    pub fn set_max_iterations(&mut self, max_iterations: i64) {
        self.view.set_max_iterations(max_iterations);
    }

    /// Writes the buffer to disk, finishing a render first if none has
    /// completed yet.
    pub fn save_image<P: AsRef<Path>>(&mut self, path: P, format: Option<ImageFormat>) -> Result<()> {
        self.paint()?;
        self.buffer.save(path, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BLANK;
    use crate::colour::INSIDE;
    use crate::error::MandelError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn explorer(w: usize, h: usize) -> Explorer {
        Explorer::new(IntegralPlane(w, h), Renderer::new(2))
    }

    #[test]
    fn nothing_is_drawn_before_the_first_paint() {
        let mut explorer = explorer(8, 8);
        assert!(!explorer.is_initialized());
        assert!(explorer.buffer().image().pixels().all(|p| *p == BLANK));
        explorer.paint().unwrap();
        assert!(explorer.is_initialized());
        assert!(explorer.buffer().image().pixels().all(|p| *p != BLANK));
    }

    #[test]
    fn later_paints_do_not_rerender() {
        let mut explorer = explorer(8, 8);
        explorer.paint().unwrap();
        explorer.on_resize(IntegralPlane(12, 8));
        let painted = explorer.paint().unwrap();
        assert_eq!(painted.get(&Pixel(11, 7)), BLANK);
        assert_ne!(painted.get(&Pixel(0, 0)), BLANK);
    }

    #[test]
    fn resize_leaves_the_view_alone() {
        let mut explorer = explorer(8, 8);
        let before = *explorer.view();
        explorer.on_resize(IntegralPlane(30, 5));
        assert_eq!(*explorer.view(), before);
        assert_eq!(explorer.buffer().plane(), IntegralPlane(30, 5));
    }

    #[test]
    fn left_double_click_zooms_in_and_renders() {
        let mut explorer = explorer(20, 20);
        explorer
            .on_double_click(MouseButton::Left, Pixel(10, 10))
            .unwrap();
        assert!(explorer.is_initialized());
        assert_eq!(explorer.view().width(), 1.5);
        assert_eq!(explorer.max_iterations(), 300);
    }

    #[test]
    fn right_double_click_zooms_out() {
        let mut explorer = explorer(20, 20);
        explorer
            .on_double_click(MouseButton::Right, Pixel(10, 10))
            .unwrap();
        assert_eq!(explorer.view().width(), 6.0);
        assert_eq!(explorer.max_iterations(), 100);
    }

    #[test]
    fn middle_double_click_is_ignored() {
        let mut explorer = explorer(20, 20);
        explorer
            .on_double_click(MouseButton::Middle, Pixel(3, 3))
            .unwrap();
        assert_eq!(*explorer.view(), ViewState::default());
        assert!(!explorer.is_initialized());
    }

    #[test]
    fn clicks_on_an_empty_buffer_leave_the_view_alone() {
        let mut explorer = explorer(0, 10);
        explorer
            .on_double_click(MouseButton::Left, Pixel(0, 0))
            .unwrap();
        assert_eq!(*explorer.view(), ViewState::default());
        assert!(explorer.view().lower_left().re.is_finite());
    }

    #[test]
    fn cancelled_render_is_redrawn_on_the_next_paint() {
        let mut explorer = explorer(400, 400);
        explorer.set_max_iterations(200_000);

        let token = explorer.cancel_token();
        let done = Arc::new(AtomicBool::new(false));
        let canceller = {
            let done = done.clone();
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    thread::sleep(Duration::from_millis(10));
                    token.cancel();
                }
            })
        };
        let result = explorer.render();
        done.store(true, Ordering::Relaxed);
        canceller.join().unwrap();

        match result {
            Err(MandelError::Cancelled) => (),
            other => panic!("expected Cancelled, got {:?}", other),
        }
        assert!(!explorer.is_initialized());

        explorer.set_max_iterations(20);
        explorer.on_resize(IntegralPlane(16, 16));
        explorer.paint().unwrap();
        assert!(explorer.is_initialized());
        assert!(explorer.buffer().image().pixels().all(|p| *p != BLANK));
    }

    #[test]
    fn zooming_out_past_zero_iterations_still_renders() {
        let mut explorer = explorer(6, 6);
        for _ in 0..4 {
            explorer
                .on_double_click(MouseButton::Right, Pixel(3, 3))
                .unwrap();
        }
        assert_eq!(explorer.max_iterations(), -200);
        assert!(explorer.buffer().image().pixels().all(|p| *p == INSIDE));
    }

    #[test]
    fn iteration_cap_round_trips_through_the_accessors() {
        let mut explorer = explorer(4, 4);
        explorer.set_max_iterations(777);
        assert_eq!(explorer.max_iterations(), 777);
        assert_eq!(explorer.view().max_iterations(), 777);
    }

    #[test]
    fn reset_returns_to_the_full_set() {
        let mut explorer = explorer(10, 10);
        explorer
            .on_double_click(MouseButton::Left, Pixel(2, 7))
            .unwrap();
        explorer.reset_view().unwrap();
        assert_eq!(*explorer.view(), ViewState::default());
    }

    #[test]
    fn save_renders_a_complete_snapshot_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.png");
        let mut explorer = explorer(9, 7);
        explorer.save_image(&path, Some(ImageFormat::Png)).unwrap();
        assert!(explorer.is_initialized());
        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(&saved, explorer.buffer().image());
    }
}
