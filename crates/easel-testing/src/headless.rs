//! A backend without a window: scripted input in, captured frames out.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use easel_app_shell::{Backend, BackendError};
use easel_foundation::{FrameInput, InputEvent};
use easel_render_pixels::{PixelSurface, RusttypeFonts};
use easel_ui::{DrawSurface, FontService};
use easel_ui_graphics::{Color, Point, Size};

/// One presented frame, copied out of the pixel surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl CapturedFrame {
    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[index..index + 3];
        Some(Color::rgb(px[0], px[1], px[2]))
    }

    /// Number of pixels painted exactly `color`.
    pub fn count(&self, color: Color) -> usize {
        let rgb = [color.red, color.green, color.blue];
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[..3] == rgb)
            .count()
    }
}

/// Frames presented by a [`HeadlessBackend`], shared with the test thread.
#[derive(Clone, Debug, Default)]
pub struct FrameCapture {
    frames: Arc<Mutex<Vec<CapturedFrame>>>,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedFrame>> {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn last(&self) -> Option<CapturedFrame> {
        self.lock().last().cloned()
    }

    /// Takes every frame captured so far.
    pub fn take(&self) -> Vec<CapturedFrame> {
        std::mem::take(&mut *self.lock())
    }

    fn record(&self, surface: &PixelSurface) {
        self.lock().push(CapturedFrame {
            width: surface.width(),
            height: surface.height(),
            pixels: surface.pixels().to_vec(),
        });
    }
}

/// Replays a list of frame inputs, then reports `Quit`.
///
/// Frames are rasterized into a [`PixelSurface`] and every presented frame
/// is copied into a [`FrameCapture`].
pub struct HeadlessBackend {
    surface: PixelSurface,
    fonts: RusttypeFonts,
    inputs: VecDeque<FrameInput>,
    pointer: Point,
    capture: FrameCapture,
}

impl HeadlessBackend {
    pub fn new(
        size: Size,
        inputs: impl IntoIterator<Item = FrameInput>,
        fonts: RusttypeFonts,
        capture: FrameCapture,
    ) -> Self {
        Self {
            surface: PixelSurface::new(size.width.max(0) as u32, size.height.max(0) as u32),
            fonts,
            inputs: inputs.into_iter().collect(),
            pointer: Default::default(),
            capture,
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Backend for HeadlessBackend {
    fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut self.surface
    }

    fn font_service(&mut self) -> Box<dyn FontService> {
        Box::new(self.fonts.clone())
    }

    fn poll_input(&mut self) -> FrameInput {
        match self.inputs.pop_front() {
            Some(input) => {
                self.pointer = input.pointer;
                input
            }
            None => FrameInput::at(self.pointer).with_event(InputEvent::Quit),
        }
    }

    fn present(&mut self) -> Result<(), BackendError> {
        self.capture.record(&self.surface);
        log::trace!("captured headless frame {}", self.capture.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_run_out_into_quit() {
        let mut backend = HeadlessBackend::new(
            Size::new(4, 4),
            [FrameInput::at((2, 3))],
            RusttypeFonts::new(),
            FrameCapture::new(),
        );
        assert!(!backend.poll_input().quit_requested());
        let last = backend.poll_input();
        assert!(last.quit_requested());
        assert_eq!(last.pointer, Point::new(2, 3));
    }

    #[test]
    fn present_copies_the_surface() {
        let capture = FrameCapture::new();
        let mut backend =
            HeadlessBackend::new(Size::new(3, 2), [], RusttypeFonts::new(), capture.clone());
        backend.surface().clear(Color::rgb(1, 2, 3));
        backend.present().expect("present");
        backend.surface().clear(Color::WHITE);

        let frame = capture.last().expect("one frame");
        assert_eq!(capture.len(), 1);
        assert_eq!(frame.size(), Size::new(3, 2));
        assert_eq!(frame.pixel(2, 1), Some(Color::rgb(1, 2, 3)));
        assert_eq!(frame.pixel(3, 1), None);
        assert_eq!(frame.count(Color::rgb(1, 2, 3)), 6);
    }
}
