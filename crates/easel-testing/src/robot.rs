//! Scripted, windowless sessions.
//!
//! A [`Robot`] drives a real [`Window`] with a [`HeadlessBackend`]: the
//! same loop thread, clock and error policy as a desktop window, with
//! scripted input instead of a mouse.

use easel_app_shell::{FrameStats, Window, WindowError, WindowSettings};
use easel_foundation::{FrameInput, InputEvent};
use easel_render_pixels::RusttypeFonts;
use easel_ui::Component;
use easel_ui_graphics::{Point, Rect};

use crate::headless::{CapturedFrame, FrameCapture, HeadlessBackend};

/// What one [`Robot::run`] produced.
#[derive(Debug)]
pub struct RobotRun {
    pub stats: FrameStats,
    /// Every presented frame, including the final `Quit` frame
    pub frames: Vec<CapturedFrame>,
}

impl RobotRun {
    pub fn last_frame(&self) -> Option<&CapturedFrame> {
        self.frames.last()
    }
}

pub struct Robot {
    window: Window,
    fonts: RusttypeFonts,
    script: Vec<FrameInput>,
    pointer: Point,
}

impl Robot {
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            window: Window::new(settings),
            fonts: RusttypeFonts::new(),
            script: Vec::new(),
            pointer: Point::default(),
        }
    }

    /// Fonts handed to the session's text engine.
    pub fn with_fonts(mut self, fonts: RusttypeFonts) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn push(&mut self, component: impl Component + 'static) -> Result<(), WindowError> {
        self.window.push(component)
    }

    /// Frames queued for the next run.
    pub fn scripted_frames(&self) -> usize {
        self.script.len()
    }

    /// Queues a frame that moves the pointer.
    pub fn move_pointer(&mut self, x: i32, y: i32) -> &mut Self {
        self.pointer = Point::new(x, y);
        let input = FrameInput::at(self.pointer).with_event(InputEvent::PointerMoved(self.pointer));
        self.script.push(input);
        self
    }

    pub fn press(&mut self) -> &mut Self {
        let input = FrameInput::at(self.pointer).with_event(InputEvent::primary_down(self.pointer));
        self.script.push(input);
        self
    }

    pub fn release(&mut self) -> &mut Self {
        let input = FrameInput::at(self.pointer).with_event(InputEvent::primary_up(self.pointer));
        self.script.push(input);
        self
    }

    /// Moves to `(x, y)`, then presses and releases there, one frame each.
    pub fn click(&mut self, x: i32, y: i32) -> &mut Self {
        self.move_pointer(x, y).press().release()
    }

    /// Queues idle frames that keep the pointer where it is.
    pub fn wait_frames(&mut self, count: usize) -> &mut Self {
        let idle = FrameInput::at(self.pointer);
        self.script.extend(std::iter::repeat(idle).take(count));
        self
    }

    /// Opens the window, plays the script to the end and closes it again.
    ///
    /// The scene stays in the window, so a robot can run several scripts
    /// against the same components.
    pub fn run(&mut self) -> Result<RobotRun, WindowError> {
        let capture = FrameCapture::new();
        let inputs = std::mem::take(&mut self.script);
        let fonts = self.fonts.clone();
        let frames = capture.clone();
        self.window.open(move |settings: &WindowSettings| {
            Ok(HeadlessBackend::new(settings.size, inputs, fonts, frames))
        })?;
        let stats = self.window.wait_close()?;
        Ok(RobotRun {
            stats,
            frames: capture.take(),
        })
    }
}

/// Center of a rectangle, rounded toward the top-left.
pub fn rect_center(rect: &Rect) -> (i32, i32) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}
