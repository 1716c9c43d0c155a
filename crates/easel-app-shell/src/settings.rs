use easel_ui_graphics::{Color, ColorSpec, Size};

use crate::window::WindowError;

/// Display settings of a window.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    /// Window title
    pub name: String,
    /// Client area in pixels
    pub size: Size,
    /// Redraws per second, strictly between 1 and 200
    pub fps: u32,
    pub background: ColorSpec,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            name: "Application Window".into(),
            size: Size::new(700, 700),
            fps: 20,
            background: ColorSpec::Color(Color::WHITE),
        }
    }
}

impl WindowSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_background(mut self, background: impl Into<ColorSpec>) -> Self {
        self.background = background.into();
        self
    }

    /// Checks the settings and resolves the background color.
    pub fn validate(&self) -> Result<Color, WindowError> {
        if !(2..200).contains(&self.fps) {
            return Err(WindowError::InvalidFrameRate(self.fps));
        }
        if self.size.is_empty() {
            return Err(WindowError::InvalidSize(self.size));
        }
        Ok(self.background.resolve()?)
    }
}
