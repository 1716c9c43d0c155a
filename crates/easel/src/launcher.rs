//! Builder that opens a desktop window for a scene and waits for it.

use easel_app_shell::{WindowError, WindowSettings};
use easel_render_pixels::RusttypeFonts;
use easel_ui::FontError;
#[cfg(feature = "desktop")]
use {easel_app_shell::FrameStats, easel_ui::Component};
use easel_ui_graphics::ColorSpec;

/// Errors from [`AppLauncher::run`].
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// A font passed to [`AppLauncher::with_font`] could not be parsed.
    #[error(transparent)]
    Font(#[from] FontError),
    /// The window failed to open or a frame failed.
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Application launcher.
///
/// # Example
///
/// ```no_run
/// use easel::prelude::*;
///
/// let square = Widget::new(Rectangle::new((10, 10), (50, 50)), LookParams::new())
///     .expect("valid look");
/// let scene: Vec<Box<dyn Component>> = vec![Box::new(square)];
/// AppLauncher::new()
///     .with_title("Shapes")
///     .with_size(300, 200)
///     .run(scene)
///     .expect("window closed cleanly");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppLauncher {
    settings: WindowSettings,
    fonts: Vec<(String, Vec<u8>)>,
}

impl AppLauncher {
    /// Create a launcher with the default window settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.name = title.into();
        self
    }

    /// Set the window size in logical pixels.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.settings = self.settings.with_size(width, height);
        self
    }

    /// Set the redraw rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.settings.fps = fps;
        self
    }

    /// Set the color each frame is cleared to.
    pub fn with_background(mut self, background: impl Into<ColorSpec>) -> Self {
        self.settings.background = background.into();
        self
    }

    /// Register a TrueType/OpenType font under `family`. The first font
    /// registered becomes the default.
    pub fn with_font(mut self, family: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.fonts.push((family.into(), bytes));
        self
    }

    /// The settings the window will open with.
    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// Parses the registered fonts.
    pub fn font_service(&self) -> Result<RusttypeFonts, FontError> {
        let mut fonts = RusttypeFonts::new();
        for (family, bytes) in &self.fonts {
            fonts.register(family, bytes.clone())?;
        }
        Ok(fonts)
    }

    /// Open a desktop window with `components` and block until it closes.
    #[cfg(feature = "desktop")]
    pub fn run(self, components: Vec<Box<dyn Component>>) -> Result<FrameStats, LaunchError> {
        let fonts = self.font_service()?;
        let mut window = easel_app_shell::Window::new(self.settings);
        window.set_components(components)?;
        window.open(move |settings: &WindowSettings| {
            crate::desktop::DesktopBackend::new(settings, fonts)
        })?;
        Ok(window.wait_close()?)
    }
}
