#![deny(missing_docs)]

//! High level entry point for Easel: declare a window, fill it with shapes
//! and let the redraw loop run.

mod launcher;
pub use launcher::{AppLauncher, LaunchError};

#[cfg(feature = "desktop")]
pub mod desktop;

pub use easel_app_shell::{
    Backend, BackendError, FrameClock, FrameStats, Window, WindowError, WindowSettings,
};
pub use easel_foundation::{
    DisplayState, FrameInput, InputEvent, LookError, LookParams, ParamValue, PointerButton,
    StateValue,
};
pub use easel_render_pixels::{PixelSurface, RusttypeFonts};
pub use easel_ui::{
    Component, ComponentError, Cross, Disk, FontError, Grid, Image, ImageError, Line, LineSet,
    Rectangle, RenderContext, Segment, Shape, Text, TextEngine, Widget,
};
pub use easel_ui_graphics::{Alignment, Anchor, Color, ColorError, ColorSpec, Point, Rect, Size};

/// Everything a typical scene needs in one import.
pub mod prelude {
    pub use crate::launcher::AppLauncher;
    pub use easel_app_shell::{Window, WindowSettings};
    pub use easel_ui::prelude::*;
}
