use easel_foundation::FrameInput;
use easel_ui::{DrawSurface, FontService};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to create host window: {0}")]
    Create(String),
    #[error("failed to present frame: {0}")]
    Present(String),
    #[error("host window is gone")]
    Closed,
}

/// The host a redraw loop draws into.
///
/// A backend is built on the loop thread by the factory handed to
/// [`Window::open`](crate::Window::open), so it never crosses threads.
pub trait Backend {
    /// The surface frames are rasterized into.
    fn surface(&mut self) -> &mut dyn DrawSurface;

    /// Fonts for the session's text engine. Called once, before any
    /// component is initialized.
    fn font_service(&mut self) -> Box<dyn FontService>;

    /// Drains pending input without blocking.
    fn poll_input(&mut self) -> FrameInput;

    /// Shows the finished frame.
    fn present(&mut self) -> Result<(), BackendError>;
}
