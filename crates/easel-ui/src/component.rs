use easel_foundation::{FrameInput, LookError};
use easel_ui_graphics::{ColorError, Size};

use crate::fonts::{FontError, TextEngine};
use crate::surface::DrawSurface;

#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("{0} used before init")]
    NotInitialized(&'static str),
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error(transparent)]
    Look(#[from] LookError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error(transparent)]
    Image(#[from] ImageError),
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to load image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },
    #[error("image size {0:?} must be positive")]
    EmptySize(Size),
}

/// Everything a component may touch while a frame is drawn.
pub struct RenderContext<'a> {
    pub surface: &'a mut dyn DrawSurface,
    pub text: &'a mut TextEngine,
}

impl<'a> RenderContext<'a> {
    pub fn new(surface: &'a mut dyn DrawSurface, text: &'a mut TextEngine) -> Self {
        Self { surface, text }
    }
}

/// An element of a window's scene.
///
/// `init` runs once on the loop thread after the surface exists. `update`
/// runs every frame in scene order.
pub trait Component: Send {
    fn init(&mut self, _ctx: &mut RenderContext<'_>) -> Result<(), ComponentError> {
        Ok(())
    }

    fn update(
        &mut self,
        ctx: &mut RenderContext<'_>,
        input: &FrameInput,
    ) -> Result<(), ComponentError>;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn init(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), ComponentError> {
        (**self).init(ctx)
    }

    fn update(
        &mut self,
        ctx: &mut RenderContext<'_>,
        input: &FrameInput,
    ) -> Result<(), ComponentError> {
        (**self).update(ctx, input)
    }
}
