use std::path::Path;

use easel_foundation::{FromLookSpec, LookError, LookSpec, ParamValue};
use easel_ui_graphics::{Alignment, Anchor, Color, Point, Rect, Size};
use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::draw_outline;
use crate::component::{ComponentError, ImageError, RenderContext};
use crate::surface::Bitmap;
use crate::widget::Shape;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLook {
    pub outline: Option<Color>,
    pub width: i32,
}

impl FromLookSpec for ImageLook {
    fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError> {
        Ok(Self {
            outline: spec.color("outline")?,
            width: spec.int("width")?.unwrap_or(0),
        })
    }
}

/// A picture scaled to a fixed size, top-left aligned by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    anchor: Anchor,
    bitmap: Bitmap,
}

impl Image {
    /// Loads and scales an image file.
    pub fn open(
        path: impl AsRef<Path>,
        position: impl Into<Point>,
        size: impl Into<Size>,
    ) -> Result<Self, ImageError> {
        let size = size.into();
        check_size(size)?;
        let rgba = image::open(path.as_ref())?.to_rgba8();
        Self::from_image(&rgba, position.into(), size)
    }

    /// Wraps raw RGBA pixels, scaling them to `size`.
    pub fn from_rgba(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        position: impl Into<Point>,
        size: impl Into<Size>,
    ) -> Result<Self, ImageError> {
        let size = size.into();
        check_size(size)?;
        let len = pixels.len();
        let rgba = RgbaImage::from_raw(width, height, pixels).ok_or(ImageError::BufferSize {
            width,
            height,
            len,
        })?;
        Self::from_image(&rgba, position.into(), size)
    }

    fn from_image(rgba: &RgbaImage, position: Point, size: Size) -> Result<Self, ImageError> {
        let (width, height) = (size.width as u32, size.height as u32);
        let scaled = if rgba.dimensions() == (width, height) {
            rgba.clone()
        } else {
            imageops::resize(rgba, width, height, FilterType::Triangle)
        };
        let pixels = scaled.into_raw();
        let len = pixels.len();
        let bitmap = Bitmap::from_rgba(width, height, pixels).ok_or(ImageError::BufferSize {
            width,
            height,
            len,
        })?;
        Ok(Self {
            anchor: Anchor::new(position, Alignment::TOP_LEFT),
            bitmap,
        })
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.anchor.alignment = alignment;
        self
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn bounds(&self) -> Rect {
        let size = self.bitmap.size();
        Rect::from_origin_size(self.anchor.top_left(size), size)
    }
}

fn check_size(size: Size) -> Result<(), ImageError> {
    if size.is_empty() {
        return Err(ImageError::EmptySize(size));
    }
    Ok(())
}

impl Shape for Image {
    type Look = ImageLook;

    const NAME: &'static str = "Image";

    fn defaults() -> LookSpec {
        LookSpec::new()
            .with("outline", ParamValue::None)
            .with("width", 0)
    }

    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &ImageLook) -> Result<(), ComponentError> {
        let bounds = self.bounds();
        ctx.surface.blit_rgba(bounds.origin(), &self.bitmap);
        if let Some(outline) = look.outline.filter(|_| look.width > 0) {
            draw_outline(ctx.surface, bounds, look.width, outline);
        }
        Ok(())
    }
}
