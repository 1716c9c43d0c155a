use easel_ui_graphics::{Color, Point, Rect, Size};

use crate::surface::{Bitmap, DrawSurface, GlyphImage};

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: i32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: i32,
        width: i32,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: i32,
        color: Color,
    },
    Glyphs {
        origin: Point,
        size: Size,
        color: Color,
    },
    Bitmap {
        origin: Point,
        size: Size,
    },
}

/// A headless surface that records draw calls in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    size: Size,
    operations: Vec<RenderOp>,
}

impl RecordingSurface {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            operations: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: impl Into<Size>) {
        self.size = size.into();
    }

    /// Recorded operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Takes the recorded operations, leaving the surface empty.
    pub fn take_operations(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.operations)
    }

    /// Iterates over the lines drawn so far.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.operations.clear();
        self.operations.push(RenderOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.operations.push(RenderOp::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.operations.push(RenderOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: i32, width: i32, color: Color) {
        self.operations.push(RenderOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color) {
        self.operations.push(RenderOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn blit_glyphs(&mut self, origin: Point, glyphs: &GlyphImage, color: Color) {
        self.operations.push(RenderOp::Glyphs {
            origin,
            size: glyphs.size(),
            color,
        });
    }

    fn blit_rgba(&mut self, origin: Point, bitmap: &Bitmap) {
        self.operations.push(RenderOp::Bitmap {
            origin,
            size: bitmap.size(),
        });
    }
}
