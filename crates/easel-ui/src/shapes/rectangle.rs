use easel_foundation::LookSpec;
use easel_ui_graphics::{Alignment, Anchor, Point, Rect, Size};

use super::{draw_outline, ShapeLook};
use crate::component::{ComponentError, RenderContext};
use crate::widget::Shape;

/// Axis-aligned rectangle, top-left aligned on its reference position by
/// default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    anchor: Anchor,
    size: Size,
}

impl Rectangle {
    pub fn new(position: impl Into<Point>, size: impl Into<Size>) -> Self {
        Self {
            anchor: Anchor::new(position, Alignment::TOP_LEFT),
            size: size.into(),
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.anchor.alignment = alignment;
        self
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.anchor.top_left(self.size), self.size)
    }
}

impl Shape for Rectangle {
    type Look = ShapeLook;

    const NAME: &'static str = "Rectangle";

    fn defaults() -> LookSpec {
        ShapeLook::defaults()
    }

    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &ShapeLook) -> Result<(), ComponentError> {
        let bounds = self.bounds();
        if let Some(color) = look.color {
            ctx.surface.fill_rect(bounds, color);
        }
        if let Some(outline) = look.visible_outline() {
            draw_outline(ctx.surface, bounds, look.width, outline);
        }
        Ok(())
    }
}
