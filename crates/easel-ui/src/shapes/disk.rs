use easel_foundation::LookSpec;
use easel_ui_graphics::{Alignment, Anchor, Point, Size};

use super::ShapeLook;
use crate::component::{ComponentError, RenderContext};
use crate::widget::Shape;

/// Filled circle, centered on its reference position by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disk {
    anchor: Anchor,
    radius: i32,
}

impl Disk {
    pub fn new(position: impl Into<Point>, radius: i32) -> Self {
        Self {
            anchor: Anchor::new(position, Alignment::CENTER),
            radius,
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.anchor.alignment = alignment;
        self
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn center(&self) -> Point {
        let diameter = self.radius * 2;
        self.anchor.center(Size::new(diameter, diameter))
    }
}

impl Shape for Disk {
    type Look = ShapeLook;

    const NAME: &'static str = "Disk";

    fn defaults() -> LookSpec {
        ShapeLook::defaults()
    }

    fn hit_test(&self, point: Point) -> bool {
        self.center().distance_to(point) <= f64::from(self.radius)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &ShapeLook) -> Result<(), ComponentError> {
        let center = self.center();
        let outline = look.visible_outline();
        if let Some(color) = look.color {
            // keep the fill inside the ring
            let radius = self.radius - i32::from(outline.is_some());
            ctx.surface.fill_circle(center, radius, color);
        }
        if let Some(outline) = outline {
            ctx.surface
                .stroke_circle(center, self.radius, look.width, outline);
        }
        Ok(())
    }
}
