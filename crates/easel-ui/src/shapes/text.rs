use std::sync::Arc;

use easel_foundation::{FromLookSpec, LookError, LookSet, LookSpec, ParamValue};
use easel_ui_graphics::{Alignment, Anchor, Color, Point, Rect, Size};

use crate::component::{ComponentError, RenderContext};
use crate::fonts::TextStyle;
use crate::surface::GlyphImage;
use crate::widget::Shape;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLook {
    pub height: i32,
    pub font: Option<String>,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextLook {
    pub fn style(&self) -> TextStyle {
        TextStyle {
            family: self.font.clone(),
            height: self.height,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }
}

impl FromLookSpec for TextLook {
    fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError> {
        Ok(Self {
            height: spec.int("height")?.unwrap_or(12),
            font: spec.text("font")?.map(str::to_string),
            color: spec.color("color")?,
            bold: spec.bool("bold")?,
            italic: spec.bool("italic")?,
            underline: spec.bool("underline")?,
        })
    }
}

/// A single line of text. Its size is only known once it has been rendered,
/// which happens in `init`.
///
/// A rotated text is measured and anchored by the bounding box of the turned
/// glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    string: String,
    anchor: Anchor,
    rotation: Option<f64>,
    bounds: Option<Rect>,
}

impl Text {
    pub fn new(string: impl Into<String>, position: impl Into<Point>) -> Self {
        Self {
            string: string.into(),
            anchor: Anchor::new(position, Alignment::TOP_LEFT),
            rotation: None,
            bounds: None,
        }
    }

    /// Turns the text counterclockwise by `degrees`.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.anchor.alignment = alignment;
        self
    }

    pub fn string(&self) -> &str {
        &self.string
    }

    /// Size of the normal look, available after `init`.
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size())
    }

    /// Box of the normal look at its anchor, available after `init`.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn glyphs(
        &self,
        ctx: &mut RenderContext<'_>,
        look: &TextLook,
    ) -> Result<Arc<GlyphImage>, ComponentError> {
        let style = look.style();
        let glyphs = match self.rotation {
            Some(degrees) => ctx.text.render_rotated(&style, &self.string, degrees)?,
            None => ctx.text.render(&style, &self.string)?,
        };
        Ok(glyphs)
    }
}

impl Shape for Text {
    type Look = TextLook;

    const NAME: &'static str = "Text";

    fn defaults() -> LookSpec {
        LookSpec::new()
            .with("height", 12)
            .with("font", ParamValue::None)
            .with("color", Color::BLACK)
            .with("bold", false)
            .with("italic", false)
            .with("underline", false)
    }

    fn init(
        &mut self,
        ctx: &mut RenderContext<'_>,
        looks: &LookSet<TextLook>,
    ) -> Result<(), ComponentError> {
        for (_, look) in looks.iter() {
            self.glyphs(ctx, look)?;
        }
        let glyphs = self.glyphs(ctx, looks.normal())?;
        let size = glyphs.size();
        self.bounds = Some(Rect::from_origin_size(self.anchor.top_left(size), size));
        Ok(())
    }

    fn hit_test(&self, point: Point) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(point))
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &TextLook) -> Result<(), ComponentError> {
        let Some(color) = look.color else {
            return Ok(());
        };
        let glyphs = self.glyphs(ctx, look)?;
        let origin = self.anchor.top_left(glyphs.size());
        ctx.surface.blit_glyphs(origin, &glyphs, color);
        Ok(())
    }
}
