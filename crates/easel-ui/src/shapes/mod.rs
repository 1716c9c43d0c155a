mod disk;
mod grid;
mod image;
mod lines;
mod rectangle;
mod text;

pub use disk::Disk;
pub use grid::Grid;
pub use image::{Image, ImageLook};
pub use lines::{Cross, Line, LineSet, Segment, StrokeLook};
pub use rectangle::Rectangle;
pub use text::{Text, TextLook};

use easel_foundation::{FromLookSpec, LookError, LookSpec};
use easel_ui_graphics::{Color, Rect};

use crate::surface::DrawSurface;

/// Fill and outline look shared by closed shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeLook {
    pub color: Option<Color>,
    pub outline: Option<Color>,
    pub width: i32,
}

impl ShapeLook {
    pub fn defaults() -> LookSpec {
        LookSpec::new()
            .with("color", Color::WHITE)
            .with("outline", Color::BLACK)
            .with("width", 0)
    }

    /// Outline color when an outline should actually be drawn.
    pub fn visible_outline(&self) -> Option<Color> {
        self.outline.filter(|_| self.width > 0)
    }
}

impl FromLookSpec for ShapeLook {
    fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError> {
        Ok(Self {
            color: spec.color("color")?,
            outline: spec.color("outline")?,
            width: spec.int("width")?.unwrap_or(0),
        })
    }
}

/// The four border bands of an outline drawn inside `rect`.
///
/// The band width is clamped to half the shorter side so opposite bands
/// never overlap.
pub fn outline_bands(rect: Rect, width: i32) -> Vec<Rect> {
    let band = width.min(rect.width.min(rect.height) / 2);
    if band <= 0 {
        return Vec::new();
    }
    let inner_height = rect.height - 2 * band;
    let mut bands = vec![
        Rect::new(rect.x, rect.y, rect.width, band),
        Rect::new(rect.x, rect.bottom() - band, rect.width, band),
    ];
    if inner_height > 0 {
        bands.push(Rect::new(rect.x, rect.y + band, band, inner_height));
        bands.push(Rect::new(
            rect.right() - band,
            rect.y + band,
            band,
            inner_height,
        ));
    }
    bands
}

pub(crate) fn draw_outline(surface: &mut dyn DrawSurface, rect: Rect, width: i32, color: Color) {
    for band in outline_bands(rect, width) {
        surface.fill_rect(band, color);
    }
}

pub(crate) fn stroke_defaults() -> LookSpec {
    LookSpec::new()
        .with("color", Color::BLACK)
        .with("width", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_clamped_to_half_the_short_side() {
        let bands = outline_bands(Rect::new(0, 0, 10, 4), 5);
        assert_eq!(
            bands,
            vec![Rect::new(0, 0, 10, 2), Rect::new(0, 2, 10, 2)]
        );
    }

    #[test]
    fn bands_cover_the_border_once() {
        let bands = outline_bands(Rect::new(10, 10, 20, 10), 2);
        assert_eq!(
            bands,
            vec![
                Rect::new(10, 10, 20, 2),
                Rect::new(10, 18, 20, 2),
                Rect::new(10, 12, 2, 6),
                Rect::new(28, 12, 2, 6),
            ]
        );
        let area: i32 = bands.iter().map(|b| b.width * b.height).sum();
        assert_eq!(area, 20 * 10 - 16 * 6);
    }

    #[test]
    fn zero_width_draws_nothing() {
        assert!(outline_bands(Rect::new(0, 0, 10, 10), 0).is_empty());
        assert!(outline_bands(Rect::new(0, 0, 1, 10), 3).is_empty());
    }

    #[test]
    fn outline_needs_a_width() {
        let look = ShapeLook {
            color: None,
            outline: Some(Color::BLACK),
            width: 0,
        };
        assert_eq!(look.visible_outline(), None);
    }
}
