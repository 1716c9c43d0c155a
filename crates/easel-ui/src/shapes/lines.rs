//! Open strokes. None of these take part in hit testing.

use easel_foundation::{FromLookSpec, LookError, LookSpec};
use easel_ui_graphics::{Color, Point};

use super::stroke_defaults;
use crate::component::{ComponentError, RenderContext};
use crate::surface::DrawSurface;
use crate::widget::Shape;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrokeLook {
    pub color: Option<Color>,
    pub width: i32,
}

impl FromLookSpec for StrokeLook {
    fn from_look_spec(spec: &LookSpec) -> Result<Self, LookError> {
        Ok(Self {
            color: spec.color("color")?,
            width: spec.int("width")?.unwrap_or(1),
        })
    }
}

pub(crate) fn stroke_polyline(
    surface: &mut dyn DrawSurface,
    points: &[Point],
    closed: bool,
    look: &StrokeLook,
) {
    let Some(color) = look.color else {
        return;
    };
    if look.width <= 0 {
        return;
    }
    for pair in points.windows(2) {
        surface.draw_line(pair[0], pair[1], look.width, color);
    }
    if closed && points.len() > 2 {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            surface.draw_line(*last, *first, look.width, color);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Shape for Segment {
    type Look = StrokeLook;

    const NAME: &'static str = "Segment";

    fn defaults() -> LookSpec {
        stroke_defaults()
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &StrokeLook) -> Result<(), ComponentError> {
        stroke_polyline(ctx.surface, &[self.from, self.to], false, look);
        Ok(())
    }
}

/// A continuous polyline, optionally closed back to its first point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    points: Vec<Point>,
    closed: bool,
}

impl Line {
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            closed: false,
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Line {
    type Look = StrokeLook;

    const NAME: &'static str = "Line";

    fn defaults() -> LookSpec {
        stroke_defaults()
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &StrokeLook) -> Result<(), ComponentError> {
        stroke_polyline(ctx.surface, &self.points, self.closed, look);
        Ok(())
    }
}

/// Several independent polylines drawn with one look.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSet {
    lines: Vec<Vec<Point>>,
}

impl LineSet {
    pub fn new<L, P>(lines: impl IntoIterator<Item = L>) -> Self
    where
        L: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| line.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn lines(&self) -> &[Vec<Point>] {
        &self.lines
    }

    pub(crate) fn stroke(&self, surface: &mut dyn DrawSurface, look: &StrokeLook) {
        for line in &self.lines {
            stroke_polyline(surface, line, false, look);
        }
    }
}

impl Shape for LineSet {
    type Look = StrokeLook;

    const NAME: &'static str = "LineSet";

    fn defaults() -> LookSpec {
        stroke_defaults()
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &StrokeLook) -> Result<(), ComponentError> {
        self.stroke(ctx.surface, look);
        Ok(())
    }
}

/// A `+` marker with branches of `size` pixels around its center.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cross {
    center: Point,
    size: i32,
    lines: LineSet,
}

impl Cross {
    pub fn new(center: impl Into<Point>, size: i32) -> Self {
        let center = center.into();
        let Point { x, y } = center;
        let lines = LineSet::new([
            [(x - size, y), (x + size, y)],
            [(x, y - size), (x, y + size)],
        ]);
        Self {
            center,
            size,
            lines,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> i32 {
        self.size
    }
}

impl Shape for Cross {
    type Look = StrokeLook;

    const NAME: &'static str = "Cross";

    fn defaults() -> LookSpec {
        stroke_defaults()
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &StrokeLook) -> Result<(), ComponentError> {
        self.lines.stroke(ctx.surface, look);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    fn look() -> StrokeLook {
        StrokeLook {
            color: Some(Color::BLACK),
            width: 1,
        }
    }

    #[test]
    fn polyline_strokes_consecutive_pairs() {
        let mut surface = RecordingSurface::new((100, 100));
        let points = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        stroke_polyline(&mut surface, &points, true, &look());
        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(
            lines,
            vec![
                (Point::new(0, 0), Point::new(10, 0)),
                (Point::new(10, 0), Point::new(10, 10)),
                (Point::new(10, 10), Point::new(0, 0)),
            ]
        );
    }

    #[test]
    fn cross_has_two_branches_through_its_center() {
        let cross = Cross::new((20, 30), 5);
        assert_eq!(
            cross.lines.lines(),
            &[
                vec![Point::new(15, 30), Point::new(25, 30)],
                vec![Point::new(20, 25), Point::new(20, 35)],
            ]
        );
        assert!(!cross.hit_test(Point::new(20, 30)));
    }

    #[test]
    fn missing_color_draws_nothing() {
        let mut surface = RecordingSurface::new((10, 10));
        let look = StrokeLook {
            color: None,
            width: 3,
        };
        stroke_polyline(&mut surface, &[Point::new(0, 0), Point::new(5, 5)], false, &look);
        assert!(surface.operations().is_empty());
    }
}
