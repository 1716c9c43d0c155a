use easel_foundation::LookSpec;
use easel_ui_graphics::{Point, Rect, Size};

use super::lines::{stroke_polyline, StrokeLook};
use super::stroke_defaults;
use crate::component::{ComponentError, RenderContext};
use crate::widget::Shape;

/// Evenly spaced vertical and horizontal lines.
///
/// Lines are rebuilt from the surface size on every draw, so the grid
/// follows resizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dx: i32,
    dy: i32,
    area: Option<Rect>,
    inner_only: bool,
}

impl Grid {
    pub fn new(dx: i32, dy: i32) -> Result<Self, ComponentError> {
        if dx <= 0 || dy <= 0 {
            return Err(ComponentError::InvalidGeometry(format!(
                "grid steps must be positive, got dx={dx} dy={dy}"
            )));
        }
        Ok(Self {
            dx,
            dy,
            area: None,
            inner_only: false,
        })
    }

    /// Restricts the grid to `area` instead of the whole surface.
    pub fn with_area(mut self, area: Rect) -> Self {
        self.area = Some(area);
        self
    }

    /// Leaves out the lines on the boundary of the grid area.
    pub fn inner_only(mut self, inner_only: bool) -> Self {
        self.inner_only = inner_only;
        self
    }

    fn region(&self, surface: Size) -> Rect {
        self.area
            .unwrap_or_else(|| Rect::new(0, 0, surface.width, surface.height))
    }

    fn columns(&self, region: Rect) -> Vec<i32> {
        steps(region.x, region.right(), self.dx)
    }

    fn rows(&self, region: Rect) -> Vec<i32> {
        steps(region.y, region.bottom(), self.dy)
    }

    /// Line endpoints for a surface of `surface` size, verticals first.
    pub fn lines(&self, surface: Size) -> Vec<[Point; 2]> {
        let region = self.region(surface);
        let keep =
            |value: i32, low: i32, high: i32| !self.inner_only || (value != low && value != high);

        let verticals = self
            .columns(region)
            .into_iter()
            .filter(|x| keep(*x, region.x, region.right()))
            .map(|x| [Point::new(x, region.y), Point::new(x, region.bottom())]);
        let horizontals = self
            .rows(region)
            .into_iter()
            .filter(|y| keep(*y, region.y, region.bottom()))
            .map(|y| [Point::new(region.x, y), Point::new(region.right(), y)]);
        verticals.chain(horizontals).collect()
    }

    /// Complete cells of the grid in row-major order.
    pub fn cells(&self, surface: Size) -> Vec<Rect> {
        let region = self.region(surface);
        let columns = self.columns(region);
        let rows = self.rows(region);
        rows.windows(2)
            .flat_map(|row| {
                columns
                    .windows(2)
                    .map(move |col| Rect::new(col[0], row[0], col[1] - col[0], row[1] - row[0]))
            })
            .collect()
    }

    /// Pairs items with cells in order. Items beyond the cell count are
    /// dropped with a warning.
    pub fn place_in_cells<T>(
        &self,
        surface: Size,
        items: impl IntoIterator<Item = T>,
    ) -> Vec<(Rect, T)> {
        let cells = self.cells(surface);
        let capacity = cells.len();
        let mut items = items.into_iter();
        let placed: Vec<(Rect, T)> = cells.into_iter().zip(items.by_ref()).collect();
        let dropped = items.count();
        if dropped > 0 {
            log::warn!("grid has {capacity} cells, dropping {dropped} extra items");
        }
        placed
    }
}

fn steps(start: i32, end: i32, step: i32) -> Vec<i32> {
    let mut values = Vec::new();
    let mut value = start;
    while value <= end {
        values.push(value);
        value += step;
    }
    values
}

impl Shape for Grid {
    type Look = StrokeLook;

    const NAME: &'static str = "Grid";

    fn defaults() -> LookSpec {
        stroke_defaults()
    }

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &StrokeLook) -> Result<(), ComponentError> {
        for line in self.lines(ctx.surface.size()) {
            stroke_polyline(ctx.surface, &line, false, look);
        }
        Ok(())
    }
}
