//! The drawing contract a host graphics backend provides.

use easel_ui_graphics::{Color, Point, Rect, Size};

/// An 8-bit coverage mask produced by a font service. Row-major, one byte
/// per pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphImage {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl GlyphImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y * self.width + x) as usize]
    }

    /// Raises coverage at `(x, y)` to at least `value`. Out of bounds writes
    /// are ignored.
    pub fn cover(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.coverage[index] = self.coverage[index].max(value);
    }

    /// Rotates the mask counterclockwise by `degrees`. The result is the
    /// bounding box of the rotated mask, sampled nearest-neighbour.
    pub fn rotated(&self, degrees: f64) -> GlyphImage {
        let degrees = degrees.rem_euclid(360.0);
        let (sin, cos) = match degrees {
            d if d == 0.0 => return self.clone(),
            d if d == 90.0 => (1.0, 0.0),
            d if d == 180.0 => (0.0, -1.0),
            d if d == 270.0 => (-1.0, 0.0),
            d => d.to_radians().sin_cos(),
        };
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        // shave float noise so exact fits do not grow by a pixel
        let width = ((w * cos).abs() + (h * sin).abs() - 1e-9).ceil().max(0.0) as u32;
        let height = ((w * sin).abs() + (h * cos).abs() - 1e-9).ceil().max(0.0) as u32;
        let mut out = GlyphImage::new(width, height);
        let (out_cx, out_cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
        let (src_cx, src_cy) = (w / 2.0, h / 2.0);
        for y in 0..height {
            for x in 0..width {
                let dx = f64::from(x) + 0.5 - out_cx;
                let dy = f64::from(y) + 0.5 - out_cy;
                // y grows downwards, so the inverse of a visual
                // counterclockwise turn maps (dx, dy) like this
                let sx = (dx * cos - dy * sin + src_cx).floor();
                let sy = (dx * sin + dy * cos + src_cy).floor();
                if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
                    continue;
                }
                let value = self.coverage_at(sx as u32, sy as u32);
                out.coverage[(y * width + x) as usize] = value;
            }
        }
        out
    }
}

/// Straight-alpha RGBA pixels, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA bytes. Returns `None` if the buffer length does not
    /// match the dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = ((y * self.width + x) * 4) as usize;
        let px = &self.pixels[index..index + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A pixel buffer of known size that shapes draw into.
///
/// Coordinates are surface pixels with the origin at the top-left corner.
/// Drawing outside the surface is clipped.
pub trait DrawSurface {
    fn size(&self) -> Size;

    fn clear(&mut self, color: Color);

    /// Fills `[x, x + width) × [y, y + height)`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color);

    /// Draws a ring whose outer edge is at `radius` and which extends
    /// `width` pixels inwards.
    fn stroke_circle(&mut self, center: Point, radius: i32, width: i32, color: Color);

    /// Draws a straight stroke. Extra pixels of an even width go to the
    /// right and bottom of the base line.
    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color);

    /// Tints a coverage mask with `color` and blends it at `origin`.
    fn blit_glyphs(&mut self, origin: Point, glyphs: &GlyphImage, color: Color);

    fn blit_rgba(&mut self, origin: Point, bitmap: &Bitmap);
}
