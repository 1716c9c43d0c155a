use easel_ui::{Bitmap, DrawSurface, GlyphImage};
use easel_ui_graphics::{Color, Point, Rect, Size};

const BYTES_PER_PIXEL: usize = 4;

/// An RGBA8 frame buffer with a software rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Resizes the buffer. Contents are reset to transparent black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x, y)?;
        let px = &self.pixels[index..index + 3];
        Some(Color::rgb(px[0], px[1], px[2]))
    }

    /// Copies the buffer into a frame of the same size. Returns `false` when
    /// the lengths differ.
    pub fn copy_to(&self, frame: &mut [u8]) -> bool {
        if frame.len() != self.pixels.len() {
            return false;
        }
        frame.copy_from_slice(&self.pixels);
        true
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index..index + BYTES_PER_PIXEL].copy_from_slice(&color.to_rgba());
        }
    }

    fn blend(&mut self, x: i32, y: i32, rgb: [u8; 3], alpha: u8) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        match alpha {
            0 => {}
            255 => {
                self.pixels[index..index + 3].copy_from_slice(&rgb);
                self.pixels[index + 3] = 255;
            }
            alpha => {
                let a = u32::from(alpha);
                for (channel, src) in rgb.iter().enumerate() {
                    let dst = u32::from(self.pixels[index + channel]);
                    self.pixels[index + channel] =
                        ((u32::from(*src) * a + dst * (255 - a) + 127) / 255) as u8;
                }
                self.pixels[index + 3] = 255;
            }
        }
    }

    fn clipped(&self, rect: Rect) -> Option<Rect> {
        rect.intersect(&Rect::new(0, 0, self.width as i32, self.height as i32))
    }

    /// Paints every on-surface pixel of the circle's bounding box whose
    /// squared distance from `center` passes `inside`.
    fn for_each_in_circle(
        &mut self,
        center: Point,
        radius: i32,
        inside: impl Fn(i64) -> bool,
        color: Color,
    ) {
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let r = i64::from(radius);
        let x_range = (cx - r).max(0)..=(cx + r).min(i64::from(self.width) - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(i64::from(self.height) - 1);
        for y in y_range {
            let dy2 = (y - cy).pow(2);
            for x in x_range.clone() {
                if inside((x - cx).pow(2) + dy2) {
                    self.put(x as i32, y as i32, color);
                }
            }
        }
    }

    fn stamp(&mut self, center: Point, width: i32, color: Color) {
        let low = (width - 1) / 2;
        let high = width / 2;
        for y in center.y - low..=center.y + high {
            for x in center.x - low..=center.x + high {
                self.put(x, y, color);
            }
        }
    }
}

impl DrawSurface for PixelSurface {
    fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = self.clipped(rect) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        let r2 = i64::from(radius).pow(2);
        self.for_each_in_circle(center, radius, |d2| d2 <= r2, color);
    }

    fn stroke_circle(&mut self, center: Point, radius: i32, width: i32, color: Color) {
        if radius < 0 || width <= 0 {
            return;
        }
        if width >= radius {
            self.fill_circle(center, radius, color);
            return;
        }
        let outer = i64::from(radius).pow(2);
        let inner = i64::from(radius - width).pow(2);
        self.for_each_in_circle(center, radius, |d2| d2 <= outer && d2 > inner, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color) {
        if width <= 0 {
            return;
        }
        // Bresenham, stamping a square brush at each step
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut current = from;
        loop {
            self.stamp(current, width, color);
            if current == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                current.x += sx;
            }
            if e2 <= dx {
                err += dx;
                current.y += sy;
            }
        }
    }

    fn blit_glyphs(&mut self, origin: Point, glyphs: &GlyphImage, color: Color) {
        let rgb = [color.red, color.green, color.blue];
        for y in 0..glyphs.height {
            for x in 0..glyphs.width {
                let coverage = glyphs.coverage_at(x, y);
                self.blend(origin.x + x as i32, origin.y + y as i32, rgb, coverage);
            }
        }
    }

    fn blit_rgba(&mut self, origin: Point, bitmap: &Bitmap) {
        for y in 0..bitmap.height {
            for x in 0..bitmap.width {
                if let Some([r, g, b, a]) = bitmap.pixel(x, y) {
                    self.blend(origin.x + x as i32, origin.y + y as i32, [r, g, b], a);
                }
            }
        }
    }
}
