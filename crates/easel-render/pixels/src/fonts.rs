use std::collections::HashMap;
use std::sync::Arc;

use easel_ui::{FontError, FontRequest, FontService, GlyphImage};
use rusttype::{point, Font, Scale};

/// Horizontal shear applied for italic text, in pixels per pixel of height.
const ITALIC_SHEAR: f32 = 0.2;

/// Fonts registered from raw TrueType/OpenType bytes.
///
/// Family names are case-insensitive. The first registered family is the
/// default unless another is chosen with [`RusttypeFonts::set_default`].
#[derive(Clone, Default)]
pub struct RusttypeFonts {
    families: HashMap<String, Arc<Font<'static>>>,
    default: Option<String>,
}

impl RusttypeFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, family: &str, bytes: Vec<u8>) -> Result<(), FontError> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| FontError::InvalidFontData(family.to_string()))?;
        let key = family.to_lowercase();
        log::debug!("registered font family '{key}'");
        if self.default.is_none() {
            self.default = Some(key.clone());
        }
        self.families.insert(key, Arc::new(font));
        Ok(())
    }

    pub fn set_default(&mut self, family: &str) -> Result<(), FontError> {
        let key = family.to_lowercase();
        if !self.families.contains_key(&key) {
            return Err(FontError::UnknownFamily(family.to_string()));
        }
        self.default = Some(key);
        Ok(())
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    fn font(&self, family: Option<&str>) -> Result<&Font<'static>, FontError> {
        let key = match family {
            Some(family) => family.to_lowercase(),
            None => self.default.clone().ok_or(FontError::NoDefaultFont)?,
        };
        self.families
            .get(&key)
            .map(|font| font.as_ref())
            .ok_or(FontError::UnknownFamily(key))
    }
}

impl FontService for RusttypeFonts {
    fn has_family(&self, family: &str) -> bool {
        self.families.contains_key(&family.to_lowercase())
    }

    fn render(&self, request: &FontRequest, text: &str) -> Result<GlyphImage, FontError> {
        let font = self.font(request.family.as_deref())?;
        let size = request.point_size as f32;
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let height = (v_metrics.ascent - v_metrics.descent).ceil().max(1.0);

        let glyphs: Vec<_> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();
        let advance = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);

        let embolden = if request.bold {
            (size / 24.0).ceil().max(1.0) as i32
        } else {
            0
        };
        let slant = if request.italic {
            (height * ITALIC_SHEAR).ceil() as i32
        } else {
            0
        };
        let width = advance.ceil() as i32 + embolden + slant;
        let mut image = GlyphImage::new(width.max(0) as u32, height as u32);

        for glyph in &glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let x = bb.min.x + gx as i32;
                let y = bb.min.y + gy as i32;
                let shear = if request.italic {
                    ((height - y as f32) * ITALIC_SHEAR).round() as i32
                } else {
                    0
                };
                let coverage = (v * 255.0).round().clamp(0.0, 255.0) as u8;
                for dx in 0..=embolden {
                    image.cover(x + shear + dx, y, coverage);
                }
            });
        }

        if request.underline {
            let thickness = (size / 14.0).round().max(1.0) as i32;
            let top = (v_metrics.ascent.round() as i32 + thickness).min(height as i32 - thickness);
            for y in top..top + thickness {
                for x in 0..width {
                    image.cover(x, y, 255);
                }
            }
        }

        Ok(image)
    }
}
