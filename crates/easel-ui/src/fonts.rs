//! Font sizing and rendered text caches.
//!
//! Font services take point sizes, but callers ask for text by pixel height.
//! The two are related by a per-font line `height = factor * size + offset`,
//! measured once per family by rendering at two probe sizes.

use std::collections::HashMap;
use std::sync::Arc;

use lru::LruCache;

use crate::surface::GlyphImage;

const PROBE_TEXT: &str = "Text";
const PROBE_SIZES: (u32, u32) = (100, 200);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FontError {
    #[error("no font registered for family '{0}'")]
    UnknownFamily(String),
    #[error("no default font registered")]
    NoDefaultFont,
    #[error("font data for '{0}' could not be parsed")]
    InvalidFontData(String),
    #[error("font '{family}' gives a degenerate size calibration (factor {factor})")]
    DegenerateCalibration { family: String, factor: f64 },
}

/// What to render. `family` of `None` selects the service's default font.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontRequest {
    pub family: Option<String>,
    pub point_size: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontRequest {
    pub fn new(family: Option<&str>, point_size: u32) -> Self {
        Self {
            family: family.map(str::to_string),
            point_size,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

/// Renders text to coverage masks.
pub trait FontService {
    fn has_family(&self, family: &str) -> bool;

    fn render(&self, request: &FontRequest, text: &str) -> Result<GlyphImage, FontError>;
}

/// Linear relation between point size and rendered pixel height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    pub factor: f64,
    pub offset: f64,
}

impl Calibration {
    /// Solves the line through `(s1, h1)` and `(s2, h2)`.
    pub fn from_probes(s1: u32, h1: u32, s2: u32, h2: u32) -> Self {
        let (s1, h1, s2, h2) = (f64::from(s1), f64::from(h1), f64::from(s2), f64::from(h2));
        Self {
            factor: (h2 - h1) / (s2 - s1),
            offset: (h1 * s2 - s1 * h2) / (s2 - s1),
        }
    }

    pub fn point_size_for(&self, height: i32) -> u32 {
        let size = ((f64::from(height) - self.offset) / self.factor).round();
        size.max(1.0) as u32
    }
}

/// Style half of a text cache key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub family: Option<String>,
    pub height: i32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TextKey {
    style: TextStyle,
    text: String,
    /// Bit pattern of the normalized rotation in degrees.
    rotation: u64,
}

#[derive(Clone, Debug)]
struct FamilyEntry {
    resolved: Option<String>,
    calibration: Calibration,
}

/// Owns a font service and the caches built on top of it.
///
/// One engine lives for the duration of a window session. Calibrations are
/// kept per requested family; rendered text is kept in an unbounded LRU
/// keyed by style and string.
pub struct TextEngine {
    service: Box<dyn FontService>,
    families: HashMap<Option<String>, FamilyEntry>,
    rendered: LruCache<TextKey, Arc<GlyphImage>>,
    probes: usize,
}

impl TextEngine {
    pub fn new(service: Box<dyn FontService>) -> Self {
        Self {
            service,
            families: HashMap::new(),
            rendered: LruCache::unbounded(),
            probes: 0,
        }
    }

    /// Number of probe renders performed so far.
    pub fn probe_count(&self) -> usize {
        self.probes
    }

    pub fn cached_text_count(&self) -> usize {
        self.rendered.len()
    }

    fn family_entry(&mut self, family: Option<&str>) -> Result<&FamilyEntry, FontError> {
        let key = family.map(str::to_string);
        if !self.families.contains_key(&key) {
            let resolved = match family {
                Some(name) if !self.service.has_family(name) => {
                    log::warn!("Unknown font {name}, using default");
                    None
                }
                other => other.map(str::to_string),
            };
            let calibration = self.probe(resolved.as_deref())?;
            self.families.insert(
                key.clone(),
                FamilyEntry {
                    resolved,
                    calibration,
                },
            );
        }
        self.families
            .get(&key)
            .ok_or_else(|| FontError::UnknownFamily(key.unwrap_or_default()))
    }

    fn probe(&mut self, family: Option<&str>) -> Result<Calibration, FontError> {
        let (s1, s2) = PROBE_SIZES;
        let h1 = self
            .service
            .render(&FontRequest::new(family, s1), PROBE_TEXT)?
            .height;
        let h2 = self
            .service
            .render(&FontRequest::new(family, s2), PROBE_TEXT)?
            .height;
        self.probes += 2;

        let calibration = Calibration::from_probes(s1, h1, s2, h2);
        if !calibration.factor.is_finite() || calibration.factor <= 0.0 {
            return Err(FontError::DegenerateCalibration {
                family: family.unwrap_or("default").to_string(),
                factor: calibration.factor,
            });
        }
        log::debug!(
            "calibrated font {:?}: factor={:.4} offset={:.4}",
            family,
            calibration.factor,
            calibration.offset
        );
        Ok(calibration)
    }

    pub fn calibration(&mut self, family: Option<&str>) -> Result<Calibration, FontError> {
        Ok(self.family_entry(family)?.calibration)
    }

    /// Point size that renders text about `height` pixels tall.
    pub fn point_size_for(&mut self, family: Option<&str>, height: i32) -> Result<u32, FontError> {
        Ok(self.calibration(family)?.point_size_for(height))
    }

    /// Renders `text` in `style`, reusing a cached mask when one exists.
    pub fn render(&mut self, style: &TextStyle, text: &str) -> Result<Arc<GlyphImage>, FontError> {
        self.render_rotated(style, text, 0.0)
    }

    /// Renders `text` turned counterclockwise by `degrees`. Rotated masks
    /// are cached next to the upright ones.
    pub fn render_rotated(
        &mut self,
        style: &TextStyle,
        text: &str,
        degrees: f64,
    ) -> Result<Arc<GlyphImage>, FontError> {
        let degrees = normalize_degrees(degrees);
        let key = TextKey {
            style: style.clone(),
            text: text.to_string(),
            rotation: degrees.to_bits(),
        };
        if let Some(glyphs) = self.rendered.get(&key) {
            return Ok(Arc::clone(glyphs));
        }

        let glyphs = if degrees == 0.0 {
            let entry = self.family_entry(style.family.as_deref())?;
            let request = FontRequest {
                family: entry.resolved.clone(),
                point_size: entry.calibration.point_size_for(style.height),
                bold: style.bold,
                italic: style.italic,
                underline: style.underline,
            };
            Arc::new(self.service.render(&request, text)?)
        } else {
            let upright = self.render_rotated(style, text, 0.0)?;
            Arc::new(upright.rotated(degrees))
        };
        self.rendered.put(key, Arc::clone(&glyphs));
        Ok(glyphs)
    }
}

/// Maps any angle into `[0, 360)`, folding `-0.0` into `0.0`.
fn normalize_degrees(degrees: f64) -> f64 {
    let degrees = degrees.rem_euclid(360.0);
    if degrees == 0.0 {
        0.0
    } else {
        degrees
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Renders boxes: one column per character, `2 * size + 10` rows tall.
    #[derive(Default)]
    pub(crate) struct BoxFonts {
        pub(crate) renders: Arc<AtomicUsize>,
    }

    impl FontService for BoxFonts {
        fn has_family(&self, family: &str) -> bool {
            family == "mono"
        }

        fn render(&self, request: &FontRequest, text: &str) -> Result<GlyphImage, FontError> {
            self.renders.fetch_add(1, Ordering::SeqCst);
            let width = text.chars().count() as u32 * (request.point_size / 2).max(1);
            let height = request.point_size * 2 + 10;
            let mut glyphs = GlyphImage::new(width, height);
            glyphs.coverage.fill(255);
            Ok(glyphs)
        }
    }

    #[test]
    fn calibration_solves_the_probe_line() {
        let calibration = Calibration::from_probes(100, 210, 200, 410);
        assert_eq!(calibration.factor, 2.0);
        assert_eq!(calibration.offset, 10.0);
        assert_eq!(calibration.point_size_for(34), 12);
    }

    #[test]
    fn calibration_is_probed_once_per_family() {
        let mut engine = TextEngine::new(Box::new(BoxFonts::default()));
        let first = engine.calibration(Some("mono")).expect("calibrates");
        let second = engine.calibration(Some("mono")).expect("calibrates");
        assert_eq!(first, second);
        assert_eq!(engine.probe_count(), 2);

        engine.calibration(None).expect("calibrates");
        assert_eq!(engine.probe_count(), 4);
    }

    #[test]
    fn unknown_family_falls_back_to_default() {
        let mut engine = TextEngine::new(Box::new(BoxFonts::default()));
        let style = TextStyle {
            family: Some("comic".into()),
            height: 30,
            ..TextStyle::default()
        };
        let glyphs = engine.render(&style, "ab").expect("renders");
        assert_eq!(glyphs.height, 30);
    }

    #[test]
    fn rendered_text_is_cached_by_style_and_string() {
        let fonts = BoxFonts::default();
        let renders = Arc::clone(&fonts.renders);
        let mut engine = TextEngine::new(Box::new(fonts));
        let style = TextStyle {
            height: 50,
            ..TextStyle::default()
        };

        engine.render(&style, "hello").expect("renders");
        engine.render(&style, "hello").expect("renders");
        assert_eq!(renders.load(Ordering::SeqCst), 3);

        let bold = TextStyle {
            bold: true,
            ..style.clone()
        };
        engine.render(&bold, "hello").expect("renders");
        assert_eq!(renders.load(Ordering::SeqCst), 4);
        assert_eq!(engine.cached_text_count(), 2);
    }

    #[test]
    fn rotated_text_reuses_the_upright_render() {
        let fonts = BoxFonts::default();
        let renders = Arc::clone(&fonts.renders);
        let mut engine = TextEngine::new(Box::new(fonts));
        let style = TextStyle {
            height: 50,
            ..TextStyle::default()
        };

        let upright = engine.render(&style, "hello").expect("renders");
        let turned = engine.render_rotated(&style, "hello", 90.0).expect("renders");
        assert_eq!(turned.width, upright.height);
        assert_eq!(turned.height, upright.width);
        // probes plus the single upright render
        assert_eq!(renders.load(Ordering::SeqCst), 3);

        // -270 is the same turn as 90
        let again = engine.render_rotated(&style, "hello", -270.0).expect("renders");
        assert!(Arc::ptr_eq(&turned, &again));
        assert_eq!(engine.cached_text_count(), 2);
        let full_turn = engine.render_rotated(&style, "hello", 360.0).expect("renders");
        assert!(Arc::ptr_eq(&upright, &full_turn));
    }

    struct FlatFonts;

    impl FontService for FlatFonts {
        fn has_family(&self, _family: &str) -> bool {
            true
        }

        fn render(&self, _request: &FontRequest, _text: &str) -> Result<GlyphImage, FontError> {
            Ok(GlyphImage::new(4, 4))
        }
    }

    #[test]
    fn flat_probes_are_rejected() {
        let mut engine = TextEngine::new(Box::new(FlatFonts));
        assert!(matches!(
            engine.calibration(Some("flat")),
            Err(FontError::DegenerateCalibration { .. })
        ));
    }
}
