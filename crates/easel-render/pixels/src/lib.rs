//! Software rendering backend for Easel: an RGBA frame buffer rasterizer
//! and a rusttype font service.

mod fonts;
mod surface;

pub use fonts::RusttypeFonts;
pub use surface::PixelSurface;
