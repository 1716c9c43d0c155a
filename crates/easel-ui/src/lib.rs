//! Drawing contracts, the text engine and the shape widgets of Easel.

mod component;
pub mod fonts;
mod renderer;
pub mod shapes;
mod surface;
mod widget;

pub use component::{Component, ComponentError, ImageError, RenderContext};
pub use fonts::{Calibration, FontError, FontRequest, FontService, TextEngine, TextStyle};
pub use renderer::{RecordingSurface, RenderOp};
pub use shapes::{
    Cross, Disk, Grid, Image, ImageLook, Line, LineSet, Rectangle, Segment, ShapeLook, StrokeLook,
    Text, TextLook,
};
pub use surface::{Bitmap, DrawSurface, GlyphImage};
pub use widget::{Shape, Widget};

pub mod prelude {
    pub use crate::shapes::{Cross, Disk, Grid, Image, Line, LineSet, Rectangle, Segment, Text};
    pub use crate::{Component, RenderContext, Widget};
    pub use easel_foundation::prelude::*;
    pub use easel_ui_graphics::{Alignment, Color, Point, Rect, Size};
}
