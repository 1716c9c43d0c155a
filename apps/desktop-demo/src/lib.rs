//! The basics scene: a grid, three rectangles, a disk and, when fonts are
//! available, text anchored to every edge.

use easel::{Alignment, Component, Disk, Grid, LookParams, Rectangle, Text, Widget};
use easel::{ParamValue, StateValue};

pub const WIDTH: i32 = 700;
pub const HEIGHT: i32 = 700;

pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

/// Builds the scene. Text needs at least one registered font, so it is
/// only added when `with_text` is set.
pub fn basics_scene(with_text: bool) -> anyhow::Result<Vec<Box<dyn Component>>> {
    let mut scene: Vec<Box<dyn Component>> = vec![
        Box::new(Widget::new(
            Grid::new(50, 50)?,
            LookParams::new().set("color", "gray").set("width", 1),
        )?),
        Box::new(
            Widget::new(
                Rectangle::new((0, 0), (100, 100)),
                LookParams::new().set("color", "blue"),
            )?
            .active(),
        ),
        Box::new(
            Widget::new(
                Rectangle::new((100, 0), (100, 100)),
                LookParams::new()
                    .set("color", "green")
                    .set("outline", "purple")
                    .set("width", 5)
                    .hovered("color", "blue"),
            )?
            .active(),
        ),
        Box::new(
            Widget::new(Rectangle::new((200, 0), (100, 100)), pressable_look())?
                .on_click(|| log::info!("red square clicked"))
                .on_release_outside(|| log::info!("red square released outside")),
        ),
        Box::new(
            Widget::new(Disk::new((350, 50), 50), pressable_look())?
                .on_release_hovered(|| log::info!("disk released")),
        ),
    ];
    if with_text {
        scene.extend(text_components()?);
    }
    Ok(scene)
}

fn pressable_look() -> LookParams {
    LookParams::new()
        .set("color", "red")
        .with_hovered([("color", StateValue::from("orange")), ("width", 5.into())])
        .clicked("color", "green")
}

fn text_components() -> anyhow::Result<Vec<Box<dyn Component>>> {
    let (mid_x, mid_y) = (WIDTH / 2, HEIGHT / 2);
    let edges = [
        ("top-left", (0, 0), "top-left"),
        ("top-center", (mid_x, 0), "top-center"),
        ("top-right", (WIDTH, 0), "top-right"),
        ("bot-left", (0, HEIGHT), "bottom-left"),
        ("bot-center", (mid_x, HEIGHT), "bottom-center"),
        ("bot-right", (WIDTH, HEIGHT), "bottom-right"),
    ];
    let mut texts: Vec<Box<dyn Component>> = Vec::new();
    for (label, position, alignment) in edges {
        let text = Text::new(label, position).aligned(Alignment::parse(alignment)?);
        texts.push(Box::new(Widget::new(text, LookParams::new())?));
    }

    let centered = |label: &str, y: i32| Text::new(label, (mid_x - 50, y)).aligned(Alignment::CENTER);
    texts.push(Box::new(Widget::new(
        centered("arial-20-red", mid_y - 100),
        LookParams::new()
            .set("font", "arial")
            .set("height", 20)
            .set("color", "red"),
    )?));
    texts.push(Box::new(Widget::new(
        centered("candara-20-bold-italic-underline", mid_y - 50),
        LookParams::new()
            .set("font", "candara")
            .set("height", 20)
            .set("bold", true)
            .set("italic", true)
            .set("underline", true),
    )?));
    let italic = || {
        LookParams::new()
            .set("font", "candara")
            .set("height", 20)
            .set("italic", true)
    };
    texts.push(Box::new(
        Widget::new(
            centered("italic_hover-underline", mid_y),
            italic()
                .hovered("font", "arial")
                .hovered("underline", true),
        )?
        .active(),
    ));
    texts.push(Box::new(
        Widget::new(
            centered("italic_click-bold", mid_y + 50),
            italic()
                .clicked("font", ParamValue::None)
                .clicked("bold", true),
        )?
        .active(),
    ));
    texts.push(Box::new(
        Widget::new(
            centered("italic_hover-underline_click-bold", mid_y + 100),
            italic()
                .hovered("font", "arial")
                .hovered("underline", true)
                .clicked("font", ParamValue::None)
                .clicked("bold", true),
        )?
        .active(),
    ));
    Ok(texts)
}
