use easel_foundation::{FrameInput, LookParams, StateValue};
use easel_render_pixels::{PixelSurface, RusttypeFonts};
use easel_ui::{
    Component, Cross, Disk, DrawSurface, Grid, Rectangle, RenderContext, TextEngine, Widget,
};
use easel_ui_graphics::{Color, Point};

fn scene() -> Vec<Box<dyn Component>> {
    let hover = LookParams::new()
        .states("color", [StateValue::from("white"), StateValue::from("gray")])
        .set("width", 2);
    vec![
        Box::new(Widget::new(Grid::new(25, 25).expect("grid"), LookParams::new()).expect("look")),
        Box::new(
            Widget::new(Rectangle::new((10, 10), (40, 30)), hover.clone())
                .expect("look")
                .active(),
        ),
        Box::new(Widget::new(Disk::new((70, 70), 15), hover).expect("look").active()),
        Box::new(Widget::new(Cross::new((50, 90), 4), LookParams::new()).expect("look")),
    ]
}

fn render(components: &mut [Box<dyn Component>], input: &FrameInput) -> Vec<u8> {
    let mut surface = PixelSurface::new(100, 100);
    let mut engine = TextEngine::new(Box::new(RusttypeFonts::new()));
    surface.clear(Color::WHITE);
    let mut ctx = RenderContext::new(&mut surface, &mut engine);
    for component in components.iter_mut() {
        component.init(&mut ctx).expect("init");
    }
    for component in components.iter_mut() {
        component.update(&mut ctx, input).expect("frame");
    }
    drop(ctx);
    surface.pixels().to_vec()
}

#[test]
fn rendering_twice_is_bit_identical() {
    let mut components = scene();
    let input = FrameInput::at((20, 20));
    let first = render(&mut components, &input);
    let second = render(&mut components, &input);
    assert_eq!(first, second);
}

#[test]
fn later_components_paint_over_earlier_ones() {
    let mut components = scene();
    let mut surface = PixelSurface::new(100, 100);
    let mut engine = TextEngine::new(Box::new(RusttypeFonts::new()));
    surface.clear(Color::WHITE);
    let mut ctx = RenderContext::new(&mut surface, &mut engine);
    for component in components.iter_mut() {
        component.init(&mut ctx).expect("init");
        component
            .update(&mut ctx, &FrameInput::at((20, 20)))
            .expect("frame");
    }
    drop(ctx);

    // grid line at x=25 is covered by the hovered rectangle fill
    assert_eq!(surface.pixel(25, 20), Some(Color::rgb(128, 128, 128)));
    // outline band on the rectangle edge
    assert_eq!(surface.pixel(10, 20), Some(Color::BLACK));
    // grid line outside any shape
    assert_eq!(surface.pixel(75, 5), Some(Color::BLACK));
    assert_eq!(surface.pixel(80, 5), Some(Color::WHITE));
    // cross center
    let center = Point::new(50, 90);
    assert_eq!(surface.pixel(center.x + 4, center.y), Some(Color::BLACK));
}
