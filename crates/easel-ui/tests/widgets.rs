use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use easel_foundation::{DisplayState, FrameInput, InputEvent, LookError, LookParams, StateValue};
use easel_ui::{
    Component, ComponentError, Disk, FontError, FontRequest, FontService, GlyphImage, Grid,
    RecordingSurface, Rectangle, RenderContext, RenderOp, TextEngine, Widget,
};
use easel_ui_graphics::{Color, Point, Rect};

struct NoFonts;

impl FontService for NoFonts {
    fn has_family(&self, _family: &str) -> bool {
        false
    }

    fn render(&self, _request: &FontRequest, _text: &str) -> Result<GlyphImage, FontError> {
        Err(FontError::NoDefaultFont)
    }
}

struct Harness {
    surface: RecordingSurface,
    engine: TextEngine,
}

impl Harness {
    fn new() -> Self {
        Self {
            surface: RecordingSurface::new((100, 100)),
            engine: TextEngine::new(Box::new(NoFonts)),
        }
    }

    fn init(&mut self, component: &mut dyn Component) {
        let mut ctx = RenderContext::new(&mut self.surface, &mut self.engine);
        component.init(&mut ctx).expect("init");
    }

    fn frame(&mut self, component: &mut dyn Component, input: FrameInput) -> Vec<RenderOp> {
        {
            let mut ctx = RenderContext::new(&mut self.surface, &mut self.engine);
            component.update(&mut ctx, &input).expect("frame");
        }
        self.surface.take_operations()
    }
}

#[test]
fn rectangle_draws_fill_then_clamped_outline() {
    let mut harness = Harness::new();
    let params = LookParams::new()
        .set("color", "red")
        .set("outline", "blue")
        .set("width", 50);
    let mut widget = Widget::new(Rectangle::new((10, 10), (20, 6)), params).expect("valid look");
    harness.init(&mut widget);

    let ops = harness.frame(&mut widget, FrameInput::at((0, 0)));
    let blue = Color::rgb(0, 0, 255);
    assert_eq!(
        ops,
        vec![
            RenderOp::FillRect {
                rect: Rect::new(10, 10, 20, 6),
                color: Color::rgb(255, 0, 0),
            },
            RenderOp::FillRect {
                rect: Rect::new(10, 10, 20, 3),
                color: blue,
            },
            RenderOp::FillRect {
                rect: Rect::new(10, 13, 20, 3),
                color: blue,
            },
        ]
    );
}

#[test]
fn hovered_and_clicked_looks_follow_the_pointer() {
    let mut harness = Harness::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let releases = Arc::new(AtomicUsize::new(0));
    let params = LookParams::new().states(
        "color",
        [
            StateValue::from("white"),
            StateValue::from("gray"),
            StateValue::from("black"),
        ],
    );
    let mut widget = Widget::new(Rectangle::new((0, 0), (10, 10)), params)
        .expect("valid look")
        .on_click({
            let clicks = Arc::clone(&clicks);
            move || {
                clicks.fetch_add(1, Ordering::SeqCst);
            }
        })
        .on_release({
            let releases = Arc::clone(&releases);
            move || {
                releases.fetch_add(1, Ordering::SeqCst);
            }
        });
    harness.init(&mut widget);

    let fill = |ops: &[RenderOp]| match ops.first() {
        Some(RenderOp::FillRect { color, .. }) => Some(*color),
        _ => None,
    };

    let ops = harness.frame(&mut widget, FrameInput::at((50, 50)));
    assert_eq!(fill(&ops), Some(Color::WHITE));

    let ops = harness.frame(&mut widget, FrameInput::at((5, 5)));
    assert_eq!(fill(&ops), Some(Color::rgb(128, 128, 128)));
    assert_eq!(widget.display_state(), DisplayState::Hovered);

    let down = FrameInput::at((5, 5)).with_event(InputEvent::primary_down((5, 5)));
    let ops = harness.frame(&mut widget, down);
    assert_eq!(fill(&ops), Some(Color::BLACK));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);

    let up = FrameInput::at((10, 10)).with_event(InputEvent::primary_up((10, 10)));
    harness.frame(&mut widget, up);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert_eq!(widget.display_state(), DisplayState::Hovered);
}

#[test]
fn disabled_widgets_ignore_the_pointer() {
    let mut harness = Harness::new();
    let mut widget = Widget::new(Rectangle::new((0, 0), (10, 10)), LookParams::new())
        .expect("valid look")
        .active();
    harness.init(&mut widget);
    widget.state_mut().disable();

    for input in [
        FrameInput::at((5, 5)),
        FrameInput::at((5, 5)).with_event(InputEvent::primary_down((5, 5))),
        FrameInput::at((5, 5)).with_event(InputEvent::primary_up((5, 5))),
    ] {
        harness.frame(&mut widget, input);
        assert!(!widget.state().hovered);
        assert!(!widget.state().clicked);
    }
}

#[test]
fn update_before_init_is_rejected() {
    let mut harness = Harness::new();
    let mut widget = Widget::new(Disk::new((50, 50), 10), LookParams::new()).expect("valid look");
    let mut ctx = RenderContext::new(&mut harness.surface, &mut harness.engine);
    assert!(matches!(
        widget.update(&mut ctx, &FrameInput::default()),
        Err(ComponentError::NotInitialized("Disk"))
    ));
}

#[test]
fn disk_fill_shrinks_under_an_outline() {
    let mut harness = Harness::new();
    let params = LookParams::new().set("width", 2);
    let mut widget = Widget::new(Disk::new((50, 50), 10), params).expect("valid look");
    harness.init(&mut widget);

    let ops = harness.frame(&mut widget, FrameInput::default());
    assert_eq!(
        ops,
        vec![
            RenderOp::FillCircle {
                center: Point::new(50, 50),
                radius: 9,
                color: Color::WHITE,
            },
            RenderOp::StrokeCircle {
                center: Point::new(50, 50),
                radius: 10,
                width: 2,
                color: Color::BLACK,
            },
        ]
    );
}

#[test]
fn grid_draws_three_lines_per_axis() {
    let mut harness = Harness::new();
    let mut widget =
        Widget::new(Grid::new(50, 50).expect("valid steps"), LookParams::new()).expect("look");
    harness.init(&mut widget);

    let ops = harness.frame(&mut widget, FrameInput::default());
    assert_eq!(ops.len(), 6);
}

#[test]
fn unknown_look_keys_depend_on_strictness() {
    let params = LookParams::new().set("shadow", 3);
    assert!(matches!(
        Widget::new(Rectangle::new((0, 0), (1, 1)), params.clone()),
        Err(LookError::UnrecognizedParameter(key)) if key == "shadow"
    ));
    assert!(Widget::lenient(Rectangle::new((0, 0), (1, 1)), params).is_ok());
}
