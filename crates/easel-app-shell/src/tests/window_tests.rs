use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use easel_foundation::{FrameInput, InputEvent, LookParams};
use easel_ui::{
    Component, ComponentError, DrawSurface, FontError, FontRequest, FontService, GlyphImage,
    RecordingSurface, Rectangle, RenderContext, RenderOp, Widget,
};
use easel_ui_graphics::{Color, ColorSpec, Rect};

use super::*;

struct NoFonts;

impl FontService for NoFonts {
    fn has_family(&self, _family: &str) -> bool {
        false
    }

    fn render(&self, _request: &FontRequest, _text: &str) -> Result<GlyphImage, FontError> {
        Err(FontError::NoDefaultFont)
    }
}

type Frames = Arc<Mutex<Vec<Vec<RenderOp>>>>;

/// Replays inputs, then keeps reporting an idle pointer (or `Quit` when
/// `quit_when_drained` is set).
struct ScriptedBackend {
    surface: RecordingSurface,
    inputs: VecDeque<FrameInput>,
    quit_when_drained: bool,
    presented: Frames,
}

impl Backend for ScriptedBackend {
    fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut self.surface
    }

    fn font_service(&mut self) -> Box<dyn FontService> {
        Box::new(NoFonts)
    }

    fn poll_input(&mut self) -> FrameInput {
        match self.inputs.pop_front() {
            Some(input) => input,
            None if self.quit_when_drained => FrameInput::default().with_event(InputEvent::Quit),
            None => FrameInput::default(),
        }
    }

    fn present(&mut self) -> Result<(), BackendError> {
        let mut presented = self.presented.lock().map_err(|_| BackendError::Closed)?;
        presented.push(self.surface.operations().to_vec());
        Ok(())
    }
}

fn scripted(
    inputs: Vec<FrameInput>,
    quit_when_drained: bool,
) -> (
    impl FnOnce(&WindowSettings) -> Result<ScriptedBackend, BackendError> + Send + 'static,
    Frames,
) {
    let presented = Frames::default();
    let frames = Arc::clone(&presented);
    let factory = move |settings: &WindowSettings| {
        Ok(ScriptedBackend {
            surface: RecordingSurface::new(settings.size),
            inputs: inputs.into(),
            quit_when_drained,
            presented: frames,
        })
    };
    (factory, presented)
}

fn fast_settings() -> WindowSettings {
    WindowSettings::new().with_size(100, 100).with_fps(199)
}

fn square() -> Widget<Rectangle> {
    Widget::new(Rectangle::new((10, 10), (20, 20)), LookParams::new().set("color", "red"))
        .expect("valid look")
}

struct FailingComponent {
    fail_init: bool,
    fail_on_frame: Option<usize>,
    frames: usize,
}

impl Component for FailingComponent {
    fn init(&mut self, _ctx: &mut RenderContext<'_>) -> Result<(), ComponentError> {
        if self.fail_init {
            return Err(ComponentError::InvalidGeometry("probe".into()));
        }
        Ok(())
    }

    fn update(
        &mut self,
        _ctx: &mut RenderContext<'_>,
        _input: &FrameInput,
    ) -> Result<(), ComponentError> {
        self.frames += 1;
        if self.fail_on_frame == Some(self.frames) {
            return Err(ComponentError::InvalidGeometry("probe".into()));
        }
        Ok(())
    }
}

#[test]
fn settings_defaults_match_the_classic_window() {
    let settings = WindowSettings::default();
    assert_eq!(settings.name, "Application Window");
    assert_eq!(settings.size, easel_ui_graphics::Size::new(700, 700));
    assert_eq!(settings.fps, 20);
    assert_eq!(settings.validate().expect("valid"), Color::WHITE);
}

#[test]
fn frame_rate_must_be_strictly_between_1_and_200() {
    for fps in [0, 1, 200, 500] {
        assert!(matches!(
            WindowSettings::new().with_fps(fps).validate(),
            Err(WindowError::InvalidFrameRate(got)) if got == fps
        ));
    }
    for fps in [2, 60, 199] {
        assert!(WindowSettings::new().with_fps(fps).validate().is_ok());
    }
}

#[test]
fn background_must_resolve() {
    let settings = WindowSettings::new().with_background("no-such-color");
    assert!(matches!(settings.validate(), Err(WindowError::Color(_))));
    let settings = WindowSettings::new().with_background(ColorSpec::Rgb(0, 0, 300));
    assert!(matches!(settings.validate(), Err(WindowError::Color(_))));
}

#[test]
fn loop_draws_until_quit_and_returns_the_scene() {
    let mut window = Window::new(fast_settings());
    window.push(square()).expect("closed window");
    let (factory, presented) = scripted(vec![FrameInput::default(); 3], true);

    window.open(factory).expect("open");
    let stats = window.wait_close().expect("clean close");

    // three scripted frames plus the frame in which Quit arrived
    assert_eq!(stats.frames, 4);
    assert_eq!(window.components().len(), 1);
    let presented = presented.lock().expect("frames");
    assert_eq!(presented.len(), 4);
    for ops in presented.iter() {
        assert_eq!(
            ops,
            &vec![
                RenderOp::Clear(Color::WHITE),
                RenderOp::FillRect {
                    rect: Rect::new(10, 10, 20, 20),
                    color: Color::rgb(255, 0, 0),
                },
            ]
        );
    }
}

#[test]
fn clicks_reach_handlers_through_the_loop() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let widget = square().on_click({
        let clicks = Arc::clone(&clicks);
        move || {
            clicks.fetch_add(1, Ordering::SeqCst);
        }
    });
    let mut window = Window::new(fast_settings());
    window.push(widget).expect("closed window");
    let inputs = vec![
        FrameInput::at((15, 15)),
        FrameInput::at((15, 15)).with_event(InputEvent::primary_down((15, 15))),
        FrameInput::at((15, 15)).with_event(InputEvent::primary_up((15, 15))),
    ];
    let (factory, _) = scripted(inputs, true);

    window.open(factory).expect("open");
    window.wait_close().expect("clean close");
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn scene_is_frozen_while_open() {
    let mut window = Window::new(fast_settings());
    let (factory, _) = scripted(Vec::new(), false);
    window.open(factory).expect("open");

    assert!(matches!(window.push(square()), Err(WindowError::AlreadyOpen)));
    assert!(matches!(window.components_mut(), Err(WindowError::AlreadyOpen)));
    let (again, _) = scripted(Vec::new(), true);
    assert!(matches!(window.open(again), Err(WindowError::AlreadyOpen)));

    window.request_close();
    let stats = window.wait_close().expect("clean close");
    assert!(stats.frames >= 1);
    assert!(!window.is_open());
    assert!(matches!(window.wait_close(), Err(WindowError::NotOpen)));
}

#[test]
fn window_can_be_reopened() {
    let mut window = Window::new(fast_settings());
    window.push(square()).expect("closed window");
    for _ in 0..2 {
        let (factory, _) = scripted(Vec::new(), true);
        window.open(factory).expect("open");
        assert_eq!(window.wait_close().expect("clean close").frames, 1);
    }
    assert_eq!(window.components().len(), 1);
}

#[test]
fn backend_failure_is_reported_by_open() {
    let mut window = Window::new(fast_settings());
    window.push(square()).expect("closed window");
    let result = window.open(|_settings: &WindowSettings| -> Result<ScriptedBackend, BackendError> {
        Err(BackendError::Create("no display".into()))
    });
    assert!(matches!(result, Err(WindowError::Backend(BackendError::Create(_)))));
    assert_eq!(window.components().len(), 1);
    assert!(!window.is_open());
}

#[test]
fn init_failure_is_reported_by_open() {
    let mut window = Window::new(fast_settings());
    window
        .push(FailingComponent {
            fail_init: true,
            fail_on_frame: None,
            frames: 0,
        })
        .expect("closed window");
    let (factory, presented) = scripted(Vec::new(), true);
    assert!(matches!(
        window.open(factory),
        Err(WindowError::Component(ComponentError::InvalidGeometry(_)))
    ));
    assert_eq!(window.components().len(), 1);
    assert!(presented.lock().expect("frames").is_empty());
}

#[test]
fn first_frame_error_stops_the_loop() {
    let mut window = Window::new(fast_settings());
    window
        .push(FailingComponent {
            fail_init: false,
            fail_on_frame: Some(2),
            frames: 0,
        })
        .expect("closed window");
    let (factory, presented) = scripted(Vec::new(), false);

    window.open(factory).expect("open");
    assert!(matches!(
        window.wait_close(),
        Err(WindowError::Component(ComponentError::InvalidGeometry(_)))
    ));
    assert_eq!(presented.lock().expect("frames").len(), 1);
    assert_eq!(window.components().len(), 1);
}

#[test]
fn frame_clock_pads_to_the_period() {
    let mut clock = FrameClock::new(100);
    assert_eq!(clock.period(), Duration::from_millis(10));
    let start = web_time::Instant::now();
    clock.tick();
    clock.tick();
    assert!(start.elapsed() >= Duration::from_millis(20));
}
