use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use easel_foundation::FrameInput;
use easel_ui::{Component, ComponentError, RenderContext, TextEngine};
use easel_ui_graphics::{Color, ColorError, Size};

use crate::backend::{Backend, BackendError};
use crate::clock::FrameClock;
use crate::settings::WindowSettings;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("frame rate must be within (1, 200), got {0}")]
    InvalidFrameRate(u32),
    #[error("window size {0:?} must be positive")]
    InvalidSize(Size),
    #[error("window is already open")]
    AlreadyOpen,
    #[error("window is not open")]
    NotOpen,
    #[error("redraw loop panicked")]
    LoopPanicked,
    #[error("failed to spawn redraw loop: {0}")]
    Spawn(#[from] std::io::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Component(#[from] ComponentError),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Summary of a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames drawn and presented
    pub frames: u64,
}

type Scene = Vec<Box<dyn Component>>;

struct LoopOutcome {
    components: Scene,
    frames: u64,
    error: Option<WindowError>,
}

fn outcome(components: Scene, frames: u64, error: Option<WindowError>) -> LoopOutcome {
    LoopOutcome {
        components,
        frames,
        error,
    }
}

/// A window session: settings, an ordered scene and, while open, the
/// thread redrawing it.
///
/// The scene can only be edited while the window is closed. Opening moves
/// the components to the loop thread and [`Window::wait_close`] hands them
/// back, so a window can be opened again.
pub struct Window {
    settings: WindowSettings,
    components: Scene,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<LoopOutcome>>,
}

impl Window {
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            components: Vec::new(),
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut WindowSettings {
        &mut self.settings
    }

    /// Whether a redraw loop was started and is still running.
    pub fn is_open(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    pub fn components_mut(&mut self) -> Result<&mut Vec<Box<dyn Component>>, WindowError> {
        self.ensure_closed()?;
        Ok(&mut self.components)
    }

    pub fn set_components(&mut self, components: Vec<Box<dyn Component>>) -> Result<(), WindowError> {
        self.ensure_closed()?;
        self.components = components;
        Ok(())
    }

    pub fn push(&mut self, component: impl Component + 'static) -> Result<(), WindowError> {
        self.ensure_closed()?;
        self.components.push(Box::new(component));
        Ok(())
    }

    fn ensure_closed(&self) -> Result<(), WindowError> {
        if self.handle.is_some() {
            return Err(WindowError::AlreadyOpen);
        }
        Ok(())
    }

    /// Starts the redraw loop and returns once every component is
    /// initialized and the first clear has happened.
    ///
    /// `factory` builds the backend on the loop thread. If it or any
    /// component's `init` fails, the thread is joined, the scene is handed
    /// back and the error is returned.
    pub fn open<B, F>(&mut self, factory: F) -> Result<(), WindowError>
    where
        B: Backend + 'static,
        F: FnOnce(&WindowSettings) -> Result<B, BackendError> + Send + 'static,
    {
        self.ensure_closed()?;
        let background = self.settings.validate()?;
        let settings = self.settings.clone();
        let components = mem::take(&mut self.components);
        self.stop.store(false, Ordering::SeqCst);
        let stop = Arc::clone(&self.stop);
        let (ready_tx, ready_rx) = mpsc::channel();

        log::debug!(
            "opening window '{}' ({}x{} @ {} fps)",
            settings.name,
            settings.size.width,
            settings.size.height,
            settings.fps
        );
        let handle = thread::Builder::new()
            .name(format!("easel-loop-{}", settings.name))
            .spawn(move || {
                run_loop(settings, background, components, factory, stop, ready_tx)
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                self.handle = Some(handle);
                Ok(())
            }
            Ok(Err(err)) => {
                if let Ok(outcome) = handle.join() {
                    self.components = outcome.components;
                }
                log::error!("window failed to open: {err}");
                Err(err)
            }
            // sender dropped without a message: the thread died early
            Err(_) => {
                if let Ok(outcome) = handle.join() {
                    self.components = outcome.components;
                }
                Err(WindowError::LoopPanicked)
            }
        }
    }

    /// Asks the loop to stop after the frame in progress.
    pub fn request_close(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Blocks until the loop ends and takes the scene back.
    ///
    /// The first frame error ends the loop and is returned here.
    pub fn wait_close(&mut self) -> Result<FrameStats, WindowError> {
        let handle = self.handle.take().ok_or(WindowError::NotOpen)?;
        let outcome = handle.join().map_err(|_| WindowError::LoopPanicked)?;
        self.components = outcome.components;
        log::debug!(
            "window '{}' closed after {} frames",
            self.settings.name,
            outcome.frames
        );
        match outcome.error {
            Some(err) => Err(err),
            None => Ok(FrameStats {
                frames: outcome.frames,
            }),
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.request_close();
            if handle.join().is_err() {
                log::error!("redraw loop of '{}' panicked", self.settings.name);
            }
        }
    }
}

fn run_loop<B, F>(
    settings: WindowSettings,
    background: Color,
    mut components: Scene,
    factory: F,
    stop: Arc<AtomicBool>,
    ready: mpsc::Sender<Result<(), WindowError>>,
) -> LoopOutcome
where
    B: Backend,
    F: FnOnce(&WindowSettings) -> Result<B, BackendError>,
{
    let mut backend = match factory(&settings) {
        Ok(backend) => backend,
        Err(err) => {
            let _ = ready.send(Err(err.into()));
            return outcome(components, 0, None);
        }
    };
    let mut engine = TextEngine::new(backend.font_service());
    if let Err(err) = init_scene(&mut backend, &mut engine, &mut components, background) {
        let _ = ready.send(Err(err.into()));
        return outcome(components, 0, None);
    }
    let _ = ready.send(Ok(()));

    let mut clock = FrameClock::new(settings.fps);
    let mut frames = 0;
    loop {
        let input = backend.poll_input();
        if let Err(err) = draw_frame(&mut backend, &mut engine, &mut components, background, &input)
        {
            log::error!("frame {frames} of '{}' failed: {err}", settings.name);
            return outcome(components, frames, Some(err));
        }
        frames += 1;
        if input.quit_requested() || stop.load(Ordering::SeqCst) {
            break;
        }
        clock.tick();
    }
    outcome(components, frames, None)
}

fn init_scene<B: Backend>(
    backend: &mut B,
    engine: &mut TextEngine,
    components: &mut [Box<dyn Component>],
    background: Color,
) -> Result<(), ComponentError> {
    let surface = backend.surface();
    let mut ctx = RenderContext::new(surface, engine);
    for component in components.iter_mut() {
        component.init(&mut ctx)?;
    }
    ctx.surface.clear(background);
    Ok(())
}

fn draw_frame<B: Backend>(
    backend: &mut B,
    engine: &mut TextEngine,
    components: &mut [Box<dyn Component>],
    background: Color,
    input: &FrameInput,
) -> Result<(), WindowError> {
    {
        let surface = backend.surface();
        surface.clear(background);
        let mut ctx = RenderContext::new(surface, engine);
        for component in components.iter_mut() {
            component.update(&mut ctx, input)?;
        }
    }
    backend.present()?;
    Ok(())
}
