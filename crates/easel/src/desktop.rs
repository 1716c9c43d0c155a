//! Desktop backend: a winit window presenting frames through `pixels`.
//!
//! The backend lives on the redraw loop thread. It pumps the winit event
//! loop without blocking once per frame instead of handing control to
//! `EventLoop::run`, so the loop keeps its own frame clock.

use std::sync::Arc;
use std::time::Duration;

use easel_app_shell::{Backend, BackendError, WindowSettings};
use easel_foundation::FrameInput;
use easel_platform_desktop_winit::DesktopWinitPlatform;
use easel_render_pixels::{PixelSurface, RusttypeFonts};
use easel_ui::{DrawSurface, FontService};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopBuilder};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

/// Pumps allowed while waiting for the host to hand out the window.
const STARTUP_PUMPS: usize = 200;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Winit side of the backend: owns the native window and its pixel buffer.
struct Host {
    attributes: WindowAttributes,
    buffer_size: (u32, u32),
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    platform: DesktopWinitPlatform,
    pending_resize: Option<PhysicalSize<u32>>,
    error: Option<BackendError>,
}

impl Host {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BackendError> {
        let window = event_loop
            .create_window(self.attributes.clone())
            .map(Arc::new)
            .map_err(|err| BackendError::Create(err.to_string()))?;
        let physical = window.inner_size();
        let texture = SurfaceTexture::new(physical.width, physical.height, Arc::clone(&window));
        let (width, height) = self.buffer_size;
        let pixels =
            Pixels::new(width, height, texture).map_err(|err| BackendError::Create(err.to_string()))?;

        self.platform.set_scale_factor(window.scale_factor());
        log::debug!(
            "created desktop window {width}x{height} (physical {}x{}, scale {})",
            physical.width,
            physical.height,
            window.scale_factor()
        );
        self.pixels = Some(pixels);
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.error = Some(err);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.pending_resize = Some(size);
        }
        self.platform.handle_window_event(&event);
    }
}

/// A desktop window drawn by the software rasterizer.
pub struct DesktopBackend {
    event_loop: EventLoop<()>,
    host: Host,
    surface: PixelSurface,
    fonts: RusttypeFonts,
}

impl DesktopBackend {
    /// Opens the native window. Must run on the thread that will pump it.
    pub fn new(settings: &WindowSettings, fonts: RusttypeFonts) -> Result<Self, BackendError> {
        let mut builder = EventLoop::builder();
        allow_any_thread(&mut builder);
        let mut event_loop = builder
            .build()
            .map_err(|err| BackendError::Create(err.to_string()))?;

        let width = settings.size.width.max(1) as u32;
        let height = settings.size.height.max(1) as u32;
        let attributes = Window::default_attributes()
            .with_title(settings.name.clone())
            .with_inner_size(LogicalSize::new(width as f64, height as f64));
        let mut host = Host {
            attributes,
            buffer_size: (width, height),
            window: None,
            pixels: None,
            platform: DesktopWinitPlatform::default(),
            pending_resize: None,
            error: None,
        };

        // the window is created on the first resume
        for _ in 0..STARTUP_PUMPS {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut host);
            if let Some(err) = host.error.take() {
                return Err(err);
            }
            if let PumpStatus::Exit(code) = status {
                return Err(BackendError::Create(format!(
                    "event loop exited with code {code} before the window opened"
                )));
            }
            if host.window.is_some() {
                break;
            }
        }
        if host.window.is_none() {
            return Err(BackendError::Create("host never resumed".into()));
        }

        Ok(Self {
            event_loop,
            host,
            surface: PixelSurface::new(width, height),
            fonts,
        })
    }

    fn apply_resize(&mut self, physical: PhysicalSize<u32>) -> Result<(), BackendError> {
        let Some(pixels) = self.host.pixels.as_mut() else {
            return Err(BackendError::Closed);
        };
        if physical.width == 0 || physical.height == 0 {
            // minimized
            return Ok(());
        }
        let scale = self.host.platform.scale_factor();
        let width = ((physical.width as f64 / scale).round() as u32).max(1);
        let height = ((physical.height as f64 / scale).round() as u32).max(1);
        pixels
            .resize_surface(physical.width, physical.height)
            .map_err(|err| BackendError::Present(err.to_string()))?;
        pixels
            .resize_buffer(width, height)
            .map_err(|err| BackendError::Present(err.to_string()))?;
        self.surface.resize(width, height);
        log::debug!("resized desktop surface to {width}x{height}");
        Ok(())
    }
}

impl Backend for DesktopBackend {
    fn surface(&mut self) -> &mut dyn DrawSurface {
        &mut self.surface
    }

    fn font_service(&mut self) -> Box<dyn FontService> {
        Box::new(self.fonts.clone())
    }

    fn poll_input(&mut self) -> FrameInput {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);
        if let PumpStatus::Exit(code) = status {
            log::debug!("desktop event loop exited with code {code}");
            self.host.platform.close_requested();
        }
        if let Some(size) = self.host.pending_resize.take() {
            if let Err(err) = self.apply_resize(size) {
                self.host.error.get_or_insert(err);
            }
        }
        self.host.platform.drain()
    }

    fn present(&mut self) -> Result<(), BackendError> {
        if let Some(err) = self.host.error.take() {
            return Err(err);
        }
        let pixels = self.host.pixels.as_mut().ok_or(BackendError::Closed)?;
        let frame = pixels.frame_mut();
        let frame_len = frame.len();
        if !self.surface.copy_to(frame) {
            return Err(BackendError::Present(format!(
                "frame buffer holds {frame_len} bytes, surface has {}",
                self.surface.pixels().len()
            )));
        }
        pixels
            .render()
            .map_err(|err| BackendError::Present(err.to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
fn allow_any_thread(builder: &mut EventLoopBuilder<()>) {
    use winit::platform::x11::EventLoopBuilderExtX11;
    // X11 and Wayland share the flag
    builder.with_any_thread(true);
}

#[cfg(target_os = "windows")]
fn allow_any_thread(builder: &mut EventLoopBuilder<()>) {
    use winit::platform::windows::EventLoopBuilderExtWindows;
    builder.with_any_thread(true);
}

#[cfg(not(any(
    target_os = "windows",
    all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )
)))]
fn allow_any_thread(_builder: &mut EventLoopBuilder<()>) {}
