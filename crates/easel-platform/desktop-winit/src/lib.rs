use easel_foundation::{FrameInput, InputEvent, PointerButton};
use easel_ui_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Platform adapter for translating desktop winit events into Easel input.
///
/// Events are queued as they arrive and handed to the redraw loop in one
/// batch per frame by [`DesktopWinitPlatform::drain`].
#[derive(Debug, Clone)]
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    pending: FrameInput,
}

impl DesktopWinitPlatform {
    /// Creates a new platform adapter with the provided scale factor.
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            pending: FrameInput::default(),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Updates the scale factor used to convert physical positions to logical coordinates.
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Converts a physical position reported by winit into logical coordinates.
    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor).floor() as i32,
            y: (position.y / self.scale_factor).floor() as i32,
        }
    }

    pub fn pointer_button(button: MouseButton) -> PointerButton {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(code) => PointerButton::Other(code),
        }
    }

    /// Queues whatever part of `event` the redraw loop cares about.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor)
            }
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.close_requested(),
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let point = self.pointer_position(position);
        self.pending.push(InputEvent::PointerMoved(point));
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let button = Self::pointer_button(button);
        let position = self.pending.pointer;
        self.pending.push(match state {
            ElementState::Pressed => InputEvent::PointerDown { button, position },
            ElementState::Released => InputEvent::PointerUp { button, position },
        });
    }

    pub fn close_requested(&mut self) {
        log::debug!("close requested by the host window");
        self.pending.push(InputEvent::Quit);
    }

    /// Takes the queued events. The pointer position carries over to the
    /// next batch.
    pub fn drain(&mut self) -> FrameInput {
        let pointer = self.pending.pointer;
        std::mem::replace(&mut self.pending, FrameInput::at(pointer))
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_scaled_to_logical_pixels() {
        let platform = DesktopWinitPlatform::new(2.0);
        assert_eq!(
            platform.pointer_position(PhysicalPosition::new(101.0, 40.0)),
            Point::new(50, 20)
        );
    }

    #[test]
    fn buttons_map_to_pointer_buttons() {
        assert_eq!(
            DesktopWinitPlatform::pointer_button(MouseButton::Left),
            PointerButton::Primary
        );
        assert_eq!(
            DesktopWinitPlatform::pointer_button(MouseButton::Other(9)),
            PointerButton::Other(9)
        );
    }

    #[test]
    fn drain_batches_events_and_keeps_the_pointer() {
        let mut platform = DesktopWinitPlatform::default();
        platform.cursor_moved(PhysicalPosition::new(12.0, 7.0));
        platform.mouse_input(ElementState::Pressed, MouseButton::Left);
        platform.mouse_input(ElementState::Released, MouseButton::Left);

        let input = platform.drain();
        assert_eq!(input.pointer, Point::new(12, 7));
        assert_eq!(input.events.len(), 3);
        assert!(input.events[1].is_primary_down());
        assert!(input.events[2].is_primary_up());
        assert!(!input.quit_requested());

        platform.close_requested();
        let input = platform.drain();
        assert_eq!(input.pointer, Point::new(12, 7));
        assert!(input.quit_requested());
        assert!(platform.drain().events.is_empty());
    }
}
