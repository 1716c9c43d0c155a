use easel_ui_graphics::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Discrete input observed since the previous frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved(Point),
    PointerDown {
        button: PointerButton,
        position: Point,
    },
    PointerUp {
        button: PointerButton,
        position: Point,
    },
    Quit,
}

impl InputEvent {
    pub fn primary_down(position: impl Into<Point>) -> Self {
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: position.into(),
        }
    }

    pub fn primary_up(position: impl Into<Point>) -> Self {
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            position: position.into(),
        }
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                ..
            }
        )
    }

    pub fn is_primary_up(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            }
        )
    }
}

/// Everything a frame sees of the input source: the current pointer position
/// and the ordered events drained from the queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer: Point,
    pub events: SmallVec<[InputEvent; 8]>,
}

impl FrameInput {
    pub fn at(pointer: impl Into<Point>) -> Self {
        Self {
            pointer: pointer.into(),
            events: SmallVec::new(),
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.push(event);
        self
    }

    /// Appends an event. Moves also update the pointer position.
    pub fn push(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved(position) = event {
            self.pointer = position;
        }
        self.events.push(event);
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|event| *event == InputEvent::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_track_the_pointer() {
        let mut input = FrameInput::at((1, 1));
        input.push(InputEvent::PointerMoved(Point::new(40, 50)));
        assert_eq!(input.pointer, Point::new(40, 50));
        assert_eq!(input.events.len(), 1);
    }

    #[test]
    fn quit_is_detected_anywhere_in_the_batch() {
        let input = FrameInput::at((0, 0))
            .with_event(InputEvent::primary_down((0, 0)))
            .with_event(InputEvent::Quit)
            .with_event(InputEvent::primary_up((0, 0)));
        assert!(input.quit_requested());
        assert!(!FrameInput::default().quit_requested());
    }

    #[test]
    fn only_primary_buttons_match_primary_helpers() {
        let secondary = InputEvent::PointerDown {
            button: PointerButton::Secondary,
            position: Point::new(0, 0),
        };
        assert!(!secondary.is_primary_down());
        assert!(InputEvent::primary_down((0, 0)).is_primary_down());
        assert!(InputEvent::primary_up((0, 0)).is_primary_up());
    }
}
