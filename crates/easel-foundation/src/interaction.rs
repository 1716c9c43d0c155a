//! Hover and click tracking for interactive components.

use std::fmt;

use crate::pointer::InputEvent;

pub type Callback = Box<dyn FnMut() + Send>;

/// Which look a component renders with this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayState {
    #[default]
    Normal,
    Hovered,
    Clicked,
}

/// Optional callbacks fired by [`InteractionState::step`].
#[derive(Default)]
pub struct InteractionHandlers {
    on_click: Option<Callback>,
    on_release: Option<Callback>,
    on_release_hovered: Option<Callback>,
    on_release_outside: Option<Callback>,
}

impl InteractionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Released while the component was both clicked and hovered.
    pub fn on_release(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }

    /// Released over the component without a preceding click on it.
    pub fn on_release_hovered(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_release_hovered = Some(Box::new(f));
        self
    }

    /// Released after the pointer left a clicked component.
    pub fn on_release_outside(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_release_outside = Some(Box::new(f));
        self
    }

    pub fn set_on_click(&mut self, f: impl FnMut() + Send + 'static) {
        self.on_click = Some(Box::new(f));
    }

    pub fn set_on_release(&mut self, f: impl FnMut() + Send + 'static) {
        self.on_release = Some(Box::new(f));
    }

    pub fn set_on_release_hovered(&mut self, f: impl FnMut() + Send + 'static) {
        self.on_release_hovered = Some(Box::new(f));
    }

    pub fn set_on_release_outside(&mut self, f: impl FnMut() + Send + 'static) {
        self.on_release_outside = Some(Box::new(f));
    }
}

impl fmt::Debug for InteractionHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_release", &self.on_release.is_some())
            .field("on_release_hovered", &self.on_release_hovered.is_some())
            .field("on_release_outside", &self.on_release_outside.is_some())
            .finish()
    }
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionState {
    pub enabled: bool,
    pub visible: bool,
    pub hovered: bool,
    pub clicked: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
            hovered: false,
            clicked: false,
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn display_state(&self) -> DisplayState {
        if self.clicked {
            DisplayState::Clicked
        } else if self.hovered {
            DisplayState::Hovered
        } else {
            DisplayState::Normal
        }
    }

    /// Advances the machine by one frame.
    ///
    /// `hit` is the hit test against the pointer position at the start of the
    /// frame. Only the primary button is considered.
    pub fn step(&mut self, hit: bool, events: &[InputEvent], handlers: &mut InteractionHandlers) {
        if !self.enabled {
            self.hovered = false;
            self.clicked = false;
            return;
        }

        self.hovered = hit;
        for event in events {
            if event.is_primary_down() {
                if self.hovered {
                    self.clicked = true;
                    fire(&mut handlers.on_click);
                }
            } else if event.is_primary_up() {
                if self.clicked && self.hovered {
                    fire(&mut handlers.on_release);
                } else if self.hovered {
                    fire(&mut handlers.on_release_hovered);
                } else if self.clicked {
                    fire(&mut handlers.on_release_outside);
                }
                self.clicked = false;
            }
        }
    }
}
