//! Composition of a shape with its looks and interaction state.

use easel_foundation::{
    DisplayState, FrameInput, FromLookSpec, InteractionHandlers, InteractionState, LookError,
    LookParams, LookSet, LookSpec,
};
use easel_ui_graphics::Point;

use crate::component::{Component, ComponentError, RenderContext};

/// Geometry, hit test and drawing of one kind of shape.
pub trait Shape: Send {
    type Look: FromLookSpec + Send;

    /// Short name used in error messages.
    const NAME: &'static str;

    /// Every recognized look key with its default value.
    fn defaults() -> LookSpec;

    /// One-time setup once the surface and fonts exist.
    fn init(
        &mut self,
        _ctx: &mut RenderContext<'_>,
        _looks: &LookSet<Self::Look>,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    fn hit_test(&self, point: Point) -> bool;

    fn draw(&self, ctx: &mut RenderContext<'_>, look: &Self::Look) -> Result<(), ComponentError>;
}

/// A drawable, optionally interactive, scene element.
///
/// A widget only renders until [`Widget::active`] or one of the handler
/// setters turns on hover and click tracking.
pub struct Widget<S: Shape> {
    shape: S,
    looks: LookSet<S::Look>,
    state: InteractionState,
    handlers: Option<InteractionHandlers>,
    initialized: bool,
}

impl<S: Shape> Widget<S> {
    /// Builds a widget, rejecting look keys the shape does not know.
    pub fn new(shape: S, params: LookParams) -> Result<Self, LookError> {
        Self::with_strictness(shape, params, true)
    }

    /// Builds a widget, keeping unknown look keys in the normal look only.
    pub fn lenient(shape: S, params: LookParams) -> Result<Self, LookError> {
        Self::with_strictness(shape, params, false)
    }

    fn with_strictness(shape: S, params: LookParams, strict: bool) -> Result<Self, LookError> {
        let looks = LookSet::resolve(&params, &S::defaults(), strict)?;
        Ok(Self {
            shape,
            looks,
            state: InteractionState::default(),
            handlers: None,
            initialized: false,
        })
    }

    pub fn active(mut self) -> Self {
        self.handlers.get_or_insert_with(InteractionHandlers::default);
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.handlers_mut().set_on_click(f);
        self
    }

    pub fn on_release(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.handlers_mut().set_on_release(f);
        self
    }

    pub fn on_release_hovered(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.handlers_mut().set_on_release_hovered(f);
        self
    }

    pub fn on_release_outside(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.handlers_mut().set_on_release_outside(f);
        self
    }

    fn handlers_mut(&mut self) -> &mut InteractionHandlers {
        self.handlers.get_or_insert_with(InteractionHandlers::default)
    }

    pub fn is_interactive(&self) -> bool {
        self.handlers.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn looks(&self) -> &LookSet<S::Look> {
        &self.looks
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    pub fn display_state(&self) -> DisplayState {
        self.state.display_state()
    }

    pub fn hit_test(&self, point: Point) -> Result<bool, ComponentError> {
        if !self.initialized {
            return Err(ComponentError::NotInitialized(S::NAME));
        }
        Ok(self.shape.hit_test(point))
    }
}

impl<S: Shape> Component for Widget<S> {
    fn init(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), ComponentError> {
        self.shape.init(ctx, &self.looks)?;
        self.initialized = true;
        Ok(())
    }

    fn update(
        &mut self,
        ctx: &mut RenderContext<'_>,
        input: &FrameInput,
    ) -> Result<(), ComponentError> {
        if !self.initialized {
            return Err(ComponentError::NotInitialized(S::NAME));
        }

        if let Some(handlers) = self.handlers.as_mut() {
            let hit = self.state.enabled && self.shape.hit_test(input.pointer);
            self.state.step(hit, &input.events, handlers);
        }

        if self.state.visible {
            let look = self.looks.look_for(self.state.display_state());
            self.shape.draw(ctx, look)?;
        }
        Ok(())
    }
}
