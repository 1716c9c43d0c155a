//! Foundation elements for Easel: per-state looks, pointer input and the
//! hover/click state machine every interactive component runs.

pub mod interaction;
pub mod look;
pub mod pointer;

pub use interaction::{Callback, DisplayState, InteractionHandlers, InteractionState};
pub use look::{
    resolve_looks, FromLookSpec, LookError, LookParams, LookSet, LookSpec, ParamValue,
    ResolvedLooks, StateValue,
};
pub use pointer::{FrameInput, InputEvent, PointerButton};

pub mod prelude {
    pub use crate::interaction::{DisplayState, InteractionHandlers, InteractionState};
    pub use crate::look::{LookParams, LookSpec, ParamValue, StateValue};
    pub use crate::pointer::{FrameInput, InputEvent, PointerButton};
}
