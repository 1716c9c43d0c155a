//! Window sessions for Easel.
//!
//! A [`Window`] owns an ordered scene of components. Opening it starts a
//! redraw loop on its own thread that talks to the host through the
//! [`Backend`] contract.

mod backend;
mod clock;
mod settings;
mod window;

pub use backend::{Backend, BackendError};
pub use clock::FrameClock;
pub use settings::WindowSettings;
pub use window::{FrameStats, Window, WindowError};

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
