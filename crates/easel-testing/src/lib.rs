//! Testing utilities and harness for Easel

pub mod headless;
pub mod robot;
pub mod robot_assertions;

pub use headless::{CapturedFrame, FrameCapture, HeadlessBackend};
pub use robot::{Robot, RobotRun};

pub mod prelude {
    pub use crate::headless::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
