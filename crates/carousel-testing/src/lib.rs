//! Testing utilities and headless harness for the carousel widget

pub mod robot;
pub mod robot_assertions;
pub mod surfaces;

pub use robot::*;
pub use robot_assertions::*;
pub use surfaces::*;

pub mod prelude {
    pub use crate::robot::CarouselRobot;
    pub use crate::robot_assertions::{assert_indicator_on, assert_settled_on};
    pub use crate::surfaces::{uniform_row, FakeIndicator, FakeTrack, FakeViewport, TrackRecord};
}
