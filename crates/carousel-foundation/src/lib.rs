//! Pointer input and gesture tracking for the carousel widget
//!
//! Platform adapters translate native mouse and touch events into
//! [`PointerEvent`]s; the [`GestureTracker`] turns a press/move/release
//! sequence into a horizontal displacement without knowing anything about
//! layout.

pub mod gesture_constants;
pub mod nodes;

pub use carousel_ui_graphics::{Point, Rect};
pub use nodes::input::gestures::{DragState, GestureRelease, GestureTracker, GestureUpdate};
pub use nodes::input::*;

pub mod prelude {
    pub use crate::gesture_constants::{DRAG_SENSITIVITY, SNAP_THRESHOLD};
    pub use crate::nodes::input::gestures::{GestureRelease, GestureTracker};
    pub use crate::nodes::input::prelude::*;
}
