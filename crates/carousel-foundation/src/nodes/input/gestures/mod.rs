pub mod drag;

pub use drag::{DragState, GestureRelease, GestureTracker, GestureUpdate};
