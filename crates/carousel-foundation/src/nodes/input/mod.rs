pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId, PointerSource};

pub mod prelude {
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, PointerSource};
}
