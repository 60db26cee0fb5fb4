//! Pure geometry data for the carousel widget
//!
//! Points and rectangles in logical pixels, shared by the input,
//! engine and platform crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect};
}
