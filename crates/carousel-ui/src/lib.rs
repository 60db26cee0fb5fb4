//! Drag-to-snap carousel engine
//!
//! [`Carousel`] owns item geometry and the active-index state machine. It is
//! driven by pointer events (through the [`GestureTracker`] from
//! `carousel-foundation`), viewport resizes and programmatic focus calls, and
//! renders through the injected [`TrackSurface`] and [`ViewportSurface`].
//! [`Navigation`] layers previous/next controls and a position indicator on
//! top without the engine knowing about it.
//!
//! [`GestureTracker`]: carousel_foundation::GestureTracker

mod active_index;
mod carousel;
mod config;
mod debounce;
mod error;
mod geometry;
mod listeners;
mod navigation;
mod snap;
mod surface;

pub use active_index::ActiveIndex;
pub use carousel::{Carousel, CarouselBuilder, WeakCarousel};
pub use config::CarouselConfig;
pub use debounce::Debouncer;
pub use error::{CarouselError, Result};
pub use geometry::{centered_offset, compute_geometry, ItemGeometry};
pub use listeners::{ListenerId, PositionListeners, PositionSubscription};
pub use navigation::{ControlAction, IndicatorMode, Navigation};
pub use snap::{SnapDecision, SnapPolicy};
pub use surface::{IndicatorSurface, TrackSurface, ViewportSurface};

pub use carousel_foundation::{
    GestureRelease, GestureUpdate, PointerEvent, PointerEventKind, PointerId, PointerSource,
};
pub use carousel_ui_graphics::{Point, Rect};

pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::config::CarouselConfig;
    pub use crate::error::CarouselError;
    pub use crate::navigation::{ControlAction, IndicatorMode, Navigation};
    pub use crate::surface::{IndicatorSurface, TrackSurface, ViewportSurface};
    pub use carousel_foundation::prelude::*;
}
