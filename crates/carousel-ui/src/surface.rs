//! Rendering contracts the engine draws through.
//!
//! The only required visual effects are a horizontal translation of the
//! track, a transition toggle, and a boolean "active" marker on items and
//! indicator markers. Any renderer that honours these is compliant.

use carousel_ui_graphics::Rect;
use web_time::Duration;

/// The moving strip of items.
pub trait TrackSurface {
    /// Bounds of every item in document (left-to-right) order, relative to
    /// the track origin.
    fn item_bounds(&self) -> Vec<Rect>;

    /// Applies a horizontal translation to the whole track.
    fn set_translation(&mut self, x: f32);

    /// Enables a transform transition of the given length, or disables it.
    fn set_transition(&mut self, transition: Option<Duration>);

    fn set_item_active(&mut self, index: usize, active: bool);
}

/// The clipping container around the track.
pub trait ViewportSurface {
    fn width(&self) -> f32;
}

/// A list of markers, one per item.
pub trait IndicatorSurface {
    fn marker_count(&self) -> usize;

    /// Appends a marker for item `index`. Markers are created in item order.
    fn create_marker(&mut self, index: usize);

    fn set_marker_active(&mut self, index: usize, active: bool);
}

impl<T: TrackSurface + ?Sized> TrackSurface for Box<T> {
    fn item_bounds(&self) -> Vec<Rect> {
        (**self).item_bounds()
    }

    fn set_translation(&mut self, x: f32) {
        (**self).set_translation(x)
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        (**self).set_transition(transition)
    }

    fn set_item_active(&mut self, index: usize, active: bool) {
        (**self).set_item_active(index, active)
    }
}

impl<T: ViewportSurface + ?Sized> ViewportSurface for Box<T> {
    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: IndicatorSurface + ?Sized> IndicatorSurface for Box<T> {
    fn marker_count(&self) -> usize {
        (**self).marker_count()
    }

    fn create_marker(&mut self, index: usize) {
        (**self).create_marker(index)
    }

    fn set_marker_active(&mut self, index: usize, active: bool) {
        (**self).set_marker_active(index, active)
    }
}
