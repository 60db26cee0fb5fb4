//! Web platform adapter for the carousel widget
//!
//! Maps DOM mouse and touch events onto carousel [`PointerEvent`]s, renders
//! through DOM-backed surfaces and owns the native listener and timer
//! wiring for a mounted carousel.

mod mount;
mod surfaces;

pub use mount::WebCarousel;
pub use surfaces::{DomIndicator, DomTrack, DomViewport, ACTIVE_CLASS};

use carousel_foundation::{PointerEvent, PointerEventKind, PointerId, PointerSource};
use carousel_ui_graphics::Point;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, x: f64, y: f64) -> Point {
        // client_x/client_y are CSS pixels, the same space offsetLeft and
        // offsetWidth are measured in.
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    pub fn mouse_event(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        let position = self.pointer_position(event.client_x() as f64, event.client_y() as f64);
        PointerEvent::new(kind, position)
    }

    /// Maps the first changed touch point. `None` for a touch event that
    /// carries no changed touches.
    pub fn touch_event(&self, kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let touch = event.changed_touches().get(0)?;
        let position = self.pointer_position(touch.client_x() as f64, touch.client_y() as f64);
        Some(
            PointerEvent::new(kind, position)
                .with_id(touch.identifier() as u32 as PointerId)
                .with_source(PointerSource::Touch),
        )
    }

    /// Maps any mouse or touch DOM event.
    pub fn pointer_event(&self, kind: PointerEventKind, event: &Event) -> Option<PointerEvent> {
        if event.type_().starts_with("touch") {
            self.touch_event(kind, event.dyn_ref::<TouchEvent>()?)
        } else {
            Some(self.mouse_event(kind, event.dyn_ref::<MouseEvent>()?))
        }
    }
}

/// Native move event that follows a press from `source`.
pub fn move_event_name(source: PointerSource) -> &'static str {
    match source {
        PointerSource::Mouse => "mousemove",
        PointerSource::Touch => "touchmove",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_event_follows_press_source() {
        assert_eq!(move_event_name(PointerSource::Mouse), "mousemove");
        assert_eq!(move_event_name(PointerSource::Touch), "touchmove");
    }

    #[test]
    fn positions_are_css_pixels() {
        let position = WebPlatform::new().pointer_position(12.5, 40.0);
        assert_eq!(position, Point::new(12.5, 40.0));
    }
}
