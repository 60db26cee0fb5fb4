//! Horizontal drag tracking.
//!
//! [`GestureTracker`] converts a press → move → release sequence into a
//! scaled horizontal displacement. It knows nothing about item geometry: the
//! carousel engine decides what the displacement means once the gesture ends.
//!
//! Sign convention: dragging left (`current_x < start_x`) yields a positive
//! movement, which decreases the live position and moves content left, so a
//! leftward drag reveals the next item.

use crate::gesture_constants::DRAG_SENSITIVITY;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId, PointerSource};

/// Per-gesture state. Created on press, discarded on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer that owns the gesture. Events from other pointers are ignored.
    pub pointer: PointerId,
    pub source: PointerSource,
    /// Pointer x at gesture start.
    pub start_x: f32,
    /// Signed scaled delta since start.
    pub movement: f32,
    /// Offset currently applied to the track.
    pub live_position: f32,
}

/// Outcome of a finished gesture, handed to the snap decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRelease {
    pub movement: f32,
    /// Offset committed at release. Equals the pre-gesture offset when the
    /// gesture was cancelled.
    pub final_position: f32,
    pub cancelled: bool,
}

/// What a pointer event did to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    Started,
    Moved { live_position: f32 },
    Released(GestureRelease),
    Ignored,
}

/// Single-pointer horizontal drag tracker.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    sensitivity: f32,
    final_position: f32,
    drag: Option<DragState>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY)
    }
}

impl GestureTracker {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            final_position: 0.0,
            drag: None,
        }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Last settled offset. Always defined.
    pub fn final_position(&self) -> f32 {
        self.final_position
    }

    /// Overwrites the settled offset, used when the engine focuses an item.
    pub fn set_final_position(&mut self, position: f32) {
        self.final_position = position;
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while a move listener should be attached.
    pub fn wants_moves(&self) -> bool {
        self.is_dragging()
    }

    /// Source of the active gesture, so hosts know which move event to detach.
    pub fn active_source(&self) -> Option<PointerSource> {
        self.drag.map(|drag| drag.source)
    }

    /// Begins a gesture at `origin_x`.
    ///
    /// While idle this always starts a new gesture. A second press from the
    /// owning pointer restarts the gesture from the new origin; a press from
    /// any other pointer is ignored and `false` is returned.
    pub fn on_gesture_start(
        &mut self,
        pointer: PointerId,
        source: PointerSource,
        origin_x: f32,
    ) -> bool {
        if let Some(drag) = &self.drag {
            if drag.pointer != pointer {
                log::trace!(
                    "ignoring press from pointer {pointer} during gesture of {}",
                    drag.pointer
                );
                return false;
            }
        }
        self.drag = Some(DragState {
            pointer,
            source,
            start_x: origin_x,
            movement: 0.0,
            live_position: self.final_position,
        });
        true
    }

    /// Updates the gesture with the pointer at `current_x`.
    ///
    /// Returns the live offset to apply to the track, or `None` when no
    /// gesture owned by `pointer` is in progress.
    pub fn on_gesture_move(&mut self, pointer: PointerId, current_x: f32) -> Option<f32> {
        let final_position = self.final_position;
        let sensitivity = self.sensitivity;
        let drag = self.drag.as_mut().filter(|drag| drag.pointer == pointer)?;
        drag.movement = (drag.start_x - current_x) * sensitivity;
        drag.live_position = final_position - drag.movement;
        log::trace!(
            "drag movement {:.1} live position {:.1}",
            drag.movement,
            drag.live_position
        );
        Some(drag.live_position)
    }

    /// Ends the gesture and commits the live offset.
    ///
    /// A release without a matching press (duplicate end events, releases
    /// from a foreign pointer) is a no-op returning `None`.
    pub fn on_gesture_end(&mut self, pointer: PointerId) -> Option<GestureRelease> {
        let drag = self.take_drag(pointer)?;
        self.final_position = drag.live_position;
        Some(GestureRelease {
            movement: drag.movement,
            final_position: self.final_position,
            cancelled: false,
        })
    }

    /// Abandons the gesture without committing the live offset.
    pub fn on_gesture_cancel(&mut self, pointer: PointerId) -> Option<GestureRelease> {
        let drag = self.take_drag(pointer)?;
        Some(GestureRelease {
            movement: drag.movement,
            final_position: self.final_position,
            cancelled: true,
        })
    }

    /// Routes a pointer event to the matching gesture callback and consumes
    /// it when the tracker acted on it.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> GestureUpdate {
        let update = match event.kind {
            PointerEventKind::Down => {
                if self.on_gesture_start(event.id, event.source, event.x()) {
                    GestureUpdate::Started
                } else {
                    GestureUpdate::Ignored
                }
            }
            PointerEventKind::Move => match self.on_gesture_move(event.id, event.x()) {
                Some(live_position) => GestureUpdate::Moved { live_position },
                None => GestureUpdate::Ignored,
            },
            PointerEventKind::Up => self
                .on_gesture_end(event.id)
                .map_or(GestureUpdate::Ignored, GestureUpdate::Released),
            PointerEventKind::Cancel => self
                .on_gesture_cancel(event.id)
                .map_or(GestureUpdate::Ignored, GestureUpdate::Released),
        };
        if update != GestureUpdate::Ignored {
            event.consume();
        }
        update
    }

    fn take_drag(&mut self, pointer: PointerId) -> Option<DragState> {
        match self.drag.map(|drag| drag.pointer) {
            Some(owner) if owner == pointer => self.drag.take(),
            Some(owner) => {
                log::trace!("ignoring release from pointer {pointer}, gesture owned by {owner}");
                None
            }
            None => {
                log::trace!("ignoring release without an active gesture");
                None
            }
        }
    }
}
