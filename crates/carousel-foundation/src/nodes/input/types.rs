use carousel_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Device family that produced an event.
///
/// Mouse and touch share one event shape; the source only matters to hosts
/// that need to pick which native move event to listen for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Pointer event with consumption tracking.
///
/// The gesture tracker consumes events that belong to its gesture so hosts
/// can suppress native side effects (text selection, image drag ghosts).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    /// Tracks whether this event has been consumed by a handler.
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            source: PointerSource::Mouse,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Shorthand for a mouse event at horizontal position `x`.
    pub fn mouse(kind: PointerEventKind, x: f32) -> Self {
        Self::new(kind, Point::new(x, 0.0))
    }

    /// Shorthand for a touch event from touch point `id` at horizontal position `x`.
    pub fn touch(kind: PointerEventKind, id: PointerId, x: f32) -> Self {
        Self::new(kind, Point::new(x, 0.0))
            .with_id(id)
            .with_source(PointerSource::Touch)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    /// Horizontal coordinate, the only axis the carousel tracks.
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Mark this event as consumed.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
