//! Recording surfaces.
//!
//! Each fake is a cheap handle over shared state: hand one clone to the
//! carousel and keep another in the test to inspect what was rendered.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carousel_ui::{IndicatorSurface, TrackSurface, ViewportSurface};
use carousel_ui_graphics::Rect;
use web_time::Duration;

/// `count` adjacent items of equal `width`, starting at the track origin.
pub fn uniform_row(count: usize, width: f32) -> Vec<Rect> {
    (0..count)
        .map(|index| Rect::horizontal(index as f32 * width, width))
        .collect()
}

/// Everything a [`FakeTrack`] has been asked to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackRecord {
    pub items: Vec<Rect>,
    pub translation: f32,
    pub transition: Option<Duration>,
    pub active: Vec<bool>,
    /// Every translation applied, in order.
    pub translations: Vec<f32>,
    /// Every transition change, in order.
    pub transitions: Vec<Option<Duration>>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeTrack {
    record: Rc<RefCell<TrackRecord>>,
}

impl FakeTrack {
    pub fn with_items(items: Vec<Rect>) -> Self {
        let active = vec![false; items.len()];
        Self {
            record: Rc::new(RefCell::new(TrackRecord {
                items,
                active,
                ..TrackRecord::default()
            })),
        }
    }

    pub fn uniform(count: usize, width: f32) -> Self {
        Self::with_items(uniform_row(count, width))
    }

    /// Replaces the item layout, as a host re-flow would.
    pub fn set_items(&self, items: Vec<Rect>) {
        let mut record = self.record.borrow_mut();
        record.active.resize(items.len(), false);
        record.items = items;
    }

    pub fn translation(&self) -> f32 {
        self.record.borrow().translation
    }

    pub fn transition(&self) -> Option<Duration> {
        self.record.borrow().transition
    }

    pub fn active_items(&self) -> Vec<usize> {
        self.record
            .borrow()
            .active
            .iter()
            .enumerate()
            .filter_map(|(index, &active)| active.then_some(index))
            .collect()
    }

    pub fn snapshot(&self) -> TrackRecord {
        self.record.borrow().clone()
    }

    pub fn clear_history(&self) {
        let mut record = self.record.borrow_mut();
        record.translations.clear();
        record.transitions.clear();
    }
}

impl TrackSurface for FakeTrack {
    fn item_bounds(&self) -> Vec<Rect> {
        self.record.borrow().items.clone()
    }

    fn set_translation(&mut self, x: f32) {
        let mut record = self.record.borrow_mut();
        record.translation = x;
        record.translations.push(x);
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        let mut record = self.record.borrow_mut();
        record.transition = transition;
        record.transitions.push(transition);
    }

    fn set_item_active(&mut self, index: usize, active: bool) {
        let mut record = self.record.borrow_mut();
        if index >= record.active.len() {
            record.active.resize(index + 1, false);
        }
        record.active[index] = active;
    }
}

#[derive(Clone, Debug)]
pub struct FakeViewport {
    width: Rc<Cell<f32>>,
}

impl FakeViewport {
    pub fn new(width: f32) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
        }
    }

    pub fn set_width(&self, width: f32) {
        self.width.set(width);
    }
}

impl ViewportSurface for FakeViewport {
    fn width(&self) -> f32 {
        self.width.get()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeIndicator {
    markers: Rc<RefCell<Vec<bool>>>,
}

impl FakeIndicator {
    /// An indicator with no markers, for synthesized indicators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An indicator that already holds `count` markers.
    pub fn with_markers(count: usize) -> Self {
        Self {
            markers: Rc::new(RefCell::new(vec![false; count])),
        }
    }

    pub fn len(&self) -> usize {
        self.markers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.borrow().is_empty()
    }

    pub fn active_markers(&self) -> Vec<usize> {
        self.markers
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(index, &active)| active.then_some(index))
            .collect()
    }
}

impl IndicatorSurface for FakeIndicator {
    fn marker_count(&self) -> usize {
        self.markers.borrow().len()
    }

    fn create_marker(&mut self, index: usize) {
        let mut markers = self.markers.borrow_mut();
        debug_assert_eq!(index, markers.len(), "markers are created in item order");
        markers.push(false);
    }

    fn set_marker_active(&mut self, index: usize, active: bool) {
        if let Some(marker) = self.markers.borrow_mut().get_mut(index) {
            *marker = active;
        }
    }
}
