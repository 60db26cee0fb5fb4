//! Carousel engine.
//!
//! The engine is a cheap-to-clone handle around shared state. Every method
//! takes `&self` and runs to completion; internal borrows are released
//! before position-changed listeners run, so listeners are free to query or
//! drive the carousel again.
//!
//! States are Idle and Dragging. A press moves to Dragging and suspends the
//! track transition so content follows the pointer 1:1. A release always
//! returns to Idle through the snap decision, with the transition restored
//! so the track animates into place.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use carousel_foundation::{
    GestureRelease, GestureTracker, GestureUpdate, PointerEvent, PointerId, PointerSource,
};
use web_time::Instant;

use crate::active_index::ActiveIndex;
use crate::config::CarouselConfig;
use crate::debounce::Debouncer;
use crate::error::{CarouselError, Result};
use crate::geometry::{self, ItemGeometry};
use crate::listeners::{PositionListeners, PositionSubscription};
use crate::snap::SnapDecision;
use crate::surface::{TrackSurface, ViewportSurface};

#[derive(Clone)]
pub struct Carousel {
    inner: Rc<CarouselInner>,
}

/// Non-owning carousel handle, used by navigation and listeners.
#[derive(Clone, Default)]
pub struct WeakCarousel {
    inner: Weak<CarouselInner>,
}

struct CarouselInner {
    config: CarouselConfig,
    track: RefCell<Box<dyn TrackSurface>>,
    viewport: Box<dyn ViewportSurface>,
    state: RefCell<EngineState>,
    resize: Debouncer,
    listeners: Rc<PositionListeners>,
}

struct EngineState {
    tracker: GestureTracker,
    items: Vec<ItemGeometry>,
    index: ActiveIndex,
    /// Translation currently applied to the track.
    offset: f32,
}

impl Carousel {
    /// Builds and initialises a carousel over `track` inside `viewport`.
    ///
    /// Initialisation enables the transition, computes geometry and focuses
    /// the first item. Hosts attach their gesture and resize listeners once
    /// this returns; nothing can be delivered in between on a single-threaded
    /// event loop.
    pub fn new(
        track: impl TrackSurface + 'static,
        viewport: impl ViewportSurface + 'static,
        config: CarouselConfig,
    ) -> Result<Self> {
        config.validate()?;
        let carousel = Self {
            inner: Rc::new(CarouselInner {
                track: RefCell::new(Box::new(track)),
                viewport: Box::new(viewport),
                state: RefCell::new(EngineState {
                    tracker: GestureTracker::new(config.sensitivity),
                    items: Vec::new(),
                    index: ActiveIndex::default(),
                    offset: 0.0,
                }),
                resize: Debouncer::new(config.resize_debounce()),
                listeners: Rc::new(PositionListeners::new()),
                config,
            }),
        };
        carousel.init()?;
        Ok(carousel)
    }

    pub fn with_defaults(
        track: impl TrackSurface + 'static,
        viewport: impl ViewportSurface + 'static,
    ) -> Result<Self> {
        Self::new(track, viewport, CarouselConfig::default())
    }

    pub fn builder() -> CarouselBuilder {
        CarouselBuilder::default()
    }

    fn init(&self) -> Result<()> {
        self.set_transition_enabled(true);
        let count = self.compute_geometry()?;
        self.focus_item(0);
        log::debug!("carousel initialised with {count} items");
        Ok(())
    }

    pub fn downgrade(&self) -> WeakCarousel {
        WeakCarousel {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.inner.config
    }

    // ------------------------------------------------------------------
    // Geometry and focus
    // ------------------------------------------------------------------

    /// Rebuilds item geometry from the track and viewport.
    ///
    /// The active index is clamped to the new item count, so its neighbours
    /// always exist. The track is not moved; [`Carousel::relayout`] also
    /// re-centers the active item.
    ///
    /// An empty track leaves the previous geometry in place and reports
    /// [`CarouselError::EmptyTrack`].
    pub fn compute_geometry(&self) -> Result<usize> {
        let bounds = self.inner.track.borrow().item_bounds();
        if bounds.is_empty() {
            return Err(CarouselError::EmptyTrack);
        }
        let viewport_width = self.inner.viewport.width();
        let items = geometry::compute_geometry(&bounds, viewport_width);
        let count = items.len();
        {
            let mut state = self.inner.state.borrow_mut();
            state.items = items;
            state.index = ActiveIndex::new(state.index.active.min(count - 1), count);
        }
        log::debug!("computed geometry for {count} items in a {viewport_width}px viewport");
        Ok(count)
    }

    /// Centers item `index`, marks it active and notifies listeners.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range. Use [`Carousel::try_focus_item`]
    /// for indices that come from untrusted input.
    #[track_caller]
    pub fn focus_item(&self, index: usize) {
        let len = self.len();
        assert!(
            index < len,
            "carousel item index {index} out of range for {len} items"
        );
        self.apply_focus(index);
        self.inner.listeners.notify();
    }

    pub fn try_focus_item(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.focus_item(index);
        Ok(())
    }

    fn apply_focus(&self, index: usize) {
        let (offset, count) = {
            let mut state = self.inner.state.borrow_mut();
            let offset = state.items[index].centered_offset;
            let count = state.items.len();
            state.index = ActiveIndex::new(index, count);
            state.offset = offset;
            state.tracker.set_final_position(offset);
            (offset, count)
        };

        let mut track = self.inner.track.borrow_mut();
        track.set_translation(offset);
        for item in 0..count {
            track.set_item_active(item, item == index);
        }
        log::debug!("focused item {index} at offset {offset}");
    }

    /// Focuses the next item. Returns `false` on the last item.
    pub fn step_next(&self) -> bool {
        match self.active_index().next {
            Some(next) => {
                self.focus_item(next);
                true
            }
            None => false,
        }
    }

    /// Focuses the previous item. Returns `false` on the first item.
    pub fn step_previous(&self) -> bool {
        match self.active_index().prev {
            Some(prev) => {
                self.focus_item(prev);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Routes a pointer event through the gesture tracker and applies the
    /// resulting visual change.
    pub fn handle_pointer(&self, event: &PointerEvent) -> GestureUpdate {
        let update = self.inner.state.borrow_mut().tracker.handle_pointer(event);
        match update {
            GestureUpdate::Started => self.set_transition_enabled(false),
            GestureUpdate::Moved { live_position } => self.apply_live_position(live_position),
            GestureUpdate::Released(release) => {
                self.settle(release);
            }
            GestureUpdate::Ignored => {}
        }
        update
    }

    pub fn on_gesture_start(
        &self,
        pointer: PointerId,
        source: PointerSource,
        origin_x: f32,
    ) -> bool {
        let started = self
            .inner
            .state
            .borrow_mut()
            .tracker
            .on_gesture_start(pointer, source, origin_x);
        if started {
            self.set_transition_enabled(false);
        }
        started
    }

    pub fn on_gesture_move(&self, pointer: PointerId, current_x: f32) -> Option<f32> {
        let live_position = self
            .inner
            .state
            .borrow_mut()
            .tracker
            .on_gesture_move(pointer, current_x)?;
        self.apply_live_position(live_position);
        Some(live_position)
    }

    /// Ends the gesture and snaps. `None` when no gesture was in progress.
    pub fn on_gesture_end(&self, pointer: PointerId) -> Option<SnapDecision> {
        let release = self.inner.state.borrow_mut().tracker.on_gesture_end(pointer)?;
        Some(self.settle(release))
    }

    /// Abandons the gesture and snaps back to the active item.
    pub fn on_gesture_cancel(&self, pointer: PointerId) -> Option<SnapDecision> {
        let release = self
            .inner
            .state
            .borrow_mut()
            .tracker
            .on_gesture_cancel(pointer)?;
        Some(self.settle(release))
    }

    fn apply_live_position(&self, live_position: f32) {
        self.inner.state.borrow_mut().offset = live_position;
        self.inner.track.borrow_mut().set_translation(live_position);
    }

    fn settle(&self, release: GestureRelease) -> SnapDecision {
        self.set_transition_enabled(true);
        let index = self.active_index();
        let decision = if release.cancelled {
            SnapDecision::Restore(index.active)
        } else {
            self.inner
                .config
                .snap_policy()
                .decide(release.movement, &index)
        };
        log::debug!(
            "gesture released with movement {:.1} (cancelled: {}): {decision:?}",
            release.movement,
            release.cancelled
        );
        self.focus_item(decision.index());
        decision
    }

    fn set_transition_enabled(&self, enabled: bool) {
        let transition = if enabled {
            self.inner.config.transition()
        } else {
            None
        };
        self.inner.track.borrow_mut().set_transition(transition);
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Records a viewport resize. Re-layout happens once resizes have been
    /// quiet for the configured period; returns the new deadline.
    pub fn on_viewport_resize(&self, now: Instant) -> Instant {
        let deadline = self.inner.resize.schedule(now);
        log::trace!("viewport resized, re-layout deferred to {deadline:?}");
        deadline
    }

    /// Runs a pending re-layout if its quiet period has elapsed.
    pub fn tick(&self, now: Instant) -> bool {
        if !self.inner.resize.poll(now) {
            return false;
        }
        self.relayout()
    }

    /// Runs a pending re-layout immediately.
    pub fn flush_resize(&self) -> bool {
        if !self.inner.resize.cancel() {
            return false;
        }
        self.relayout()
    }

    /// Deadline of the pending re-layout, for host timer scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.resize.deadline()
    }

    /// Recomputes geometry and re-centers the active item.
    ///
    /// If items were removed the active index is clamped to the new last
    /// item.
    pub fn relayout(&self) -> bool {
        match self.compute_geometry() {
            Ok(_) => {
                self.focus_item(self.active_index().active);
                true
            }
            Err(err) => {
                log::warn!("skipping carousel re-layout: {err}");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Notification and queries
    // ------------------------------------------------------------------

    /// Registers a position-changed listener.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> PositionSubscription {
        let id = self.inner.listeners.add(listener);
        PositionSubscription::new(&self.inner.listeners, id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn active_index(&self) -> ActiveIndex {
        self.inner.state.borrow().index
    }

    /// Translation currently applied to the track, live during drags.
    pub fn offset(&self) -> f32 {
        self.inner.state.borrow().offset
    }

    /// Last settled translation.
    pub fn final_position(&self) -> f32 {
        self.inner.state.borrow().tracker.final_position()
    }

    pub fn items(&self) -> Vec<ItemGeometry> {
        self.inner.state.borrow().items.clone()
    }

    pub fn item(&self, index: usize) -> Option<ItemGeometry> {
        self.inner.state.borrow().items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.state.borrow().tracker.is_dragging()
    }

    /// True while the host should keep its move listener attached.
    pub fn wants_moves(&self) -> bool {
        self.inner.state.borrow().tracker.wants_moves()
    }

    pub fn active_source(&self) -> Option<PointerSource> {
        self.inner.state.borrow().tracker.active_source()
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Carousel")
            .field("items", &state.items.len())
            .field("index", &state.index)
            .field("offset", &state.offset)
            .field("dragging", &state.tracker.is_dragging())
            .finish()
    }
}

/// Assembles a [`Carousel`] from handles resolved one at a time.
///
/// Hosts that look handles up by name (selectors, widget ids) can feed each
/// lookup straight in; a handle that was never supplied is reported as
/// [`CarouselError::MissingHandle`] by [`CarouselBuilder::build`].
#[derive(Default)]
pub struct CarouselBuilder {
    track: Option<Box<dyn TrackSurface>>,
    viewport: Option<Box<dyn ViewportSurface>>,
    config: CarouselConfig,
}

impl CarouselBuilder {
    pub fn track(mut self, track: impl TrackSurface + 'static) -> Self {
        self.track = Some(Box::new(track));
        self
    }

    pub fn viewport(mut self, viewport: impl ViewportSurface + 'static) -> Self {
        self.viewport = Some(Box::new(viewport));
        self
    }

    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Carousel> {
        let track = self
            .track
            .ok_or_else(|| CarouselError::missing_handle("track"))?;
        let viewport = self
            .viewport
            .ok_or_else(|| CarouselError::missing_handle("viewport"))?;
        Carousel::new(track, viewport, self.config)
    }
}

impl std::fmt::Debug for CarouselBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselBuilder")
            .field("track", &self.track.is_some())
            .field("viewport", &self.viewport.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl WeakCarousel {
    pub fn upgrade(&self) -> Option<Carousel> {
        self.inner.upgrade().map(|inner| Carousel { inner })
    }
}

impl std::fmt::Debug for WeakCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakCarousel")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
