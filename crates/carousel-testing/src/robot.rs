//! Robot-style driver for headless carousel tests
//!
//! The robot owns a carousel wired to recording surfaces and a manual clock,
//! and exposes interactions the way a user performs them: press, move,
//! release, resize, wait.
//!
//! # Example
//!
//! ```
//! use carousel_testing::robot::CarouselRobot;
//!
//! let mut robot = CarouselRobot::new(3, 100.0, 300.0);
//! robot.drag(200.0, 100.0);
//! assert_eq!(robot.carousel().active_index().active, 1);
//! ```

use carousel_foundation::{PointerEvent, PointerEventKind, PointerId};
use carousel_ui::{Carousel, CarouselConfig, GestureUpdate, Result};
use web_time::{Duration, Instant};

use crate::surfaces::{uniform_row, FakeTrack, FakeViewport};

/// Intermediate moves reported between press and release in [`CarouselRobot::drag`].
const DRAG_STEPS: usize = 4;

pub struct CarouselRobot {
    carousel: Carousel,
    track: FakeTrack,
    viewport: FakeViewport,
    now: Instant,
    /// Pointer used by the gesture in progress.
    pointer: Option<(PointerId, bool)>,
}

impl CarouselRobot {
    /// A carousel of `count` items of `item_width` in a `viewport_width` viewport.
    pub fn new(count: usize, item_width: f32, viewport_width: f32) -> Self {
        Self::with_config(count, item_width, viewport_width, CarouselConfig::default())
    }

    pub fn with_config(
        count: usize,
        item_width: f32,
        viewport_width: f32,
        config: CarouselConfig,
    ) -> Self {
        Self::try_new(
            FakeTrack::with_items(uniform_row(count, item_width)),
            FakeViewport::new(viewport_width),
            config,
        )
        .expect("robot carousel should initialise")
    }

    pub fn try_new(
        track: FakeTrack,
        viewport: FakeViewport,
        config: CarouselConfig,
    ) -> Result<Self> {
        let carousel = Carousel::new(track.clone(), viewport.clone(), config)?;
        Ok(Self {
            carousel,
            track,
            viewport,
            now: Instant::now(),
            pointer: None,
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn track(&self) -> &FakeTrack {
        &self.track
    }

    pub fn viewport(&self) -> &FakeViewport {
        &self.viewport
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Mouse press at `x`.
    pub fn press(&mut self, x: f32) -> GestureUpdate {
        self.pointer = Some((0, false));
        self.carousel
            .handle_pointer(&PointerEvent::mouse(PointerEventKind::Down, x))
    }

    /// Touch start for touch point `id` at `x`.
    pub fn touch_down(&mut self, id: PointerId, x: f32) -> GestureUpdate {
        self.pointer = Some((id, true));
        self.carousel
            .handle_pointer(&PointerEvent::touch(PointerEventKind::Down, id, x))
    }

    /// Moves the current pointer to `x`.
    pub fn move_to(&mut self, x: f32) -> GestureUpdate {
        let event = self.event(PointerEventKind::Move, x);
        self.carousel.handle_pointer(&event)
    }

    /// Releases the current pointer at `x`.
    pub fn release(&mut self, x: f32) -> GestureUpdate {
        let event = self.event(PointerEventKind::Up, x);
        self.pointer = None;
        self.carousel.handle_pointer(&event)
    }

    /// Cancels the current pointer, as a touchcancel or pointer leave would.
    pub fn cancel(&mut self) -> GestureUpdate {
        let event = self.event(PointerEventKind::Cancel, 0.0);
        self.pointer = None;
        self.carousel.handle_pointer(&event)
    }

    /// Mouse drag from `from_x` to `to_x` with a few intermediate moves.
    pub fn drag(&mut self, from_x: f32, to_x: f32) -> GestureUpdate {
        self.press(from_x);
        self.sweep(from_x, to_x);
        self.release(to_x)
    }

    /// Single-touch drag from `from_x` to `to_x`.
    pub fn touch_drag(&mut self, id: PointerId, from_x: f32, to_x: f32) -> GestureUpdate {
        self.touch_down(id, from_x);
        self.sweep(from_x, to_x);
        self.release(to_x)
    }

    fn sweep(&mut self, from_x: f32, to_x: f32) {
        for step in 1..=DRAG_STEPS {
            let fraction = step as f32 / DRAG_STEPS as f32;
            self.move_to(from_x + (to_x - from_x) * fraction);
        }
    }

    fn event(&self, kind: PointerEventKind, x: f32) -> PointerEvent {
        match self.pointer {
            Some((id, true)) => PointerEvent::touch(kind, id, x),
            _ => PointerEvent::mouse(kind, x),
        }
    }

    /// Resizes the viewport and reports it to the carousel.
    pub fn resize(&mut self, width: f32) {
        self.viewport.set_width(width);
        self.carousel.on_viewport_resize(self.now);
    }

    /// Advances the clock and lets the carousel run due work.
    ///
    /// Returns `true` if a re-layout ran.
    pub fn advance_time(&mut self, duration: Duration) -> bool {
        self.now += duration;
        self.carousel.tick(self.now)
    }

    /// Jumps to the pending deadline, if any, and runs it.
    pub fn wait_for_idle(&mut self) -> bool {
        match self.carousel.next_deadline() {
            Some(deadline) => {
                if deadline > self.now {
                    self.now = deadline;
                }
                self.carousel.tick(self.now)
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for CarouselRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRobot")
            .field("carousel", &self.carousel)
            .field("pointer", &self.pointer)
            .finish()
    }
}
