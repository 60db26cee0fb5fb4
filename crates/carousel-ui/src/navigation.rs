//! Previous/next controls and a position indicator.
//!
//! [`Navigation`] holds a weak carousel handle and listens for position
//! changes. The engine has no knowledge of it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::carousel::{Carousel, WeakCarousel};
use crate::error::{CarouselError, Result};
use crate::listeners::PositionSubscription;
use crate::surface::IndicatorSurface;

/// A discrete control activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Previous,
    Next,
    /// Random access through an indicator marker.
    Marker(usize),
}

/// How [`Navigation::attach_indicator`] treats the supplied surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorMode {
    /// The surface already holds one marker per item.
    UseExisting,
    /// Create one marker per item, in item order.
    #[default]
    Synthesize,
}

struct AttachedIndicator {
    surface: Box<dyn IndicatorSurface>,
    mode: IndicatorMode,
}

type SharedIndicator = Rc<RefCell<Option<AttachedIndicator>>>;

pub struct Navigation {
    carousel: WeakCarousel,
    indicator: SharedIndicator,
    subscription: Option<PositionSubscription>,
}

impl Navigation {
    pub fn new(carousel: &Carousel) -> Self {
        Self {
            carousel: carousel.downgrade(),
            indicator: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    pub fn carousel(&self) -> Option<Carousel> {
        self.carousel.upgrade()
    }

    pub fn previous(&self) -> bool {
        self.handle(ControlAction::Previous)
    }

    pub fn next(&self) -> bool {
        self.handle(ControlAction::Next)
    }

    /// Focuses item `index` directly.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range, like [`Carousel::focus_item`].
    pub fn select(&self, index: usize) -> bool {
        self.handle(ControlAction::Marker(index))
    }

    /// Applies a control action. Returns whether the carousel moved; acting
    /// on a carousel that has been dropped is a no-op.
    #[track_caller]
    pub fn handle(&self, action: ControlAction) -> bool {
        let Some(carousel) = self.carousel.upgrade() else {
            log::warn!("ignoring {action:?}: carousel has been dropped");
            return false;
        };
        match action {
            ControlAction::Previous => carousel.step_previous(),
            ControlAction::Next => carousel.step_next(),
            ControlAction::Marker(index) => {
                carousel.focus_item(index);
                true
            }
        }
    }

    /// Like [`Navigation::handle`], but reports an out-of-range marker as
    /// [`CarouselError::IndexOutOfRange`] instead of panicking. Hosts use
    /// this for markers that may outlive a re-layout that removed items.
    pub fn try_handle(&self, action: ControlAction) -> Result<bool> {
        match action {
            ControlAction::Marker(index) => {
                let Some(carousel) = self.carousel.upgrade() else {
                    log::warn!("ignoring {action:?}: carousel has been dropped");
                    return Ok(false);
                };
                carousel.try_focus_item(index)?;
                Ok(true)
            }
            _ => Ok(self.handle(action)),
        }
    }

    /// Attaches an indicator and keeps its active marker in sync with the
    /// carousel from now on.
    ///
    /// With [`IndicatorMode::UseExisting`] the surface must already hold one
    /// marker per item; a mismatch is reported as
    /// [`CarouselError::IndicatorMismatch`] and the surface is not attached.
    pub fn attach_indicator(
        &mut self,
        surface: impl IndicatorSurface + 'static,
        mode: IndicatorMode,
    ) -> Result<()> {
        let carousel = self
            .carousel
            .upgrade()
            .ok_or_else(|| CarouselError::missing_handle("carousel"))?;
        let items = carousel.len();

        let mut surface: Box<dyn IndicatorSurface> = Box::new(surface);
        if mode == IndicatorMode::Synthesize {
            for index in 0..items {
                surface.create_marker(index);
            }
        }
        let markers = surface.marker_count();
        if markers != items {
            return Err(CarouselError::IndicatorMismatch { markers, items });
        }

        *self.indicator.borrow_mut() = Some(AttachedIndicator { surface, mode });
        sync_indicator(&self.indicator, &carousel)?;

        if self.subscription.is_none() {
            let indicator = Rc::clone(&self.indicator);
            let weak = carousel.downgrade();
            self.subscription = Some(carousel.subscribe(move || {
                if let Some(carousel) = weak.upgrade() {
                    if let Err(err) = sync_indicator(&indicator, &carousel) {
                        log::warn!("indicator out of sync: {err}");
                    }
                }
            }));
        }
        log::debug!("indicator attached with {markers} markers ({mode:?})");
        Ok(())
    }

    /// Detaches the indicator and stops listening for position changes.
    pub fn detach_indicator(&mut self) -> Option<Box<dyn IndicatorSurface>> {
        self.subscription = None;
        self.indicator
            .borrow_mut()
            .take()
            .map(|attached| attached.surface)
    }

    pub fn has_indicator(&self) -> bool {
        self.indicator.borrow().is_some()
    }

    /// Re-applies the active marker from the carousel's current state.
    ///
    /// A synthesized indicator gains markers for items added since it was
    /// attached. An existing indicator that no longer has one marker per
    /// item is reported as [`CarouselError::IndicatorMismatch`]; its markers
    /// are still updated as far as they go.
    pub fn sync(&self) -> Result<()> {
        match self.carousel.upgrade() {
            Some(carousel) => sync_indicator(&self.indicator, &carousel),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("carousel", &self.carousel)
            .field("has_indicator", &self.has_indicator())
            .finish()
    }
}

fn sync_indicator(indicator: &SharedIndicator, carousel: &Carousel) -> Result<()> {
    let mut slot = indicator.borrow_mut();
    let Some(attached) = slot.as_mut() else {
        return Ok(());
    };
    let items = carousel.len();
    let active = carousel.active_index().active;
    let surface = &mut attached.surface;

    if attached.mode == IndicatorMode::Synthesize {
        for index in surface.marker_count()..items {
            surface.create_marker(index);
        }
    }
    let markers = surface.marker_count();
    for index in 0..markers {
        surface.set_marker_active(index, index == active);
    }
    if markers != items {
        return Err(CarouselError::IndicatorMismatch { markers, items });
    }
    Ok(())
}
