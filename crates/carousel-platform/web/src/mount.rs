//! Mounting a carousel onto DOM elements.
//!
//! Every native listener is a `Closure` created once when the carousel is
//! mounted and reused for both `addEventListener` and `removeEventListener`,
//! so detaching always removes exactly what was attached. Closures hold a
//! weak reference to the binding that owns them.

use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

use carousel_foundation::{PointerEventKind, PointerSource};
use carousel_ui::{
    Carousel, CarouselConfig, CarouselError, ControlAction, GestureUpdate, IndicatorMode,
    Navigation, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};
use web_time::Instant;

use crate::surfaces::{marker_index, DomIndicator, DomTrack, DomViewport};
use crate::{move_event_name, WebPlatform};

type Listener = Closure<dyn FnMut(Event)>;

/// A carousel mounted on DOM elements with its native listeners attached.
///
/// Dropping it detaches every listener and clears a pending resize timer.
pub struct WebCarousel {
    binding: Rc<Binding>,
    navigation: Rc<RefCell<Navigation>>,
    controls: Vec<ControlListener>,
}

struct ControlListener {
    target: EventTarget,
    listener: Listener,
}

struct Binding {
    carousel: Carousel,
    platform: WebPlatform,
    window: Window,
    wrapper: HtmlElement,
    press: Listener,
    track_move: Listener,
    release: Listener,
    cancel: Listener,
    resize: Listener,
    resize_timer: Closure<dyn FnMut()>,
    /// Native move event currently listened for, while a gesture is live.
    move_event: Cell<Option<&'static str>>,
    timer: Cell<Option<i32>>,
}

impl WebCarousel {
    /// Mounts a carousel whose items are the children of `track_selector`,
    /// inside the `wrapper_selector` viewport.
    pub fn mount(track_selector: &str, wrapper_selector: &str) -> Result<Self> {
        Self::mount_with_config(track_selector, wrapper_selector, CarouselConfig::default())
    }

    pub fn mount_with_config(
        track_selector: &str,
        wrapper_selector: &str,
        config: CarouselConfig,
    ) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| CarouselError::missing_handle("window"))?;
        let document = document(&window)?;
        let track = query_html(&document, track_selector)?;
        let wrapper = query_html(&document, wrapper_selector)?;

        let carousel = Carousel::builder()
            .track(DomTrack::new(track))
            .viewport(DomViewport::new(wrapper.clone()))
            .config(config)
            .build()?;
        let navigation = Rc::new(RefCell::new(Navigation::new(&carousel)));
        let binding = Binding::new(carousel, window, wrapper);
        binding.attach()?;
        log::debug!("carousel mounted on `{track_selector}` in `{wrapper_selector}`");

        Ok(Self {
            binding,
            navigation,
            controls: Vec::new(),
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.binding.carousel
    }

    pub fn navigation(&self) -> Ref<'_, Navigation> {
        self.navigation.borrow()
    }

    /// Wires click handlers on the previous and next controls.
    pub fn bind_arrows(&mut self, prev_selector: &str, next_selector: &str) -> Result<()> {
        let document = document(&self.binding.window)?;
        let prev = query_element(&document, prev_selector)?;
        let next = query_element(&document, next_selector)?;
        self.on_click(prev, |_| Some(ControlAction::Previous))?;
        self.on_click(next, |_| Some(ControlAction::Next))
    }

    /// Attaches a position indicator.
    ///
    /// With a selector, the matched element's children are used as markers
    /// and must match the item count. Without one, a marker list is created
    /// and appended to the wrapper.
    pub fn bind_indicator(&mut self, selector: Option<&str>) -> Result<()> {
        let document = document(&self.binding.window)?;
        let (indicator, mode) = match selector {
            Some(selector) => (
                DomIndicator::new(query_element(&document, selector)?),
                IndicatorMode::UseExisting,
            ),
            None => (
                DomIndicator::synthesize(&document, &self.binding.wrapper).map_err(js_error)?,
                IndicatorMode::Synthesize,
            ),
        };
        let list = indicator.list().clone();
        self.navigation
            .borrow_mut()
            .attach_indicator(indicator, mode)?;

        // One listener on the list, so markers synthesized after a re-layout
        // are clickable too.
        let marker_list = list.clone();
        self.on_click(list, move |event| {
            let target = event.target()?.dyn_into::<Element>().ok()?;
            let index = marker_index(&marker_list, &target)?;
            event.prevent_default();
            Some(ControlAction::Marker(index))
        })
    }

    fn on_click(
        &mut self,
        target: Element,
        action: impl Fn(&Event) -> Option<ControlAction> + 'static,
    ) -> Result<()> {
        let navigation = Rc::clone(&self.navigation);
        let listener = Closure::wrap(Box::new(move |event: Event| {
            let Some(action) = action(&event) else {
                return;
            };
            if let Err(err) = navigation.borrow().try_handle(action) {
                log::warn!("ignoring {action:?}: {err}");
            }
        }) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.controls.push(ControlListener {
            target: target.into(),
            listener,
        });
        Ok(())
    }
}

impl Drop for WebCarousel {
    fn drop(&mut self) {
        for control in self.controls.drain(..) {
            remove_listener(&control.target, "click", &control.listener);
        }
        self.binding.detach();
    }
}

impl std::fmt::Debug for WebCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebCarousel")
            .field("carousel", &self.binding.carousel)
            .field("controls", &self.controls.len())
            .finish()
    }
}

impl Binding {
    fn new(carousel: Carousel, window: Window, wrapper: HtmlElement) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Binding>| {
            let timer_owner = weak.clone();
            Self {
                press: listener(weak, |binding, event| binding.on_press(&event)),
                track_move: listener(weak, |binding, event| {
                    binding.on_pointer(PointerEventKind::Move, &event)
                }),
                release: listener(weak, |binding, event| {
                    binding.on_pointer(PointerEventKind::Up, &event)
                }),
                cancel: listener(weak, |binding, event| {
                    binding.on_pointer(PointerEventKind::Cancel, &event)
                }),
                resize: listener(weak, |binding, _| binding.on_resize()),
                resize_timer: Closure::wrap(Box::new(move || {
                    if let Some(binding) = timer_owner.upgrade() {
                        binding.on_resize_timer();
                    }
                }) as Box<dyn FnMut()>),
                carousel,
                platform: WebPlatform::new(),
                window,
                wrapper,
                move_event: Cell::new(None),
                timer: Cell::new(None),
            }
        })
    }

    fn wrapper_listeners(&self) -> [(&'static str, &Listener); 6] {
        [
            ("mousedown", &self.press),
            ("touchstart", &self.press),
            ("mouseup", &self.release),
            ("touchend", &self.release),
            ("touchcancel", &self.cancel),
            ("mouseleave", &self.cancel),
        ]
    }

    fn attach(&self) -> Result<()> {
        for (event, listener) in self.wrapper_listeners() {
            self.wrapper
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                .map_err(js_error)?;
        }
        self.window
            .add_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(())
    }

    fn detach(&self) {
        for (event, listener) in self.wrapper_listeners() {
            remove_listener(&self.wrapper, event, listener);
        }
        remove_listener(&self.window, "resize", &self.resize);
        self.detach_move();
        self.clear_timer();
    }

    fn on_press(&self, event: &Event) {
        let Some(pointer) = self.platform.pointer_event(PointerEventKind::Down, event) else {
            return;
        };
        if pointer.source == PointerSource::Mouse {
            // Stops the browser from starting an image drag or text selection.
            event.prevent_default();
        }
        if self.carousel.handle_pointer(&pointer) == GestureUpdate::Started {
            self.attach_move(move_event_name(pointer.source));
        }
    }

    fn on_pointer(&self, kind: PointerEventKind, event: &Event) {
        let Some(pointer) = self.platform.pointer_event(kind, event) else {
            return;
        };
        self.carousel.handle_pointer(&pointer);
        if !self.carousel.wants_moves() {
            self.detach_move();
        }
    }

    fn attach_move(&self, event: &'static str) {
        self.detach_move();
        match self
            .wrapper
            .add_event_listener_with_callback(event, self.track_move.as_ref().unchecked_ref())
        {
            Ok(()) => self.move_event.set(Some(event)),
            Err(err) => log::warn!("failed to listen for {event}: {err:?}"),
        }
    }

    fn detach_move(&self) {
        if let Some(event) = self.move_event.take() {
            remove_listener(&self.wrapper, event, &self.track_move);
        }
    }

    fn on_resize(&self) {
        let deadline = self.carousel.on_viewport_resize(Instant::now());
        self.schedule_timer(deadline);
    }

    fn on_resize_timer(&self) {
        self.timer.set(None);
        if self.carousel.tick(Instant::now()) {
            return;
        }
        // Timers may fire a little early relative to the monotonic clock.
        if let Some(deadline) = self.carousel.next_deadline() {
            self.schedule_timer(deadline);
        }
    }

    fn schedule_timer(&self, deadline: Instant) {
        self.clear_timer();
        let delay = deadline.saturating_duration_since(Instant::now());
        let scheduled = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.resize_timer.as_ref().unchecked_ref(),
                delay.as_millis().min(i32::MAX as u128) as i32,
            );
        match scheduled {
            Ok(handle) => self.timer.set(Some(handle)),
            Err(err) => {
                log::warn!("failed to schedule re-layout timer, running it now: {err:?}");
                self.carousel.flush_resize();
            }
        }
    }

    fn clear_timer(&self) {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

fn listener(weak: &Weak<Binding>, handler: impl Fn(&Binding, Event) + 'static) -> Listener {
    let weak = weak.clone();
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(binding) = weak.upgrade() {
            handler(&binding, event);
        }
    }) as Box<dyn FnMut(Event)>)
}

fn remove_listener(target: &EventTarget, event: &str, listener: &Listener) {
    if let Err(err) =
        target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
    {
        log::warn!("failed to remove {event} listener: {err:?}");
    }
}

fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| CarouselError::missing_handle("document"))
}

fn query_element(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| CarouselError::missing_handle(selector))
}

fn query_html(document: &Document, selector: &str) -> Result<HtmlElement> {
    query_element(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CarouselError::missing_handle(selector))
}

fn js_error(err: JsValue) -> CarouselError {
    CarouselError::Platform(format!("{err:?}"))
}
