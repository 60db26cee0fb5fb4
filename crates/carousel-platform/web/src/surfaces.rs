//! DOM-backed carousel surfaces.

use carousel_ui::{IndicatorSurface, TrackSurface, ViewportSurface};
use carousel_ui_graphics::Rect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};
use web_time::Duration;

/// Class toggled on the focused item and its indicator marker.
pub const ACTIVE_CLASS: &str = "active";

/// The element whose children are the carousel items.
#[derive(Clone, Debug)]
pub struct DomTrack {
    element: HtmlElement,
}

impl DomTrack {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn item(&self, index: usize) -> Option<Element> {
        self.element.children().item(index as u32)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            log::warn!("failed to set track {property}: {err:?}");
        }
    }
}

impl TrackSurface for DomTrack {
    fn item_bounds(&self) -> Vec<Rect> {
        let children = self.element.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .map(|item| Rect::horizontal(item.offset_left() as f32, item.offset_width() as f32))
            .collect()
    }

    fn set_translation(&mut self, x: f32) {
        self.set_style("transform", &format!("translate3d({x}px, 0, 0)"));
    }

    fn set_transition(&mut self, transition: Option<Duration>) {
        match transition {
            Some(duration) => {
                self.set_style("transition", &format!("transform {}s", duration.as_secs_f32()))
            }
            None => {
                if let Err(err) = self.element.style().remove_property("transition") {
                    log::warn!("failed to clear track transition: {err:?}");
                }
            }
        }
    }

    fn set_item_active(&mut self, index: usize, active: bool) {
        match self.item(index) {
            Some(item) => toggle_active(&item, active),
            None => log::warn!("track has no item {index}"),
        }
    }
}

/// The clipping wrapper around the track.
#[derive(Clone, Debug)]
pub struct DomViewport {
    element: HtmlElement,
}

impl DomViewport {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ViewportSurface for DomViewport {
    fn width(&self) -> f32 {
        self.element.offset_width() as f32
    }
}

/// A list whose children are indicator markers.
#[derive(Clone, Debug)]
pub struct DomIndicator {
    list: Element,
}

impl DomIndicator {
    /// Uses `list` and the markers it already holds.
    pub fn new(list: Element) -> Self {
        Self { list }
    }

    /// Appends an empty `<ul data-control="slide">` to `parent`, ready for
    /// synthesized markers.
    pub fn synthesize(document: &Document, parent: &Element) -> Result<Self, JsValue> {
        let list = document.create_element("ul")?;
        list.set_attribute("data-control", "slide")?;
        parent.append_child(&list)?;
        Ok(Self { list })
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    fn append_marker(&self, index: usize) -> Result<(), JsValue> {
        let document = self
            .list
            .owner_document()
            .ok_or_else(|| JsValue::from_str("indicator list is not attached to a document"))?;
        let label = (index + 1).to_string();
        let link = document.create_element("a")?;
        link.set_attribute("href", &format!("#slide{label}"))?;
        link.set_text_content(Some(&label));
        let marker = document.create_element("li")?;
        marker.append_child(&link)?;
        self.list.append_child(&marker)?;
        Ok(())
    }
}

impl IndicatorSurface for DomIndicator {
    fn marker_count(&self) -> usize {
        self.list.children().length() as usize
    }

    fn create_marker(&mut self, index: usize) {
        if let Err(err) = self.append_marker(index) {
            log::warn!("failed to create indicator marker {index}: {err:?}");
        }
    }

    fn set_marker_active(&mut self, index: usize, active: bool) {
        if let Some(marker) = self.list.children().item(index as u32) {
            toggle_active(&marker, active);
        }
    }
}

/// Index of the marker of `list` that contains `target`, for click
/// delegation on the list.
pub fn marker_index(list: &Element, target: &Element) -> Option<usize> {
    let list_node: &Node = list;
    let mut marker = target.clone();
    loop {
        let parent = marker.parent_element()?;
        if parent.is_same_node(Some(list_node)) {
            break;
        }
        marker = parent;
    }
    let marker_node: &Node = &marker;
    let markers = list.children();
    (0..markers.length())
        .find(|&index| {
            markers
                .item(index)
                .is_some_and(|candidate| candidate.is_same_node(Some(marker_node)))
        })
        .map(|index| index as usize)
}

fn toggle_active(element: &Element, active: bool) {
    if let Err(err) = element
        .class_list()
        .toggle_with_force(ACTIVE_CLASS, active)
    {
        log::warn!("failed to toggle `{ACTIVE_CLASS}` class: {err:?}");
    }
}
