//! Assertions over rendered carousel state.

use carousel_ui::Carousel;

use crate::surfaces::{FakeIndicator, FakeTrack};

/// Asserts that `carousel` has settled on item `index`: the active index,
/// the single active item marker and the track translation all agree.
#[track_caller]
pub fn assert_settled_on(carousel: &Carousel, track: &FakeTrack, index: usize) {
    let active = carousel.active_index();
    assert_eq!(active.active, index, "active index");
    assert_eq!(track.active_items(), vec![index], "exactly one active item");

    let expected = carousel
        .item(index)
        .unwrap_or_else(|| panic!("item {index} has no geometry"))
        .centered_offset;
    assert_eq!(carousel.offset(), expected, "engine offset");
    assert_eq!(track.translation(), expected, "track translation");
    assert_eq!(carousel.final_position(), expected, "settled position");
    assert!(!carousel.is_dragging(), "carousel should be idle");
}

/// Asserts that exactly marker `index` of `indicator` is highlighted.
#[track_caller]
pub fn assert_indicator_on(indicator: &FakeIndicator, index: usize) {
    assert_eq!(indicator.active_markers(), vec![index], "active indicator marker");
}
