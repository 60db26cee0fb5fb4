//! Item centering geometry.

use carousel_ui_graphics::Rect;

/// Placement of one item, rebuilt wholesale on init and after resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Position of the item in the track's child sequence.
    pub index: usize,
    pub bounds: Rect,
    /// Track translation that centers this item in the viewport.
    pub centered_offset: f32,
}

/// Translation that centers `bounds` inside a viewport of `viewport_width`.
///
/// `-(left - (viewport_width - width) / 2)`
#[inline]
pub fn centered_offset(bounds: Rect, viewport_width: f32) -> f32 {
    let margin = (viewport_width - bounds.width) / 2.0;
    -(bounds.left() - margin)
}

/// Builds the geometry list for `bounds`, preserving their order.
pub fn compute_geometry(bounds: &[Rect], viewport_width: f32) -> Vec<ItemGeometry> {
    bounds
        .iter()
        .enumerate()
        .map(|(index, &bounds)| ItemGeometry {
            index,
            bounds,
            centered_offset: centered_offset(bounds, viewport_width),
        })
        .collect()
}
