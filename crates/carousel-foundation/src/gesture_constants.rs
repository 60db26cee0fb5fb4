//! Shared gesture constants for carousel drag handling.
//!
//! These are tunable defaults, not derived values. Together they decide how
//! much "weight" a drag needs before the carousel pages instead of snapping
//! back. Values are in logical pixels.

/// Multiplier applied to the raw pointer delta while dragging.
///
/// Content moves 1.6 px for every pixel the pointer travels, so a short flick
/// is enough to reveal the neighbouring item.
pub const DRAG_SENSITIVITY: f32 = 1.6;

/// Scaled movement a release must exceed to page to a neighbour.
///
/// The comparison is strict: a movement of exactly this value snaps back.
pub const SNAP_THRESHOLD: f32 = 120.0;

/// Quiet period before a burst of viewport resizes triggers re-layout.
pub const RESIZE_DEBOUNCE_MS: u64 = 1_000;

/// Duration of the transform transition used for programmatic focusing.
pub const TRANSITION_MS: u64 = 300;
