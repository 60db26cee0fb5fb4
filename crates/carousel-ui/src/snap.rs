//! Release snapping.

use crate::active_index::ActiveIndex;

/// Where a released gesture settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapDecision {
    Next(usize),
    Previous(usize),
    /// Return to the item that was active before the gesture. Also the
    /// outcome at either boundary when the threshold was exceeded.
    Restore(usize),
}

impl SnapDecision {
    pub fn index(self) -> usize {
        match self {
            SnapDecision::Next(index)
            | SnapDecision::Previous(index)
            | SnapDecision::Restore(index) => index,
        }
    }
}

/// Threshold rule that turns a release movement into a [`SnapDecision`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    threshold: f32,
}

impl SnapPolicy {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Comparisons are strict: a movement equal to the threshold restores.
    pub fn decide(&self, movement: f32, index: &ActiveIndex) -> SnapDecision {
        match (index.prev, index.next) {
            (_, Some(next)) if movement > self.threshold => SnapDecision::Next(next),
            (Some(prev), _) if movement < -self.threshold => SnapDecision::Previous(prev),
            _ => SnapDecision::Restore(index.active),
        }
    }
}
