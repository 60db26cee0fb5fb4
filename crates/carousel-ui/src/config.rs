use carousel_foundation::gesture_constants::{
    DRAG_SENSITIVITY, RESIZE_DEBOUNCE_MS, SNAP_THRESHOLD, TRANSITION_MS,
};
use web_time::Duration;

use crate::error::{CarouselError, Result};
use crate::snap::SnapPolicy;

/// Tunable carousel behaviour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarouselConfig {
    /// Multiplier from pointer delta to content movement.
    pub sensitivity: f32,
    /// Scaled movement a release must exceed to page.
    pub snap_threshold: f32,
    /// Quiet period after the last resize before re-layout.
    pub resize_debounce_ms: u64,
    /// Transform transition used while focusing. Zero disables animation.
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            sensitivity: DRAG_SENSITIVITY,
            snap_threshold: SNAP_THRESHOLD,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            transition_ms: TRANSITION_MS,
        }
    }
}

impl CarouselConfig {
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    pub fn with_resize_debounce(mut self, quiet: Duration) -> Self {
        self.resize_debounce_ms = quiet.as_millis() as u64;
        self
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition_ms = transition.as_millis() as u64;
        self
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Transition to apply while focusing, `None` when animation is off.
    pub fn transition(&self) -> Option<Duration> {
        (self.transition_ms > 0).then(|| Duration::from_millis(self.transition_ms))
    }

    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy::new(self.snap_threshold)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(CarouselError::InvalidConfig(
                "sensitivity must be a positive finite number",
            ));
        }
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(
                "snap threshold must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gesture_constants() {
        let config = CarouselConfig::default();
        assert_eq!(config.sensitivity, 1.6);
        assert_eq!(config.snap_threshold, 120.0);
        assert_eq!(config.resize_debounce(), Duration::from_secs(1));
        assert_eq!(config.transition(), Some(Duration::from_millis(300)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_transition_disables_animation() {
        let config = CarouselConfig::default().with_transition(Duration::ZERO);
        assert_eq!(config.transition(), None);
    }

    #[test]
    fn rejects_non_positive_sensitivity() {
        let config = CarouselConfig::default().with_sensitivity(0.0);
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig(_))
        ));
        let config = CarouselConfig::default().with_snap_threshold(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{ "snap_threshold": 80.0 }"#).expect("valid config");
        assert_eq!(config.snap_threshold, 80.0);
        assert_eq!(config.sensitivity, DRAG_SENSITIVITY);
        assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    }
}
