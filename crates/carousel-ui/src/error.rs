/// Result alias for fallible carousel setup and navigation.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors surfaced while wiring a carousel.
///
/// Configuration problems are reported at construction time rather than
/// failing later during interaction. Spurious input (a release without a
/// press, a duplicate resize) is never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// A track, viewport or control handle could not be resolved by the host.
    #[error("carousel handle `{name}` could not be resolved")]
    MissingHandle { name: String },
    /// The track has no items to focus.
    #[error("carousel track has no items")]
    EmptyTrack,
    /// A caller-supplied indicator has the wrong number of markers.
    #[error("indicator has {markers} markers but the carousel has {items} items")]
    IndicatorMismatch { markers: usize, items: usize },
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid carousel config: {0}")]
    InvalidConfig(&'static str),
    /// A host platform call (listener registration, timers) failed.
    #[error("platform call failed: {0}")]
    Platform(String),
}

impl CarouselError {
    pub fn missing_handle(name: impl Into<String>) -> Self {
        Self::MissingHandle { name: name.into() }
    }
}
