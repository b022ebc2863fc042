//! Carousel error taxonomy.

use thiserror::Error;

/// Result alias used by render targets, schedulers and the carousel itself.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Everything that can go wrong inside the carousel.
///
/// Construction variants disable the component. `InvalidIndex` is an input
/// rejection. `Render` and `Timer` are runtime faults that the carousel logs
/// and swallows at the operation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The container element was not found on the page.
    #[error("carousel container `{0}` not found")]
    MissingContainer(String),

    /// The container has no track element.
    #[error("carousel track not found inside container")]
    MissingTrack,

    /// The container has no slides to show.
    #[error("carousel has no slides")]
    NoSlides,

    /// A slide index outside `0..count` was requested.
    #[error("invalid slide index {index} (slide count {count})")]
    InvalidIndex {
        /// Requested index.
        index: isize,
        /// Number of slides.
        count: usize,
    },

    /// The render target rejected an update.
    #[error("render failed: {0}")]
    Render(String),

    /// The scheduler could not arm or cancel a timer.
    #[error("timer failed: {0}")]
    Timer(String),

    /// Input events could not be attached to the carousel elements.
    #[error("event binding failed: {0}")]
    Binding(String),
}

impl CarouselError {
    /// Construction failures leave the component uninitialized.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingContainer(_) | Self::MissingTrack | Self::NoSlides | Self::Binding(_)
        )
    }
}
