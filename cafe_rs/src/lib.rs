//! # cafe
//!
//! Interaction logic for the café landing page, kept free of any browser API
//! so it can be driven by the real DOM in `cafe-landing` or by a headless
//! render target and a manual clock in tests and in `carousel-sim`.
//!
//! ## Modules
//!
//! - [`carousel`] - slide index state machine, drag gestures, autoplay
//! - [`config`] - carousel tuning (`serde`, JSON)
//! - [`theme`] - light/dark preference and its persistence seam
//! - [`validate`] - contact and newsletter form rules
//! - [`scroll`] - header/back-to-top thresholds
//! - [`sim`] - scripted carousel sessions for the simulator binary
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use cafe::carousel::{Carousel, HeadlessView, ManualScheduler};
//! use cafe::config::CarouselConfig;
//!
//! let view = HeadlessView::new(4, 4);
//! let mut carousel = Carousel::new(view, ManualScheduler::default(), CarouselConfig::default())
//!     .expect("four slides");
//!
//! carousel.go_to_prev();
//! assert_eq!(carousel.current_index(), 3);
//!
//! carousel.advance_clock(Duration::from_millis(5000));
//! assert_eq!(carousel.current_index(), 0);
//! ```

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod scroll;
pub mod sim;
pub mod theme;
pub mod validate;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
pub use theme::Theme;
