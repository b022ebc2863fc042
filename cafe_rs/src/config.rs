//! Carousel configuration.
//!
//! Every field has a default, so an empty object (or no config at all) gives
//! the stock behavior: autoplay every 5 s, 50 px swipe threshold.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 5000;
/// Default horizontal distance a drag must exceed to change slides.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Default track transition restored after a drag.
pub const DEFAULT_TRANSITION: &str = "transform 0.5s ease-in-out";

/// Errors from parsing a carousel config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config JSON could not be parsed.
    #[error("invalid carousel config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Config file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File that failed.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Tuning knobs for a [`crate::Carousel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Start autoplay when the carousel is constructed.
    pub autoplay: bool,
    /// Autoplay period in milliseconds.
    pub autoplay_delay_ms: u64,
    /// A drag commits to a slide change only when `|delta|` exceeds this.
    pub swipe_threshold_px: f64,
    /// CSS transition restored on the track after a drag.
    pub transition: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            transition: DEFAULT_TRANSITION.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Parse an optional JSON override, falling back to defaults with a warning.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring carousel config override");
                Self::default()
            }),
        }
    }

    /// Load config from a JSON file.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let loaded = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
            .and_then(|content| Self::from_json(&content));

        loaded.unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "falling back to default carousel config");
            Self::default()
        })
    }

    /// Replace values that would break the carousel with their defaults.
    ///
    /// A zero delay would fire the interval continuously; a negative or NaN
    /// threshold would turn every tap into a swipe.
    pub fn sanitized(mut self) -> Self {
        if self.autoplay_delay_ms == 0 {
            warn!("autoplay_delay_ms = 0, using {DEFAULT_AUTOPLAY_DELAY_MS}");
            self.autoplay_delay_ms = DEFAULT_AUTOPLAY_DELAY_MS;
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            warn!(
                threshold = self.swipe_threshold_px,
                "invalid swipe_threshold_px, using {DEFAULT_SWIPE_THRESHOLD_PX}"
            );
            self.swipe_threshold_px = DEFAULT_SWIPE_THRESHOLD_PX;
        }
        if self.transition.trim().is_empty() {
            self.transition = DEFAULT_TRANSITION.to_string();
        }
        self
    }

    /// Autoplay period as a [`Duration`].
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CarouselConfig::default();
        assert!(config.autoplay);
        assert_eq!(config.autoplay_delay(), Duration::from_millis(5000));
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.transition, "transform 0.5s ease-in-out");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CarouselConfig::from_json(r#"{ "autoplay_delay_ms": 8000 }"#).expect("parse");
        assert_eq!(config.autoplay_delay_ms, 8000);
        assert!(config.autoplay);
        assert_eq!(config.swipe_threshold_px, 50.0);
    }

    #[test]
    fn test_sanitize_zero_delay_and_negative_threshold() {
        let config = CarouselConfig::from_json(
            r#"{ "autoplay_delay_ms": 0, "swipe_threshold_px": -4, "transition": " " }"#,
        )
        .expect("parse");
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = CarouselConfig::from_json_or_default(Some("{ not json"));
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(CarouselConfig::from_json_or_default(Some("  ")), CarouselConfig::default());
        assert_eq!(CarouselConfig::from_json_or_default(None), CarouselConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = CarouselConfig::load_from_path(&temp.path().join("carousel.json"));
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("carousel.json");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, r#"{{ "autoplay": false, "swipe_threshold_px": 80 }}"#).expect("write");

        let config = CarouselConfig::load_from_path(&path);
        assert!(!config.autoplay);
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.autoplay_delay_ms, DEFAULT_AUTOPLAY_DELAY_MS);
    }
}
