//! Header and back-to-top state derived from the scroll position.

/// Past this many pixels the header switches to its compact style.
pub const HEADER_SCROLLED_AFTER_PX: f64 = 100.0;
/// Past this many pixels the back-to-top button appears.
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

/// Page chrome that depends on how far the page is scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    /// Header carries the `scrolled` class.
    pub header_scrolled: bool,
    /// Back-to-top button carries the `visible` class.
    pub back_to_top_visible: bool,
}

impl ScrollChrome {
    /// Chrome for a vertical scroll offset in pixels.
    pub fn at(scroll_y: f64) -> Self {
        Self {
            header_scrolled: scroll_y > HEADER_SCROLLED_AFTER_PX,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(ScrollChrome::at(0.0), ScrollChrome::default());
        assert_eq!(
            ScrollChrome::at(100.0),
            ScrollChrome {
                header_scrolled: false,
                back_to_top_visible: false
            }
        );
        assert!(ScrollChrome::at(101.0).header_scrolled);
        assert!(!ScrollChrome::at(300.0).back_to_top_visible);
        assert!(ScrollChrome::at(300.5).back_to_top_visible);
    }
}
