//! Drag gesture interpretation, shared by touch and mouse input.

/// What a finished drag asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold.
    Previous,
    /// Dragged left past the threshold.
    Next,
    /// Not far enough: return to the current slide.
    SnapBack,
}

/// A drag in progress. Positions are client x coordinates in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    start: f64,
    current: f64,
}

impl DragGesture {
    /// Start tracking at `x`.
    pub fn begin(x: f64) -> Self {
        Self { start: x, current: x }
    }

    /// Record the pointer at `x`.
    pub fn update(&mut self, x: f64) {
        self.current = x;
    }

    /// Displacement since the gesture began. Positive means rightward.
    pub fn delta(&self) -> f64 {
        self.current - self.start
    }

    /// Decide the outcome of releasing now. The threshold is exclusive.
    pub fn resolve(&self, threshold_px: f64) -> SwipeOutcome {
        let delta = self.delta();
        if delta.abs() <= threshold_px {
            SwipeOutcome::SnapBack
        } else if delta > 0.0 {
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::Next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightward_drag_goes_back() {
        let mut drag = DragGesture::begin(100.0);
        drag.update(180.0);
        assert_eq!(drag.delta(), 80.0);
        assert_eq!(drag.resolve(50.0), SwipeOutcome::Previous);
    }

    #[test]
    fn leftward_drag_goes_forward() {
        let mut drag = DragGesture::begin(300.0);
        drag.update(220.0);
        assert_eq!(drag.resolve(50.0), SwipeOutcome::Next);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut drag = DragGesture::begin(0.0);
        drag.update(50.0);
        assert_eq!(drag.resolve(50.0), SwipeOutcome::SnapBack);
        drag.update(-50.0);
        assert_eq!(drag.resolve(50.0), SwipeOutcome::SnapBack);
        drag.update(50.5);
        assert_eq!(drag.resolve(50.0), SwipeOutcome::Previous);
    }

    #[test]
    fn tap_without_move_snaps_back() {
        assert_eq!(DragGesture::begin(42.0).resolve(50.0), SwipeOutcome::SnapBack);
    }
}
