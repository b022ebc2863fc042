//! Carousel state machine.
//!
//! One slide index, one render target, one autoplay interval. Buttons,
//! indicators, drags and timer ticks all funnel into the same transition:
//! update the index, render, restart the autoplay countdown.
//!
//! Public operations never return errors. Render or timer faults are logged
//! and swallowed at the operation boundary so a broken carousel cannot take the
//! rest of the page down with it.

mod autoplay;
mod gesture;
mod view;

use std::time::Duration;

use tracing::{debug, error, warn};

pub use autoplay::{Autoplay, ManualScheduler, Scheduler, TimerToken};
pub use gesture::{DragGesture, SwipeOutcome};
pub use view::{HeadlessView, SlideView, TrackOffset};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};

/// Draggable, autoplaying slide carousel.
#[derive(Debug)]
pub struct Carousel<V, S: Scheduler> {
    view: V,
    autoplay: Autoplay<S>,
    config: CarouselConfig,
    current: usize,
    slide_count: usize,
    drag: Option<DragGesture>,
    /// Autoplay was live when the current drag began.
    resume_after_drag: bool,
}

impl<V: SlideView, S: Scheduler> Carousel<V, S> {
    /// Build a carousel over `view`, render slide 0 and start autoplay if
    /// configured.
    ///
    /// Fails only when there is nothing to show.
    pub fn new(view: V, scheduler: S, config: CarouselConfig) -> Result<Self> {
        let slide_count = view.slide_count();
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if view.indicator_count() != slide_count {
            warn!(
                slides = slide_count,
                indicators = view.indicator_count(),
                "indicator count does not match slide count"
            );
        }

        let config = config.sanitized();
        let autoplay = Autoplay::new(scheduler, config.autoplay_delay());
        let mut carousel = Self {
            view,
            autoplay,
            config,
            current: 0,
            slide_count,
            drag: None,
            resume_after_drag: false,
        };

        if carousel.config.autoplay {
            carousel.start_autoplay();
        }
        carousel.render();
        debug!(slides = slide_count, "carousel ready");
        Ok(carousel)
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn go_to_next(&mut self) {
        let next = (self.current + 1) % self.slide_count;
        let result = self.show(next);
        guard("go_to_next", result);
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn go_to_prev(&mut self) {
        let prev = (self.current + self.slide_count - 1) % self.slide_count;
        let result = self.show(prev);
        guard("go_to_prev", result);
    }

    /// Jump to `index`. Out-of-range requests are logged and ignored.
    pub fn go_to_slide(&mut self, index: isize) {
        let Some(target) = usize::try_from(index)
            .ok()
            .filter(|i| *i < self.slide_count)
        else {
            let err = CarouselError::InvalidIndex {
                index,
                count: self.slide_count,
            };
            warn!(error = %err, "ignoring slide request");
            return;
        };
        let result = self.show(target);
        guard("go_to_slide", result);
    }

    /// Project the current index onto the render target.
    pub fn render(&mut self) {
        let result = self.try_render();
        guard("render", result);
    }

    /// Pointer or finger went down on the track at `x`.
    pub fn drag_start(&mut self, x: f64) {
        if self.drag.is_none() {
            self.resume_after_drag = self.autoplay.is_active();
        }
        self.drag = Some(DragGesture::begin(x));
        self.pause_autoplay();
        let result = self.view.set_transition(None);
        guard("drag_start", result);
    }

    /// Pointer moved to `x`; the track follows 1:1. Ignored when not dragging.
    pub fn drag_move(&mut self, x: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.update(x);
        let offset = TrackOffset::dragged(self.current, drag.delta());
        let result = self.view.set_track_offset(offset);
        guard("drag_move", result);
    }

    /// Pointer released. Commits to a neighbour slide when the drag went
    /// past the threshold, otherwise snaps back. Ignored when not dragging.
    pub fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.restore_transition();

        let outcome = drag.resolve(self.config.swipe_threshold_px);
        debug!(delta = drag.delta(), ?outcome, "drag released");
        match outcome {
            SwipeOutcome::Previous => self.go_to_prev(),
            SwipeOutcome::Next => self.go_to_next(),
            SwipeOutcome::SnapBack => self.render(),
        }
        self.resume_autoplay();
    }

    /// Gesture aborted by the environment (touchcancel). Always snaps back.
    pub fn drag_cancel(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.restore_transition();
        self.render();
        self.resume_autoplay();
    }

    /// Arm autoplay, replacing any live interval.
    pub fn start_autoplay(&mut self) {
        let result = self.autoplay.start();
        guard("start_autoplay", result);
    }

    /// Cancel autoplay if it is running.
    pub fn pause_autoplay(&mut self) {
        let result = self.autoplay.pause();
        guard("pause_autoplay", result);
    }

    /// Restart the autoplay countdown from now.
    pub fn reset_autoplay(&mut self) {
        let result = self.autoplay.reset();
        guard("reset_autoplay", result);
    }

    /// An interval fired. Stale tokens are ignored.
    pub fn on_autoplay_tick(&mut self, token: TimerToken) {
        if !self.autoplay.is_current(token) {
            debug!(token = token.0, "dropping stale autoplay tick");
            return;
        }
        self.go_to_next();
    }

    /// Index of the visible slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides, fixed at construction.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether an autoplay interval is live.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_active()
    }

    /// Effective configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Render target.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Render target, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Timer source.
    pub fn scheduler(&self) -> &S {
        self.autoplay.scheduler()
    }

    fn show(&mut self, index: usize) -> Result<()> {
        self.current = index;
        let rendered = self.try_render();
        let rearmed = self.rearm();
        rendered.and(rearmed)
    }

    /// Restart the countdown after navigation. A carousel configured without
    /// autoplay stays idle unless autoplay was started explicitly.
    fn rearm(&mut self) -> Result<()> {
        if self.config.autoplay || self.autoplay.is_active() {
            self.autoplay.reset()
        } else {
            Ok(())
        }
    }

    fn resume_autoplay(&mut self) {
        let was_running = std::mem::take(&mut self.resume_after_drag);
        if self.config.autoplay || was_running {
            self.start_autoplay();
        }
    }

    fn try_render(&mut self) -> Result<()> {
        self.view.set_track_offset(TrackOffset::at(self.current))?;
        for i in 0..self.view.indicator_count() {
            self.view.set_indicator_active(i, i == self.current)?;
        }
        for i in 0..self.slide_count {
            self.view.set_slide_active(i, i == self.current)?;
        }
        Ok(())
    }

    fn restore_transition(&mut self) {
        let transition = self.config.transition.clone();
        let result = self.view.set_transition(Some(&transition));
        guard("restore_transition", result);
    }
}

impl<V: SlideView> Carousel<V, ManualScheduler> {
    /// Move the manual clock forward by `by`, delivering every tick that
    /// falls due in order.
    pub fn advance_clock(&mut self, by: Duration) {
        let deadline = self.autoplay.scheduler().now() + by;
        while let Some(token) = self.autoplay.scheduler_mut().next_due(deadline) {
            self.on_autoplay_tick(token);
        }
        self.autoplay.scheduler_mut().settle(deadline);
    }
}

fn guard(op: &'static str, result: Result<()>) {
    if let Err(err) = result {
        error!(op, error = %err, "carousel operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(slides: usize) -> Carousel<HeadlessView, ManualScheduler> {
        Carousel::new(
            HeadlessView::new(slides, slides),
            ManualScheduler::default(),
            CarouselConfig::default(),
        )
        .expect("carousel with slides")
    }

    #[test]
    fn construction_renders_first_slide_and_arms_autoplay() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.view().active_slides(), vec![0]);
        assert_eq!(c.view().active_indicators(), vec![0]);
        assert_eq!(c.view().transform(), "translateX(-0%)");
        assert!(c.is_autoplaying());
    }

    #[test]
    fn zero_slides_is_fatal() {
        let err = Carousel::new(
            HeadlessView::new(0, 0),
            ManualScheduler::default(),
            CarouselConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, CarouselError::NoSlides);
    }

    #[test]
    fn autoplay_disabled_by_config() {
        let config = CarouselConfig {
            autoplay: false,
            ..Default::default()
        };
        let mut c = Carousel::new(HeadlessView::new(3, 3), ManualScheduler::default(), config)
            .expect("carousel");
        assert!(!c.is_autoplaying());
        c.advance_clock(Duration::from_secs(30));
        assert_eq!(c.current_index(), 0);

        c.go_to_next();
        c.drag_start(0.0);
        c.drag_move(-80.0);
        c.drag_end();
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_autoplaying());

        c.start_autoplay();
        c.go_to_next();
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn drag_disables_transition_and_follows_pointer() {
        let mut c = carousel(4);
        c.go_to_slide(1);
        c.drag_start(200.0);
        assert!(c.is_dragging());
        assert!(!c.is_autoplaying());
        assert_eq!(c.view().transition(), None);

        c.drag_move(230.0);
        assert_eq!(c.view().transform(), "translateX(calc(-100% + 30px))");
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn drag_end_restores_transition_and_autoplay() {
        let mut c = carousel(4);
        c.drag_start(200.0);
        c.drag_move(210.0);
        c.drag_end();
        assert!(!c.is_dragging());
        assert!(c.is_autoplaying());
        assert_eq!(c.view().transition(), Some("transform 0.5s ease-in-out"));
        assert_eq!(c.view().transform(), "translateX(-0%)");
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn move_and_end_without_start_are_ignored() {
        let mut c = carousel(3);
        let updates = c.view().track_updates();
        c.drag_move(500.0);
        c.drag_end();
        c.drag_cancel();
        assert_eq!(c.view().track_updates(), updates);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn drag_cancel_never_changes_slide() {
        let mut c = carousel(3);
        c.drag_start(0.0);
        c.drag_move(-400.0);
        c.drag_cancel();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.view().transform(), "translateX(-0%)");
        assert!(c.is_autoplaying());
    }

    #[test]
    fn stale_tick_is_dropped() {
        let mut c = carousel(3);
        c.on_autoplay_tick(TimerToken(999));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn render_failure_is_suppressed() {
        let mut c = carousel(3);
        c.view_mut().set_failing(true);
        c.go_to_next();
        c.go_to_slide(2);
        c.drag_start(0.0);
        c.drag_move(100.0);
        c.drag_end();
        // Index moved even though nothing could be drawn.
        assert!(c.current_index() < c.slide_count());

        c.view_mut().set_failing(false);
        c.render();
        assert_eq!(c.view().active_slides(), vec![c.current_index()]);
    }

    #[test]
    fn fewer_indicators_than_slides() {
        let mut c = Carousel::new(
            HeadlessView::new(4, 2),
            ManualScheduler::default(),
            CarouselConfig::default(),
        )
        .expect("carousel");
        c.go_to_slide(3);
        assert_eq!(c.view().active_slides(), vec![3]);
        assert!(c.view().active_indicators().is_empty());
        c.go_to_slide(1);
        assert_eq!(c.view().active_indicators(), vec![1]);
    }
}
