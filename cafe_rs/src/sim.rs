//! Scripted carousel sessions.
//!
//! A [`Script`] describes a carousel and a list of user/timer events; [`run`]
//! replays it against a [`HeadlessView`] and a [`ManualScheduler`] and records
//! one [`Frame`] per event. Used by the `carousel-sim` binary to check
//! behavior changes without a browser.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::{Carousel, HeadlessView, ManualScheduler};
use crate::config::CarouselConfig;
use crate::error::CarouselError;

/// Most slides or indicators a script may declare.
pub const MAX_SLIDES: usize = 10_000;

/// Most autoplay ticks a single `wait` may deliver.
pub const MAX_TICKS_PER_WAIT: u64 = 100_000;

/// Why a script could not be replayed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The carousel itself refused to start.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    /// `slides` or `indicators` above [`MAX_SLIDES`].
    #[error("{what} = {count} exceeds the limit of {MAX_SLIDES}")]
    TooManyElements {
        /// `"slides"` or `"indicators"`.
        what: &'static str,
        /// Declared count.
        count: usize,
    },
    /// A `wait` spanning more than [`MAX_TICKS_PER_WAIT`] autoplay intervals.
    #[error("event {event}: wait {ms}ms spans more than {MAX_TICKS_PER_WAIT} autoplay intervals of {period_ms}ms")]
    WaitTooLong {
        /// Zero-based event position.
        event: usize,
        /// Requested wait.
        ms: u64,
        /// Effective autoplay period.
        period_ms: u64,
    },
}

impl Script {
    /// Reject scripts whose replay would exhaust memory or time.
    pub fn check_limits(&self) -> Result<(), SimError> {
        let indicators = self.indicators.unwrap_or(self.slides);
        for (what, count) in [("slides", self.slides), ("indicators", indicators)] {
            if count > MAX_SLIDES {
                return Err(SimError::TooManyElements { what, count });
            }
        }

        let period_ms = self.config.clone().sanitized().autoplay_delay_ms;
        for (event, e) in self.events.iter().enumerate() {
            if let Event::Wait { ms } = *e {
                if ms / period_ms > MAX_TICKS_PER_WAIT {
                    return Err(SimError::WaitTooLong {
                        event,
                        ms,
                        period_ms,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A carousel plus the events to replay against it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Script {
    /// Number of slides.
    pub slides: usize,
    /// Number of indicators, defaults to `slides`.
    #[serde(default)]
    pub indicators: Option<usize>,
    /// Carousel tuning.
    #[serde(default)]
    pub config: CarouselConfig,
    /// Events in delivery order.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One input to the carousel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Next button.
    Next,
    /// Previous button.
    Prev,
    /// Indicator click (or any direct jump).
    GoTo {
        /// Requested slide, may be out of range.
        index: isize,
    },
    /// Touch start or mouse down.
    DragStart {
        /// Client x in pixels.
        x: f64,
    },
    /// Touch move or mouse move.
    DragMove {
        /// Client x in pixels.
        x: f64,
    },
    /// Touch end or mouse up.
    DragEnd,
    /// Touch cancel.
    DragCancel,
    /// Start, move and end in one step.
    Swipe {
        /// Start x.
        from: f64,
        /// Release x.
        to: f64,
    },
    /// Let time pass.
    Wait {
        /// Milliseconds.
        ms: u64,
    },
    /// Pause autoplay.
    Pause,
    /// Start autoplay.
    Resume,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Next => write!(f, "next"),
            Event::Prev => write!(f, "prev"),
            Event::GoTo { index } => write!(f, "go_to {index}"),
            Event::DragStart { x } => write!(f, "drag_start {x}"),
            Event::DragMove { x } => write!(f, "drag_move {x}"),
            Event::DragEnd => write!(f, "drag_end"),
            Event::DragCancel => write!(f, "drag_cancel"),
            Event::Swipe { from, to } => write!(f, "swipe {from}->{to}"),
            Event::Wait { ms } => write!(f, "wait {ms}ms"),
            Event::Pause => write!(f, "pause"),
            Event::Resume => write!(f, "resume"),
        }
    }
}

/// Carousel state after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Event label.
    pub event: String,
    /// Clock reading in milliseconds.
    pub at_ms: u64,
    /// Current slide index.
    pub index: usize,
    /// Track CSS transform.
    pub transform: String,
    /// Active slides (exactly one after a settled render).
    pub active_slides: Vec<usize>,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Number of live autoplay intervals.
    pub live_timers: usize,
}

type HeadlessCarousel = Carousel<HeadlessView, ManualScheduler>;

fn snapshot(carousel: &HeadlessCarousel, event: String) -> Frame {
    Frame {
        event,
        at_ms: carousel.scheduler().now().as_millis() as u64,
        index: carousel.current_index(),
        transform: carousel.view().transform(),
        active_slides: carousel.view().active_slides(),
        dragging: carousel.is_dragging(),
        live_timers: carousel.scheduler().live_intervals(),
    }
}

fn apply(carousel: &mut HeadlessCarousel, event: &Event) {
    match *event {
        Event::Next => carousel.go_to_next(),
        Event::Prev => carousel.go_to_prev(),
        Event::GoTo { index } => carousel.go_to_slide(index),
        Event::DragStart { x } => carousel.drag_start(x),
        Event::DragMove { x } => carousel.drag_move(x),
        Event::DragEnd => carousel.drag_end(),
        Event::DragCancel => carousel.drag_cancel(),
        Event::Swipe { from, to } => {
            carousel.drag_start(from);
            carousel.drag_move(to);
            carousel.drag_end();
        }
        Event::Wait { ms } => carousel.advance_clock(Duration::from_millis(ms)),
        Event::Pause => carousel.pause_autoplay(),
        Event::Resume => carousel.start_autoplay(),
    }
}

/// Replay `script`. The first frame is the initial state.
pub fn run(script: &Script) -> Result<Vec<Frame>, SimError> {
    script.check_limits()?;
    let view = HeadlessView::new(script.slides, script.indicators.unwrap_or(script.slides));
    let mut carousel = Carousel::new(view, ManualScheduler::default(), script.config.clone())?;

    let mut frames = Vec::with_capacity(script.events.len() + 1);
    frames.push(snapshot(&carousel, "init".to_string()));
    for event in &script.events {
        apply(&mut carousel, event);
        frames.push(snapshot(&carousel, event.to_string()));
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarouselError;
    use pretty_assertions::assert_eq;

    fn script(json: &str) -> Script {
        serde_json::from_str(json).expect("valid script")
    }

    #[test]
    fn parses_tagged_events() {
        let s = script(
            r#"{ "slides": 3, "events": [
                { "type": "next" },
                { "type": "go_to", "index": -1 },
                { "type": "swipe", "from": 10, "to": 100 },
                { "type": "wait", "ms": 5000 }
            ] }"#,
        );
        assert_eq!(s.events[1], Event::GoTo { index: -1 });
        assert_eq!(s.events[2], Event::Swipe { from: 10.0, to: 100.0 });
        assert_eq!(s.config, CarouselConfig::default());
    }

    #[test]
    fn replay_records_each_event() {
        let s = script(
            r#"{ "slides": 3, "events": [
                { "type": "prev" },
                { "type": "drag_start", "x": 100 },
                { "type": "drag_move", "x": 60 },
                { "type": "drag_end" },
                { "type": "wait", "ms": 5000 }
            ] }"#,
        );
        let frames = run(&s).expect("run");
        let indexes: Vec<usize> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![0, 2, 2, 2, 2, 0]);

        assert!(frames[2].dragging);
        assert_eq!(frames[2].live_timers, 0);
        assert_eq!(frames[3].transform, "translateX(calc(-200% + -40px))");
        assert_eq!(frames[5].at_ms, 5000);
        assert_eq!(frames[5].event, "wait 5000ms");
        assert!(frames.iter().all(|f| f.live_timers <= 1));
    }

    #[test]
    fn empty_carousel_is_rejected() {
        let err = run(&script(r#"{ "slides": 0 }"#)).unwrap_err();
        assert_eq!(err, SimError::Carousel(CarouselError::NoSlides));
    }

    #[test]
    fn oversized_carousel_is_rejected_before_allocating() {
        let err = run(&script(r#"{ "slides": 18446744073709551615 }"#)).unwrap_err();
        assert_eq!(
            err,
            SimError::TooManyElements {
                what: "slides",
                count: usize::MAX
            }
        );

        let err = run(&script(r#"{ "slides": 3, "indicators": 20000 }"#)).unwrap_err();
        assert!(matches!(err, SimError::TooManyElements { what: "indicators", .. }));
    }

    #[test]
    fn endless_wait_is_rejected() {
        let err = run(&script(
            r#"{ "slides": 3, "events": [
                { "type": "next" },
                { "type": "wait", "ms": 18446744073709551615 }
            ] }"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            SimError::WaitTooLong {
                event: 1,
                ms: u64::MAX,
                period_ms: 5000
            }
        );
    }

    #[test]
    fn long_wait_within_limit_replays() {
        let frames = run(&script(
            r#"{ "slides": 3, "events": [ { "type": "wait", "ms": 3600000 } ] }"#,
        ))
        .expect("one hour of autoplay");
        // 720 ticks over 3 slides lands back on the first one.
        assert_eq!(frames[1].index, 0);
        assert_eq!(frames[1].at_ms, 3_600_000);
    }
}
