//! Autoplay timer ownership.
//!
//! A [`Scheduler`] arms repeating intervals and hands back a [`TimerToken`].
//! The environment reports each fire by passing that token to
//! [`crate::Carousel::on_autoplay_tick`]. [`Autoplay`] guarantees at most one
//! live interval: every start cancels the previous one, and ticks carrying any
//! other token are stale.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::Result;

/// Identifies one armed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Source of repeating timers.
pub trait Scheduler {
    /// Arm an interval firing every `period`.
    fn start_interval(&mut self, period: Duration) -> Result<TimerToken>;

    /// Cancel an interval. Unknown tokens are ignored.
    fn cancel(&mut self, token: TimerToken) -> Result<()>;
}

/// The single autoplay interval of one carousel.
#[derive(Debug)]
pub struct Autoplay<S: Scheduler> {
    scheduler: S,
    period: Duration,
    live: Option<TimerToken>,
}

impl<S: Scheduler> Autoplay<S> {
    /// Idle autoplay with the given period.
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            live: None,
        }
    }

    /// Arm the interval, cancelling any previous one first.
    pub fn start(&mut self) -> Result<()> {
        self.pause()?;
        let token = self.scheduler.start_interval(self.period)?;
        trace!(token = token.0, period_ms = self.period.as_millis() as u64, "autoplay armed");
        self.live = Some(token);
        Ok(())
    }

    /// Cancel the interval if one is live.
    pub fn pause(&mut self) -> Result<()> {
        if let Some(token) = self.live.take() {
            trace!(token = token.0, "autoplay cancelled");
            self.scheduler.cancel(token)?;
        }
        Ok(())
    }

    /// Pause then start, so the countdown restarts from now.
    pub fn reset(&mut self) -> Result<()> {
        self.pause()?;
        self.start()
    }

    /// Whether `token` is the live interval.
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.live == Some(token)
    }

    /// Whether an interval is live.
    pub fn is_active(&self) -> bool {
        self.live.is_some()
    }

    /// Autoplay period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Underlying scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: Scheduler> Drop for Autoplay<S> {
    fn drop(&mut self) {
        if let Err(err) = self.pause() {
            warn!(error = %err, "autoplay interval left running");
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    token: TimerToken,
    period: Duration,
    due: Duration,
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Nothing fires on its own; [`ManualScheduler::next_due`] pops the earliest
/// interval due by a deadline and moves the clock to its fire time.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    intervals: Vec<Interval>,
    fired: u64,
}

impl ManualScheduler {
    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed intervals.
    pub fn live_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Total ticks delivered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Pop the earliest interval due at or before `deadline`, reschedule it
    /// one period later, and move the clock to its fire time.
    pub fn next_due(&mut self, deadline: Duration) -> Option<TimerToken> {
        let interval = self
            .intervals
            .iter_mut()
            .filter(|i| i.due <= deadline)
            .min_by_key(|i| (i.due, i.token))?;

        let token = interval.token;
        self.now = interval.due;
        interval.due += interval.period;
        self.fired += 1;
        debug!(token = token.0, at_ms = self.now.as_millis() as u64, "manual tick");
        Some(token)
    }

    /// Move the clock forward without firing anything.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, period: Duration) -> Result<TimerToken> {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.intervals.push(Interval {
            token,
            period,
            due: self.now + period,
        });
        Ok(token)
    }

    fn cancel(&mut self, token: TimerToken) -> Result<()> {
        self.intervals.retain(|i| i.token != token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn start_is_idempotent() {
        let mut autoplay = Autoplay::new(ManualScheduler::default(), PERIOD);
        autoplay.start().unwrap();
        autoplay.start().unwrap();
        autoplay.reset().unwrap();
        assert_eq!(autoplay.scheduler().live_intervals(), 1);
        assert!(autoplay.is_active());
    }

    #[test]
    fn pause_without_timer_is_noop() {
        let mut autoplay = Autoplay::new(ManualScheduler::default(), PERIOD);
        autoplay.pause().unwrap();
        assert!(!autoplay.is_active());
        assert_eq!(autoplay.scheduler().live_intervals(), 0);
    }

    #[test]
    fn replaced_token_is_stale() {
        let mut autoplay = Autoplay::new(ManualScheduler::default(), PERIOD);
        autoplay.start().unwrap();
        let first = TimerToken(1);
        assert!(autoplay.is_current(first));
        autoplay.reset().unwrap();
        assert!(!autoplay.is_current(first));
    }

    #[test]
    fn manual_intervals_repeat() {
        let mut scheduler = ManualScheduler::default();
        let token = scheduler.start_interval(PERIOD).unwrap();
        let deadline = Duration::from_millis(12_000);

        assert_eq!(scheduler.next_due(deadline), Some(token));
        assert_eq!(scheduler.now(), Duration::from_millis(5000));
        assert_eq!(scheduler.next_due(deadline), Some(token));
        assert_eq!(scheduler.now(), Duration::from_millis(10_000));
        assert_eq!(scheduler.next_due(deadline), None);

        scheduler.settle(deadline);
        assert_eq!(scheduler.now(), deadline);
        assert_eq!(scheduler.fired(), 2);
    }

    #[test]
    fn cancelled_interval_never_fires() {
        let mut scheduler = ManualScheduler::default();
        let token = scheduler.start_interval(PERIOD).unwrap();
        scheduler.cancel(token).unwrap();
        assert_eq!(scheduler.next_due(Duration::from_secs(60)), None);
    }

    /// Counts live intervals from outside the owner.
    struct SharedCount(Rc<Cell<usize>>);

    impl Scheduler for SharedCount {
        fn start_interval(&mut self, _period: Duration) -> Result<TimerToken> {
            self.0.set(self.0.get() + 1);
            Ok(TimerToken(self.0.get() as u64))
        }

        fn cancel(&mut self, _token: TimerToken) -> Result<()> {
            self.0.set(self.0.get() - 1);
            Ok(())
        }
    }

    #[test]
    fn dropping_cancels_the_live_interval() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new(SharedCount(Rc::clone(&live)), PERIOD);
        autoplay.start().unwrap();
        autoplay.reset().unwrap();
        assert_eq!(live.get(), 1);

        drop(autoplay);
        assert_eq!(live.get(), 0);
    }
}
