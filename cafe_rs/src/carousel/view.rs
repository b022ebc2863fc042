//! Render targets for the carousel.
//!
//! [`SlideView`] is the seam between the state machine and whatever shows the
//! slides. The browser implementation lives in `cafe-landing`; [`HeadlessView`]
//! keeps everything in memory for tests and the simulator.

use std::fmt;

use crate::error::{CarouselError, Result};

/// Horizontal position of the slide track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackOffset {
    /// Slide the track is anchored on.
    pub slide: usize,
    /// Live drag displacement in pixels, `0.0` when at rest.
    pub drag_px: f64,
}

impl TrackOffset {
    /// Track resting on `slide`.
    pub fn at(slide: usize) -> Self {
        Self { slide, drag_px: 0.0 }
    }

    /// Track anchored on `slide` and following the pointer by `drag_px`.
    pub fn dragged(slide: usize, drag_px: f64) -> Self {
        Self { slide, drag_px }
    }

    /// CSS `transform` value for the track.
    pub fn to_css(&self) -> String {
        let percent = self.slide * 100;
        if self.drag_px == 0.0 {
            format!("translateX(-{percent}%)")
        } else {
            format!("translateX(calc(-{percent}% + {}px))", self.drag_px)
        }
    }
}

impl fmt::Display for TrackOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Something that can show the carousel.
pub trait SlideView {
    /// Number of slide elements.
    fn slide_count(&self) -> usize;

    /// Number of indicator elements. May differ from the slide count.
    fn indicator_count(&self) -> usize;

    /// Position the track.
    fn set_track_offset(&mut self, offset: TrackOffset) -> Result<()>;

    /// Toggle the active state of one slide.
    fn set_slide_active(&mut self, index: usize, active: bool) -> Result<()>;

    /// Toggle the active state of one indicator.
    fn set_indicator_active(&mut self, index: usize, active: bool) -> Result<()>;

    /// Set the track transition. `None` disables it for live drag tracking.
    fn set_transition(&mut self, transition: Option<&str>) -> Result<()>;
}

/// In-memory render target.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    offset: Option<TrackOffset>,
    transition: Option<String>,
    renders: usize,
    failing: bool,
}

impl HeadlessView {
    /// View with `slides` slides and `indicators` indicators, nothing active.
    pub fn new(slides: usize, indicators: usize) -> Self {
        Self {
            slides: vec![false; slides],
            indicators: vec![false; indicators],
            ..Default::default()
        }
    }

    /// Make every subsequent update fail, as a page with broken markup would.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Indexes of slides currently marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        active(&self.slides)
    }

    /// Indexes of indicators currently marked active.
    pub fn active_indicators(&self) -> Vec<usize> {
        active(&self.indicators)
    }

    /// Last track offset applied.
    pub fn offset(&self) -> Option<TrackOffset> {
        self.offset
    }

    /// CSS transform of the track, empty before the first render.
    pub fn transform(&self) -> String {
        self.offset.map(|o| o.to_css()).unwrap_or_default()
    }

    /// Current transition, `None` while disabled.
    pub fn transition(&self) -> Option<&str> {
        self.transition.as_deref()
    }

    /// How many track updates have been applied.
    pub fn track_updates(&self) -> usize {
        self.renders
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(CarouselError::Render("headless view is failing".into()))
        } else {
            Ok(())
        }
    }
}

fn active(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

fn set_flag(flags: &mut [bool], index: usize, on: bool, what: &str) -> Result<()> {
    let slot = flags
        .get_mut(index)
        .ok_or_else(|| CarouselError::Render(format!("{what} {index} does not exist")))?;
    *slot = on;
    Ok(())
}

impl SlideView for HeadlessView {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_track_offset(&mut self, offset: TrackOffset) -> Result<()> {
        self.check()?;
        self.offset = Some(offset);
        self.renders += 1;
        Ok(())
    }

    fn set_slide_active(&mut self, index: usize, active: bool) -> Result<()> {
        self.check()?;
        set_flag(&mut self.slides, index, active, "slide")
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) -> Result<()> {
        self.check()?;
        set_flag(&mut self.indicators, index, active, "indicator")
    }

    fn set_transition(&mut self, transition: Option<&str>) -> Result<()> {
        self.check()?;
        self.transition = transition.map(str::to_string);
        Ok(())
    }
}
