// DOM render target for the carousel

use cafe::carousel::{SlideView, TrackOffset};
use cafe::{CarouselError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::js_error;

const ACTIVE: &str = "active";

/// Slides, indicators and track of one `.carousel-container`.
pub struct DomSlides {
    track: HtmlElement,
    slides: Vec<Element>,
    indicators: Vec<Element>,
}

impl DomSlides {
    pub fn from_container(container: &Element) -> Result<Self> {
        let track = query(container, ".carousel-track")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(CarouselError::MissingTrack)?;

        Ok(Self {
            track,
            slides: query_all(container, ".carousel-slide"),
            indicators: query_all(container, ".carousel-indicator"),
        })
    }

    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    pub fn indicators(&self) -> &[Element] {
        &self.indicators
    }

    fn style(&self, property: &str, value: &str) -> Result<()> {
        self.track
            .style()
            .set_property(property, value)
            .map_err(|e| CarouselError::Render(js_error(property, &e)))
    }
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn toggle_active(elements: &[Element], index: usize, on: bool, what: &str) -> Result<()> {
    let el = elements
        .get(index)
        .ok_or_else(|| CarouselError::Render(format!("{what} {index} missing")))?;
    el.class_list()
        .toggle_with_force(ACTIVE, on)
        .map(|_| ())
        .map_err(|e| CarouselError::Render(js_error(what, &e)))
}

impl SlideView for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_track_offset(&mut self, offset: TrackOffset) -> Result<()> {
        self.style("transform", &offset.to_css())
    }

    fn set_slide_active(&mut self, index: usize, active: bool) -> Result<()> {
        toggle_active(&self.slides, index, active, "slide")
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) -> Result<()> {
        toggle_active(&self.indicators, index, active, "indicator")
    }

    fn set_transition(&mut self, transition: Option<&str>) -> Result<()> {
        self.style("transition", transition.unwrap_or("none"))
    }
}
