// Carousel mounting: builds the state machine over the DOM and wires input

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cafe::{Carousel, CarouselConfig, CarouselError, Result};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
    TouchEvent,
};

use super::js_error;
use super::slides::{DomSlides, query};
use super::timer::BrowserScheduler;

pub type DomCarousel = Carousel<DomSlides, BrowserScheduler>;
pub type SharedCarousel = Rc<RefCell<DomCarousel>>;

/// Mount on the first element matching `selector`.
pub fn mount_selector(selector: &str) -> Result<SharedCarousel> {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .ok_or_else(|| CarouselError::MissingContainer(selector.to_string()))?;
    mount(&container)
}

/// Build a carousel inside `container` and attach buttons, indicators,
/// touch and mouse input. Once fully wired the carousel lives for the rest of
/// the page; on failure it is dropped, which clears its interval and turns any
/// listener already attached into a no-op.
pub fn mount(container: &Element) -> Result<SharedCarousel> {
    let window = web_sys::window().ok_or_else(|| CarouselError::Binding("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| CarouselError::Binding("no document".into()))?;

    let config =
        CarouselConfig::from_json_or_default(container.get_attribute("data-carousel").as_deref());
    let slides = DomSlides::from_container(container)?;
    let track = slides.track().clone();
    let indicators = slides.indicators().to_vec();

    // Ticks reach the carousel through a weak slot filled once it exists.
    let slot: Rc<RefCell<Weak<RefCell<DomCarousel>>>> = Rc::default();
    let dispatch = Rc::clone(&slot);
    let scheduler = BrowserScheduler::new(window, move |token| {
        let target = dispatch.borrow().clone();
        drive(&target, |c| c.on_autoplay_tick(token));
    });

    let carousel = Rc::new(RefCell::new(Carousel::new(slides, scheduler, config)?));
    *slot.borrow_mut() = Rc::downgrade(&carousel);

    wire(&carousel, container, &document, &track, &indicators)?;
    // Listeners only hold weak handles; this is the owning reference.
    std::mem::forget(Rc::clone(&carousel));

    debug!(
        slides = carousel.borrow().slide_count(),
        "carousel input wired"
    );
    Ok(carousel)
}

fn wire(
    carousel: &SharedCarousel,
    container: &Element,
    document: &Document,
    track: &HtmlElement,
    indicators: &[Element],
) -> Result<()> {
    if let (Some(prev), Some(next)) = (
        query(container, ".carousel-prev"),
        query(container, ".carousel-next"),
    ) {
        listen(&prev, "click", false, handler(carousel, |c, _| c.go_to_prev()))?;
        listen(&next, "click", false, handler(carousel, |c, _| c.go_to_next()))?;
    }

    for (i, indicator) in indicators.iter().enumerate() {
        let index = i as isize;
        listen(indicator, "click", false, handler(carousel, move |c, _| c.go_to_slide(index)))?;
    }

    listen(track, "touchstart", true, handler(carousel, |c, ev| {
        if let Some(x) = touch_x(ev) {
            c.drag_start(x);
        }
    }))?;
    listen(track, "touchmove", true, handler(carousel, |c, ev| {
        if let Some(x) = touch_x(ev) {
            c.drag_move(x);
        }
    }))?;
    listen(track, "touchend", true, handler(carousel, |c, _| c.drag_end()))?;
    listen(track, "touchcancel", true, handler(carousel, |c, _| c.drag_cancel()))?;

    // Mouse drags start on the track but may end anywhere on the page.
    listen(track, "mousedown", false, handler(carousel, |c, ev| {
        if let Some(x) = mouse_x(ev) {
            ev.prevent_default();
            c.drag_start(x);
        }
    }))?;
    listen(document, "mousemove", false, handler(carousel, |c, ev| {
        if let Some(x) = mouse_x(ev) {
            c.drag_move(x);
        }
    }))?;
    listen(document, "mouseup", false, handler(carousel, |c, _| c.drag_end()))?;
    Ok(())
}

fn drive(target: &Weak<RefCell<DomCarousel>>, f: impl FnOnce(&mut DomCarousel)) {
    let Some(carousel) = target.upgrade() else {
        return;
    };
    match carousel.try_borrow_mut() {
        Ok(mut c) => f(&mut *c),
        Err(_) => warn!("carousel busy, event dropped"),
    };
}

fn handler(
    carousel: &SharedCarousel,
    mut f: impl FnMut(&mut DomCarousel, &Event) + 'static,
) -> impl FnMut(Event) + 'static {
    let target = Rc::downgrade(carousel);
    move |ev: Event| {
        let Some(carousel) = target.upgrade() else {
            return;
        };
        match carousel.try_borrow_mut() {
            Ok(mut c) => f(&mut *c, &ev),
            Err(_) => warn!(event = %ev.type_(), "carousel busy, event dropped"),
        };
    }
}

fn listen(
    target: &EventTarget,
    name: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| CarouselError::Binding(js_error(name, &e)))?;
    closure.forget();
    Ok(())
}

fn touch_x(ev: &Event) -> Option<f64> {
    let touch = ev.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn mouse_x(ev: &Event) -> Option<f64> {
    ev.dyn_ref::<MouseEvent>().map(|m| f64::from(m.client_x()))
}
