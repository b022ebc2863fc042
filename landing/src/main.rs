// Café Aurora landing page, Leptos 0.8 CSR

mod browser;
mod logging;
mod sections;

use cafe::scroll::ScrollChrome;
use leptos::ev;
use leptos::prelude::*;
use sections::*;
use tracing::{debug, warn};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn scroll_chrome() -> ScrollChrome {
    let y = window().scroll_y().unwrap_or_default();
    ScrollChrome::at(y)
}

#[component]
fn App() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let active_section = RwSignal::new(String::from("home"));
    let chrome = RwSignal::new(scroll_chrome());
    let selected = RwSignal::new(None::<Product>);

    // Page scroll is locked while the mobile menu or the modal is open.
    Effect::new(move |_| {
        let locked = menu_open.get() || selected.with(Option::is_some);
        browser::set_body_class("no-scroll", locked);
    });

    // Sections exist only after the first render.
    Effect::new(move |observed: Option<bool>| {
        if observed == Some(true) {
            return true;
        }
        match browser::observe_sections(move |id| active_section.set(id)) {
            Ok(count) => debug!(count, "observing sections"),
            Err(e) => warn!(error = %browser::js_error("observer", &e), "section highlighting disabled"),
        }
        true
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        let next = scroll_chrome();
        if chrome.get_untracked() != next {
            chrome.set(next);
        }
    });
    on_cleanup(move || scroll.remove());

    view! {
        <Header menu_open=menu_open active_section=active_section chrome=chrome />
        <main>
            <Hero />
            <Gallery />
            <Products selected=selected />
            <Contact />
        </main>
        <Footer />
        <BackToTop chrome=chrome />
        <ProductModal selected=selected />
    }
}
