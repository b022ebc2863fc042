use cafe::scroll::ScrollChrome;
use cafe::validate::validate_newsletter;
use leptos::prelude::*;
use tracing::info;

use super::{BRAND, Notice, flash};

#[component]
fn Newsletter() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    view! {
        <form
            id="newsletter-form"
            class="newsletter-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                match validate_newsletter(&email.get_untracked()) {
                    Ok(address) => {
                        info!(email = %address, "newsletter signup");
                        email.set(String::new());
                        flash(notice, Notice::Success("Thanks for subscribing!".into()));
                    }
                    Err(e) => flash(notice, Notice::Error(e.to_string())),
                }
            }
        >
            <input
                type="email"
                placeholder="Your email"
                aria-label="Email for newsletter"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Subscribe"</button>
            {move || {
                notice
                    .get()
                    .map(|n| view! { <p class=n.class("newsletter")>{n.text().to_string()}</p> })
            }}
        </form>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND}</span>
                    <p>"Rua das Flores 42, Porto · Mon to Sat, 8:00 to 19:00"</p>
                </div>
                <div class="footer-newsletter">
                    <h4>"Roast notes, once a month"</h4>
                    <Newsletter />
                </div>
                <p class="footer-copyright">{format!("© 2025 {BRAND}")}</p>
            </div>
        </footer>
    }
}

#[component]
pub fn BackToTop(chrome: RwSignal<ScrollChrome>) -> impl IntoView {
    view! {
        <a
            href="#home"
            class=move || if chrome.get().back_to_top_visible { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
        >
            "↑"
        </a>
    }
}
