use leptos::prelude::*;

use super::BRAND;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="section hero" data-section="home">
            <div class="container">
                <div class="hero-content">
                    <p class="hero-eyebrow">"Specialty coffee · Since 2012"</p>
                    <h1 class="hero-title">{BRAND}</h1>
                    <p class="hero-description">
                        "Single-origin beans roasted every morning, pastries from our own oven, "
                        "and a window seat with your name on it."
                    </p>
                    <div class="hero-actions">
                        <a href="#products" class="btn btn-primary">"See the menu"</a>
                        <a href="#contact" class="btn btn-secondary">"Book a table"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
