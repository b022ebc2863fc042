use leptos::prelude::*;
use tracing::{error, info};

use crate::browser::carousel;

struct Slide {
    image: &'static str,
    title: &'static str,
    caption: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        image: "assets/img/slide-bar.jpg",
        title: "The espresso bar",
        caption: "Two groups, one very patient barista.",
    },
    Slide {
        image: "assets/img/slide-roastery.jpg",
        title: "Morning roast",
        caption: "Small batches, roasted before we open.",
    },
    Slide {
        image: "assets/img/slide-pastries.jpg",
        title: "From our oven",
        caption: "Croissants, pastéis de nata and a daily cake.",
    },
    Slide {
        image: "assets/img/slide-terrace.jpg",
        title: "The terrace",
        caption: "Open from April to October, weather permitting.",
    },
];

#[component]
pub fn Gallery() -> impl IntoView {
    let unavailable = RwSignal::new(false);

    // Effects run after the first render, so the markup below is in the DOM.
    Effect::new(move |mounted: Option<()>| {
        if mounted.is_some() {
            return;
        }
        match carousel::mount_selector("#gallery .carousel-container") {
            Ok(c) => info!(slides = c.borrow().slide_count(), "carousel mounted"),
            Err(e) => {
                error!(error = %e, fatal = e.is_fatal(), "carousel disabled");
                unavailable.set(true);
            }
        }
    });

    view! {
        <section id="gallery" class="section gallery" data-section="gallery">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Inside the café"</h2>
                </div>
                <Show when=move || unavailable.get()>
                    <p class="carousel-error" role="alert">
                        "The gallery could not be loaded. Please refresh the page."
                    </p>
                </Show>
                <div class="carousel-container">
                    <div class="carousel-track">
                        {SLIDES
                            .iter()
                            .map(|slide| {
                                view! {
                                    <div class="carousel-slide">
                                        <img src=slide.image alt=slide.title draggable="false" />
                                        <div class="carousel-caption">
                                            <h3>{slide.title}</h3>
                                            <p>{slide.caption}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="carousel-prev" aria-label="Previous slide">"‹"</button>
                    <button class="carousel-next" aria-label="Next slide">"›"</button>
                    <div class="carousel-indicators">
                        {(1..=SLIDES.len())
                            .map(|n| {
                                view! {
                                    <button
                                        class="carousel-indicator"
                                        aria-label=format!("Go to slide {n}")
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
