// Product details dialog

use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

use super::Product;

#[component]
pub fn ProductModal(selected: RwSignal<Option<Product>>) -> impl IntoView {
    let close_button = NodeRef::<leptos::html::Button>::new();
    let is_open = move || selected.with(Option::is_some);
    let close = move || {
        if selected.with_untracked(Option::is_some) {
            selected.set(None);
        }
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    Effect::new(move |_| {
        if let Some(product) = selected.get() {
            debug!(product = product.title, "details opened");
            if let Some(button) = close_button.get() {
                let _ = button.focus();
            }
        }
    });

    view! {
        <div
            id="product-modal"
            class=move || if is_open() { "modal active" } else { "modal" }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open()).to_string()
            on:click=move |ev| {
                // Only the backdrop itself, not clicks bubbling from the content.
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <div class="modal-content">
                <button
                    class="modal-close"
                    aria-label="Close"
                    node_ref=close_button
                    on:click=move |_| close()
                >
                    "×"
                </button>
                <div class="modal-body">
                    {move || {
                        selected
                            .get()
                            .map(|product| {
                                view! {
                                    <div class="product-modal-content">
                                        <img src=product.image alt=product.title />
                                        <div class="product-modal-info">
                                            <h2>{product.title}</h2>
                                            <p class="product-price">{product.price}</p>
                                            <p>{product.description}</p>
                                            <button class="btn btn-primary">"Add to cart"</button>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
