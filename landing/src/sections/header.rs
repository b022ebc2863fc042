use cafe::Theme;
use cafe::scroll::ScrollChrome;
use leptos::prelude::*;

use super::{BRAND, active_class};
use crate::browser::{self, LocalStore};

/// Sections reachable from the menu, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("gallery", "Gallery"),
    ("products", "Menu"),
    ("contact", "Contact"),
];

#[component]
pub fn Header(
    menu_open: RwSignal<bool>,
    active_section: RwSignal<String>,
    chrome: RwSignal<ScrollChrome>,
) -> impl IntoView {
    let theme = RwSignal::new(Theme::load(&LocalStore::open()));
    Effect::new(move |_| browser::apply_theme(theme.get()));

    let close_menu = move |_| {
        if menu_open.get_untracked() {
            menu_open.set(false);
        }
    };

    view! {
        <header
            id="main-header"
            class=move || if chrome.get().header_scrolled { "header scrolled" } else { "header" }
        >
            <div class="container header-inner">
                <a href="#home" class="logo">{BRAND}</a>

                <nav id="main-menu" class=move || active_class("menu", menu_open.get())>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    data-section=id
                                    class=move || active_class("menu-link", active_section.with(|s| s == id))
                                    on:click=close_menu
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    class="theme-toggle"
                    aria-label="Toggle dark mode"
                    on:click=move |_| theme.update(|t| *t = t.toggled())
                >
                    <i class=move || format!("fas {}", theme.get().icon_class())></i>
                </button>

                <button
                    class=move || active_class("menu-toggle", menu_open.get())
                    aria-label="Menu"
                    aria-controls="main-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </header>
    }
}
