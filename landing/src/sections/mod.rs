// Landing page sections

/// Café name used across the page (single source of truth)
pub const BRAND: &str = "Café Aurora";

/// How long form notices stay on screen.
const NOTICE_MS: u64 = 5000;

mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod modal;
mod products;

pub use contact::Contact;
pub use footer::{BackToTop, Footer};
pub use gallery::Gallery;
pub use header::Header;
pub use hero::Hero;
pub use modal::ProductModal;
pub use products::{Product, Products};

use leptos::prelude::*;

/// `base` plus ` active` when `on`.
pub(crate) fn active_class(base: &str, on: bool) -> String {
    if on {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Transient form feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub(crate) fn class(&self, prefix: &str) -> String {
        match self {
            Notice::Success(_) => format!("{prefix}-success"),
            Notice::Error(_) => format!("{prefix}-error"),
        }
    }

    pub(crate) fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Show `notice` in `slot` and clear it after [`NOTICE_MS`].
pub(crate) fn flash(slot: RwSignal<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice));
    set_timeout(
        move || slot.set(None),
        std::time::Duration::from_millis(NOTICE_MS),
    );
}
