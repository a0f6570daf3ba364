use dioxus::prelude::*;

use crate::dispatch::{OverlayCopy, StatusLine};

/// Stylesheet for both pages, injected once at the root.
pub const COVER_STYLES: &str = include_str!("../assets/cover.css");

#[component]
pub fn StatusIndicator(id: String, status: Option<StatusLine>) -> Element {
    let (text, class) = match status.as_ref() {
        Some(line) => (line.text.clone(), line.tone.css_class()),
        None => (String::new(), ""),
    };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "status",
            "{text}"
        }
    }
}

#[component]
pub fn BusyOverlay(copy: OverlayCopy) -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            div {
                class: "loading-content",
                div { class: "loading-spinner" }
                p { "{copy.headline}" }
                p { class: "loading-subtext", "{copy.subtext}" }
            }
        }
    }
}
