use dioxus::prelude::*;

use crate::form::preset::PresetToken;

#[component]
pub fn PresetBar(active: Option<PresetToken>, on_pick: Callback<PresetToken>) -> Element {
    rsx! {
        div {
            class: "mood-presets",
            for token in PresetToken::ALL {
                button {
                    key: "{token.as_str()}",
                    r#type: "button",
                    class: if active == Some(token) { "preset-btn active" } else { "preset-btn" },
                    "data-preset": token.as_str(),
                    onclick: move |_| on_pick.call(token),
                    "{token.label()}"
                }
            }
        }
    }
}
