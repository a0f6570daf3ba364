use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use shared_types::{LoraSummary, ENDPOINT_GENERATE_FORM};

use crate::api::HttpCoverApi;
use crate::bootstrap::FormSeed;
use crate::components::{BusyOverlay, StatusIndicator};
use crate::dispatch::{Dispatcher, StatusLine};
use crate::form::actions::{add_lora_link, load_saved_loras, submit_generate, upload_lora};
use crate::form::components::lora_panel::LORA_FILE_INPUT_ID;
use crate::form::components::{LoraPanel, PresetBar};
use crate::form::preset::PresetToken;
use crate::form::state::{FormEvent, FormState};
use crate::host::use_web_host;
use crate::interop::{post_form, selected_file};

#[component]
pub fn CoverForm(seed: FormSeed) -> Element {
    let mut form = use_signal(|| FormState::from_seed(&seed));
    let mut saved = use_signal(Vec::<LoraSummary>::new);
    let host = use_web_host(seed.error.clone().map(StatusLine::error));
    let upload_status = use_signal(|| None::<StatusLine>);
    let upload_host = host.with_status(upload_status);
    let dispatcher = use_hook(Dispatcher::new);

    use_effect(move || {
        spawn(async move {
            let loras = load_saved_loras(&HttpCoverApi).await;
            info!("Loaded {} saved LoRAs", loras.len());
            saved.set(loras);
        });
    });

    let on_upload = {
        let dispatcher = dispatcher.clone();
        move |_: ()| {
            let dispatcher = dispatcher.clone();
            spawn(async move {
                let picked = selected_file(LORA_FILE_INPUT_ID);
                upload_lora(&dispatcher, &upload_host, &HttpCoverApi, picked).await;
            });
        }
    };

    let on_add_link = {
        let dispatcher = dispatcher.clone();
        move |_: ()| {
            let dispatcher = dispatcher.clone();
            let draft = form.read().link.clone();
            spawn(async move {
                add_lora_link(&dispatcher, &upload_host, &HttpCoverApi, &draft).await;
            });
        }
    };

    let on_submit = {
        let dispatcher = dispatcher.clone();
        move |e: Event<FormData>| {
            e.prevent_default();
            let snapshot = form.read().clone();
            submit_generate(&dispatcher, &host, &snapshot, |fields| {
                post_form(ENDPOINT_GENERATE_FORM, &fields.as_pairs())
            });
        }
    };

    let state = form();
    let busy = (host.busy)();
    let overlay = (host.overlay)();
    let (submit_class, submit_label) = submit_look(overlay.is_some());
    let input_class = state.playlist_class().css_class();

    rsx! {
        div {
            class: "cover-form-page",

            form {
                id: "cover-form",
                onsubmit: on_submit,

                label { r#for: "playlist_url", "Spotify playlist or album URL" }
                input {
                    id: "playlist_url",
                    name: "playlist_url",
                    r#type: "text",
                    class: "{input_class}",
                    placeholder: "https://open.spotify.com/playlist/...",
                    value: "{state.playlist_url}",
                    oninput: move |e| form.write().apply(FormEvent::PlaylistUrlChanged(e.value())),
                }

                label { r#for: "mood", "Mood (optional)" }
                input {
                    id: "mood",
                    name: "mood",
                    r#type: "text",
                    placeholder: "Describe the vibe...",
                    value: "{state.mood}",
                    oninput: move |e| form.write().apply(FormEvent::MoodChanged(e.value())),
                }

                PresetBar {
                    active: state.presets.active(),
                    on_pick: move |token: PresetToken| {
                        form.write().apply(FormEvent::PresetClicked(token.as_str().to_string()))
                    },
                }

                LoraPanel {
                    form,
                    saved: saved(),
                    busy,
                    upload_status: upload_status(),
                    on_upload,
                    on_add_link,
                }

                StatusIndicator { id: "form-status".to_string(), status: (host.status)() }

                button {
                    r#type: "submit",
                    class: "{submit_class}",
                    disabled: busy,
                    "{submit_label}"
                    if overlay.is_some() {
                        span { class: "spinner" }
                    }
                }
            }

            if let Some(copy) = overlay {
                BusyOverlay { copy }
            }
        }
    }
}

/// Class and label of the submit button. Sub-form actions only disable it.
fn submit_look(generating: bool) -> (&'static str, &'static str) {
    if generating {
        ("submit-btn loading", "Generating...")
    } else {
        ("submit-btn", "Generate Cover")
    }
}
