use dioxus::prelude::*;
use shared_types::{LoraSummary, LORA_NONE_SENTINEL};

use crate::components::StatusIndicator;
use crate::dispatch::StatusLine;
use crate::form::lora_source::LoraPreview;
use crate::form::state::{
    FormEvent, FormState, LoraTab, STRENGTH_MAX, STRENGTH_MIN, STRENGTH_STEP,
};

/// Id of the upload tab's file input; the upload action reads it directly.
pub const LORA_FILE_INPUT_ID: &str = "lora_file";

#[component]
pub fn LoraPanel(
    form: Signal<FormState>,
    saved: Vec<LoraSummary>,
    busy: bool,
    upload_status: Option<StatusLine>,
    on_upload: Callback<()>,
    on_add_link: Callback<()>,
) -> Element {
    let mut form = form;
    let state = form();
    let selected = state.lora.dropdown_value().to_string();

    rsx! {
        div {
            class: "lora-section",

            div {
                class: "lora-tabs",
                for tab in LoraTab::ALL {
                    button {
                        key: "{tab.label()}",
                        r#type: "button",
                        class: if state.tab == tab {
                            "lora-tab-btn active"
                        } else {
                            "lora-tab-btn"
                        },
                        onclick: move |_| form.write().apply(FormEvent::TabSelected(tab)),
                        "{tab.label()}"
                    }
                }
            }

            div {
                class: tab_content_class(state.tab == LoraTab::Select),

                label { r#for: "lora_name", "Saved style" }
                select {
                    id: "lora_name",
                    name: "lora_name",
                    value: "{selected}",
                    onchange: move |e| form.write().apply(FormEvent::SavedLoraChosen(e.value())),
                    option {
                        value: LORA_NONE_SENTINEL,
                        selected: selected == LORA_NONE_SENTINEL,
                        "None"
                    }
                    for lora in saved.iter() {
                        option {
                            key: "{lora.name}",
                            value: "{lora.name}",
                            selected: selected == lora.name,
                            "{lora.name}"
                        }
                    }
                }

                label { r#for: "lora_url", "Or use a LoRA URL" }
                input {
                    id: "lora_url",
                    name: "lora_url",
                    r#type: "text",
                    placeholder: "https://civitai.com/models/...",
                    value: "{state.lora.url_text()}",
                    oninput: move |e| form.write().apply(FormEvent::LoraUrlChanged(e.value())),
                }

                LoraPreviewCard { preview: state.lora.preview() }
            }

            div {
                class: tab_content_class(state.tab == LoraTab::Upload),

                label { r#for: LORA_FILE_INPUT_ID, "LoRA file (.safetensors, .ckpt, .pt)" }
                input {
                    id: LORA_FILE_INPUT_ID,
                    r#type: "file",
                    accept: ".safetensors,.ckpt,.pt",
                }
                button {
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_upload.call(()),
                    "Upload"
                }
            }

            div {
                class: tab_content_class(state.tab == LoraTab::Link),

                input {
                    r#type: "text",
                    placeholder: "Name (optional)",
                    value: "{state.link.name}",
                    oninput: move |e| form.write().apply(FormEvent::LinkNameChanged(e.value())),
                }
                input {
                    r#type: "text",
                    placeholder: "https://...",
                    value: "{state.link.url}",
                    oninput: move |e| form.write().apply(FormEvent::LinkUrlChanged(e.value())),
                }
                div {
                    class: "strength-row",
                    label { "Strength" }
                    input {
                        r#type: "range",
                        min: "{STRENGTH_MIN}",
                        max: "{STRENGTH_MAX}",
                        step: "{STRENGTH_STEP}",
                        value: "{state.link.strength}",
                        oninput: move |e| {
                            form.write().apply(FormEvent::LinkStrengthChanged(e.value()))
                        },
                    }
                    span { class: "strength-value", "{state.link.strength_label()}" }
                }
                input {
                    r#type: "text",
                    placeholder: "Trigger words, comma separated",
                    value: "{state.link.trigger_words}",
                    oninput: move |e| {
                        form.write().apply(FormEvent::LinkTriggerWordsChanged(e.value()))
                    },
                }
                button {
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_add_link.call(()),
                    "Add Link"
                }
            }

            StatusIndicator { id: "upload-status".to_string(), status: upload_status }
        }
    }
}

fn tab_content_class(active: bool) -> &'static str {
    if active {
        "lora-tab-content active"
    } else {
        "lora-tab-content"
    }
}

#[component]
fn LoraPreviewCard(preview: LoraPreview) -> Element {
    let help = preview.help_text();

    rsx! {
        div {
            class: "lora-preview",
            {
                match &preview {
                    LoraPreview::Nothing => rsx! {
                        p { class: "no-lora", "{preview.headline()}" }
                    },
                    LoraPreview::Saved(name) => rsx! {
                        p { "Selected style: " strong { "{name}" } }
                    },
                    _ => rsx! {
                        p { "{preview.headline()}" }
                    },
                }
            }
            if let Some(help) = help {
                p { class: "help-text", "{help}" }
            }
        }
    }
}
