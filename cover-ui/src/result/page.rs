use dioxus::prelude::*;
use shared_types::generated_cover_path;

use crate::api::HttpCoverApi;
use crate::bootstrap::ResultSeed;
use crate::components::BusyOverlay;
use crate::dispatch::{Dispatcher, PageHost};
use crate::host::use_web_host;
use crate::result::actions::{
    copy_title, download_cover, regenerate, COPY_TITLE_LABEL, DOWNLOAD_LABEL,
};

/// Delay between the cover image loading and its fade-in.
pub const COVER_REVEAL_DELAY_MS: u32 = 300;

#[component]
pub fn ResultPage(seed: ResultSeed) -> Element {
    let host = use_web_host(None);
    let dispatcher = use_hook(Dispatcher::new);
    let mut copy_label = use_signal(|| COPY_TITLE_LABEL);
    let mut download_label = use_signal(|| DOWNLOAD_LABEL);
    let mut revealed = use_signal(|| false);

    let cover_src = generated_cover_path(&seed.image_path);
    let busy = (host.busy)();

    let on_copy = {
        let title = seed.title.clone();
        move |_: MouseEvent| {
            let title = title.clone();
            spawn(async move {
                copy_title(&host, &title, |label| copy_label.set(label)).await;
            });
        }
    };

    let on_download = {
        let image_path = seed.image_path.clone();
        move |_: MouseEvent| {
            let image_path = image_path.clone();
            spawn(async move {
                download_cover(&host, &image_path, |label| download_label.set(label)).await;
            });
        }
    };

    let on_regenerate = {
        let request = seed.regenerate_request();
        move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let request = request.clone();
            spawn(async move {
                regenerate(&dispatcher, &host, &HttpCoverApi, &request).await;
            });
        }
    };

    rsx! {
        div {
            class: "result-page",

            h1 { class: "album-title", "{seed.title}" }

            img {
                class: if revealed() { "album-cover revealed" } else { "album-cover" },
                src: "{cover_src}",
                alt: "Generated album cover",
                onload: move |_| {
                    spawn(async move {
                        host.sleep_ms(COVER_REVEAL_DELAY_MS).await;
                        revealed.set(true);
                    });
                },
            }

            div {
                class: "result-actions",
                button {
                    id: "copy-title-btn",
                    r#type: "button",
                    onclick: on_copy,
                    "{copy_label}"
                }
                button {
                    id: "download-cover-btn",
                    r#type: "button",
                    onclick: on_download,
                    "{download_label}"
                }
                button {
                    id: "regenerate-btn",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_regenerate,
                    "Regenerate Cover"
                }
            }

            if let Some(copy) = (host.overlay)() {
                BusyOverlay { copy }
            }
        }
    }
}
