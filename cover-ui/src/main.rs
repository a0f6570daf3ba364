use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use cover_ui::interop::read_page_bootstrap;
use cover_ui::{CoverForm, PageBootstrap, ResultPage, COVER_STYLES};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let page = use_hook(read_page_bootstrap);

    rsx! {
        style { {COVER_STYLES} }
        {
            match page {
                PageBootstrap::Form(seed) => rsx! { CoverForm { seed } },
                PageBootstrap::Result(seed) => rsx! { ResultPage { seed } },
            }
        }
    }
}
