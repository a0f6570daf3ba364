use async_trait::async_trait;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use gloo_timers::future::TimeoutFuture;

use crate::dispatch::{OverlayCopy, PageHost, StatusLine};
use crate::error::ActionError;
use crate::interop::{copy_text_to_clipboard, reload_page, show_alert, trigger_download};
use crate::result::actions::ResultHost;

/// Signal-backed [`PageHost`]; components render from these signals.
#[derive(Clone, Copy, PartialEq)]
pub struct WebHost {
    pub status: Signal<Option<StatusLine>>,
    pub overlay: Signal<Option<OverlayCopy>>,
    pub busy: Signal<bool>,
}

impl WebHost {
    /// Same overlay and busy flag, separate status indicator.
    pub fn with_status(self, status: Signal<Option<StatusLine>>) -> Self {
        Self { status, ..self }
    }
}

pub fn use_web_host(initial_status: Option<StatusLine>) -> WebHost {
    let status = use_signal(move || initial_status);
    let overlay = use_signal(|| None::<OverlayCopy>);
    let busy = use_signal(|| false);
    WebHost {
        status,
        overlay,
        busy,
    }
}

#[async_trait(?Send)]
impl PageHost for WebHost {
    fn set_status(&self, status: StatusLine) {
        let mut signal = self.status;
        signal.set(Some(status));
    }

    fn show_overlay(&self, copy: OverlayCopy) {
        let mut signal = self.overlay;
        signal.set(Some(copy));
    }

    fn hide_overlay(&self) {
        let mut signal = self.overlay;
        signal.set(None);
    }

    fn set_busy(&self, busy: bool) {
        let mut signal = self.busy;
        signal.set(busy);
    }

    fn alert(&self, message: &str) {
        show_alert(message);
    }

    fn reload(&self) {
        if let Err(e) = reload_page() {
            error!("Failed to reload page: {}", e);
        }
    }

    async fn sleep_ms(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

#[async_trait(?Send)]
impl ResultHost for WebHost {
    async fn write_clipboard(&self, text: &str) -> Result<(), ActionError> {
        copy_text_to_clipboard(text).await
    }

    fn start_download(&self, href: &str, filename: &str) -> Result<(), ActionError> {
        trigger_download(href, filename)
    }
}
