//! Result page buttons: copy title, download cover, regenerate.

use async_trait::async_trait;
use dioxus_logger::tracing::error;
use shared_types::{generated_cover_path, RegenerateRequest};

use crate::api::CoverApi;
use crate::dispatch::{
    ActionPlan, DispatchOutcome, Dispatcher, FailurePolicy, OverlayCopy, PageHost, SuccessPolicy,
};
use crate::error::ActionError;

/// How long a button shows its confirmation label.
pub const CONFIRM_WINDOW_MS: u32 = 2000;

pub const COPY_TITLE_LABEL: &str = "Copy Title";
pub const COPY_TITLE_DONE: &str = "Title Copied!";
pub const DOWNLOAD_LABEL: &str = "Download Cover";
pub const DOWNLOAD_DONE: &str = "Cover Downloaded!";

pub const REGENERATE_PLAN: ActionPlan = ActionPlan {
    name: "regenerate_cover",
    pending: None,
    overlay: Some(OverlayCopy {
        headline: "Regenerating cover with same playlist...",
        subtext: "This may take a minute",
    }),
    on_success: SuccessPolicy::ReloadNow,
    on_failure: FailurePolicy::Alert {
        fallback: "Regeneration failed",
        transport_message: "Failed to regenerate cover. Please try again.",
    },
};

/// Clipboard and download primitives on top of [`PageHost`].
#[async_trait(?Send)]
pub trait ResultHost: PageHost {
    async fn write_clipboard(&self, text: &str) -> Result<(), ActionError>;
    fn start_download(&self, href: &str, filename: &str) -> Result<(), ActionError>;
}

/// Copy the displayed title. Failures are logged only.
pub async fn copy_title<H: ResultHost>(
    host: &H,
    title: &str,
    mut set_label: impl FnMut(&'static str),
) -> bool {
    match host.write_clipboard(title.trim()).await {
        Ok(()) => {
            set_label(COPY_TITLE_DONE);
            host.sleep_ms(CONFIRM_WINDOW_MS).await;
            set_label(COPY_TITLE_LABEL);
            true
        }
        Err(e) => {
            error!("Failed to copy title: {}", e);
            false
        }
    }
}

/// Let the browser download the cover; no request is made by us.
pub async fn download_cover<H: ResultHost>(
    host: &H,
    image_path: &str,
    mut set_label: impl FnMut(&'static str),
) {
    let href = generated_cover_path(image_path);
    if let Err(e) = host.start_download(&href, image_path) {
        error!("Failed to start cover download: {}", e);
    }
    set_label(DOWNLOAD_DONE);
    host.sleep_ms(CONFIRM_WINDOW_MS).await;
    set_label(DOWNLOAD_LABEL);
}

pub async fn regenerate<H, A>(
    dispatcher: &Dispatcher,
    host: &H,
    api: &A,
    request: &RegenerateRequest,
) -> DispatchOutcome
where
    H: PageHost,
    A: CoverApi,
{
    dispatcher
        .dispatch(
            host,
            &REGENERATE_PLAN,
            || Ok(request.clone()),
            |request| async move { api.regenerate(&request).await },
        )
        .await
}
