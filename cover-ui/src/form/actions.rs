//! Form page submissions: the two LoRA sub-forms and the generate POST.

use dioxus_logger::tracing::warn;
use shared_types::{has_lora_suffix, LoraSummary};

use crate::api::{CoverApi, UploadRequest};
use crate::dispatch::{
    ActionPlan, DispatchOutcome, Dispatcher, FailurePolicy, OverlayCopy, PageHost, SuccessPolicy,
    RELOAD_DELAY_MS,
};
use crate::error::{ActionError, ValidationError};
use crate::form::state::{FormState, GenerateFields, LinkDraft};

pub const UPLOAD_PLAN: ActionPlan = ActionPlan {
    name: "upload_lora",
    pending: Some("Uploading..."),
    overlay: None,
    on_success: SuccessPolicy::AnnounceThenReload {
        fallback: "LoRA uploaded",
        delay_ms: RELOAD_DELAY_MS,
    },
    on_failure: FailurePolicy::Status {
        fallback: "Upload failed",
    },
};

pub const LINK_PLAN: ActionPlan = ActionPlan {
    name: "add_lora_link",
    pending: Some("Adding LoRA link..."),
    overlay: None,
    on_success: SuccessPolicy::AnnounceThenReload {
        fallback: "LoRA link added",
        delay_ms: RELOAD_DELAY_MS,
    },
    on_failure: FailurePolicy::Status {
        fallback: "Failed to add LoRA link",
    },
};

pub const GENERATE_PLAN: ActionPlan = ActionPlan {
    name: "generate_cover",
    pending: None,
    overlay: Some(OverlayCopy {
        headline: "Analyzing music and generating cover art...",
        subtext: "This may take a minute or two",
    }),
    on_success: SuccessPolicy::ReloadNow,
    on_failure: FailurePolicy::Status {
        fallback: "Failed to start generation",
    },
};

/// Saved LoRAs for the dropdown; an unreachable list leaves it empty.
pub async fn load_saved_loras<A: CoverApi>(api: &A) -> Vec<LoraSummary> {
    match api.list_loras().await {
        Ok(list) => list.loras,
        Err(e) => {
            warn!("Failed to load saved LoRAs: {}", e);
            Vec::new()
        }
    }
}

/// Check the picked file before anything is sent.
pub fn validate_upload<B>(
    selected: Option<(String, B)>,
) -> Result<UploadRequest<B>, ValidationError> {
    let (file_name, blob) = selected.ok_or(ValidationError::MissingFile)?;
    if !has_lora_suffix(&file_name) {
        return Err(ValidationError::InvalidFileType);
    }
    Ok(UploadRequest { file_name, blob })
}

pub async fn upload_lora<H, A>(
    dispatcher: &Dispatcher,
    host: &H,
    api: &A,
    selected: Option<(String, A::Blob)>,
) -> DispatchOutcome
where
    H: PageHost,
    A: CoverApi,
{
    dispatcher
        .dispatch(
            host,
            &UPLOAD_PLAN,
            move || validate_upload(selected).map_err(ActionError::from),
            |upload| api.upload_lora(upload),
        )
        .await
}

pub async fn add_lora_link<H, A>(
    dispatcher: &Dispatcher,
    host: &H,
    api: &A,
    draft: &LinkDraft,
) -> DispatchOutcome
where
    H: PageHost,
    A: CoverApi,
{
    dispatcher
        .dispatch(
            host,
            &LINK_PLAN,
            || draft.to_request().map_err(ActionError::from),
            |link| async move { api.add_lora_link(&link).await },
        )
        .await
}

/// Validate the form, raise the overlay and hand the POST to `navigate`.
pub fn submit_generate<H, N>(
    dispatcher: &Dispatcher,
    host: &H,
    form: &FormState,
    navigate: N,
) -> DispatchOutcome
where
    H: PageHost,
    N: FnOnce(&GenerateFields) -> Result<(), ActionError>,
{
    dispatcher.navigate(
        host,
        &GENERATE_PLAN,
        || form.generate_fields().map_err(ActionError::from),
        |fields| navigate(&fields),
    )
}
