use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shared_types::{
    ApiOutcome, LinkLoraRequest, LoraListResponse, RegenerateRequest, ENDPOINT_ADD_LORA_LINK,
    ENDPOINT_LIST_LORAS, ENDPOINT_REGENERATE, ENDPOINT_UPLOAD_LORA, UPLOAD_FILE_FIELD,
};
use std::sync::OnceLock;
use web_sys::{File, FormData};

use crate::error::ActionError;

/// API base URL: the bootstrap element's `data-api-base`, otherwise same origin.
fn get_api_base() -> String {
    crate::interop::bootstrap_attribute("data-api-base")
        .map(|base| base.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// A LoRA file that passed the suffix check, ready to post as multipart.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<B> {
    pub file_name: String,
    pub blob: B,
}

/// The server's JSON endpoints.
///
/// `success: false` comes back as `Ok`; only transport and decode problems
/// are errors here.
#[async_trait(?Send)]
pub trait CoverApi {
    type Blob;

    async fn list_loras(&self) -> Result<LoraListResponse, ActionError>;
    async fn upload_lora(&self, upload: UploadRequest<Self::Blob>)
        -> Result<ApiOutcome, ActionError>;
    async fn add_lora_link(&self, link: &LinkLoraRequest) -> Result<ApiOutcome, ActionError>;
    async fn regenerate(&self, request: &RegenerateRequest) -> Result<ApiOutcome, ActionError>;
}

/// `CoverApi` over browser fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpCoverApi;

#[async_trait(?Send)]
impl CoverApi for HttpCoverApi {
    type Blob = File;

    async fn list_loras(&self) -> Result<LoraListResponse, ActionError> {
        let url = format!("{}{}", api_base(), ENDPOINT_LIST_LORAS);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("Request failed: {e}")))?;

        if !response.ok() {
            return Err(ActionError::Transport(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ActionError::Decode(format!("Failed to parse JSON: {e}")))
    }

    async fn upload_lora(&self, upload: UploadRequest<File>) -> Result<ApiOutcome, ActionError> {
        let url = format!("{}{}", api_base(), ENDPOINT_UPLOAD_LORA);

        let form = FormData::new()
            .map_err(|e| ActionError::Browser(format!("FormData unavailable: {e:?}")))?;
        form.append_with_blob_and_filename(UPLOAD_FILE_FIELD, &upload.blob, &upload.file_name)
            .map_err(|e| ActionError::Browser(format!("Failed to attach file: {e:?}")))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ActionError::Transport(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("Request failed: {e}")))?;

        read_outcome(response).await
    }

    async fn add_lora_link(&self, link: &LinkLoraRequest) -> Result<ApiOutcome, ActionError> {
        let url = format!("{}{}", api_base(), ENDPOINT_ADD_LORA_LINK);

        let response = Request::post(&url)
            .json(link)
            .map_err(|e| ActionError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("Request failed: {e}")))?;

        read_outcome(response).await
    }

    async fn regenerate(&self, request: &RegenerateRequest) -> Result<ApiOutcome, ActionError> {
        let url = format!("{}{}", api_base(), ENDPOINT_REGENERATE);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ActionError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| ActionError::Transport(format!("Request failed: {e}")))?;

        read_outcome(response).await
    }
}

/// Failure statuses still carry a JSON envelope, so the body is decoded
/// regardless of status.
async fn read_outcome(response: Response) -> Result<ApiOutcome, ActionError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ActionError::Transport(format!("Failed to read response: {e}")))?;
    decode_outcome(status, &body)
}

pub fn decode_outcome(status: u16, body: &str) -> Result<ApiOutcome, ActionError> {
    serde_json::from_str(body)
        .map_err(|e| ActionError::Decode(format!("Failed to parse JSON (HTTP {status}): {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_body_decodes_as_failure() {
        let outcome = decode_outcome(400, r#"{"error": "No file part"}"#).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("No file part"));
    }

    #[test]
    fn success_body_keeps_message() {
        let outcome = decode_outcome(
            200,
            r#"{"success": true, "message": "LoRA link added successfully"}"#,
        )
        .unwrap();
        assert!(outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("LoRA link added successfully")
        );
    }

    #[test]
    fn html_error_page_is_a_decode_error() {
        let err = decode_outcome(502, "<html>Bad Gateway</html>").unwrap_err();
        match err {
            ActionError::Decode(detail) => assert!(detail.contains("HTTP 502")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
