//! Shared types between the cover generation server and its web client
//!
//! These types are used by both:
//! - The server's JSON API handlers
//! - The Dioxus form and result pages (WASM)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Endpoints & Paths
// ============================================================================

pub const ENDPOINT_GENERATE_FORM: &str = "/";
pub const ENDPOINT_LIST_LORAS: &str = "/api/loras";
pub const ENDPOINT_UPLOAD_LORA: &str = "/api/upload_lora";
pub const ENDPOINT_ADD_LORA_LINK: &str = "/api/add_lora_link";
pub const ENDPOINT_REGENERATE: &str = "/api/regenerate";

/// Generated covers are served below this prefix, followed by the opaque
/// image path the server echoes into the result page.
pub const GENERATED_COVERS_PREFIX: &str = "/generated_covers/";

/// Multipart field carrying the uploaded LoRA binary.
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Accepted LoRA file suffixes, compared case-insensitively.
pub const LORA_FILE_SUFFIXES: [&str; 3] = [".safetensors", ".ckpt", ".pt"];

/// Dropdown value meaning "no saved LoRA".
pub const LORA_NONE_SENTINEL: &str = "none";

pub const DEFAULT_LORA_STRENGTH: f32 = 0.7;

/// Build the download/display path for a generated cover.
pub fn generated_cover_path(image_path: &str) -> String {
    format!("{GENERATED_COVERS_PREFIX}{image_path}")
}

/// True when `file_name` ends in one of [`LORA_FILE_SUFFIXES`].
///
/// The suffix is everything from the last `.`; names without a dot never match.
pub fn has_lora_suffix(file_name: &str) -> bool {
    let Some(dot) = file_name.rfind('.') else {
        return false;
    };
    let suffix = file_name[dot..].to_ascii_lowercase();
    LORA_FILE_SUFFIXES.contains(&suffix.as_str())
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Envelope returned by every JSON submission endpoint.
///
/// Failure bodies are sometimes just `{"error": "..."}` with a 400 status, so a
/// missing `success` reads as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub struct ApiOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Split on `success`: `Ok(message)` or `Err(error)`, each possibly absent.
    pub fn into_result(self) -> Result<Option<String>, Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self.error)
        }
    }
}

// ============================================================================
// LoRA Catalogue
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub enum LoraSourceType {
    Local,
    Link,
}

/// A saved LoRA as listed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub struct LoraSummary {
    pub name: String,
    pub source_type: LoraSourceType,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub trigger_words: Vec<String>,
    #[serde(default = "default_strength")]
    pub strength: f32,
}

fn default_strength() -> f32 {
    DEFAULT_LORA_STRENGTH
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub struct LoraListResponse {
    #[serde(default)]
    pub loras: Vec<LoraSummary>,
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body of `POST /api/add_lora_link`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub struct LinkLoraRequest {
    pub name: String,
    pub url: String,
    pub strength: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger_words: Vec<String>,
}

/// Body of `POST /api/regenerate`.
///
/// Built from values attached to the result page, never from a live form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../cover-ui/src/types/generated.ts")]
pub struct RegenerateRequest {
    pub playlist_url: String,
    pub mood: String,
    pub lora_name: String,
    pub lora_url: String,
}
