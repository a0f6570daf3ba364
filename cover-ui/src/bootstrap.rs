//! Server-rendered page data handed to the client.
//!
//! The server renders one element with id [`BOOTSTRAP_ELEMENT_ID`] whose
//! `data-*` attributes say which page this is and carry the values the page
//! was rendered with.

use shared_types::RegenerateRequest;

pub const BOOTSTRAP_ELEMENT_ID: &str = "cover-app";

/// Values echoed into the form page, e.g. after a failed generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSeed {
    pub playlist_url: String,
    pub mood: String,
    pub error: Option<String>,
}

/// Values attached to a generated result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSeed {
    pub title: String,
    pub image_path: String,
    pub playlist_url: String,
    pub mood: String,
    pub lora_name: String,
    pub lora_url: String,
}

impl ResultSeed {
    pub fn regenerate_request(&self) -> RegenerateRequest {
        RegenerateRequest {
            playlist_url: self.playlist_url.clone(),
            mood: self.mood.clone(),
            lora_name: self.lora_name.clone(),
            lora_url: self.lora_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBootstrap {
    Form(FormSeed),
    Result(ResultSeed),
}

impl PageBootstrap {
    /// Build from an attribute lookup. An unknown or missing `data-page` is
    /// treated as the form page.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let text = |name: &str| attr(name).unwrap_or_default();

        match attr("data-page").as_deref() {
            Some("result") => PageBootstrap::Result(ResultSeed {
                title: text("data-title").trim().to_string(),
                image_path: text("data-image-path"),
                playlist_url: text("data-playlist-url"),
                mood: text("data-mood"),
                lora_name: text("data-lora-name"),
                lora_url: text("data-lora-url"),
            }),
            _ => PageBootstrap::Form(FormSeed {
                playlist_url: text("data-playlist-url"),
                mood: text("data-mood"),
                error: attr("data-error").filter(|e| !e.trim().is_empty()),
            }),
        }
    }
}
