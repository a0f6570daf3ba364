//! Exclusive choice between a saved LoRA and a one-off remote URL.
//!
//! Both inputs render from a single [`LoraSource`], so a saved selection and
//! URL text can never be set at the same time.

use shared_types::{LORA_FILE_SUFFIXES, LORA_NONE_SENTINEL};

const CIVITAI_MODEL_PATH: &str = "civitai.com/models/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoraSource {
    #[default]
    None,
    /// A saved LoRA, by name.
    Saved(String),
    /// Non-blank URL text as typed.
    RemoteUrl(String),
}

impl LoraSource {
    /// The saved dropdown changed to `value`.
    pub fn choose_saved(value: &str) -> Self {
        if value == LORA_NONE_SENTINEL || value.is_empty() {
            LoraSource::None
        } else {
            LoraSource::Saved(value.to_string())
        }
    }

    /// The URL field changed to `text`. Blank text returns to `None`.
    pub fn enter_url(text: &str) -> Self {
        if text.trim().is_empty() {
            LoraSource::None
        } else {
            LoraSource::RemoteUrl(text.to_string())
        }
    }

    /// Dropdown value: the saved name or the `none` sentinel.
    pub fn dropdown_value(&self) -> &str {
        match self {
            LoraSource::Saved(name) => name,
            _ => LORA_NONE_SENTINEL,
        }
    }

    /// URL field text; empty unless a remote URL is in use.
    pub fn url_text(&self) -> &str {
        match self {
            LoraSource::RemoteUrl(text) => text,
            _ => "",
        }
    }

    pub fn preview(&self) -> LoraPreview {
        match self {
            LoraSource::None => LoraPreview::Nothing,
            LoraSource::Saved(name) => LoraPreview::Saved(name.clone()),
            LoraSource::RemoteUrl(text) => {
                let url = text.trim();
                let lower = url.to_ascii_lowercase();
                if url.contains(CIVITAI_MODEL_PATH) {
                    LoraPreview::Civitai
                } else if LORA_FILE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                    LoraPreview::DirectFile
                } else {
                    LoraPreview::CustomUrl
                }
            }
        }
    }
}

/// What the preview panel says about the current [`LoraSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoraPreview {
    Nothing,
    Saved(String),
    Civitai,
    DirectFile,
    CustomUrl,
}

impl LoraPreview {
    pub fn headline(&self) -> String {
        match self {
            LoraPreview::Nothing => "No LoRA selected".to_string(),
            LoraPreview::Saved(name) => format!("Selected style: {name}"),
            LoraPreview::Civitai => "Using LoRA from Civitai".to_string(),
            LoraPreview::DirectFile => "Using direct LoRA file URL".to_string(),
            LoraPreview::CustomUrl => "Using custom LoRA URL".to_string(),
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            LoraPreview::Nothing => None,
            LoraPreview::Saved(_) => {
                Some("This LoRA will influence the visual style of your generated cover")
            }
            LoraPreview::Civitai => Some("This will use the LoRA from the provided Civitai link"),
            LoraPreview::DirectFile => Some("This URL will be used once for this generation"),
            LoraPreview::CustomUrl => Some("Make sure this URL points to a valid LoRA resource"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_selects_nothing() {
        assert_eq!(LoraSource::choose_saved("none"), LoraSource::None);
        assert_eq!(LoraSource::None.preview().headline(), "No LoRA selected");
        assert_eq!(LoraSource::None.preview().help_text(), None);
    }

    #[test]
    fn saved_choice_clears_url_text() {
        let source = LoraSource::choose_saved("watercolor");
        assert_eq!(source.url_text(), "");
        assert_eq!(source.dropdown_value(), "watercolor");
        assert_eq!(source.preview().headline(), "Selected style: watercolor");
    }

    #[test]
    fn url_entry_resets_dropdown() {
        let source = LoraSource::enter_url("https://example.com/x");
        assert_eq!(source.dropdown_value(), "none");
        assert_eq!(source.url_text(), "https://example.com/x");
    }

    #[test]
    fn blank_url_returns_to_none() {
        assert_eq!(LoraSource::enter_url("   "), LoraSource::None);
    }

    #[test]
    fn preview_branches_on_url_shape() {
        assert_eq!(
            LoraSource::enter_url("https://civitai.com/models/12345/ink").preview(),
            LoraPreview::Civitai
        );
        assert_eq!(
            LoraSource::enter_url("https://cdn.example.com/ink.safetensors").preview(),
            LoraPreview::DirectFile
        );
        assert_eq!(
            LoraSource::enter_url("https://cdn.example.com/INK.PT").preview(),
            LoraPreview::DirectFile
        );
        assert_eq!(
            LoraSource::enter_url("https://example.com/page").preview(),
            LoraPreview::CustomUrl
        );
    }
}
