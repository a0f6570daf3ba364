//! Form page state and its reducer. Components dispatch [`FormEvent`]s and
//! render from the resulting [`FormState`]; nothing else mutates it.

use shared_types::{LinkLoraRequest, DEFAULT_LORA_STRENGTH};

use crate::bootstrap::FormSeed;
use crate::error::ValidationError;
use crate::form::lora_source::LoraSource;
use crate::form::preset::{PresetGroup, PresetToken};
use crate::form::validator::{classify, UrlClass};

pub const STRENGTH_MIN: f32 = 0.1;
pub const STRENGTH_MAX: f32 = 1.0;
pub const STRENGTH_STEP: f32 = 0.05;

/// Which LoRA sub-panel is showing. Switching never touches the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoraTab {
    #[default]
    Select,
    Upload,
    Link,
}

impl LoraTab {
    pub const ALL: [LoraTab; 3] = [LoraTab::Select, LoraTab::Upload, LoraTab::Link];

    pub fn label(self) -> &'static str {
        match self {
            LoraTab::Select => "Choose Style",
            LoraTab::Upload => "Upload LoRA",
            LoraTab::Link => "Add LoRA Link",
        }
    }
}

/// Link sub-form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraft {
    pub name: String,
    pub url: String,
    pub strength: f32,
    /// Comma separated.
    pub trigger_words: String,
}

impl Default for LinkDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            strength: DEFAULT_LORA_STRENGTH,
            trigger_words: String::new(),
        }
    }
}

impl LinkDraft {
    pub fn strength_label(&self) -> String {
        format!("{:.2}", self.strength)
    }

    pub fn to_request(&self) -> Result<LinkLoraRequest, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingLinkUrl);
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidLinkScheme);
        }

        Ok(LinkLoraRequest {
            name: self.name.trim().to_string(),
            url: url.to_string(),
            strength: self.strength,
            trigger_words: self
                .trigger_words
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Field values posted by the generate form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateFields {
    pub playlist_url: String,
    pub mood: String,
    pub lora_name: String,
    pub lora_url: String,
}

impl GenerateFields {
    /// Form field names the server reads.
    pub fn as_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("playlist_url", &self.playlist_url),
            ("mood", &self.mood),
            ("lora_name", &self.lora_name),
            ("lora_url", &self.lora_url),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub playlist_url: String,
    pub mood: String,
    pub presets: PresetGroup,
    pub lora: LoraSource,
    pub tab: LoraTab,
    pub link: LinkDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    PlaylistUrlChanged(String),
    MoodChanged(String),
    PresetClicked(String),
    SavedLoraChosen(String),
    LoraUrlChanged(String),
    TabSelected(LoraTab),
    LinkNameChanged(String),
    LinkUrlChanged(String),
    LinkStrengthChanged(String),
    LinkTriggerWordsChanged(String),
}

impl FormState {
    pub fn from_seed(seed: &FormSeed) -> Self {
        Self {
            playlist_url: seed.playlist_url.clone(),
            mood: seed.mood.clone(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::PlaylistUrlChanged(text) => self.playlist_url = text,
            FormEvent::MoodChanged(text) => self.mood = text,
            FormEvent::PresetClicked(token) => {
                if let Some(text) = self.presets.apply(&token) {
                    self.mood = text.to_string();
                }
            }
            FormEvent::SavedLoraChosen(value) => self.lora = LoraSource::choose_saved(&value),
            FormEvent::LoraUrlChanged(text) => self.lora = LoraSource::enter_url(&text),
            FormEvent::TabSelected(tab) => self.tab = tab,
            FormEvent::LinkNameChanged(text) => self.link.name = text,
            FormEvent::LinkUrlChanged(text) => self.link.url = text,
            FormEvent::LinkStrengthChanged(raw) => {
                if let Ok(value) = raw.trim().parse::<f32>() {
                    self.link.strength = value.clamp(STRENGTH_MIN, STRENGTH_MAX);
                }
            }
            FormEvent::LinkTriggerWordsChanged(text) => self.link.trigger_words = text,
        }
    }

    pub fn playlist_class(&self) -> UrlClass {
        classify(&self.playlist_url)
    }

    pub fn is_preset_active(&self, token: PresetToken) -> bool {
        self.presets.is_active(token)
    }

    /// Fields for the full-page generate POST, refused unless the playlist
    /// URL classifies as valid.
    pub fn generate_fields(&self) -> Result<GenerateFields, ValidationError> {
        match self.playlist_class() {
            UrlClass::Empty => Err(ValidationError::MissingPlaylistUrl),
            UrlClass::Invalid => Err(ValidationError::InvalidPlaylistUrl),
            UrlClass::Valid => Ok(GenerateFields {
                playlist_url: self.playlist_url.trim().to_string(),
                mood: self.mood.trim().to_string(),
                lora_name: self.lora.dropdown_value().to_string(),
                lora_url: self.lora.url_text().trim().to_string(),
            }),
        }
    }
}
