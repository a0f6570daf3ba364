//! Playlist URL classification, re-run on every input event.

use once_cell::sync::Lazy;
use regex::Regex;

static PLAYLIST_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"open\.spotify\.com/(playlist|album)/").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlClass {
    Empty,
    Valid,
    Invalid,
}

impl UrlClass {
    /// Visual classes for the input; the three states never overlap.
    pub fn css_class(self) -> &'static str {
        match self {
            UrlClass::Empty => "",
            UrlClass::Valid => "has-value valid",
            UrlClass::Invalid => "has-value invalid",
        }
    }
}

pub fn classify(raw: &str) -> UrlClass {
    let value = raw.trim();
    if value.is_empty() {
        UrlClass::Empty
    } else if PLAYLIST_URL.is_match(value) {
        UrlClass::Valid
    } else {
        UrlClass::Invalid
    }
}
