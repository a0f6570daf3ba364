//! Canned mood presets. One preset is active at a time; the last click wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetToken {
    Minimalist,
    HighContrast,
    Retro,
    BoldColors,
}

impl PresetToken {
    pub const ALL: [PresetToken; 4] = [
        PresetToken::Minimalist,
        PresetToken::HighContrast,
        PresetToken::Retro,
        PresetToken::BoldColors,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "minimalist" => Some(PresetToken::Minimalist),
            "high-contrast" => Some(PresetToken::HighContrast),
            "retro" => Some(PresetToken::Retro),
            "bold-colors" => Some(PresetToken::BoldColors),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PresetToken::Minimalist => "minimalist",
            PresetToken::HighContrast => "high-contrast",
            PresetToken::Retro => "retro",
            PresetToken::BoldColors => "bold-colors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresetToken::Minimalist => "Minimalist",
            PresetToken::HighContrast => "High Contrast",
            PresetToken::Retro => "Retro",
            PresetToken::BoldColors => "Bold Colors",
        }
    }

    /// Text written into the mood field.
    pub fn mood_text(self) -> &'static str {
        match self {
            PresetToken::Minimalist => "clean minimalist design with subtle colors",
            PresetToken::HighContrast => "bold high contrast design with striking visuals",
            PresetToken::Retro => "vintage retro aesthetic with analog texture",
            PresetToken::BoldColors => "vibrant colorful design with bold typography",
        }
    }
}

/// Single-select toggle group over [`PresetToken`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetGroup {
    active: Option<PresetToken>,
}

impl PresetGroup {
    pub fn active(&self) -> Option<PresetToken> {
        self.active
    }

    pub fn is_active(&self, token: PresetToken) -> bool {
        self.active == Some(token)
    }

    /// Activate `token` and return its mood text. Unknown tokens change nothing.
    pub fn apply(&mut self, token: &str) -> Option<&'static str> {
        let preset = PresetToken::parse(token)?;
        self.active = Some(preset);
        Some(preset.mood_text())
    }
}
