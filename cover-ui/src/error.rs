use thiserror::Error;

/// Local input problems. Display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a Spotify playlist or album URL.")]
    MissingPlaylistUrl,
    #[error("Please enter a valid Spotify playlist or album URL")]
    InvalidPlaylistUrl,
    #[error("Please select a file to upload")]
    MissingFile,
    #[error("Invalid file type. Please upload a .safetensors, .ckpt, or .pt file")]
    InvalidFileType,
    #[error("Please enter a LoRA URL")]
    MissingLinkUrl,
    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidLinkScheme,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// A response arrived but was not the expected JSON.
    #[error("{0}")]
    Decode(String),
    /// The server answered `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("request failed"))]
    Server(Option<String>),
    #[error("{0}")]
    Browser(String),
}

impl ActionError {
    /// Server-supplied error text, if this failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ActionError::Server(message) => message.as_deref(),
            _ => None,
        }
    }
}
