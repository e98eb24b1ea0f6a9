use std::path::PathBuf;

/// A voice message that went through download and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedVoiceMessage {
    pub wav_path: PathBuf,
    /// Content type of the attachment it came from, when known.
    pub content_type: Option<String>,
}
