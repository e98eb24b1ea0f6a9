use serde::Deserialize;

/// A media reference attached to an inbound chat message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    #[serde(rename = "contentType", default)]
    pub content_type: String,
    #[serde(rename = "contentUrl", default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Attachment {
    /// Devices disagree on the type of a voice note (`video/mp4`, `audio/aac`,
    /// ...), so anything audio or video qualifies.
    pub fn is_voice(&self) -> bool {
        self.content_type == "video/mp4"
            || self.content_type.contains("audio")
            || self.content_type.contains("video")
    }
}

/// Inbound message activity as delivered by the messaging platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageActivity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
}

impl MessageActivity {
    /// First attachment that looks like a voice message.
    pub fn voice_attachment(&self) -> Option<&Attachment> {
        self.attachments.as_deref()?.iter().find(|a| a.is_voice())
    }
}
