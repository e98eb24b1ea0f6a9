use std::path::{Path, PathBuf};

use url::Url;

use crate::{
    api::{CdnClient, MessageActivity},
    config::MediaConfig,
    domain::{DeleteError, MediaError, Result},
    utils::{random_voice_file_name, remove_file},
};

/// An inbound voice message whose audio lives on the platform's CDN as an
/// MP4 file, plus the local copy once it has been downloaded.
#[derive(Debug, Clone)]
pub struct IncomingVoiceMessage {
    url: Url,
    voice_message_folder: PathBuf,
    content_type: Option<String>,
    local_file_name: Option<String>,
}

impl IncomingVoiceMessage {
    pub fn new(url: &str, config: &MediaConfig) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(MediaError::Validation("The MP4 file URL was empty".to_string()));
        }

        Ok(Self {
            url: parse_url(url)?,
            voice_message_folder: config.voice_messages_path(),
            content_type: None,
            local_file_name: None,
        })
    }

    /// Build from the first audio or video attachment of `activity`.
    pub fn from_activity(activity: &MessageActivity, config: &MediaConfig) -> Result<Self> {
        let attachment = activity.voice_attachment().ok_or_else(|| {
            MediaError::NotFound("The message didn't have a voice attachment".to_string())
        })?;

        let url = attachment
            .content_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                MediaError::Validation(format!(
                    "The {} attachment has no content URL",
                    attachment.content_type
                ))
            })?;

        log::debug!("Voice attachment of type {}", attachment.content_type);

        Ok(Self {
            url: parse_url(url)?,
            voice_message_folder: config.voice_messages_path(),
            content_type: Some(attachment.content_type.clone()),
            local_file_name: None,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn voice_message_folder(&self) -> &Path {
        &self.voice_message_folder
    }

    /// Content type of the originating attachment. Devices differ here,
    /// so it is kept for diagnostics.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Download the MP4 into the voice message folder under a fresh random
    /// name and return that name (without the folder).
    pub async fn download_file(&mut self, client: &CdnClient) -> Result<String> {
        let file_name = random_voice_file_name();
        let path = self.voice_message_folder.join(&file_name);

        tokio::fs::create_dir_all(&self.voice_message_folder)
            .await
            .map_err(|source| MediaError::Io {
                path: self.voice_message_folder.clone(),
                source,
            })?;

        let bytes = client.download_to_file(&self.url, &path).await?;
        log::info!("Downloaded {} ({} bytes)", path.display(), bytes);

        self.local_file_name = Some(file_name.clone());
        Ok(file_name)
    }

    /// Full path of the downloaded file.
    pub fn local_path(&self) -> Result<PathBuf> {
        self.local_file_name
            .as_ref()
            .map(|name| self.voice_message_folder.join(name))
            .ok_or_else(|| {
                MediaError::InvalidState(
                    "The voice message has not been downloaded yet".to_string(),
                )
            })
    }

    pub fn delete_local_file(&self) -> std::result::Result<(), DeleteError> {
        let path = self.local_path().map_err(|_| DeleteError::NothingToDelete)?;
        remove_file(&path)
    }

    /// Best-effort removal of the downloaded file. `false` covers every
    /// failure, including "never downloaded".
    pub fn remove_from_disk(&self) -> bool {
        match self.delete_local_file() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not remove voice message: {}", e);
                false
            }
        }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|source| MediaError::Format {
        url: url.to_string(),
        source,
    })
}
