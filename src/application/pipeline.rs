use std::sync::Arc;

use crate::{
    api::CdnClient,
    config::MediaConfig,
    domain::{ProcessedVoiceMessage, Result},
    ffmpeg::{FfmpegEncoder, Transcoder},
};

use super::{AudioFileFormatConverter, IncomingVoiceMessage};

/// Download → convert → drop the intermediate MP4.
///
/// The WAV file stays on disk for the caller (usually speech-to-text) and is
/// theirs to delete.
#[derive(Clone)]
pub struct VoicePipeline {
    config: MediaConfig,
    client: CdnClient,
    transcoder: Arc<dyn Transcoder>,
}

impl VoicePipeline {
    pub fn new(config: MediaConfig) -> Self {
        let encoder = FfmpegEncoder::new(config.ffmpeg_binary_path());
        Self::with_transcoder(config, CdnClient::new(), Arc::new(encoder))
    }

    pub fn with_transcoder(
        config: MediaConfig,
        client: CdnClient,
        transcoder: Arc<dyn Transcoder>,
    ) -> Self {
        Self {
            config,
            client,
            transcoder,
        }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    pub async fn process(
        &self,
        mut message: IncomingVoiceMessage,
    ) -> Result<ProcessedVoiceMessage> {
        message.download_file(&self.client).await?;
        let mp4_path = message.local_path()?;

        let converted = match AudioFileFormatConverter::with_transcoder(
            &mp4_path,
            self.config.converted_audio_path(),
            self.transcoder.clone(),
        ) {
            Ok(mut converter) => converter.convert_mp4_to_wav().await,
            Err(e) => Err(e),
        };

        // The MP4 is only an intermediate; drop it whatever happened above.
        if !message.remove_from_disk() {
            log::warn!("Leaving {} behind", mp4_path.display());
        }

        let wav_path = converted?;
        Ok(ProcessedVoiceMessage {
            wav_path,
            content_type: message.content_type().map(str::to_string),
        })
    }
}
