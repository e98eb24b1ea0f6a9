use std::path::{Path, PathBuf};

use crate::utils::resolve_under;

/// Where the media helpers find the encoder and put their files.
/// Every location except `home_folder` is relative to `home_folder`.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub home_folder: PathBuf,
    pub ffmpeg_binary_location: String,
    pub voice_messages_folder: String,
    pub converted_audio_folder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            home_folder: PathBuf::from("."),
            ffmpeg_binary_location: "bin/ffmpeg".to_string(),
            voice_messages_folder: "media/voice".to_string(),
            converted_audio_folder: "media/wav".to_string(),
        }
    }
}

impl MediaConfig {
    /// Load configuration from environment variables, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            home_folder: std::env::var_os("VOICEMSG_HOME")
                .map(PathBuf::from)
                .unwrap_or(defaults.home_folder),
            ffmpeg_binary_location: std::env::var("VOICEMSG_FFMPEG")
                .unwrap_or(defaults.ffmpeg_binary_location),
            voice_messages_folder: std::env::var("VOICEMSG_DOWNLOAD_DIR")
                .unwrap_or(defaults.voice_messages_folder),
            converted_audio_folder: std::env::var("VOICEMSG_CONVERTED_DIR")
                .unwrap_or(defaults.converted_audio_folder),
        }
    }

    pub fn with_home(home_folder: impl AsRef<Path>) -> Self {
        Self {
            home_folder: home_folder.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn ffmpeg_binary_path(&self) -> PathBuf {
        resolve_under(&self.home_folder, &self.ffmpeg_binary_location)
    }

    pub fn voice_messages_path(&self) -> PathBuf {
        resolve_under(&self.home_folder, &self.voice_messages_folder)
    }

    pub fn converted_audio_path(&self) -> PathBuf {
        resolve_under(&self.home_folder, &self.converted_audio_folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_under_home() {
        let config = MediaConfig {
            home_folder: PathBuf::from("/srv/bot"),
            ffmpeg_binary_location: "/bin/ffmpeg".to_string(),
            voice_messages_folder: "media/voice".to_string(),
            converted_audio_folder: "\\media\\wav".to_string(),
        };
        assert_eq!(config.ffmpeg_binary_path(), PathBuf::from("/srv/bot/bin/ffmpeg"));
        assert_eq!(config.voice_messages_path(), PathBuf::from("/srv/bot/media/voice"));
        assert_eq!(config.converted_audio_path(), PathBuf::from("/srv/bot/media/wav"));
    }

    #[test]
    fn test_with_home_keeps_default_locations() {
        let config = MediaConfig::with_home("/tmp/home");
        assert_eq!(config.home_folder, PathBuf::from("/tmp/home"));
        assert_eq!(config.ffmpeg_binary_location, "bin/ffmpeg");
    }
}
