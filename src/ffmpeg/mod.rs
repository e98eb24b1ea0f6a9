use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

// On Windows ensure the spawned encoder doesn't flash a console window
#[cfg(target_os = "windows")]
use std::os::windows::process::CommandExt as _;
#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x08000000;

#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Failed to spawn '{}': {source}", .binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoder exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
}

/// Something that can turn one media file into another.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), EncoderError>;
}

/// Runs a pre-built ffmpeg binary with its default conversion settings.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    binary: PathBuf,
}

impl FfmpegEncoder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-nostdin")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg(output);
        #[cfg(target_os = "windows")]
        {
            cmd.creation_flags(CREATE_NO_WINDOW);
        }
        cmd
    }
}

#[async_trait]
impl Transcoder for FfmpegEncoder {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), EncoderError> {
        log::debug!(
            "Running {} on {} -> {}",
            self.binary.display(),
            input.display(),
            output.display()
        );

        let result = self
            .command(input, output)
            .output()
            .await
            .map_err(|source| EncoderError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(EncoderError::Failed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
