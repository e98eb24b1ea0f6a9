use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    config::MediaConfig,
    domain::{DeleteError, MediaError, Result},
    ffmpeg::{FfmpegEncoder, Transcoder},
    utils::{remove_file, with_folder_and_extension},
};

/// Converts one source file into WAV inside a target folder.
/// The converted file keeps the source's base name.
pub struct AudioFileFormatConverter {
    source_path: PathBuf,
    target_folder: PathBuf,
    converted_path: Option<PathBuf>,
    transcoder: Arc<dyn Transcoder>,
}

impl AudioFileFormatConverter {
    /// Uses the ffmpeg binary configured in `config`.
    pub fn new(
        source_path: impl AsRef<Path>,
        target_folder: impl AsRef<Path>,
        config: &MediaConfig,
    ) -> Result<Self> {
        let encoder = FfmpegEncoder::new(config.ffmpeg_binary_path());
        Self::with_transcoder(source_path, target_folder, Arc::new(encoder))
    }

    /// Creates `target_folder` right away if it does not exist.
    pub fn with_transcoder(
        source_path: impl AsRef<Path>,
        target_folder: impl AsRef<Path>,
        transcoder: Arc<dyn Transcoder>,
    ) -> Result<Self> {
        let source_path = source_path.as_ref();
        let target_folder = target_folder.as_ref();

        if is_blank(source_path) {
            return Err(MediaError::Validation("Empty source filename".to_string()));
        }
        if is_blank(target_folder) {
            return Err(MediaError::Validation("Empty target path".to_string()));
        }
        if source_path.file_name().is_none() {
            return Err(MediaError::Validation(format!(
                "Source path {} has no file name",
                source_path.display()
            )));
        }

        std::fs::create_dir_all(target_folder).map_err(|source| MediaError::Io {
            path: target_folder.to_path_buf(),
            source,
        })?;

        Ok(Self {
            source_path: source_path.to_path_buf(),
            target_folder: target_folder.to_path_buf(),
            converted_path: None,
            transcoder,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn target_folder(&self) -> &Path {
        &self.target_folder
    }

    /// Set once a conversion has been attempted.
    pub fn converted_path(&self) -> Option<&Path> {
        self.converted_path.as_deref()
    }

    /// Convert the source MP4 into `<target folder>/<stem>.wav` and return
    /// that path.
    pub async fn convert_mp4_to_wav(&mut self) -> Result<PathBuf> {
        let output = with_folder_and_extension(&self.source_path, &self.target_folder, "wav")
            .ok_or_else(|| {
                MediaError::Validation(format!(
                    "Source path {} has no file name",
                    self.source_path.display()
                ))
            })?;
        self.converted_path = Some(output.clone());

        self.transcoder.convert(&self.source_path, &output).await?;
        log::info!(
            "Converted {} -> {}",
            self.source_path.display(),
            output.display()
        );

        Ok(output)
    }

    /// Deletes the converted file. The source file is never touched.
    pub fn delete_target_file(&self) -> std::result::Result<(), DeleteError> {
        let path = self
            .converted_path
            .as_deref()
            .ok_or(DeleteError::NothingToDelete)?;
        remove_file(path)
    }

    /// `InvalidState` before any conversion; afterwards `true` when the file
    /// was deleted, `false` for any deletion failure.
    pub fn remove_target_file_from_disk(&self) -> Result<bool> {
        if self.converted_path.is_none() {
            return Err(MediaError::InvalidState(
                "The file has not been converted yet, so it cannot be deleted".to_string(),
            ));
        }

        match self.delete_target_file() {
            Ok(()) => Ok(true),
            Err(e) => {
                log::warn!("Could not remove converted file: {}", e);
                Ok(false)
            }
        }
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
