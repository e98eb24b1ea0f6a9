use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::DeleteError;

/// Random local name for a downloaded voice message: `msg-<uuid>.mp4`.
pub fn random_voice_file_name() -> String {
    format!("msg-{}.mp4", Uuid::new_v4())
}

/// Join a configured location onto the home folder. Either separator style is
/// accepted, and a leading separator does not make the location absolute.
pub fn resolve_under(home: &Path, relative: &str) -> PathBuf {
    relative
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .fold(home.to_path_buf(), |path, part| path.join(part))
}

/// `<target_folder>/<source name minus its last extension>.<extension>`, or
/// `None` when the source has no file name. Only the text after the last dot
/// is dropped, so a dot-file such as `.mp4` has an empty base name.
pub fn with_folder_and_extension(
    source: &Path,
    target_folder: &Path,
    extension: &str,
) -> Option<PathBuf> {
    let file_name = source.file_name()?.to_string_lossy();
    let base = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => &file_name[..],
    };
    Some(target_folder.join(format!("{}.{}", base, extension)))
}

/// Delete a single file, classifying the failure.
pub fn remove_file(path: &Path) -> Result<(), DeleteError> {
    std::fs::remove_file(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DeleteError::Missing(path.to_path_buf()),
        ErrorKind::PermissionDenied => DeleteError::PermissionDenied(path.to_path_buf()),
        _ => DeleteError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
