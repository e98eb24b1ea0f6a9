use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use url::Url;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Fetches attachment bodies from the messaging platform's CDN.
#[derive(Clone, Default)]
pub struct CdnClient {
    client: Client,
}

impl CdnClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` and write the whole body to `path`.
    /// Returns the number of bytes written. A partially written file is
    /// removed before the error is returned.
    pub async fn download_to_file(&self, url: &Url, path: &Path) -> Result<u64> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|source| ApiError::WriteError {
                path: path.to_path_buf(),
                source,
            })?;

        let result = write_body(&mut file, response, path).await;
        match result {
            Ok(written) => Ok(written),
            Err(e) => {
                drop(file);
                if let Err(cleanup) = tokio::fs::remove_file(path).await {
                    log::warn!(
                        "Could not remove partial download {}: {}",
                        path.display(),
                        cleanup
                    );
                }
                Err(e)
            }
        }
    }
}

async fn write_body(file: &mut tokio::fs::File, response: Response, path: &Path) -> Result<u64> {
    let write_err = |source: std::io::Error| ApiError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut stream = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.try_next().await? {
        file.write_all(&chunk).await.map_err(write_err)?;
        written += chunk.len() as u64;
    }

    // Flush remaining data to disk
    file.sync_all().await.map_err(write_err)?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_writes_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/clip.mp4")
            .with_status(200)
            .with_header("content-type", "video/mp4")
            .with_body(b"\x00\x00\x00\x18ftypmp42")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mp4");
        let url = Url::parse(&format!("{}/clip.mp4", server.url())).unwrap();

        let written = CdnClient::new().download_to_file(&url, &path).await.unwrap();

        mock.assert_async().await;
        assert_eq!(written, 12);
        assert_eq!(std::fs::read(&path).unwrap(), b"\x00\x00\x00\x18ftypmp42");
    }

    #[tokio::test]
    async fn test_download_error_status_creates_no_file() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gone.mp4")
            .with_status(404)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mp4");
        let url = Url::parse(&format!("{}/gone.mp4", server.url())).unwrap();

        let err = CdnClient::new()
            .download_to_file(&url, &path)
            .await
            .unwrap_err();

        match err {
            ApiError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_download_into_missing_folder_fails_to_write() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/clip.mp4")
            .with_status(200)
            .with_body("data")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.mp4");
        let url = Url::parse(&format!("{}/clip.mp4", server.url())).unwrap();

        let err = CdnClient::new()
            .download_to_file(&url, &path)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::WriteError { .. }));
    }
}
