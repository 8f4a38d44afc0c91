use crate::http::HttpClient;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no file was picked")]
    Cancelled,
    #[error("Failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Fetching {url} returned status {status}")]
    Fetch { url: String, status: u16 },
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

#[derive(Debug)]
pub struct PickedFile {
    pub name: String,
    pub content: Vec<u8>,
}

pub async fn fetch_url(http: &HttpClient, url: &str) -> Result<Vec<u8>, SourceError> {
    let transport = |cause| SourceError::Transport {
        url: url.to_owned(),
        cause,
    };

    let response = http.get(url).send().await.map_err(transport)?;
    let status = response.status();

    if !status.is_success() {
        return Err(SourceError::Fetch {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(transport)?;
    log::debug!("fetched {} bytes from {}", bytes.len(), url);

    Ok(bytes.to_vec())
}

pub async fn read_file(path: impl AsRef<Path>) -> Result<PickedFile, SourceError> {
    let path = path.as_ref();

    let content = tokio::fs::read(path)
        .await
        .map_err(|cause| SourceError::Read {
            path: path.to_path_buf(),
            cause,
        })?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(PickedFile { name, content })
}
