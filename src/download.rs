use crate::http::HttpClient;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::{fs::File, io::AsyncWriteExt};
use tokio_stream::{Stream, StreamExt};

const DEFAULT_FILE_NAME: &str = "download";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Failed to download {url}")]
    Transport {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Downloading {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

pub async fn download(
    http: &HttpClient,
    url: &str,
    filename: &str,
) -> Result<PathBuf, DownloadError> {
    let url = url.trim();
    let path = PathBuf::from(file_name_for(url, filename));

    let transport = |cause| DownloadError::Transport {
        url: url.to_owned(),
        cause,
    };

    let response = http.get(url).send().await.map_err(transport)?;
    let status = response.status();

    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let stream = response
        .bytes_stream()
        .map(|chunk| chunk.map_err(transport));

    let written = save_stream(stream, &path).await?;
    log::info!("downloaded {} bytes to {}", written, path.display());

    Ok(path)
}

// A failed transfer never leaves a truncated file behind
async fn save_stream<S, B>(stream: S, path: &Path) -> Result<usize, DownloadError>
where
    S: Stream<Item = Result<B, DownloadError>>,
    B: AsRef<[u8]>,
{
    let result = write_stream(stream, path).await;

    if result.is_err() {
        if let Err(err) = tokio::fs::remove_file(path).await {
            log::debug!("cannot remove {}: {}", path.display(), err);
        }
    }

    result
}

async fn write_stream<S, B>(stream: S, path: &Path) -> Result<usize, DownloadError>
where
    S: Stream<Item = Result<B, DownloadError>>,
    B: AsRef<[u8]>,
{
    let write = |cause| DownloadError::Write {
        path: path.to_path_buf(),
        cause,
    };

    let mut file = File::create(path).await.map_err(write)?;
    let mut written = 0;

    tokio::pin!(stream);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(chunk.as_ref()).await.map_err(write)?;
        written += chunk.as_ref().len();
    }

    file.flush().await.map_err(write)?;

    Ok(written)
}

fn file_name_for(url: &str, filename: &str) -> String {
    let filename = filename.trim();
    if !filename.is_empty() {
        return filename.to_owned();
    }

    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = without_scheme
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default();

    without_query
        .split_once('/')
        .and_then(|(_, path)| path.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned())
}
