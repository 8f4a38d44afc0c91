mod info;

pub use info::ExtensionInfo;

use crate::{
    config::RepositoryConfig,
    download,
    github::{BuilderExecutor, GithubClient, UploadError},
    source::{self, SourceError},
};
use std::path::Path;
use thiserror::Error;

const DEFAULT_URL_UPLOAD_PATH: &str = "project.pmp";
const DEFAULT_PICKED_UPLOAD_PATH: &str = "file.pmp";

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// The block handlers. Reporters answer with a string, and every failure
/// of an upload becomes an empty string after being logged.
pub struct ToolsExtension {
    config: RepositoryConfig,
    client: GithubClient,
}

impl ToolsExtension {
    pub fn new(config: RepositoryConfig, client: GithubClient) -> Self {
        ToolsExtension { config, client }
    }

    pub fn info() -> ExtensionInfo {
        ExtensionInfo::new()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn set_github_config(&mut self, token: &str, owner: &str, repo: &str, branch: &str) {
        self.config.set(token, owner, repo, branch);
        log::info!(
            "configured {}/{} on branch {}",
            self.config.owner,
            self.config.repo,
            self.config.branch
        );
    }

    pub async fn upload_project_from_url(&self, url: &str, path: &str) -> String {
        if !self.config.is_configured() {
            log::warn!("{}", UploadError::NotConfigured);
            return String::new();
        }

        reported(self.try_upload_from_url(url.trim(), path).await)
    }

    pub fn make_raw_url(&self, path: &str) -> String {
        self.client.repo(&self.config).raw_url(path.trim())
    }

    pub async fn download_file_from_url(&self, url: &str, filename: &str) {
        if let Err(err) = download::download(self.client.http(), url, filename).await {
            log::warn!("{}", err);
        }
    }

    pub async fn pick_and_upload_file(&self, picked: Option<&Path>, path: &str) -> String {
        if !self.config.is_configured() {
            log::warn!("{}", UploadError::NotConfigured);
            return String::new();
        }

        reported(self.try_upload_picked(picked, path).await)
    }

    async fn try_upload_from_url(&self, url: &str, path: &str) -> Result<String, Error> {
        let path = or_default(path, DEFAULT_URL_UPLOAD_PATH);

        let content = source::fetch_url(self.client.http(), url).await?;

        self.upload(&path, content, format!("Upload from URL to {}", path))
            .await
    }

    async fn try_upload_picked(&self, picked: Option<&Path>, path: &str) -> Result<String, Error> {
        let path = or_default(path, DEFAULT_PICKED_UPLOAD_PATH);

        let picked = picked.ok_or(SourceError::Cancelled)?;
        let file = source::read_file(picked).await?;
        let message = format!("Upload {} to {}", file.name, path);

        self.upload(&path, file.content, message).await
    }

    async fn upload(&self, path: &str, content: Vec<u8>, message: String) -> Result<String, Error> {
        let url = self
            .client
            .repo(&self.config)
            .upsert_file()
            .path(path)
            .message(message)
            .content(content)
            .execute()
            .await?;

        Ok(url)
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

fn reported(result: Result<String, Error>) -> String {
    result.unwrap_or_else(|err| {
        if matches!(err, Error::Source(SourceError::Cancelled)) {
            log::info!("{}", err);
        } else {
            log::warn!("{:#}", anyhow::Error::from(err));
        }
        String::new()
    })
}
