pub mod dto;
pub mod github_client;
pub mod handler;
mod macros;
mod request;
mod response;

pub use dto::upload_request::UploadRequest;
pub use github_client::GithubClient;
pub use handler::BuilderExecutor;

use crate::http;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("repository is not configured, token, owner and repo are required")]
    NotConfigured,
    #[error("GitHub rejected the write to {path} with status {status}: {message}")]
    Rejected {
        path: String,
        status: u16,
        message: String,
    },
    #[error("request to GitHub failed")]
    Http(#[from] http::Error),
    #[error("Failed to serialize the upload request")]
    Serialize(#[from] serde_json::Error),
}
