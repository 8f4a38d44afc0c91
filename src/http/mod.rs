use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;
use thiserror::Error;

const GITHUB_JSON: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const AGENT: &str = "ghtools";

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
    fn json_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, GITHUB_JSON)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, AGENT)
    }

    fn json_headers(self, token: &str) -> RequestBuilder {
        self.default_headers(token)
            .header(CONTENT_TYPE, "application/json")
    }
}

#[allow(async_fn_in_trait)]
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|err| format!("Failed to read response text: {}", err));

            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
