use super::{
    request::{SerializeRequest, UpsertFileRequest},
    response::{FileShaResponse, UpsertFileResponse},
    UploadError, UploadRequest,
};
use crate::{config::RepositoryConfig, encoding, get, http, http::HttpClient, put};

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

#[derive(Clone, Debug)]
pub struct GithubClient {
    http: HttpClient,
    api_base: String,
    raw_base: String,
}

impl Default for GithubClient {
    fn default() -> Self {
        GithubClient::new()
    }
}

impl GithubClient {
    pub fn new() -> Self {
        GithubClient::with_base_urls(GITHUB_API_URL, GITHUB_RAW_URL)
    }

    pub fn with_base_urls(api_base: impl Into<String>, raw_base: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_base: api_base.into().trim_end_matches('/').to_owned(),
            raw_base: raw_base.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn api_url(&self, config: &RepositoryConfig, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base,
            config.owner,
            config.repo,
            urlencoding::encode(path)
        )
    }

    pub fn raw_url(&self, config: &RepositoryConfig, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base, config.owner, config.repo, config.branch, path
        )
    }

    /// Creates or overwrites `request.path` and returns its raw URL.
    pub async fn upsert_file(
        &self,
        config: &RepositoryConfig,
        request: UploadRequest,
    ) -> Result<String, UploadError> {
        if !config.is_configured() {
            return Err(UploadError::NotConfigured);
        }

        let uri = self.api_url(config, &request.path);
        let content = encoding::encode(&request.content);

        let sha = self.get_file_sha(config, &uri).await?;

        if sha.is_some() {
            log::debug!("updating file {}", request.path);
        } else {
            log::debug!("creating new file {}", request.path);
        }

        let body = UpsertFileRequest::new(request.message, content, &config.branch, sha)
            .into_request()?;

        let response = match put!(self.http, &uri, &config.token, body) {
            Ok(response) => response,
            Err(http::Error::GenericResponseError { status, message }) => {
                return Err(UploadError::Rejected {
                    path: request.path,
                    status,
                    message,
                })
            }
            Err(err) => return Err(err.into()),
        };

        if let Ok(written) = serde_json::from_str::<UpsertFileResponse>(&response) {
            log::info!("committed {} at {}", written.content.path, written.content.sha);
        }

        Ok(self.raw_url(config, &request.path))
    }

    async fn get_file_sha(
        &self,
        config: &RepositoryConfig,
        uri: &str,
    ) -> Result<Option<String>, UploadError> {
        let response = match get!(self.http, uri, &config.token) {
            Ok(response) => response,
            Err(http::Error::GenericResponseError { status, .. }) => {
                log::debug!("no existing file at {} (status {})", uri, status);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        // directories come back as arrays and carry no sha
        let value = serde_json::from_str::<serde_json::Value>(&response)
            .map_err(|cause| http::Error::ParseResponseError { cause })?;

        let sha = serde_json::from_value::<FileShaResponse>(value)
            .ok()
            .and_then(|file| file.sha)
            .filter(|sha| !sha.is_empty());

        Ok(sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn config() -> RepositoryConfig {
        RepositoryConfig::new("t", "o", "r", "main")
    }

    #[test]
    fn should_build_raw_url() {
        let client = GithubClient::new();

        assert_eq!(
            client.raw_url(&config(), "dir/project.pmp"),
            "https://raw.githubusercontent.com/o/r/main/dir/project.pmp"
        );
    }

    #[test]
    fn should_use_main_for_blank_branch() {
        let client = GithubClient::new();
        let mut config = config();
        config.set("t", "o", "r", "");

        assert_eq!(
            client.raw_url(&config, "a.txt"),
            "https://raw.githubusercontent.com/o/r/main/a.txt"
        );
    }

    #[test]
    fn should_encode_whole_path_in_api_url() {
        let client = GithubClient::new();

        assert_eq!(
            client.api_url(&config(), "dir/my file.txt"),
            "https://api.github.com/repos/o/r/contents/dir%2Fmy%20file.txt"
        );
    }

    #[tokio::test]
    async fn should_not_call_github_when_not_configured() -> Result<()> {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        let result = client
            .upsert_file(
                &RepositoryConfig::default(),
                UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"),
            )
            .await;

        m.assert_async().await;
        assert!(matches!(result, Err(UploadError::NotConfigured)));

        Ok(())
    }

    #[tokio::test]
    async fn should_create_file_without_sha() -> Result<()> {
        let mut server = Server::new_async().await;
        let get = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .match_header("authorization", "Bearer t")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/repos/o/r/contents/hello.txt")
            .match_header("authorization", "Bearer t")
            .match_body(Matcher::Json(json!({
                "message": "add hello",
                "content": "aGk=",
                "branch": "main"
            })))
            .with_status(201)
            .with_body(r#"{"content":{"name":"hello.txt","path":"hello.txt","sha":"def456"}}"#)
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        let url = client
            .upsert_file(
                &config(),
                UploadRequest::new("hello.txt", vec![104, 105], "add hello"),
            )
            .await?;

        get.assert_async().await;
        put.assert_async().await;
        assert_eq!(url, "https://raw.githubusercontent.com/o/r/main/hello.txt");

        Ok(())
    }

    #[tokio::test]
    async fn should_send_existing_sha_when_overwriting() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .with_status(200)
            .with_body(r#"{"name":"hello.txt","path":"hello.txt","sha":"abc123"}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/repos/o/r/contents/hello.txt")
            .match_body(Matcher::Json(json!({
                "message": "update hello",
                "content": "aGk=",
                "branch": "main",
                "sha": "abc123"
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        let url = client
            .upsert_file(
                &config(),
                UploadRequest::new("hello.txt", b"hi".to_vec(), "update hello"),
            )
            .await?;

        put.assert_async().await;
        assert_eq!(url, "https://raw.githubusercontent.com/o/r/main/hello.txt");

        Ok(())
    }

    #[tokio::test]
    async fn should_treat_any_failed_lookup_as_new_file() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .with_status(500)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/repos/o/r/contents/hello.txt")
            .match_body(Matcher::Json(json!({
                "message": "msg",
                "content": "aGk=",
                "branch": "main"
            })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        client
            .upsert_file(&config(), UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"))
            .await?;

        put.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_lookup_body_is_not_json() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;
        let put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        let result = client
            .upsert_file(&config(), UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"))
            .await;

        put.assert_async().await;
        assert!(matches!(
            result,
            Err(UploadError::Http(http::Error::ParseResponseError { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn should_create_file_when_lookup_is_a_directory() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .with_status(200)
            .with_body(r#"[{"name":"a.txt","sha":"abc123"}]"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/repos/o/r/contents/hello.txt")
            .match_body(Matcher::Json(json!({
                "message": "msg",
                "content": "aGk=",
                "branch": "main"
            })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        client
            .upsert_file(&config(), UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"))
            .await?;

        put.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_report_rejected_write() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/contents/hello.txt")
            .with_status(404)
            .create_async()
            .await;
        let _mock = server
            .mock("PUT", "/repos/o/r/contents/hello.txt")
            .with_status(409)
            .with_body("conflict")
            .create_async()
            .await;

        let client = GithubClient::with_base_urls(server.url(), GITHUB_RAW_URL);
        let result = client
            .upsert_file(&config(), UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"))
            .await;

        match result {
            Err(UploadError::Rejected {
                path,
                status,
                message,
            }) => {
                assert_eq!(path, "hello.txt");
                assert_eq!(status, 409);
                assert_eq!(message, "conflict");
            }
            other => panic!("unexpected result {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_github_is_unreachable() {
        let client = GithubClient::with_base_urls("http://127.0.0.1:1", GITHUB_RAW_URL);

        let result = client
            .upsert_file(&config(), UploadRequest::new("hello.txt", b"hi".to_vec(), "msg"))
            .await;

        assert!(matches!(result, Err(UploadError::Http(_))));
    }
}
