use super::BuilderExecutor;
use crate::{
    config::RepositoryConfig,
    github::{github_client::GithubClient, UploadError, UploadRequest},
};

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    config: &'a RepositoryConfig,
    path: String,
    commit_message: String,
    content: Vec<u8>,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(client: &'a GithubClient, config: &'a RepositoryConfig) -> Self {
        UpsertFileBuilder {
            client,
            config,
            path: String::new(),
            commit_message: String::new(),
            content: Vec::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = String;
    type Error = UploadError;

    async fn execute(self) -> Result<Self::Output, Self::Error> {
        let request = UploadRequest::new(self.path, self.content, self.commit_message);

        self.client.upsert_file(self.config, request).await
    }
}
