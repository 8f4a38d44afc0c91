use super::builder::upsert_file_builder::UpsertFileBuilder;
use crate::{config::RepositoryConfig, github::github_client::GithubClient};

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    config: &'a RepositoryConfig,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, config: &'a RepositoryConfig) -> Self {
        RepositoryHandler { client, config }
    }

    pub fn upsert_file(&self) -> UpsertFileBuilder<'a> {
        UpsertFileBuilder::new(self.client, self.config)
    }

    pub fn raw_url(&self, path: &str) -> String {
        self.client.raw_url(self.config, path)
    }
}
