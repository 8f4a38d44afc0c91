mod builder;
pub mod repository_handler;

use super::github_client::GithubClient;
use crate::config::RepositoryConfig;
pub use builder::BuilderExecutor;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo<'a>(&'a self, config: &'a RepositoryConfig) -> RepositoryHandler<'a> {
        RepositoryHandler::new(self, config)
    }
}
