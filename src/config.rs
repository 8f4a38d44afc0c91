use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

const MAIN_BRANCH_NAME: &str = "main";
const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

pub const DEFAULT_CONFIG_FILE_NAME: &str = "ghtools.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default = "RepositoryConfig::default_branch")]
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            token: String::new(),
            owner: String::new(),
            repo: String::new(),
            branch: RepositoryConfig::default_branch(),
        }
    }
}

impl RepositoryConfig {
    pub fn new(
        token: impl AsRef<str>,
        owner: impl AsRef<str>,
        repo: impl AsRef<str>,
        branch: impl AsRef<str>,
    ) -> Self {
        let branch = branch.as_ref().trim();

        RepositoryConfig {
            token: token.as_ref().trim().to_owned(),
            owner: owner.as_ref().trim().to_owned(),
            repo: repo.as_ref().trim().to_owned(),
            branch: if branch.is_empty() {
                RepositoryConfig::default_branch()
            } else {
                branch.to_owned()
            },
        }
    }

    pub fn set(
        &mut self,
        token: impl AsRef<str>,
        owner: impl AsRef<str>,
        repo: impl AsRef<str>,
        branch: impl AsRef<str>,
    ) {
        *self = RepositoryConfig::new(token, owner, repo, branch);
    }

    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.owner.is_empty() && !self.repo.is_empty()
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<RepositoryConfig> {
        let path = path.as_ref();
        let fallback_token = env::var(TOKEN_ENV_VAR).ok();

        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return RepositoryConfig::from_yaml("{}", fallback_token);
        }

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        RepositoryConfig::from_yaml(&config_string, fallback_token)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_string = serde_yaml::to_string(self)?;

        tokio::fs::write(path, config_string)
            .await
            .with_context(|| format!("Cannot write config file {}", path.display()))?;

        Ok(())
    }

    fn from_yaml(contents: &str, fallback_token: Option<String>) -> Result<RepositoryConfig> {
        let config = serde_yaml::from_str::<RepositoryConfig>(contents)?;

        let token = if config.token.trim().is_empty() {
            fallback_token.unwrap_or_default()
        } else {
            config.token
        };

        Ok(RepositoryConfig::new(
            token,
            config.owner,
            config.repo,
            config.branch,
        ))
    }

    fn default_branch() -> String {
        MAIN_BRANCH_NAME.to_owned()
    }
}
