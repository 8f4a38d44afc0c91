use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct FileShaResponse {
    #[serde(default)]
    pub sha: Option<String>,
}
