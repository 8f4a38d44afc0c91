use serde::{ser::SerializeMap, Serialize, Serializer};

const EXTENSION_ID: &str = "githubToolsRoot";
const EXTENSION_NAME: &str = "GitHub Tools (Root)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Command,
    Reporter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(rename = "type")]
    pub argument_type: ArgumentType,
    pub default_value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub opcode: String,
    pub block_type: BlockType,
    pub text: String,
    #[serde(serialize_with = "serialize_arguments")]
    pub arguments: Vec<(String, Argument)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub blocks: Vec<Block>,
}

fn serialize_arguments<S>(arguments: &[(String, Argument)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(arguments.len()))?;
    for (name, argument) in arguments {
        map.serialize_entry(name, argument)?;
    }
    map.end()
}

impl Block {
    fn new(opcode: &str, block_type: BlockType, text: &str, arguments: &[(&str, &str)]) -> Self {
        Block {
            opcode: opcode.to_owned(),
            block_type,
            text: text.to_owned(),
            arguments: arguments
                .iter()
                .map(|(name, default_value)| {
                    (
                        (*name).to_owned(),
                        Argument {
                            argument_type: ArgumentType::String,
                            default_value: (*default_value).to_owned(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl ExtensionInfo {
    pub fn new() -> Self {
        ExtensionInfo {
            id: EXTENSION_ID.to_owned(),
            name: EXTENSION_NAME.to_owned(),
            color1: "#4C8EDA".to_owned(),
            color2: "#3A6AA8".to_owned(),
            color3: "#2B4E7A".to_owned(),
            blocks: vec![
                Block::new(
                    "setGitHubConfig",
                    BlockType::Command,
                    "set GitHub token [TOKEN] owner [OWNER] repo [REPO] branch [BRANCH]",
                    &[
                        ("TOKEN", "ghp_..."),
                        ("OWNER", "vbscode123"),
                        ("REPO", "penguinmod-projects"),
                        ("BRANCH", "main"),
                    ],
                ),
                Block::new(
                    "uploadProjectFromUrl",
                    BlockType::Reporter,
                    "upload file from URL [URL] as [PATH]",
                    &[
                        ("URL", "https://example.com/project.pmp"),
                        ("PATH", "project.pmp"),
                    ],
                ),
                Block::new(
                    "makeRawUrl",
                    BlockType::Reporter,
                    "raw GitHub URL for [PATH]",
                    &[("PATH", "project.pmp")],
                ),
                Block::new(
                    "downloadFileFromUrl",
                    BlockType::Command,
                    "download URL [URL] as [FILENAME]",
                    &[
                        ("URL", "https://raw.githubusercontent.com/..."),
                        ("FILENAME", "project.pmp"),
                    ],
                ),
                Block::new(
                    "pickAndUploadFile",
                    BlockType::Reporter,
                    "pick file and upload as [PATH]",
                    &[("PATH", "file.pmp")],
                ),
            ],
        }
    }
}

impl Default for ExtensionInfo {
    fn default() -> Self {
        ExtensionInfo::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_every_block() {
        let info = ExtensionInfo::new();

        let opcodes: Vec<&str> = info.blocks.iter().map(|b| b.opcode.as_str()).collect();

        assert_eq!(info.id, "githubToolsRoot");
        assert_eq!(
            opcodes,
            vec![
                "setGitHubConfig",
                "uploadProjectFromUrl",
                "makeRawUrl",
                "downloadFileFromUrl",
                "pickAndUploadFile"
            ]
        );
    }

    #[test]
    fn should_serialize_in_host_shape() -> anyhow::Result<()> {
        let value = serde_json::to_value(ExtensionInfo::new())?;

        let raw_url = &value["blocks"][2];
        assert_eq!(raw_url["blockType"], "reporter");
        assert_eq!(raw_url["arguments"]["PATH"]["type"], "string");
        assert_eq!(raw_url["arguments"]["PATH"]["defaultValue"], "project.pmp");

        Ok(())
    }

    #[test]
    fn should_keep_argument_order_of_block_text() -> anyhow::Result<()> {
        let json = serde_json::to_string(&ExtensionInfo::new().blocks[0])?;

        let positions: Vec<usize> = ["\"TOKEN\":", "\"OWNER\":", "\"REPO\":", "\"BRANCH\":"]
            .iter()
            .filter_map(|name| json.find(name))
            .collect();

        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        Ok(())
    }
}
