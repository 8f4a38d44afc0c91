use crate::{
    config::{RepositoryConfig, DEFAULT_CONFIG_FILE_NAME},
    extension::ToolsExtension,
    github::GithubClient,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dialoguer::Input;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghtools")]
#[command(about = "Upload files to a GitHub repository and build their raw URLs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Sets the level of verbosity (can be used multiple times)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store the token, owner, repo and branch used by every upload
    Configure {
        #[arg(long, default_value = "")]
        token: String,
        #[arg(long, default_value = "")]
        owner: String,
        #[arg(long, default_value = "")]
        repo: String,
        /// Defaults to main when blank
        #[arg(long, default_value = "")]
        branch: String,
    },
    /// Fetch a URL and upload its content
    UploadUrl {
        url: String,
        /// Destination path in the repository
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Upload a local file, asking for it when no file is given
    UploadFile {
        file: Option<PathBuf>,
        /// Destination path in the repository
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Print the raw URL of a repository path
    RawUrl { path: String },
    /// Download a URL to a local file
    Download {
        url: String,
        /// Defaults to the last segment of the URL
        #[arg(long, default_value = "")]
        filename: String,
    },
    /// Print the extension descriptor as JSON
    Info,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Info => {
            let info = serde_json::to_string_pretty(&ToolsExtension::info())?;
            println!("{}", info);
        }
        Command::Configure {
            token,
            owner,
            repo,
            branch,
        } => {
            // the previous file is replaced without being read
            let mut extension =
                ToolsExtension::new(RepositoryConfig::default(), GithubClient::new());
            extension.set_github_config(&token, &owner, &repo, &branch);
            extension
                .config()
                .save(&cli.config)
                .await
                .context("Cannot save config file")?;
            log::info!("saved config to {}", cli.config.display());
        }
        command => {
            let config = RepositoryConfig::load(&cli.config)
                .await
                .context("Cannot load config file")?;
            let extension = ToolsExtension::new(config, GithubClient::new());

            execute(&extension, command).await;
        }
    }

    Ok(())
}

async fn execute(extension: &ToolsExtension, command: Command) {
    match command {
        Command::UploadUrl { url, path } => {
            println!("{}", extension.upload_project_from_url(&url, &path).await);
        }
        Command::UploadFile { file, path } => {
            let picked = match file {
                Some(file) => Some(file),
                None if extension.config().is_configured() => prompt_for_file(),
                None => None,
            };
            println!(
                "{}",
                extension
                    .pick_and_upload_file(picked.as_deref(), &path)
                    .await
            );
        }
        Command::RawUrl { path } => {
            println!("{}", extension.make_raw_url(&path));
        }
        Command::Download { url, filename } => {
            extension.download_file_from_url(&url, &filename).await;
        }
        Command::Info | Command::Configure { .. } => {}
    }
}

fn prompt_for_file() -> Option<PathBuf> {
    picked_path(
        Input::<String>::new()
            .with_prompt("File to upload")
            .allow_empty(true)
            .interact_text(),
    )
}

// A blank answer or a prompt that cannot be shown both count as cancelled
fn picked_path(answer: dialoguer::Result<String>) -> Option<PathBuf> {
    let answer = match answer {
        Ok(answer) => answer,
        Err(err) => {
            log::warn!("Cannot prompt for a file: {}", err);
            return None;
        }
    };

    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    Some(PathBuf::from(answer))
}
