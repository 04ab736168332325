//! CLI module for mediahub.
//!
//! Argument parsing, the read-only folder commands, and version display.
//!
//! # Usage
//!
//! ```ignore
//! use mediahub::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args());
//! let output = run_cli_command(args, config).await?;
//! println!("{}", output);
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use crate::adapters::ReqwestHttpClient;
use crate::api::FolderApiClient;
use crate::config::ClientConfig;
use crate::hierarchy::MoveSubject;

/// Run a parsed command against the configured backend and return what
/// should be printed.
pub async fn run_cli_command(args: CliArgs, config: ClientConfig) -> Result<String> {
    let config = match args.api_url {
        Some(url) => config.with_api_url(url),
        None => config,
    };

    match args.command {
        CliCommand::Version => Ok(version_line()),
        CliCommand::Help => Ok(USAGE.to_string()),
        CliCommand::Invalid(reason) => Err(eyre!("{}\n\n{}", reason, USAGE)),
        CliCommand::Tree => commands::tree(&connect(&config)?).await,
        CliCommand::Breadcrumbs { folder_id } => {
            let client = connect(&config)?;
            Ok(commands::breadcrumbs(&client, &folder_id, config.max_breadcrumb_depth).await)
        }
        CliCommand::MoveTargets {
            item_id,
            from,
            asset,
        } => {
            let subject = if asset {
                MoveSubject::Asset(item_id)
            } else {
                MoveSubject::Folder(item_id)
            };
            commands::move_targets(&connect(&config)?, subject, from.as_deref()).await
        }
    }
}

fn connect(config: &ClientConfig) -> Result<FolderApiClient<ReqwestHttpClient>> {
    let client = FolderApiClient::from_config(config).wrap_err("failed to build HTTP client")?;
    tracing::debug!(api_url = %client.base_url, "using API");
    Ok(client)
}
