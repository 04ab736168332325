//! Command-line argument parsing for the mediahub CLI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the whole folder tree
    Tree,
    /// Print the breadcrumb trail of one folder
    Breadcrumbs { folder_id: String },
    /// Print where a folder (or asset) could be moved
    MoveTargets {
        item_id: String,
        from: Option<String>,
        asset: bool,
    },
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be parsed; carries the reason
    Invalid(String),
}

/// Parsed command line: global options plus the command.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// `--api-url` override
    pub api_url: Option<String>,
    pub command: CliCommand,
}

pub const USAGE: &str = "\
Usage: mediahub [--api-url URL] <command>

Commands:
  tree                                  Print the folder hierarchy
  breadcrumbs <folder-id>               Print the path from the top level to a folder
  move-targets <id> [--from <id>] [--asset]
                                        List valid destinations for moving a folder
                                        (or an asset with --asset)

Options:
  --api-url URL    API base URL (default: $MEDIAHUB_API_URL or http://localhost:8080/api)
  -V, --version    Print version
  -h, --help       Print this help";

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use mediahub::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mediahub".to_string(), "tree".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Tree);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut positional: Vec<String> = Vec::new();
    let mut from = None;
    let mut asset = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return with_url(api_url, CliCommand::Version),
            "--help" | "-h" => return with_url(api_url, CliCommand::Help),
            "--api-url" => match args.next() {
                Some(url) => api_url = Some(url),
                None => return invalid(api_url, "--api-url needs a value"),
            },
            "--from" => match args.next() {
                Some(id) => from = Some(id),
                None => return invalid(api_url, "--from needs a folder id"),
            },
            "--asset" => asset = true,
            other if other.starts_with("--api-url=") => {
                api_url = Some(other["--api-url=".len()..].to_string());
            }
            other if other.starts_with('-') => {
                return invalid(api_url, &format!("unknown option '{}'", other));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None => CliCommand::Help,
        Some("tree") => CliCommand::Tree,
        Some("breadcrumbs") => match positional.next() {
            Some(folder_id) => CliCommand::Breadcrumbs { folder_id },
            None => CliCommand::Invalid("breadcrumbs needs a folder id".to_string()),
        },
        Some("move-targets") => match positional.next() {
            Some(item_id) => CliCommand::MoveTargets {
                item_id,
                from,
                asset,
            },
            None => CliCommand::Invalid("move-targets needs an id".to_string()),
        },
        Some(other) => CliCommand::Invalid(format!("unknown command '{}'", other)),
    };

    with_url(api_url, command)
}

fn with_url(api_url: Option<String>, command: CliCommand) -> CliArgs {
    CliArgs { api_url, command }
}

fn invalid(api_url: Option<String>, reason: &str) -> CliArgs {
    with_url(api_url, CliCommand::Invalid(reason.to_string()))
}
