use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use mediahub::cli::{parse_args, run_cli_command, version_line, CliCommand};
use mediahub::config::ClientConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mediahub=info"));
    // Logs go to stderr so command output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args());

    // Handle --version before any initialization
    if args.command == CliCommand::Version {
        println!("{}", version_line());
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();

    let config = ClientConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let runtime = tokio::runtime::Runtime::new()?;
    let output = runtime.block_on(run_cli_command(args, config))?;
    println!("{}", output);
    Ok(())
}
