use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mood", about = "Student feedback sentiment analyzer")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Feedback log to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Score the built-in worked examples
    Examples,
    /// Write the feedback log as CSV
    Export(commands::export::ExportArgs),
    /// List stored feedback
    List,
    /// Run the mood web app
    Serve(commands::serve::ServeArgs),
    /// Analyze and store one piece of feedback
    Submit(commands::submit::SubmitArgs),
    /// Count stored feedback per sentiment
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Examples => commands::examples::run(),
        Commands::Export(args) => commands::export::run(args, cli.data_file),
        Commands::List => commands::list::run(cli.data_file),
        Commands::Serve(args) => commands::serve::run(args, cli.data_file).await,
        Commands::Submit(args) => commands::submit::run(args, cli.data_file),
        Commands::Summary => commands::summary::run(cli.data_file),
    }
}
