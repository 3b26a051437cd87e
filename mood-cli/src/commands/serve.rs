//! Run the feedback web app and JSON API

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mood_server::{MoodServer, ServerConfig};
use tracing::info;

use crate::config::ConfigLoader;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on [default: from config, else 8501]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to [default: from config, else 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs, data_file: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load()?;
    let server_config = server_config(args, data_file, config);

    info!(
        "Starting mood server on {}:{}",
        server_config.host, server_config.port
    );

    MoodServer::new(server_config).run().await?;
    Ok(())
}

/// Flags override the merged config file values
fn server_config(
    args: ServeArgs,
    data_file: Option<PathBuf>,
    config: crate::config::MoodConfig,
) -> ServerConfig {
    ServerConfig::new(
        args.host.unwrap_or(config.server.host),
        args.port.unwrap_or(config.server.port),
    )
    .with_data_file(data_file.unwrap_or(config.storage.data_file))
}
