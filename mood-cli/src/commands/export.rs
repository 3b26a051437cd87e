//! Write the log as CSV, byte-for-byte what the download endpoint serves

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::open_service;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, data_file: Option<PathBuf>) -> Result<()> {
    let csv = open_service(data_file)?.export_csv()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &csv)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Exported feedback to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&csv)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
