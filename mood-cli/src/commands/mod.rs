pub mod config;
pub mod examples;
pub mod export;
pub mod list;
pub mod serve;
pub mod submit;
pub mod summary;

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Color};
use mood_core::{FeedbackService, FeedbackStore, Sentiment};
use tracing::debug;

use crate::config::ConfigLoader;

/// Message shown when the log has no rows
pub const NO_FEEDBACK: &str = "No feedback available yet.";

/// Resolve the feedback log location. `--data-file` wins over config.
pub fn resolve_data_file(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => Ok(ConfigLoader::load()?.storage.data_file),
    }
}

/// Open the feedback service over the resolved log
pub fn open_service(flag: Option<PathBuf>) -> Result<FeedbackService> {
    let path = resolve_data_file(flag)?;
    debug!(data_file = %path.display(), "opening feedback log");
    Ok(FeedbackService::new(FeedbackStore::open(path)))
}

fn header_cell(title: &str) -> Cell {
    Cell::new(title).fg(Color::Cyan)
}

fn sentiment_cell(sentiment: Sentiment) -> Cell {
    let color = match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Neutral => Color::Yellow,
        Sentiment::Negative => Color::Red,
    };
    Cell::new(sentiment).fg(color)
}
