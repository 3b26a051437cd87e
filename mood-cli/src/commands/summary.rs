//! Per-label counts over the stored log

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use mood_core::SentimentSummary;

use super::{NO_FEEDBACK, header_cell, open_service, sentiment_cell};

pub fn run(data_file: Option<PathBuf>) -> Result<()> {
    let summary = open_service(data_file)?.summary()?;

    if summary.is_empty() {
        println!("{NO_FEEDBACK}");
        return Ok(());
    }

    println!("{}", summary_table(&summary));
    Ok(())
}

fn summary_table(summary: &SentimentSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Sentiment"), header_cell("Count")]);

    for count in summary.iter() {
        table.add_row(vec![sentiment_cell(count.sentiment), Cell::new(count.count)]);
    }
    table.add_row(vec![Cell::new("Total"), Cell::new(summary.total())]);

    table
}
