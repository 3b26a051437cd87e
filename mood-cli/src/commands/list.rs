//! Show every stored submission

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use mood_core::{FeedbackRecord, TIMESTAMP_FORMAT};

use super::{NO_FEEDBACK, header_cell, open_service, sentiment_cell};

pub fn run(data_file: Option<PathBuf>) -> Result<()> {
    let records = open_service(data_file)?.load_all()?;

    if records.is_empty() {
        println!("{NO_FEEDBACK}");
        return Ok(());
    }

    println!("{}", records_table(&records));
    println!("{} record(s)", records.len());
    Ok(())
}

fn records_table(records: &[FeedbackRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Timestamp"),
        header_cell("Name"),
        header_cell("Course"),
        header_cell("Feedback"),
        header_cell("Polarity"),
        header_cell("Sentiment"),
    ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.timestamp.format(TIMESTAMP_FORMAT)),
            Cell::new(&record.name),
            Cell::new(&record.course),
            Cell::new(&record.feedback),
            Cell::new(format!("{:.3}", record.polarity)),
            sentiment_cell(record.sentiment),
        ]);
    }

    table
}
