//! CSV encoding of the feedback log

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::record::{FeedbackRecord, timestamp_format};
use crate::sentiment::Sentiment;

/// Header row of the feedback log, in column order.
pub const HEADER: [&str; 6] = [
    "Timestamp",
    "Name",
    "Course",
    "Feedback",
    "Polarity",
    "Sentiment",
];

/// Row layout on disk. Kept separate from [`FeedbackRecord`] so the JSON
/// field names stay snake_case while the file keeps its column names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Row {
    #[serde(with = "timestamp_format")]
    timestamp: NaiveDateTime,
    name: String,
    course: String,
    feedback: String,
    polarity: f64,
    sentiment: Sentiment,
}

impl From<&FeedbackRecord> for Row {
    fn from(r: &FeedbackRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            name: r.name.clone(),
            course: r.course.clone(),
            feedback: r.feedback.clone(),
            polarity: r.polarity,
            sentiment: r.sentiment,
        }
    }
}

impl From<Row> for FeedbackRecord {
    fn from(r: Row) -> Self {
        Self {
            timestamp: r.timestamp,
            name: r.name,
            course: r.course,
            feedback: r.feedback,
            polarity: r.polarity,
            sentiment: r.sentiment,
        }
    }
}

/// Encode records as CSV with a header row.
///
/// The header is written even for an empty log.
pub fn encode(records: &[FeedbackRecord]) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| StoreError::Encode(e.to_string()))?;
    for record in records {
        writer
            .serialize(Row::from(record))
            .map_err(|e| StoreError::Encode(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode a CSV feedback log.
///
/// Empty input is an empty log. Anything else must start with [`HEADER`].
pub fn decode(bytes: &[u8]) -> Result<Vec<FeedbackRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(malformed)?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if headers.iter().ne(HEADER) {
        return Err(StoreError::Malformed {
            line: 1,
            message: format!(
                "expected header {:?}, found {:?}",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader.read_record(&mut raw).map_err(malformed)? {
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let row: Row = raw
            .deserialize(Some(&headers))
            .map_err(|e| StoreError::Malformed {
                line,
                message: e.to_string(),
            })?;
        records.push(checked(FeedbackRecord::from(row), line)?);
    }

    Ok(records)
}

/// Stored rows must hold a polarity in [-1, 1] labelled by `classify`.
fn checked(record: FeedbackRecord, line: u64) -> Result<FeedbackRecord, StoreError> {
    if !(-1.0..=1.0).contains(&record.polarity) {
        return Err(StoreError::Malformed {
            line,
            message: format!("polarity {} outside [-1, 1]", record.polarity),
        });
    }
    if !record.is_consistent() {
        return Err(StoreError::Malformed {
            line,
            message: format!(
                "label {} does not match polarity {}",
                record.sentiment, record.polarity
            ),
        });
    }
    Ok(record)
}

fn malformed(err: csv::Error) -> StoreError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    StoreError::Malformed {
        line,
        message: err.to_string(),
    }
}
