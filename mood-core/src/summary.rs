//! Count-by-label summary of the feedback log

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::FeedbackRecord;
use crate::sentiment::Sentiment;

/// Occurrences of one label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Per-label counts, most frequent first. Labels that never occur are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub counts: Vec<SentimentCount>,
}

impl SentimentSummary {
    /// Count for a label, zero if absent
    pub fn get(&self, sentiment: Sentiment) -> usize {
        self.counts
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SentimentCount> {
        self.counts.iter()
    }
}

/// Tally labels across the log.
///
/// Ties are broken by label order (Positive, Neutral, Negative).
pub fn summarize(records: &[FeedbackRecord]) -> SentimentSummary {
    let mut tally: BTreeMap<Sentiment, usize> = BTreeMap::new();
    for record in records {
        *tally.entry(record.sentiment).or_default() += 1;
    }

    let mut counts: Vec<SentimentCount> = tally
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.sentiment.cmp(&b.sentiment)));

    SentimentSummary { counts }
}
