//! Feedback submission and read paths
//!
//! [`FeedbackService`] ties the scorer, classifier and store together. It is
//! the only API the view layers (HTTP pages, CLI) call.

use std::sync::Mutex;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::{FeedbackError, StoreError};
use crate::record::{Analysis, FeedbackRecord, Submission, now_local};
use crate::samples::{ExampleOutcome, run_examples};
use crate::scorer::{LexiconScorer, Scorer, bounded};
use crate::store::{FeedbackStore, encode};
use crate::summary::{SentimentSummary, summarize};

/// Scores, labels and records feedback
pub struct FeedbackService<S = LexiconScorer> {
    scorer: S,
    store: FeedbackStore,
    /// Serializes the load-append-rewrite sequence between callers
    write_lock: Mutex<()>,
}

impl FeedbackService<LexiconScorer> {
    /// Service using the built-in lexicon scorer
    pub fn new(store: FeedbackStore) -> Self {
        Self::with_scorer(store, LexiconScorer::new())
    }
}

impl<S: Scorer> FeedbackService<S> {
    pub fn with_scorer(store: FeedbackStore, scorer: S) -> Self {
        Self {
            scorer,
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }

    /// Score and label text without recording it. Scores outside
    /// `[-1.0, 1.0]` are clamped.
    pub fn analyze(&self, text: &str) -> Analysis {
        Analysis::from_polarity(bounded(self.scorer.polarity(text)))
    }

    /// Validate, score, label and append a submission stamped with the
    /// current local time.
    pub fn submit(&self, submission: Submission) -> Result<Analysis, FeedbackError> {
        self.submit_at(submission, now_local())
    }

    /// Same as [`submit`](Self::submit) with an explicit timestamp.
    pub fn submit_at(
        &self,
        submission: Submission,
        timestamp: NaiveDateTime,
    ) -> Result<Analysis, FeedbackError> {
        if submission.is_blank() {
            warn!("rejected submission with empty feedback");
            return Err(FeedbackError::empty_feedback());
        }

        let analysis = self.analyze(&submission.feedback);
        debug!(
            polarity = analysis.polarity,
            sentiment = %analysis.sentiment,
            "scored feedback"
        );

        let record = FeedbackRecord::new(submission, analysis, timestamp);
        let total = {
            let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
            self.store.append(record).inspect_err(|e| {
                warn!(error = %e, "failed to save feedback");
            })?
        };

        info!(
            sentiment = %analysis.sentiment,
            total,
            "feedback saved"
        );
        Ok(analysis)
    }

    /// Full log in submission order
    pub fn load_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        self.store.load_all()
    }

    /// Per-label counts over the stored log
    pub fn summary(&self) -> Result<SentimentSummary, StoreError> {
        Ok(summarize(&self.load_all()?))
    }

    /// Stored log encoded as a downloadable CSV file
    pub fn export_csv(&self) -> Result<Vec<u8>, StoreError> {
        encode(&self.load_all()?)
    }

    /// Worked examples scored with this service's scorer
    pub fn examples(&self) -> Vec<ExampleOutcome> {
        run_examples(&self.scorer)
    }
}
