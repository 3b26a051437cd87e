//! mood-core: Core library for the mood feedback analyzer
//!
//! This crate provides the feedback pipeline behind every mood front end:
//!
//! - **Scoring** - [`Scorer`] trait and the rule-based [`LexiconScorer`]
//! - **Classification** - [`Sentiment::classify`] with fixed thresholds
//! - **Storage** - [`FeedbackStore`], an append-only CSV log
//! - **Aggregation** - [`summarize`] for per-label counts
//! - **Service** - [`FeedbackService`] for submit, load, summary and export
//!
//! # Quick Start
//!
//! ```no_run
//! use mood_core::{FeedbackService, FeedbackStore, Submission};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = FeedbackService::new(FeedbackStore::open("feedback_data.csv"));
//!
//!     let analysis = service.submit(
//!         Submission::new("Great explanations").with_course("Compilers"),
//!     )?;
//!     println!("{} ({:.3})", analysis.sentiment, analysis.polarity);
//!
//!     for count in service.summary()?.iter() {
//!         println!("{}: {}", count.sentiment, count.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Flow
//!
//! ```text
//! Submission ──► Scorer ──► classify ──► FeedbackRecord ──► FeedbackStore
//!                                                               │
//!                          summarize / export ◄── load_all ◄────┘
//! ```

pub mod error;
pub mod record;
pub mod samples;
pub mod scorer;
pub mod sentiment;
pub mod service;
pub mod store;
pub mod summary;

// Re-export key types for convenience
pub use error::{EMPTY_FEEDBACK_WARNING, FeedbackError, StoreError};
pub use record::{Analysis, FeedbackRecord, NOT_AVAILABLE, Submission, TIMESTAMP_FORMAT};
pub use samples::{ExampleOutcome, WORKED_EXAMPLES, WorkedExample, run_examples};
pub use scorer::{LexiconScorer, Scorer};
pub use sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Sentiment};
pub use service::FeedbackService;
pub use store::{CSV_MIME, DOWNLOAD_FILE_NAME, FeedbackStore, HEADER};
pub use summary::{SentimentCount, SentimentSummary, summarize};
