//! Worked examples shown on the home page

use serde::{Deserialize, Serialize};

use crate::record::Analysis;
use crate::scorer::{Scorer, bounded};
use crate::sentiment::Sentiment;

/// A sample feedback with the label it is expected to receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedExample {
    pub feedback: &'static str,
    pub expected: Sentiment,
}

pub const WORKED_EXAMPLES: [WorkedExample; 3] = [
    WorkedExample {
        feedback: "The teacher explains everything extremely well and I love this class!",
        expected: Sentiment::Positive,
    },
    WorkedExample {
        feedback: "The lectures are extremely confusing and badly structured.",
        expected: Sentiment::Negative,
    },
    WorkedExample {
        feedback: "The teaching style is acceptable. It meets expectations but doesn't exceed them.",
        expected: Sentiment::Neutral,
    },
];

/// A worked example after scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleOutcome {
    pub feedback: String,
    pub expected: Sentiment,
    pub polarity: f64,
    pub detected: Sentiment,
}

impl ExampleOutcome {
    pub fn matches_expectation(&self) -> bool {
        self.expected == self.detected
    }
}

/// Score every worked example with `scorer`.
pub fn run_examples(scorer: &impl Scorer) -> Vec<ExampleOutcome> {
    WORKED_EXAMPLES
        .iter()
        .map(|example| {
            let polarity = bounded(scorer.polarity(example.feedback));
            let analysis = Analysis::from_polarity(polarity);
            ExampleOutcome {
                feedback: example.feedback.to_string(),
                expected: example.expected,
                polarity: analysis.polarity,
                detected: analysis.sentiment,
            }
        })
        .collect()
}
