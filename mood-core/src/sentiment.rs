//! Sentiment labels and the polarity classifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Polarity strictly above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.13;
/// Polarity strictly below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

/// Sentiment label derived from a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in display order
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Classify a polarity score.
    ///
    /// Both thresholds are strict, so `0.13` and `-0.15` are Neutral.
    /// NaN compares false against both and also lands on Neutral.
    pub fn classify(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label: {0}")]
pub struct UnknownSentiment(pub String);

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Self::Positive),
            "Neutral" => Ok(Self::Neutral),
            "Negative" => Ok(Self::Negative),
            other => Err(UnknownSentiment(other.to_string())),
        }
    }
}
