//! Feedback record model

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// Placeholder stored when a submitter leaves name or course blank.
pub const NOT_AVAILABLE: &str = "NA";

/// Textual timestamp format used in storage and the API.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw input from a feedback form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub feedback: String,
}

impl Submission {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Whether the feedback text is empty once whitespace is ignored
    pub fn is_blank(&self) -> bool {
        self.feedback.trim().is_empty()
    }
}

/// Result of scoring one piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub polarity: f64,
    pub sentiment: Sentiment,
}

impl Analysis {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            polarity,
            sentiment: Sentiment::classify(polarity),
        }
    }
}

/// One persisted feedback entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub name: String,
    pub course: String,
    pub feedback: String,
    pub polarity: f64,
    pub sentiment: Sentiment,
}

impl FeedbackRecord {
    /// Build a record from a submission and its analysis.
    ///
    /// Blank name or course become [`NOT_AVAILABLE`]; feedback is kept
    /// exactly as submitted. The timestamp is truncated to whole seconds.
    pub fn new(submission: Submission, analysis: Analysis, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: truncate_to_seconds(timestamp),
            name: or_not_available(submission.name),
            course: or_not_available(submission.course),
            feedback: submission.feedback,
            polarity: analysis.polarity,
            sentiment: analysis.sentiment,
        }
    }

    /// True when the stored label agrees with the stored polarity
    pub fn is_consistent(&self) -> bool {
        Sentiment::classify(self.polarity) == self.sentiment
    }

    pub fn analysis(&self) -> Analysis {
        Analysis {
            polarity: self.polarity,
            sentiment: self.sentiment,
        }
    }
}

/// Current local time at second precision
pub fn now_local() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

fn or_not_available(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps
pub(crate) mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_milli_opt(9, 26, 53, 589)
            .unwrap()
    }

    #[test]
    fn blank_name_and_course_become_na() {
        let sub = Submission::new("Great class")
            .with_name("   ")
            .with_course("");
        let record = FeedbackRecord::new(sub, Analysis::from_polarity(0.8), ts());
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.course, NOT_AVAILABLE);
    }

    #[test]
    fn omitted_name_and_course_become_na() {
        let record = FeedbackRecord::new(
            Submission::new("Great class"),
            Analysis::from_polarity(0.8),
            ts(),
        );
        assert_eq!(record.name, "NA");
        assert_eq!(record.course, "NA");
    }

    #[test]
    fn provided_values_are_verbatim() {
        let sub = Submission::new("  Great class  ")
            .with_name(" Ada ")
            .with_course("CSE-3F");
        let record = FeedbackRecord::new(sub, Analysis::from_polarity(0.8), ts());
        assert_eq!(record.name, " Ada ");
        assert_eq!(record.course, "CSE-3F");
        assert_eq!(record.feedback, "  Great class  ");
    }

    #[test]
    fn timestamp_is_second_precision() {
        let record = FeedbackRecord::new(
            Submission::new("ok"),
            Analysis::from_polarity(0.0),
            ts(),
        );
        assert_eq!(record.timestamp.nanosecond(), 0);
        assert_eq!(
            record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "2025-03-14 09:26:53"
        );
    }

    #[test]
    fn analysis_label_matches_polarity() {
        let analysis = Analysis::from_polarity(-0.6);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        let record = FeedbackRecord::new(Submission::new("bad"), analysis, ts());
        assert!(record.is_consistent());
    }

    #[test]
    fn json_uses_fixed_timestamp_format() {
        let record = FeedbackRecord::new(
            Submission::new("Helpful"),
            Analysis::from_polarity(0.5),
            ts(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2025-03-14 09:26:53");
        assert_eq!(json["sentiment"], "Positive");

        let back: FeedbackRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn blank_submission_detection() {
        assert!(Submission::new("").is_blank());
        assert!(Submission::new(" \n\t ").is_blank());
        assert!(!Submission::new(" x ").is_blank());
    }
}
