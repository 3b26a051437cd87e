//! Polarity scoring
//!
//! A [`Scorer`] turns free text into a polarity in `[-1.0, 1.0]`. The default
//! implementation is the rule-based [`LexiconScorer`]; anything deterministic
//! can be plugged in, including a plain closure.

mod lexicon;

pub use lexicon::LexiconScorer;

/// Computes a polarity score for a piece of text.
///
/// More negative means more negative sentiment. Implementations must be
/// deterministic and side-effect free, and should return values in
/// `[-1.0, 1.0]`.
pub trait Scorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Bring any scorer output into `[-1.0, 1.0]`. NaN becomes 0.0.
pub(crate) fn bounded(polarity: f64) -> f64 {
    if polarity.is_nan() {
        0.0
    } else {
        polarity.clamp(-1.0, 1.0)
    }
}
