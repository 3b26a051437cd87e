//! Lexicon-based polarity scorer.
//!
//! Each known word carries a polarity. A preceding intensifier scales it, a
//! preceding negation flips and halves it. The text score is the mean of all
//! matched words, clamped to `[-1.0, 1.0]`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::Scorer;

/// Words are runs of letters with optional inner apostrophes ("doesn't").
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)*").expect("word pattern is valid"));

/// Multiplier applied to a word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

const WORDS: &[(&str, f64)] = &[
    // Positive
    ("excellent", 1.0),
    ("outstanding", 0.9),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("fantastic", 0.8),
    ("great", 0.8),
    ("awesome", 0.8),
    ("happy", 0.8),
    ("good", 0.7),
    ("loved", 0.7),
    ("amazing", 0.6),
    ("nice", 0.6),
    ("inspiring", 0.6),
    ("effective", 0.6),
    ("love", 0.5),
    ("well", 0.5),
    ("enjoyed", 0.5),
    ("enjoyable", 0.5),
    ("helpful", 0.5),
    ("engaging", 0.5),
    ("interesting", 0.5),
    ("informative", 0.5),
    ("knowledgeable", 0.5),
    ("supportive", 0.5),
    ("satisfied", 0.5),
    ("enjoy", 0.4),
    ("organized", 0.4),
    ("patient", 0.4),
    ("friendly", 0.4),
    ("approachable", 0.4),
    ("easy", 0.4),
    ("recommend", 0.4),
    ("exceeded", 0.4),
    ("fine", 0.4),
    ("clear", 0.3),
    ("clearly", 0.3),
    ("useful", 0.3),
    ("fun", 0.3),
    ("thorough", 0.3),
    ("understandable", 0.3),
    ("exceed", 0.3),
    ("exceeds", 0.3),
    ("decent", 0.2),
    ("acceptable", 0.1),
    ("adequate", 0.1),
    // Negative
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("boring", -1.0),
    ("hate", -0.8),
    ("disappointed", -0.75),
    ("bad", -0.7),
    ("badly", -0.7),
    ("rude", -0.6),
    ("annoying", -0.6),
    ("frustrating", -0.6),
    ("frustrated", -0.6),
    ("disappointing", -0.6),
    ("difficult", -0.5),
    ("poorly", -0.5),
    ("useless", -0.5),
    ("unhelpful", -0.5),
    ("disorganized", -0.5),
    ("stressful", -0.5),
    ("unfair", -0.5),
    ("sad", -0.5),
    ("poor", -0.4),
    ("confusing", -0.4),
    ("confused", -0.4),
    ("tedious", -0.4),
    ("messy", -0.4),
    ("overwhelming", -0.4),
    ("weak", -0.4),
    ("worse", -0.4),
    ("unclear", -0.3),
    ("dull", -0.3),
    ("hard", -0.3),
    ("rushed", -0.3),
    ("slow", -0.3),
    ("late", -0.3),
    ("lacking", -0.3),
    ("waste", -0.2),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("highly", 1.4),
    ("totally", 1.4),
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("quite", 1.1),
    ("fairly", 0.8),
    ("rather", 0.8),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot", "can't", "cant",
    "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "aren't",
    "arent", "wasn't", "wasnt", "weren't", "werent", "won't", "wont", "wouldn't", "wouldnt",
    "shouldn't", "shouldnt", "couldn't", "couldnt", "hardly", "barely",
];

/// Rule-based scorer over a built-in lexicon of course-feedback vocabulary.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            words: WORDS.iter().map(|(w, s)| (w.to_string(), *s)).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add or replace a word. The score is clamped to `[-1.0, 1.0]`.
    #[must_use]
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    /// Polarity of a single word, if it is in the lexicon.
    pub fn word_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Split text into lowercase word tokens.
    ///
    /// Typographic apostrophes are folded to ASCII so "doesn’t" and
    /// "doesn't" are the same token.
    fn tokens(text: &str) -> Vec<String> {
        let normalized = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
        WORD.find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Scorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        for token in Self::tokens(text) {
            if self.negations.contains(&token) {
                negate = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&token) {
                intensity = *mult;
                continue;
            }

            if let Some(base) = self.words.get(&token) {
                let mut score = base * intensity;
                if negate {
                    score *= NEGATION_FACTOR;
                }
                let score = score.clamp(-1.0, 1.0);
                trace!(word = %token, score, "matched lexicon word");
                scores.push(score);
            }

            // Modifiers only reach the word right after them
            negate = false;
            intensity = 1.0;
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
