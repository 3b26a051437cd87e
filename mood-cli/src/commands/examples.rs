//! Score the built-in worked examples

use anyhow::Result;
use mood_core::{ExampleOutcome, LexiconScorer, run_examples};

pub fn run() -> Result<()> {
    let outcomes = run_examples(&LexiconScorer::new());
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render(outcome));
    }
    Ok(())
}

fn render(outcome: &ExampleOutcome) -> String {
    let mark = if outcome.matches_expectation() {
        ""
    } else {
        " (differs from expected)"
    };
    format!(
        "\"{}\"\n  Expected:  {}\n  Polarity:  {:.3}\n  Detected:  {}{}\n",
        outcome.feedback, outcome.expected, outcome.polarity, outcome.detected, mark
    )
}
