//! Score a single piece of feedback and append it to the log

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mood_core::{Analysis, Submission};

use super::open_service;

/// Arguments for the submit command
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Student name (stored as NA when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Course or subject (stored as NA when omitted)
    #[arg(long)]
    pub course: Option<String>,

    /// Feedback text
    pub feedback: String,
}

impl SubmitArgs {
    fn into_submission(self) -> Submission {
        Submission {
            name: self.name,
            course: self.course,
            feedback: self.feedback,
        }
    }
}

pub fn run(args: SubmitArgs, data_file: Option<PathBuf>) -> Result<()> {
    let service = open_service(data_file)?;
    let analysis = service.submit(args.into_submission())?;
    print!("{}", render(&analysis));
    Ok(())
}

fn render(analysis: &Analysis) -> String {
    format!(
        "Sentiment: {}\nPolarity Score: {:.3}\nFeedback saved successfully!\n",
        analysis.sentiment, analysis.polarity
    )
}
