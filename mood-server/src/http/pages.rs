//! Server-rendered HTML pages
//!
//! Three pages mirror the navigation of the feedback app: a home page with
//! worked examples, the analyze form, and the stored feedback view. The
//! current page is passed explicitly to the layout on every request.

use std::fmt::Write;
use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use mood_core::{
    Analysis, FeedbackRecord, Sentiment, SentimentSummary, Submission, TIMESTAMP_FORMAT,
};

use crate::AppState;
use crate::error::ApiError;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Analyze,
    ViewAll,
}

impl Page {
    const ALL: [Page; 3] = [Page::Home, Page::Analyze, Page::ViewAll];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Analyze => "/analyze",
            Self::ViewAll => "/feedback",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Analyze => "Analyze Feedback",
            Self::ViewAll => "View All Feedback",
        }
    }
}

/// GET /
pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut body = String::from(
        "<h2>Project Overview</h2>\n\
         <p>Student feedback is scored with a lexicon-based polarity between -1 and +1 \
         and labelled Positive, Neutral or Negative.</p>\n\
         <h2>Example: How It Works</h2>\n",
    );

    for outcome in state.feedback.examples() {
        let _ = write!(
            body,
            "<blockquote>{}</blockquote>\n\
             <p>Expected: {}<br>Polarity: <code>{:.3}</code><br>Detected Sentiment: <strong>{}</strong></p>\n",
            escape_html(&outcome.feedback),
            outcome.expected,
            outcome.polarity,
            outcome.detected,
        );
    }

    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Start Analyzing Feedback &rarr;</a></p>",
        Page::Analyze.path()
    );

    Html(layout(Page::Home, &body))
}

/// GET /analyze
pub async fn analyze_form() -> Html<String> {
    Html(layout(Page::Analyze, &feedback_form()))
}

/// POST /analyze
pub async fn analyze_submit(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<Submission>,
) -> Response {
    let mut body = feedback_form();

    let outcome = state
        .run_blocking(move |feedback| feedback.submit(submission))
        .await
        .map_err(ApiError::from)
        .and_then(|result| result.map_err(ApiError::from));

    match outcome {
        Ok(analysis) => {
            body.push_str(&analysis_result(&analysis));
            Html(layout(Page::Analyze, &body)).into_response()
        }
        Err(ApiError::Feedback(e)) if e.is_validation() => {
            let _ = writeln!(
                body,
                "<p class=\"warning\">{}</p>",
                escape_html(&e.to_string())
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(layout(Page::Analyze, &body)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save feedback");
            let _ = writeln!(
                body,
                "<p class=\"error\">Could not save feedback: {}</p>",
                escape_html(&e.to_string())
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(layout(Page::Analyze, &body)),
            )
                .into_response()
        }
    }
}

/// GET /feedback
pub async fn view_all(State(state): State<Arc<AppState>>) -> Response {
    let loaded = state
        .run_blocking(|feedback| feedback.load_all())
        .await
        .map_err(ApiError::from)
        .and_then(|result| result.map_err(ApiError::from));

    let records = match loaded {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "failed to load feedback");
            let body = format!(
                "<p class=\"error\">Could not load feedback: {}</p>\n",
                escape_html(&e.to_string())
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(layout(Page::ViewAll, &body)),
            )
                .into_response();
        }
    };

    let body = if records.is_empty() {
        "<p>No feedback available yet.</p>\n".to_string()
    } else {
        let summary = mood_core::summarize(&records);
        format!(
            "{}<h2>Sentiment Summary</h2>\n{}<p><a href=\"/feedback/download\" download>Download CSV</a></p>\n",
            records_table(&records),
            summary_list(&summary)
        )
    };

    Html(layout(Page::ViewAll, &body)).into_response()
}

fn layout(current: Page, body: &str) -> String {
    let mut nav = String::new();
    for page in Page::ALL {
        if page == current {
            let _ = write!(nav, "<strong>{}</strong> ", page.title());
        } else {
            let _ = write!(nav, "<a href=\"{}\">{}</a> ", page.path(), page.title());
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Student Feedback Sentiment Analyzer - {title}</title>\n</head>\n<body>\n\
         <nav>{nav}</nav>\n<h1>Student Feedback Sentiment Analyzer</h1>\n\
         <h2>{title}</h2>\n{body}</body>\n</html>\n",
        title = current.title(),
        nav = nav.trim_end(),
        body = body,
    )
}

fn feedback_form() -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n\
         <label>Student Name <input name=\"name\"></label><br>\n\
         <label>Course / Subject <input name=\"course\"></label><br>\n\
         <label>Enter Feedback <textarea name=\"feedback\"></textarea></label><br>\n\
         <button type=\"submit\">Analyze Sentiment</button>\n</form>\n",
        Page::Analyze.path()
    )
}

fn analysis_result(analysis: &Analysis) -> String {
    format!(
        "<div class=\"sentiment {}\">Sentiment: {}</div>\n\
         <p>Polarity Score: {:.3}</p>\n\
         <p class=\"success\">Feedback saved successfully!</p>\n",
        sentiment_class(analysis.sentiment),
        analysis.sentiment,
        analysis.polarity
    )
}

fn records_table(records: &[FeedbackRecord]) -> String {
    let mut html = String::from(
        "<table>\n<tr><th>Timestamp</th><th>Name</th><th>Course</th>\
         <th>Feedback</th><th>Polarity</th><th>Sentiment</th></tr>\n",
    );
    for r in records {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.3}</td><td>{}</td></tr>",
            r.timestamp.format(TIMESTAMP_FORMAT),
            escape_html(&r.name),
            escape_html(&r.course),
            escape_html(&r.feedback),
            r.polarity,
            r.sentiment
        );
    }
    html.push_str("</table>\n");
    html
}

fn summary_list(summary: &SentimentSummary) -> String {
    let mut html = String::from("<ul>\n");
    for count in summary.iter() {
        let _ = writeln!(html, "<li>{}: {}</li>", count.sentiment, count.count);
    }
    html.push_str("</ul>\n");
    html
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Neutral => "neutral",
        Sentiment::Negative => "negative",
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
