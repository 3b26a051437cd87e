//! End-to-end tests for the feedback pipeline
//!
//! These tests drive the public API only:
//! - Submissions flow through scoring, labelling and the CSV log
//! - The log survives a restart and exports to the same rows
//! - Logs written by other tools with the same columns load unchanged

use chrono::NaiveDate;
use mood_core::{
    FeedbackService, FeedbackStore, HEADER, Sentiment, Submission, store::decode,
};
use tempfile::tempdir;

#[test]
fn log_survives_restart_and_exports_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feedback_data.csv");

    {
        let service = FeedbackService::new(FeedbackStore::open(&path));
        service
            .submit(
                Submission::new("Excellent labs, very helpful TAs")
                    .with_name("Ada")
                    .with_course("CS101"),
            )
            .unwrap();
        service
            .submit(Submission::new("Assignments, honestly, were too hard"))
            .unwrap();
    }

    let service = FeedbackService::new(FeedbackStore::open(&path));
    let log = service.load_all().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].name, "Ada");
    assert_eq!(log[1].name, "NA");

    let exported = service.export_csv().unwrap();
    assert_eq!(exported, std::fs::read(&path).unwrap());
    assert_eq!(decode(&exported).unwrap(), log);
}

#[test]
fn loads_log_written_by_other_tools() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feedback_data.csv");
    std::fs::write(
        &path,
        format!(
            "{}\n\
             2024-11-05 14:02:33,Ravi,DBMS,\"Clear, well paced\",0.35,Positive\n\
             2024-11-05 14:05:10,NA,NA,ok,0.5,Positive\n\
             2024-11-06 08:00:00,NA,OS,The labs were boring,-1.0,Negative\n",
            HEADER.join(",")
        ),
    )
    .unwrap();

    let service = FeedbackService::new(FeedbackStore::open(&path));
    let log = service.load_all().unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log[0].feedback, "Clear, well paced");
    assert_eq!(
        log[0].timestamp,
        NaiveDate::from_ymd_opt(2024, 11, 5)
            .unwrap()
            .and_hms_opt(14, 2, 33)
            .unwrap()
    );
    assert_eq!(log[2].polarity, -1.0);

    let summary = service.summary().unwrap();
    assert_eq!(summary.get(Sentiment::Positive), 2);
    assert_eq!(summary.get(Sentiment::Negative), 1);
    assert_eq!(summary.counts[0].sentiment, Sentiment::Positive);
}

#[test]
fn appending_to_existing_log_keeps_old_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feedback_data.csv");
    std::fs::write(
        &path,
        format!(
            "{}\n2024-11-05 14:02:33,NA,NA,meh,0.0,Neutral\n",
            HEADER.join(",")
        ),
    )
    .unwrap();

    let service = FeedbackService::new(FeedbackStore::open(&path));
    let stamp = NaiveDate::from_ymd_opt(2024, 11, 7)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    service
        .submit_at(Submission::new("Wonderful course"), stamp)
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "2024-11-05 14:02:33,NA,NA,meh,0.0,Neutral");
    assert_eq!(lines[2], "2024-11-07 09:00:00,NA,NA,Wonderful course,1.0,Positive");
}
