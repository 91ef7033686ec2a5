//! Report module for lectern
//!
//! Reads the feedback CSV and writes the two output artifacts: a CSV of
//! per-group summaries and a JSON document for one critique.

use std::path::Path;

use crate::analysis::{FeedbackRow, FeedbackSummary, LectureCritique};
use crate::{LecternError, Result};

/// Read feedback rows from a CSV file.
///
/// The header row must name `instructor_id`, `course_id`, and
/// `feedback_text`; extra columns are ignored.
pub fn load_feedback_rows(path: &Path) -> Result<Vec<FeedbackRow>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: FeedbackRow = record?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LecternError::Other(format!(
            "No feedback rows found in {}",
            path.display()
        )));
    }

    Ok(rows)
}

/// Render feedback summaries as a CSV document.
///
/// List cells are "; "-joined; the JSON artifact is the structured one.
pub fn feedback_csv(summaries: &[FeedbackSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "instructor_id",
        "course_id",
        "summary",
        "sentiment",
        "actions",
        "examples",
    ])?;

    for summary in summaries {
        let actions = join_cell(summary.actions.as_deref());
        let examples = join_cell(summary.examples.as_deref());
        writer.write_record([
            summary.instructor_id.as_str(),
            summary.course_id.as_str(),
            summary.summary.as_deref().unwrap_or(""),
            summary.sentiment.map(|s| s.as_str()).unwrap_or(""),
            actions.as_str(),
            examples.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LecternError::Other(format!("Failed to flush CSV writer: {e}")))?;
    String::from_utf8(bytes).map_err(|e| LecternError::Other(format!("CSV was not UTF-8: {e}")))
}

/// Render a lecture critique as pretty-printed JSON.
pub fn critique_json(critique: &LectureCritique) -> Result<String> {
    serde_json::to_string_pretty(critique)
        .map_err(|e| LecternError::Other(format!("Failed to serialize critique: {e}")))
}

fn join_cell(items: Option<&[String]>) -> String {
    items.map(|list| list.join("; ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentiment;

    fn summary() -> FeedbackSummary {
        FeedbackSummary {
            instructor_id: "1".to_string(),
            course_id: "10".to_string(),
            summary: Some("pace concerns".to_string()),
            sentiment: Some(Sentiment::Negative),
            actions: Some(vec!["slow down".to_string(), "post slides".to_string()]),
            examples: None,
        }
    }

    #[test]
    fn feedback_csv_has_header_and_joined_cells() {
        let csv = feedback_csv(&[summary()]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("instructor_id,course_id,summary,sentiment,actions,examples")
        );
        assert_eq!(
            lines.next(),
            Some("1,10,pace concerns,negative,slow down; post slides,")
        );
    }

    #[test]
    fn critique_json_keeps_nulls() {
        let critique = LectureCritique {
            summary: Some("fine".to_string()),
            clarity_structure: None,
            missing_content: None,
            factual_issues: None,
            pedagogical_suggestions: None,
        };

        let json = critique_json(&critique).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"], "fine");
        assert!(value["clarity_structure"].is_null());
    }

    #[test]
    fn feedback_rows_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.csv");
        std::fs::write(
            &path,
            "instructor_id,course_id,feedback_text\n1,10,\"great, clear\"\n2,20,too fast\n",
        )
        .unwrap();

        let rows = load_feedback_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].instructor_id, "1");
        assert_eq!(rows[0].feedback_text, "great, clear");
        assert_eq!(rows[1].course_id, "20");
    }

    #[test]
    fn empty_feedback_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "instructor_id,course_id,feedback_text\n").unwrap();

        let err = load_feedback_rows(&path).unwrap_err();
        assert!(err.to_string().contains("No feedback rows"));
    }
}
