//! Feedback aggregation
//!
//! Groups feedback rows by (instructor, course) and drives one
//! render -> complete -> extract cycle per group. Groups run strictly one
//! after another; a failure in one group becomes that group's summary text
//! and never stops the rest of the batch.

use std::collections::HashMap;

use crate::analysis::extract::{extract_json, Extraction};
use crate::analysis::models::{
    value_as_list, value_as_text, FeedbackRow, FeedbackSummary, Sentiment,
};
use crate::analysis::truncate::truncate;
use crate::llm::prompts::{render, FEEDBACK_KEYS, FEEDBACK_TEMPLATE};
use crate::llm::{CompletionOptions, CompletionProvider};

/// Progress callback type: (groups done, total groups)
pub type GroupProgress = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Options for one feedback analysis run.
#[derive(Debug, Clone)]
pub struct FeedbackOptions {
    /// Character budget for the joined feedback items
    pub budget_chars: usize,

    /// Model parameters for each group's completion call
    pub completion: CompletionOptions,
}

/// Summarize feedback rows, one completion call per (instructor, course)
/// group, in first-seen group order.
///
/// Always returns exactly one summary per group: a render or upstream
/// failure is recorded as that group's summary text. The progress callback
/// fires after each group completes.
pub async fn summarize_feedback(
    provider: &dyn CompletionProvider,
    rows: &[FeedbackRow],
    options: &FeedbackOptions,
    progress: GroupProgress,
) -> Vec<FeedbackSummary> {
    let groups = group_rows(rows);
    let total = groups.len();
    tracing::info!("Summarizing {} feedback groups", total);

    let mut summaries = Vec::with_capacity(total);

    for (index, ((instructor_id, course_id), texts)) in groups.into_iter().enumerate() {
        tracing::debug!(
            "Analyzing feedback for instructor {}, course {}",
            instructor_id,
            course_id
        );

        let summary = match summarize_group(provider, &texts, options).await {
            Ok(extraction) => {
                if !extraction.parsed {
                    tracing::warn!(
                        "Response for instructor {}, course {} was not valid JSON; keeping raw text",
                        instructor_id,
                        course_id
                    );
                }
                FeedbackSummary {
                    summary: value_as_text(extraction.field("summary")),
                    sentiment: extraction
                        .field("sentiment")
                        .as_str()
                        .and_then(Sentiment::parse),
                    actions: value_as_list(extraction.field("actions")),
                    examples: value_as_list(extraction.field("example_quotes")),
                    instructor_id,
                    course_id,
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Feedback analysis failed for instructor {}, course {}: {}",
                    instructor_id,
                    course_id,
                    err
                );
                FeedbackSummary {
                    summary: Some(format!("Analysis failed: {err}")),
                    sentiment: None,
                    actions: None,
                    examples: None,
                    instructor_id,
                    course_id,
                }
            }
        };

        summaries.push(summary);
        progress(index + 1, total);
    }

    summaries
}

async fn summarize_group(
    provider: &dyn CompletionProvider,
    texts: &[String],
    options: &FeedbackOptions,
) -> crate::Result<Extraction> {
    let joined = texts
        .iter()
        .map(|text| format!("- {text}"))
        .collect::<Vec<_>>()
        .join("\n");
    let items = truncate(&joined, options.budget_chars);

    let prompt = render(FEEDBACK_TEMPLATE, &[("feedback_items", items.as_str())])?;
    let raw = provider.complete(options.completion.request(&prompt)).await?;

    Ok(extract_json(&raw, &FEEDBACK_KEYS))
}

/// Group rows by (instructor_id, course_id) in first-seen key order.
fn group_rows(rows: &[FeedbackRow]) -> Vec<((String, String), Vec<String>)> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut by_key: HashMap<(String, String), Vec<String>> = HashMap::new();

    for row in rows {
        let key = (row.instructor_id.clone(), row.course_id.clone());
        let texts = by_key.entry(key.clone()).or_default();
        if texts.is_empty() {
            order.push(key);
        }
        texts.push(row.feedback_text.clone());
    }

    order
        .into_iter()
        .map(|key| {
            let texts = by_key.remove(&key).unwrap_or_default();
            (key, texts)
        })
        .collect()
}
