//! Lecture transcript critique

use crate::analysis::extract::extract_json;
use crate::analysis::models::{value_as_text, LectureCritique};
use crate::analysis::truncate::truncate;
use crate::llm::prompts::{render, LECTURE_KEYS, LECTURE_TEMPLATE};
use crate::llm::{CompletionOptions, CompletionProvider};
use crate::Result;

/// Options for one lecture critique call.
#[derive(Debug, Clone)]
pub struct LectureOptions {
    /// Character budget for the transcript excerpt
    pub budget_chars: usize,

    /// Model parameters for the completion call
    pub completion: CompletionOptions,
}

/// Critique a lecture transcript along fixed pedagogical dimensions.
///
/// An unparseable response degrades to a critique carrying only the raw
/// text in `summary`; only an upstream or template failure is an error.
pub async fn critique_lecture(
    provider: &dyn CompletionProvider,
    transcript: &str,
    options: &LectureOptions,
) -> Result<LectureCritique> {
    let excerpt = truncate(transcript, options.budget_chars);
    tracing::info!(
        "Requesting critique for a {}-character transcript excerpt",
        excerpt.chars().count()
    );

    let prompt = render(LECTURE_TEMPLATE, &[("transcript_text", excerpt.as_str())])?;
    let raw = provider.complete(options.completion.request(&prompt)).await?;

    let extraction = extract_json(&raw, &LECTURE_KEYS);
    if !extraction.parsed {
        tracing::warn!("Critique response was not valid JSON; keeping the raw text");
    }

    Ok(LectureCritique {
        summary: value_as_text(extraction.field("summary")),
        clarity_structure: value_as_text(extraction.field("clarity_structure")),
        missing_content: value_as_text(extraction.field("missing_content")),
        factual_issues: value_as_text(extraction.field("factual_issues")),
        pedagogical_suggestions: value_as_text(extraction.field("pedagogical_suggestions")),
    })
}
