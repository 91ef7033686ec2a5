//! Fixed prompt templates and placeholder rendering
//!
//! Each template asks the model for bare JSON with an exact key set; the
//! extractor still treats that instruction as a request, not a guarantee.

use crate::{LecternError, Result};

/// Prompt for summarizing one (instructor, course) feedback group.
pub const FEEDBACK_TEMPLATE: &str = "\
You are an expert instructor coach. Given the following set of student feedback items for a course, do three things:

1) Write a concise summary (2-3 sentences) capturing the main themes.
2) Tag the overall sentiment as one of: positive, neutral, negative.
3) Give 2-3 concrete, prioritized action recommendations the instructor can implement next week (each 6-12 words).

Return ONLY valid JSON without markdown code blocks. Use these exact keys: summary, sentiment, actions, example_quotes.

Input feedback items:
{feedback_items}
";

/// Prompt for critiquing one lecture transcript.
pub const LECTURE_TEMPLATE: &str = "\
You are an expert medical education reviewer and pedagogy coach.

Analyze the following lecture transcript and provide a structured critique covering:
1. Overall summary (2-3 sentences).
2. Clarity & Structure: strengths and weaknesses in explanation and flow.
3. Missing Key Content: concepts or guidelines typically expected but absent.
4. Possible Factual Mistakes or Outdated Info: flag cautiously, cite reasoning.
5. Pedagogical Suggestions: concrete steps to improve student engagement/learning.

Return ONLY valid JSON without markdown code blocks or backticks. Use these exact keys:
- \"summary\"
- \"clarity_structure\"
- \"missing_content\"
- \"factual_issues\"
- \"pedagogical_suggestions\"

Transcript:
{transcript_text}
";

/// Keys the feedback template instructs the model to return.
pub const FEEDBACK_KEYS: [&str; 4] = ["summary", "sentiment", "actions", "example_quotes"];

/// Keys the lecture template instructs the model to return.
pub const LECTURE_KEYS: [&str; 5] = [
    "summary",
    "clarity_structure",
    "missing_content",
    "factual_issues",
    "pedagogical_suggestions",
];

/// Fill a template's named placeholders from `bindings`.
///
/// Each distinct placeholder is substituted exactly once; a placeholder with
/// no binding is a template error. Bindings the template never mentions are
/// ignored.
pub fn render(template: &str, bindings: &[(&str, &str)]) -> Result<String> {
    let mut rendered = template.to_string();

    for name in placeholders(template) {
        let value = bindings
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| LecternError::Template(name.to_string()))?;

        rendered = rendered.replacen(&format!("{{{name}}}"), value, 1);
    }

    Ok(rendered)
}

/// Distinct `{name}` placeholders in the order they appear.
fn placeholders(template: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rest = &rest[start + 1..];
        let Some(end) = rest.find('}') else { break };

        let name = &rest[..end];
        if !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_')
            && !found.contains(&name)
        {
            found.push(name);
        }
        rest = &rest[end + 1..];
    }

    found
}
