//! Data models for feedback and lecture analysis

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One student feedback entry, as read from the input CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRow {
    /// Instructor identifier
    pub instructor_id: String,

    /// Course identifier
    pub course_id: String,

    /// Free-text feedback comment
    pub feedback_text: String,
}

/// Overall sentiment tag for one feedback group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Parse the model's sentiment tag, tolerating case. Anything outside
    /// the vocabulary maps to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

/// Model-generated summary for one (instructor, course) feedback group
///
/// Every analysis field is either a value recovered from the model's JSON
/// or `None`; a parse failure leaves only the raw response in `summary`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackSummary {
    pub instructor_id: String,
    pub course_id: String,
    pub summary: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub actions: Option<Vec<String>>,
    pub examples: Option<Vec<String>>,
}

/// Model-generated critique of one lecture transcript
#[derive(Debug, Clone, Serialize)]
pub struct LectureCritique {
    pub summary: Option<String>,
    pub clarity_structure: Option<String>,
    pub missing_content: Option<String>,
    pub factual_issues: Option<String>,
    pub pedagogical_suggestions: Option<String>,
}

/// Render an extracted value as record text.
///
/// Strings are kept as-is; any other non-null value is rendered compactly
/// so an off-schema response still lands in the record instead of vanishing.
pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Render an extracted value as a list of strings.
///
/// Accepts an array (elements stringified) or a bare string (one-element
/// list); anything else is `None`.
pub(crate) fn value_as_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(value_as_text).collect()),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}
