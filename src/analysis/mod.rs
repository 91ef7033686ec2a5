//! Analysis module for lectern
//!
//! The prompt-response pipeline: truncation, JSON extraction from model
//! output, feedback aggregation, and lecture critique.

mod extract;
mod feedback;
mod lecture;
mod models;
mod truncate;

pub use extract::{extract_json, Extraction};
pub use feedback::{summarize_feedback, FeedbackOptions, GroupProgress};
pub use lecture::{critique_lecture, LectureOptions};
pub use models::{FeedbackRow, FeedbackSummary, LectureCritique, Sentiment};
pub use truncate::{truncate, TRUNCATION_MARKER};
