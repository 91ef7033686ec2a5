use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;
use crate::{LecternError, Result};

const TIMEDTEXT_ENDPOINT: &str = "https://www.youtube.com/api/timedtext";

/// Fetches caption transcripts from YouTube's timedtext endpoint.
pub struct TranscriptClient {
    http: Client,
    language: String,
    max_chars: usize,
}

impl TranscriptClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .map_err(|e| {
                    LecternError::TranscriptFetch(format!("failed to build HTTP client: {e}"))
                })?,
            language: settings.transcript.language.trim().to_string(),
            max_chars: settings.transcript.fetch_chars,
        })
    }

    fn request_url(&self, video_id: &str) -> String {
        format!(
            "{}?v={}&lang={}&fmt=json3",
            TIMEDTEXT_ENDPOINT, video_id, self.language
        )
    }

    /// Fetch the caption transcript for a video id.
    ///
    /// Caption segments are joined with single spaces and the result is
    /// capped at the configured fetch budget. A video without captions
    /// surfaces as a transcript-fetch error, not an empty string.
    pub async fn fetch(&self, video_id: &str) -> Result<String> {
        let response = self
            .http
            .get(self.request_url(video_id))
            .send()
            .await
            .map_err(|e| LecternError::TranscriptFetch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LecternError::TranscriptFetch(format!(
                "caption endpoint returned {status} for video '{video_id}'"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LecternError::TranscriptFetch(format!("failed to read response: {e}")))?;

        // The endpoint answers 200 with an empty body when no caption
        // track exists for the requested language.
        let payload: TimedTextResponse = serde_json::from_str(&body).map_err(|_| {
            LecternError::TranscriptFetch(format!("no captions returned for video '{video_id}'"))
        })?;

        let text = join_segments(&payload);
        if text.is_empty() {
            return Err(LecternError::TranscriptFetch(format!(
                "caption track for video '{video_id}' is empty"
            )));
        }

        tracing::info!(
            "Fetched {}-character transcript for video {}",
            text.chars().count(),
            video_id
        );

        Ok(crate::analysis::truncate(&text, self.max_chars))
    }
}

/// Join non-empty caption segments with single spaces.
fn join_segments(payload: &TimedTextResponse) -> String {
    payload
        .events
        .iter()
        .flat_map(|event| event.segs.iter())
        .filter_map(|seg| seg.utf8.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    utf8: Option<String>,
}
