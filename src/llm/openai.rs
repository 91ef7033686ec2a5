use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{CompletionProvider, CompletionRequest};
use crate::{LecternError, Result};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(LecternError::Config(
                "OpenAI API key is missing. Set llm.api_key in config or LECTERN_OPENAI_API_KEY."
                    .to_string(),
            ));
        }

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .map_err(|e| {
                    LecternError::Upstream(format!("Failed to build OpenAI HTTP client: {e}"))
                })?,
            api_key,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LecternError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LecternError::Upstream(format!(
                "authentication failed ({status}); check the configured API key"
            )));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LecternError::Upstream(
                "rate limit exceeded (HTTP 429); try again later".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(LecternError::Upstream(format!(
                "completion endpoint returned {status}"
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LecternError::Upstream(format!("failed to decode response: {e}")))?;

        let content = payload
            .choices
            .iter()
            .filter_map(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                LecternError::Upstream("response did not contain completion text".to_string())
            })?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
