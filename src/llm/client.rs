use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::{LecternError, Result};

/// One completion call's payload.
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Model parameters carried from settings into every request of a run.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            model: settings.llm.model.trim().to_string(),
            temperature: settings.llm.temperature,
            max_tokens: settings.llm.max_tokens,
        }
    }

    pub fn request<'a>(&'a self, prompt: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            prompt,
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => Err(LecternError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ))),
    }
}
