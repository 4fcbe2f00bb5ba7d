//! Chat-completion client.
//!
//! One request per generation: the enhanced prompt goes out as a single user
//! message to an OpenAI-compatible `/v1/chat/completions` endpoint and the
//! raw completion text comes back untouched. The wire contract ends there;
//! everything downstream treats the service as opaque text-in/text-out.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use pageforge_config::LlmConfig;

/// Error types for generation requests.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible completion service.
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerationClient {
    /// Build a client from configuration.
    ///
    /// The API key is read from the environment variable the configuration
    /// names; a missing key fails here rather than at request time.
    pub fn new(config: &LlmConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| GenerationError::MissingApiKey(config.api_key_env.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Submit a prompt and return the raw completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        log::debug!("requesting completion from {} (model {})", url, self.model);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationError::MalformedResponse("response carried no choices".to_string())
            })
    }
}
