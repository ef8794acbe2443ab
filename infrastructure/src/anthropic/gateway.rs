//! Anthropic Messages API gateway

use crate::config::{ConfigError, FileAnthropicConfig};
use async_trait::async_trait;
use imaging_application::{CompletionRequest, GatewayError, LlmGateway};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Returned when the response carries no text blocks.
pub const EMPTY_COMPLETION: &str = "(No content returned from LLM)";

/// Connection settings for [`AnthropicGateway`]
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl AnthropicSettings {
    /// Resolve settings from the `[anthropic]` section and the environment.
    pub fn from_config(
        config: &FileAnthropicConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = config
            .resolve_api_key(&env)
            .ok_or_else(|| ConfigError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self {
            api_key,
            model: config.resolve_model(&env),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// [`LlmGateway`] backed by the Anthropic Messages API
pub struct AnthropicGateway {
    client: reqwest::Client,
    settings: AnthropicSettings,
}

impl AnthropicGateway {
    pub fn new(settings: AnthropicSettings) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        info!("AnthropicGateway initialized (model: {})", settings.model);

        Ok(Self { client, settings })
    }

    /// Build a gateway from config, reading the API key from the process environment.
    pub fn from_config(config: &FileAnthropicConfig) -> Result<Self, ConfigError> {
        Self::new(AnthropicSettings::from_config(config, |name| {
            std::env::var(name).ok()
        })?)
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.settings.base_url)
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        debug!(
            "Sending completion request (model: {}, max_tokens: {})",
            self.settings.model, request.max_tokens
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", &self.settings.api_version)
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = format!("Anthropic API error ({}): {}", status, text);
            return Err(match status.as_u16() {
                401 | 403 => GatewayError::AuthenticationFailed(message),
                _ => GatewayError::RequestFailed(message),
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(join_text_blocks(&parsed.content))
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

fn classify_send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

/// Concatenate the text blocks of a response, one per line.
fn join_text_blocks(blocks: &[ContentBlock]) -> String {
    let texts: Vec<&str> = blocks
        .iter()
        .filter(|b| b.block_type == "text")
        .filter_map(|b| b.text.as_deref())
        .collect();

    if texts.is_empty() {
        EMPTY_COMPLETION.to_string()
    } else {
        texts.join("\n")
    }
}

// Messages API request/response types

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}
