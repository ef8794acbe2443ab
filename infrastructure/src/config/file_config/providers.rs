//! Provider configuration from TOML (`[anthropic]` section)

use imaging_application::RenderParams;
use serde::{Deserialize, Serialize};

/// Anthropic API renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Model used for rendering.
    pub model: String,
    /// Environment variable that overrides `model` when set (default: "ANTHROPIC_MODEL").
    pub model_env: String,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Max tokens for the application summary.
    pub summary_max_tokens: u32,
    /// Max tokens for the impact report.
    pub impact_max_tokens: u32,
    pub temperature: f32,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let render = RenderParams::default();
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            model: "claude-3-5-sonnet-latest".to_string(),
            model_env: "ANTHROPIC_MODEL".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_seconds: 120,
            summary_max_tokens: render.summary_max_tokens,
            impact_max_tokens: render.impact_max_tokens,
            temperature: render.temperature,
        }
    }
}

impl FileAnthropicConfig {
    /// API key from the configured env var, then the inline value.
    pub fn resolve_api_key(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        env(&self.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    /// Model from the override env var, then the configured value.
    pub fn resolve_model(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env(&self.model_env)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.model.clone())
    }

    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            summary_max_tokens: self.summary_max_tokens,
            impact_max_tokens: self.impact_max_tokens,
            temperature: self.temperature,
        }
    }
}
