//! Anthropic adapter
//!
//! Implements LlmGateway over the Anthropic Messages API.

mod gateway;

pub use gateway::{AnthropicGateway, AnthropicSettings, EMPTY_COMPLETION};
