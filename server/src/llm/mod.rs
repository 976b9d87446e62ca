//! LLM adapter used by the AI analysis capability.
//!
//! DESIGN
//! ======
//! Configured from environment variables. Routes only see the `LlmChat`
//! trait object, so the analysis handler can be exercised with a mock.

pub mod anthropic;
pub mod config;
pub mod types;

pub use anthropic::AnthropicClient;
pub use types::LlmChat;
