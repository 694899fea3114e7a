pub mod api_key;
pub mod client;
pub mod prompt;
pub mod retry;

pub use client::{AiClient, AiClientTrait, GeminiClient};
pub use prompt::PromptBuilder;
pub use retry::with_retry;
