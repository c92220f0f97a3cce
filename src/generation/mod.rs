//! Remote image generation for new puzzle sources

/// HTTP client for the generation endpoint
pub mod client;
/// Prompt term selection
pub mod prompt;
/// Request and response wire types
pub mod request;

pub use client::GenerationClient;
pub use prompt::PromptSelection;
pub use request::{GenerateRequest, GenerateResponse};
