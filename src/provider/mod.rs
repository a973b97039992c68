//! Inference backend trait and the Hugging Face implementation.

pub mod http;
pub mod huggingface;

use async_trait::async_trait;

use crate::config::EaselConfig;
use crate::error::EaselError;
use crate::types::{ChatMessage, Usage};

pub use huggingface::HuggingFaceProvider;

/// One text-to-image call; one image per call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextToImageRequest {
    pub model: String,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub guidance_scale: f64,
    pub num_inference_steps: u32,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

/// A chat completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

/// Text and usage from a chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub text: String,
    pub usage: Usage,
}

/// The remote inference service, as seen by the generation layer.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Backend name (e.g., "huggingface").
    fn provider_name(&self) -> &str;

    /// Generate a single image, returning the encoded image bytes.
    async fn text_to_image(&self, request: &TextToImageRequest) -> Result<Vec<u8>, EaselError>;

    /// Generate a chat reply.
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, EaselError>;
}

/// Create the backend described by `config`. Fails without an API token.
pub fn create_backend(config: &EaselConfig) -> Result<Box<dyn InferenceBackend>, EaselError> {
    let token = config.require_token()?;
    Ok(Box::new(HuggingFaceProvider::new(
        token.to_string(),
        config.base_url().to_string(),
        config.request_timeout(),
    )?))
}
