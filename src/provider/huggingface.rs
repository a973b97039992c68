//! Hugging Face Inference API provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::debug;

use crate::error::EaselError;
use crate::types::Usage;

use super::http::{bearer_headers, build_client, send_error, status_to_error};
use super::{ChatRequest, ChatResponse, InferenceBackend, TextToImageRequest};

pub struct HuggingFaceProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, EaselError> {
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: build_client(timeout)?,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{model}", self.base_url)
    }

    fn build_image_body(request: &TextToImageRequest) -> serde_json::Value {
        let mut parameters = serde_json::json!({
            "guidance_scale": request.guidance_scale,
            "num_inference_steps": request.num_inference_steps,
            "width": request.width,
            "height": request.height,
            "seed": request.seed,
        });
        if let Some(ref negative) = request.negative_prompt {
            if let Some(obj) = parameters.as_object_mut() {
                obj.insert("negative_prompt".into(), negative.clone().into());
            }
        }
        serde_json::json!({
            "inputs": request.prompt,
            "parameters": parameters,
        })
    }

    fn build_chat_body(request: &ChatRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "stream": false,
        });
        if let Some(obj) = body.as_object_mut() {
            if let Some(max) = request.max_tokens {
                obj.insert("max_tokens".into(), max.into());
            }
            if let Some(temp) = request.temperature {
                obj.insert("temperature".into(), temp.into());
            }
        }
        body
    }
}

#[async_trait]
impl InferenceBackend for HuggingFaceProvider {
    fn provider_name(&self) -> &str {
        "huggingface"
    }

    async fn text_to_image(&self, request: &TextToImageRequest) -> Result<Vec<u8>, EaselError> {
        let url = self.model_url(&request.model);
        debug!(model = %request.model, seed = request.seed, "text_to_image");

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key, "image/png"))
            .json(&Self::build_image_body(request))
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));
        if is_json {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(502, &body_text));
        }

        let bytes = resp.bytes().await.map_err(|e| send_error(e, self.timeout))?;
        if bytes.is_empty() {
            return Err(EaselError::EmptyResponse(request.model.clone()));
        }
        Ok(bytes.to_vec())
    }

    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, EaselError> {
        let url = format!("{}/v1/chat/completions", self.model_url(&request.model));
        debug!(model = %request.model, messages = request.messages.len(), "chat_completion");

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key, "application/json"))
            .json(&Self::build_chat_body(request))
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: HfChatResponse = resp.json().await.map_err(|e| send_error(e, self.timeout))?;
        let text = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| EaselError::EmptyResponse(request.model.clone()))?;

        Ok(ChatResponse {
            text,
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
struct HfChatResponse {
    #[serde(default)]
    choices: Vec<HfChoice>,
    usage: Option<HfUsage>,
}

#[derive(Deserialize)]
struct HfChoice {
    message: HfMessage,
}

#[derive(Deserialize)]
struct HfMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct HfUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}
