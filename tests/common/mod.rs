//! Shared test helpers and mock backend.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use easel::error::EaselError;
use easel::provider::{ChatRequest, ChatResponse, InferenceBackend, TextToImageRequest};
use easel::types::Usage;

/// Smallest byte run `sniff_mime` recognises as PNG.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

/// A backend that replays queued results and records every request.
pub struct MockBackend {
    images: Mutex<VecDeque<Result<Vec<u8>, EaselError>>>,
    replies: Mutex<VecDeque<Result<ChatResponse, EaselError>>>,
    pub image_requests: Mutex<Vec<TextToImageRequest>>,
    pub chat_requests: Mutex<Vec<ChatRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            images: Mutex::new(VecDeque::new()),
            replies: Mutex::new(VecDeque::new()),
            image_requests: Mutex::new(Vec::new()),
            chat_requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful image.
    pub fn queue_image(&self, data: &[u8]) {
        self.images.lock().unwrap().push_back(Ok(data.to_vec()));
    }

    /// Queue a failed image request.
    pub fn queue_image_error(&self, error: EaselError) {
        self.images.lock().unwrap().push_back(Err(error));
    }

    /// Queue a chat reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(ChatResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
        }));
    }

    /// Queue a failed chat request.
    pub fn queue_reply_error(&self, error: EaselError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn image_requests(&self) -> Vec<TextToImageRequest> {
        self.image_requests.lock().unwrap().clone()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn text_to_image(&self, request: &TextToImageRequest) -> Result<Vec<u8>, EaselError> {
        self.image_requests.lock().unwrap().push(request.clone());
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PNG_BYTES.to_vec()))
    }

    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, EaselError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ChatResponse {
                    text: "Final Answer: mock".to_string(),
                    usage: Usage::default(),
                })
            })
    }
}
