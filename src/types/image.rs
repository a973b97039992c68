//! Image generation records.

use serde::{Deserialize, Serialize};

/// One generated image, in generation order within its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub mime_type: String,
    pub seed: u64,
}

impl GeneratedImage {
    pub fn new(data: Vec<u8>, seed: u64) -> Self {
        let mime_type = crate::export::sniff_mime(&data).to_string();
        Self {
            data,
            mime_type,
            seed,
        }
    }

    /// Encode as a `data:` URI for embedding.
    pub fn data_uri(&self) -> String {
        crate::export::data_uri(&self.mime_type, &self.data)
    }
}

/// Parameters a batch was generated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub guidance_scale: f64,
    pub steps: u32,
    pub width: u32,
    pub height: u32,
    /// One seed per image, same order as the images.
    pub seeds: Vec<u64>,
}

impl GenerationParams {
    /// Size as `WIDTHxHEIGHT`.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// A completed batch, as stored in the image history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGeneration {
    pub base_prompt: String,
    pub style: String,
    pub full_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub images: Vec<GeneratedImage>,
    pub params: GenerationParams,
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
