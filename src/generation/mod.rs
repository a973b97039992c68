//! Image and chat generation on top of an [`InferenceBackend`](crate::provider::InferenceBackend).

pub mod chat;
pub mod image;

pub use chat::{send_message, structured_system_prompt};
pub use image::{generate_artwork, ArtworkProgress, ArtworkRequest};
