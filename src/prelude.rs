//! Convenience re-exports for common use.

pub use crate::config::EaselConfig;
pub use crate::error::{EaselError, Result};
pub use crate::generation::{generate_artwork, send_message, ArtworkRequest};
pub use crate::history::{BoundedHistory, HistoryEntry};
pub use crate::parser::{BoundaryRule, ParsedResponse, SectionLabels, SectionParser};
pub use crate::provider::InferenceBackend;
pub use crate::session::{ChatSession, ImageSession, SessionRegistry};
pub use crate::types::{ChatMessage, ChatTurn, GeneratedImage, ImageGeneration, Role, Usage};
