//! Structured chat: ask for labelled sections, parse them, keep the turns.

use tracing::{debug, info};

use crate::error::{EaselError, Result};
use crate::parser::SectionLabels;
use crate::provider::{ChatRequest, InferenceBackend};
use crate::session::ChatSession;
use crate::types::ChatTurn;

/// System prompt asking the model to answer in `labels` sections.
pub fn structured_system_prompt(labels: &SectionLabels) -> String {
    let mut prompt = String::from(
        "You are a careful assistant. Structure every answer using the sections below, \
         in this order. Start each section on its own line with the section name followed \
         by a colon, and do not start any other line with a word followed by a colon.\n",
    );
    for label in labels.iter() {
        prompt.push_str(label);
        prompt.push_str(": ...\n");
    }
    prompt
}

/// Send `text` in `session` and return the stored assistant turn.
///
/// The exchange is recorded only when the model replies; a failed call leaves
/// the history untouched.
pub async fn send_message<'s>(
    backend: &dyn InferenceBackend,
    model: &str,
    session: &'s mut ChatSession,
    text: &str,
) -> Result<&'s ChatTurn> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EaselError::InvalidArgument("Please enter a message".into()));
    }

    let request = ChatRequest {
        model: model.to_string(),
        messages: session.request_messages(text),
        max_tokens: session.settings().max_tokens,
        temperature: session.settings().temperature,
    };
    debug!(model, history = session.history().len(), "sending chat message");

    let response = backend.chat_completion(&request).await?;
    let turn = session.record_exchange(text, &response.text, &response.usage);

    info!(
        sections = turn.sections.as_ref().map_or(0, |s| s.populated_count()),
        tokens = response.usage.total_tokens,
        "chat reply received"
    );
    Ok(turn)
}
