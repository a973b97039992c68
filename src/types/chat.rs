//! Chat message types.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::parser::ParsedResponse;

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message as sent to the chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One turn as stored in the chat history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    /// Parsed sections, for assistant turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<ParsedResponse>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sections: None,
        }
    }

    pub fn assistant(content: impl Into<String>, sections: ParsedResponse) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sections: Some(sections),
        }
    }

    /// The turn as a request message.
    pub fn to_message(&self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// A user message and the assistant reply to it.
///
/// The chat history stores whole exchanges, so eviction never leaves a reply
/// without the message that prompted it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatExchange {
    pub user: ChatTurn,
    pub assistant: ChatTurn,
}

impl ChatExchange {
    pub fn new(user: impl Into<String>, reply: impl Into<String>, sections: ParsedResponse) -> Self {
        Self {
            user: ChatTurn::user(user),
            assistant: ChatTurn::assistant(reply, sections),
        }
    }

    /// User turn, then assistant turn.
    pub fn turns(&self) -> [&ChatTurn; 2] {
        [&self.user, &self.assistant]
    }

    /// Both turns as request messages, user first.
    pub fn to_messages(&self) -> [ChatMessage; 2] {
        [self.user.to_message(), self.assistant.to_message()]
    }
}
