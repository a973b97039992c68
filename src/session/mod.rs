//! Per-session state: one image history and one chat history per session.
//!
//! Sessions are plain owned values. A caller serving several users keeps
//! them in a [`SessionRegistry`], never in shared globals.

use std::collections::HashMap;

use uuid::Uuid;

use crate::config::EaselConfig;
use crate::generation::structured_system_prompt;
use crate::history::{
    BoundedHistory, HistoryEntry, DEFAULT_CHAT_HISTORY_CAPACITY, DEFAULT_IMAGE_HISTORY_CAPACITY,
};
use crate::parser::SectionParser;
use crate::types::{ChatExchange, ChatMessage, ChatTurn, ImageGeneration, Usage};

/// Image studio state.
#[derive(Debug, Clone)]
pub struct ImageSession {
    history: BoundedHistory<ImageGeneration>,
}

impl Default for ImageSession {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HISTORY_CAPACITY)
    }
}

impl ImageSession {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: BoundedHistory::new(history_capacity),
        }
    }

    pub fn from_config(config: &EaselConfig) -> Self {
        Self::new(config.image_history_capacity())
    }

    pub fn history(&self) -> &BoundedHistory<ImageGeneration> {
        &self.history
    }

    /// Append a finished batch and return the stored entry.
    pub fn record(&mut self, generation: ImageGeneration) -> &HistoryEntry<ImageGeneration> {
        self.history.record(generation)
    }
}

/// Sampling settings for chat requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            max_tokens: Some(1024),
            temperature: None,
        }
    }
}

/// Structured chat state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    history: BoundedHistory<ChatExchange>,
    parser: SectionParser,
    system_prompt: String,
    settings: ChatSettings,
    usage: Usage,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_HISTORY_CAPACITY, SectionParser::default())
    }
}

impl ChatSession {
    /// Session whose system prompt asks for the parser's sections.
    /// `history_capacity` counts exchanges, not single turns.
    pub fn new(history_capacity: usize, parser: SectionParser) -> Self {
        let system_prompt = structured_system_prompt(parser.labels());
        Self {
            history: BoundedHistory::new(history_capacity),
            parser,
            system_prompt,
            settings: ChatSettings::default(),
            usage: Usage::default(),
        }
    }

    pub fn from_config(config: &EaselConfig) -> Self {
        Self::new(
            config.chat_history_capacity(),
            SectionParser::new(config.section_labels().clone()),
        )
    }

    /// Replace the system prompt (e.g. to add a persona before the section
    /// instructions).
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn history(&self) -> &BoundedHistory<ChatExchange> {
        &self.history
    }

    pub fn parser(&self) -> &SectionParser {
        &self.parser
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Tokens used by this session so far.
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// System prompt, retained history, then the new user message.
    pub fn request_messages(&self, user_text: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2 * self.history.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend(
            self.history
                .all()
                .flat_map(|entry| entry.payload().to_messages()),
        );
        messages.push(ChatMessage::user(user_text));
        messages
    }

    /// Record a completed exchange and return the stored assistant turn.
    pub fn record_exchange(&mut self, user_text: &str, reply: &str, usage: &Usage) -> &ChatTurn {
        let sections = self.parser.parse(reply);
        self.usage.merge(usage);
        &self
            .history
            .record(ChatExchange::new(user_text, reply, sections))
            .payload()
            .assistant
    }
}

/// Independent sessions keyed by id.
#[derive(Debug)]
pub struct SessionRegistry<S> {
    sessions: HashMap<Uuid, S>,
}

impl<S> Default for SessionRegistry<S> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<S> SessionRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `session` under a fresh id.
    pub fn create(&mut self, session: S) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&S> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut S> {
        self.sessions.get_mut(id)
    }

    /// End a session; its histories are dropped with it.
    pub fn remove(&mut self, id: &Uuid) -> Option<S> {
        self.sessions.remove(id)
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.sessions.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
