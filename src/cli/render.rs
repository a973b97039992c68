//! Plain-text rendering of history entries and parsed replies.

use std::fmt::Write;

use crate::history::{BoundedHistory, HistoryEntry};
use crate::styles::CATALOG;
use crate::types::{ChatExchange, ChatTurn, ImageGeneration, Role};

pub fn styles(category: Option<&str>) -> String {
    let mut out = String::new();
    for cat in CATALOG {
        if category.is_some_and(|c| !cat.name.eq_ignore_ascii_case(c.trim())) {
            continue;
        }
        let _ = writeln!(out, "{}", cat.name);
        for style in cat.styles {
            let _ = writeln!(out, "  - {style}");
        }
    }
    out
}

pub fn generation(entry: &HistoryEntry<ImageGeneration>) -> String {
    let generation = entry.payload();
    let mut out = String::new();
    let _ = writeln!(out, "🕒 {} - {}", entry.display_timestamp(), generation.style);
    let _ = writeln!(out, "  Base Prompt: {}", generation.base_prompt);
    let _ = writeln!(out, "  Style: {}", generation.style);
    let _ = writeln!(out, "  Full Prompt: {}", generation.full_prompt);
    if let Some(ref negative) = generation.negative_prompt {
        let _ = writeln!(out, "  Negative Prompt: {negative}");
    }
    let _ = writeln!(
        out,
        "  Parameters: Guidance {}, Steps {}, Size {}",
        generation.params.guidance_scale,
        generation.params.steps,
        generation.params.size()
    );
    let seeds = generation
        .params
        .seeds
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  Images: {} (seeds {seeds})", generation.images.len());
    out
}

/// Image history, newest first, numbered from 1.
pub fn image_history(history: &BoundedHistory<ImageGeneration>) -> String {
    if history.is_empty() {
        return "No generations yet.\n".to_string();
    }
    let mut out = String::from("Generation History\n");
    for (n, entry) in history.iter_newest_first().enumerate() {
        let _ = write!(out, "[{}] {}", n + 1, generation(entry));
    }
    out
}

/// An assistant turn: populated sections, or the raw text if none parsed.
pub fn reply(turn: &ChatTurn) -> String {
    let mut out = String::new();
    match turn.sections.as_ref().filter(|s| !s.is_blank()) {
        Some(sections) => {
            for (label, content) in sections.populated() {
                let _ = writeln!(out, "## {label}\n{content}\n");
            }
        }
        None => {
            let _ = writeln!(out, "{}", turn.content.trim());
        }
    }
    out
}

/// Chat history, oldest first, one line per turn.
pub fn chat_history(history: &BoundedHistory<ChatExchange>) -> String {
    if history.is_empty() {
        return "No messages yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in history.all() {
        for turn in entry.payload().turns() {
            let summary = match turn.role {
                Role::Assistant => turn
                    .sections
                    .as_ref()
                    .and_then(|s| s.populated().last().map(|(_, c)| c.to_string()))
                    .unwrap_or_else(|| turn.content.clone()),
                _ => turn.content.clone(),
            };
            let first_line = summary.lines().next().unwrap_or_default();
            let _ = writeln!(
                out,
                "[{}] {}: {first_line}",
                entry.display_timestamp(),
                turn.role
            );
        }
    }
    out
}
