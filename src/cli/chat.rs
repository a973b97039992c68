//! `easel chat`: interactive structured chat.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::EaselConfig;
use crate::error::Result;
use crate::generation::{send_message, structured_system_prompt};
use crate::parser::{SectionLabels, SectionParser};
use crate::provider::create_backend;
use crate::session::{ChatSession, ChatSettings};

use super::{render, ChatArgs};

fn build_session(args: &ChatArgs, config: &EaselConfig) -> ChatSession {
    let labels = match args.labels {
        Some(ref labels) => SectionLabels::new(labels.iter().cloned()),
        None => config.section_labels().clone(),
    };
    let instructions = structured_system_prompt(&labels);
    let system_prompt = match args.system {
        Some(ref system) => format!("{}\n\n{instructions}", system.trim()),
        None => instructions,
    };
    let defaults = ChatSettings::default();

    ChatSession::new(config.chat_history_capacity(), SectionParser::new(labels))
        .with_system_prompt(system_prompt)
        .with_settings(ChatSettings {
            max_tokens: args.max_tokens.or(defaults.max_tokens),
            temperature: args.temperature.or(defaults.temperature),
        })
}

/// Handle `easel chat`.
pub async fn handle_chat(args: ChatArgs, config: &EaselConfig) -> Result<()> {
    let backend = create_backend(config)?;
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.chat_model().to_string());
    let mut session = build_session(&args, config);

    println!("Chatting with {model}. Commands: /history, /usage, /quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => print!("{}", render::chat_history(session.history())),
            "/usage" => {
                let usage = session.usage();
                println!(
                    "tokens: {} in, {} out, {} total",
                    usage.input_tokens, usage.output_tokens, usage.total_tokens
                );
            }
            text => match send_message(backend.as_ref(), &model, &mut session, text).await {
                Ok(turn) => print!("{}", render::reply(turn)),
                Err(e) => eprintln!("❌ {e} ({})", e.recovery_suggestion().hint()),
            },
        }
    }
    Ok(())
}
