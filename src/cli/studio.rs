//! `easel image`: one-shot generation or an interactive prompt loop.

use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::EaselConfig;
use crate::error::{EaselError, Result};
use crate::export;
use crate::generation::{generate_artwork, ArtworkProgress, ArtworkRequest};
use crate::provider::{create_backend, InferenceBackend};
use crate::session::ImageSession;
use crate::styles;

use super::{render, ImageArgs};

/// Handle `easel image`.
pub async fn handle_image(args: ImageArgs, config: &EaselConfig) -> Result<()> {
    let backend = create_backend(config)?;
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.image_model().to_string());
    let mut session = ImageSession::from_config(config);

    match args.prompt.clone() {
        Some(prompt) => generate_once(backend.as_ref(), &model, &args, &prompt, &mut session).await,
        None => prompt_loop(backend.as_ref(), &model, args, &mut session).await,
    }
}

fn build_request(args: &ImageArgs, prompt: &str, style: &str) -> ArtworkRequest {
    ArtworkRequest::builder()
        .base_prompt(prompt)
        .style(style)
        .maybe_negative_prompt(args.negative.clone())
        .guidance_scale(args.guidance)
        .steps(args.steps)
        .count(args.count)
        .width(args.width)
        .height(args.height)
        .maybe_seed(args.seed)
        .build()
}

fn print_progress(progress: ArtworkProgress) {
    eprintln!(
        "Generating artwork {} of {}... ({:.0}%)",
        progress.index,
        progress.total,
        progress.fraction() * 100.0
    );
}

async fn generate_once(
    backend: &dyn InferenceBackend,
    model: &str,
    args: &ImageArgs,
    prompt: &str,
    session: &mut ImageSession,
) -> Result<()> {
    let style = args.style.as_deref().unwrap_or_else(|| styles::default_style());
    let request = build_request(args, prompt, style);
    let entry = generate_artwork(backend, model, &request, session, print_progress).await?;
    let paths = export::save_generation(&args.out, entry.payload())?;
    for path in &paths {
        println!("saved {}", path.display());
    }
    println!("All artworks generated successfully!");
    Ok(())
}

async fn prompt_loop(
    backend: &dyn InferenceBackend,
    model: &str,
    mut args: ImageArgs,
    session: &mut ImageSession,
) -> Result<()> {
    println!("Enter a base prompt to generate. Commands: /style <name>, /history, /save <n>, /quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}> ", args.style.as_deref().unwrap_or_else(|| styles::default_style()));
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("", _) => continue,
            ("/quit" | "/exit", _) => break,
            ("/history", _) => print!("{}", render::image_history(session.history())),
            ("/style", name) => match styles::find_style(name) {
                Some((_, style)) => {
                    args.style = Some(style.to_string());
                    println!("style set to {style}");
                }
                None => eprintln!("{}", EaselError::UnknownStyle(name.to_string())),
            },
            ("/save", n) => save_history_entry(session, n, &args.out),
            _ => {
                if let Err(e) = generate_once(backend, model, &args, line, session).await {
                    eprintln!("❌ {e} ({})", e.recovery_suggestion().hint());
                }
            }
        }
    }
    Ok(())
}

fn save_history_entry(session: &ImageSession, n: &str, out: &Path) {
    let Some(entry) = n
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .and_then(|n| session.history().iter_newest_first().nth(n - 1))
    else {
        eprintln!("usage: /save <n>, where n is a number from /history");
        return;
    };
    match export::save_history_entry(out, entry) {
        Ok(paths) => {
            for path in paths {
                println!("saved {}", path.display());
            }
        }
        Err(e) => eprintln!("❌ {e}"),
    }
}
