//! easel CLI binary entry point.

use clap::Parser;
use easel::cli::{chat, render, studio, Cli, Commands};
use easel::config::EaselConfig;
use easel::error::EaselError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {e}");
    }

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e}");
        eprintln!("Hint: {}", e.recovery_suggestion().hint());
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), EaselError> {
    match command {
        Commands::Styles(args) => {
            print!("{}", render::styles(args.category.as_deref()));
            Ok(())
        }
        Commands::Image(args) => studio::handle_image(args, &EaselConfig::load()?).await,
        Commands::Chat(args) => chat::handle_chat(args, &EaselConfig::load()?).await,
    }
}
