//! CLI entry point for easel.

pub mod chat;
pub mod render;
pub mod studio;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// easel CLI
#[derive(Parser, Debug)]
#[command(name = "easel", version, about = "Image studio and structured chat over the Hugging Face Inference API")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the art style presets
    Styles(StylesArgs),
    /// Generate artwork from a prompt
    Image(ImageArgs),
    /// Chat with structured, sectioned answers
    Chat(ChatArgs),
}

/// Arguments for `easel styles`.
#[derive(Parser, Debug)]
pub struct StylesArgs {
    /// Only list this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `easel image`.
#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// Art style preset (see `easel styles`)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Elements to exclude
    #[arg(short, long)]
    pub negative: Option<String>,

    /// Guidance scale (1.0 - 20.0)
    #[arg(short, long, default_value_t = 7.5)]
    pub guidance: f64,

    /// Number of inference steps (10 - 150)
    #[arg(long, default_value_t = 50)]
    pub steps: u32,

    /// Number of images (1 - 4)
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,

    /// Image width (512 or 768)
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height (512 or 768)
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Seed for the first image (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Model id override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Directory the images are saved to
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Base prompt; starts an interactive prompt loop when omitted
    pub prompt: Option<String>,
}

/// Arguments for `easel chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Model id override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Extra instructions placed before the section instructions
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Max tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Section labels, comma separated (overrides the config)
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}
