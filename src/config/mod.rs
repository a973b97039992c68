//! Configuration system (layered: code > env > config file > defaults).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EaselError, Result};
use crate::history::{DEFAULT_CHAT_HISTORY_CAPACITY, DEFAULT_IMAGE_HISTORY_CAPACITY};
use crate::parser::SectionLabels;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_IMAGE_MODEL: &str = "black-forest-labs/FLUX.1-dev";
pub const DEFAULT_CHAT_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "EASEL_CONFIG";

/// Token variables, checked in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["HUGGINGFACE_TOKEN", "HF_TOKEN"];

/// Layered configuration for easel.
///
/// Resolution order, highest first:
/// 1. Explicit setters
/// 2. Environment (`HUGGINGFACE_TOKEN`, `EASEL_BASE_URL`, ...; `.env` is loaded)
/// 3. TOML config file (`$EASEL_CONFIG` or the platform config dir)
/// 4. Built-in defaults
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EaselConfig {
    api_token: Option<String>,
    base_url: String,
    image_model: String,
    chat_model: String,
    image_history_capacity: usize,
    chat_history_capacity: usize,
    section_labels: SectionLabels,
    request_timeout_secs: u64,
}

impl fmt::Debug for EaselConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EaselConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("image_model", &self.image_model)
            .field("chat_model", &self.chat_model)
            .field("image_history_capacity", &self.image_history_capacity)
            .field("chat_history_capacity", &self.chat_history_capacity)
            .field("section_labels", &self.section_labels)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for EaselConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EaselConfig {
    /// Built-in defaults, no token.
    pub fn new() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_history_capacity: DEFAULT_IMAGE_HISTORY_CAPACITY,
            chat_history_capacity: DEFAULT_CHAT_HISTORY_CAPACITY,
            section_labels: SectionLabels::default(),
            request_timeout_secs: 120,
        }
    }

    /// Full layered load: config file (if any), then environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = match std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
            // An explicitly named file must exist.
            Some(path) => {
                if !path.is_file() {
                    return Err(EaselError::Configuration(format!(
                        "{CONFIG_PATH_ENV} points to {}, which is not a file",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::new(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Defaults plus environment, ignoring any config file.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::new();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// `<platform config dir>/easel/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "easel")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config file");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment values using `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = TOKEN_ENV_VARS.iter().find_map(|key| non_empty(*key)) {
            self.api_token = Some(token);
        }
        if let Some(url) = non_empty("EASEL_BASE_URL") {
            self.base_url = url;
        }
        if let Some(model) = non_empty("EASEL_IMAGE_MODEL") {
            self.image_model = model;
        }
        if let Some(model) = non_empty("EASEL_CHAT_MODEL") {
            self.chat_model = model;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(EaselError::Configuration("base_url must not be empty".into()));
        }
        if self.image_history_capacity == 0 || self.chat_history_capacity == 0 {
            return Err(EaselError::Configuration(
                "history capacities must be at least 1".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(EaselError::Configuration(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// The token, or an authentication error telling the user where to set it.
    pub fn require_token(&self) -> Result<&str> {
        self.api_token().ok_or_else(|| {
            EaselError::Authentication(
                "API token not found. Set HUGGINGFACE_TOKEN or api_token in the config file."
                    .into(),
            )
        })
    }

    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = Some(token.into());
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    pub fn set_image_model(&mut self, model: impl Into<String>) {
        self.image_model = model.into();
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    pub fn set_chat_model(&mut self, model: impl Into<String>) {
        self.chat_model = model.into();
    }

    pub fn image_history_capacity(&self) -> usize {
        self.image_history_capacity
    }

    pub fn chat_history_capacity(&self) -> usize {
        self.chat_history_capacity
    }

    pub fn section_labels(&self) -> &SectionLabels {
        &self.section_labels
    }

    pub fn set_section_labels(&mut self, labels: SectionLabels) {
        self.section_labels = labels;
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
