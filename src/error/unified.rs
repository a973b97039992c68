//! Error classification and recovery hints.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    ModelLoading,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Input,
    Serialization,
    Unknown,
}

/// Suggested recovery action, shown to the user next to the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    WaitAndRetry,
    CheckCredentials,
    CheckConfiguration,
    IncreaseTimeout,
    FixInput,
    ContactSupport,
}

impl RecoverySuggestion {
    /// Short human-readable hint.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::WaitAndRetry => "wait a moment and try again",
            Self::CheckCredentials => "check HUGGINGFACE_TOKEN or the api_token config entry",
            Self::CheckConfiguration => "check the easel config file and environment",
            Self::IncreaseTimeout => "raise request_timeout_secs in the config",
            Self::FixInput => "adjust the input and try again",
            Self::ContactSupport => "the inference service returned an unexpected error",
        }
    }
}
