use thiserror::Error;

/// Failures of a single completion request
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport failure, or the response body could not be read as JSON
    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Completion backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The first completion choice carried no text
    #[error("Completion response did not contain any message content")]
    MissingContent,

    /// Failure reported by a caller-supplied `LlmProvider` that does not
    /// speak HTTP (for example a local model or an in-process stub)
    #[error("Completion backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The completion request failed
    #[error(transparent)]
    BackendError(#[from] BackendError),

    /// The completion text could not be decoded into a recipe
    #[error("Failed to parse recipe: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No API key in configuration or environment
    #[error("OPENAI_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Caller supplied no ingredients
    #[error("Please provide some ingredients")]
    NoIngredients,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
