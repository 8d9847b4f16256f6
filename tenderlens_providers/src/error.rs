use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(
        "OpenRouter API key not found. Set providers.openrouter.api_key or the OPENROUTER_API_KEY environment variable, or use local mode."
    )]
    MissingApiKey,

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("No content in API response")]
    MissingContent,

    #[error("Failed to parse summary JSON: {0}")]
    InvalidSummary(#[from] serde_json::Error),
}
