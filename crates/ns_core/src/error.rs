use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("NewsAPI key not found. Please set NEWSAPI_KEY in your environment or .env file")]
    MissingApiKey,

    #[error("API error ({code}): {message}")]
    Api { code: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown sentiment model: {0}")]
    UnknownModel(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures caused by the news API or the network rather than by local input.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
