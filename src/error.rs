use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
    #[error("malformed record: {0}")]
    Record(#[from] serde_json::Error),
    #[error("Missing Env var: {0}")]
    Env(String),
}
