use std::env;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize, Debug)]
pub struct Sentiment {
    pub label: String,
    pub score: f32,
}

#[derive(Serialize)]
struct AnalyzeRequest {
    text: String,
}

/// Client for the hosted sentiment endpoint. The service is a black box:
/// text in, coarse label plus confidence out.
pub struct SentimentClient {
    base_url: String,
}

impl SentimentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        SentimentClient {
            base_url: base_url.into(),
        }
    }

    /// Reads the endpoint from the SENTIMENT_API env var.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            env::var("SENTIMENT_API").map_err(|_| ApiError::Env("SENTIMENT_API".to_string()))?;
        Ok(Self::new(base_url))
    }

    pub async fn analyze(&self, text: &str) -> Result<Sentiment, ApiError> {
        let base_url = &self.base_url;
        let client = reqwest::Client::new();

        debug!("GET {base_url}/sentiment | {text}");
        let request = AnalyzeRequest {
            text: text.to_string(),
        };
        let response = client
            .get(format!("{base_url}/sentiment"))
            .json(&request)
            .send()
            .await?;
        let sentiment: Sentiment = response.json().await?;
        debug!("got sentiment for \"{text}\": {sentiment:?}");
        Ok(sentiment)
    }
}
