use futures::stream::{self, StreamExt};
use log::{debug, warn};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::get_request;
use crate::records::ReviewRecord;
use crate::sentiment::SentimentClient;

// One sentiment round trip per review; keep the fan-out small.
const SENTIMENT_CONCURRENCY: usize = 4;

/// Fetches the reviews for one dealer and annotates each with a
/// sentiment label. A response without `body.data.docs` yields an empty
/// list. Sentiment calls run a few at a time; the output keeps the
/// document order of the response.
pub async fn get_dealer_reviews(
    url: &str,
    dealer_id: i64,
    analyzer: &SentimentClient,
) -> Result<Vec<ReviewRecord>, ApiError> {
    let id = dealer_id.to_string();
    let json = get_request(url, None, &[("dealerId", id.as_str())]).await?;

    let Some(docs) = json.pointer("/body/data/docs").and_then(Value::as_array) else {
        warn!("no review docs in response for dealerId={dealer_id}");
        return Ok(Vec::new());
    };

    let results = stream::iter(docs.iter().map(ReviewRecord::from_doc))
        .map(|mut record| async move {
            match analyzer.analyze(&record.review).await {
                Ok(sentiment) => {
                    debug!("sentiment: {}", sentiment.label);
                    record.sentiment = Some(sentiment.label);
                }
                Err(e) => {
                    // default value in case the sentiment service is down
                    warn!("sentiment analysis failed for review {}: {e}", record.id);
                    record.sentiment = Some("unknown".to_string());
                }
            }
            record
        })
        .buffered(SENTIMENT_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    Ok(results)
}
