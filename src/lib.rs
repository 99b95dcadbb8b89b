//! Thin client for the dealership cloud functions: fetches dealer and
//! review documents, maps them to typed records and annotates reviews
//! with sentiment labels from a hosted text-analysis service.

mod error;
mod records;

pub mod dealers;
pub mod http;
pub mod reviews;
pub mod sentiment;

pub use dealers::{get_all_dealers, get_dealer_by_id, get_dealers_by_state};
pub use error::ApiError;
pub use http::{get_request, post_request};
pub use records::{DealerRecord, ReviewRecord};
pub use reviews::get_dealer_reviews;
pub use sentiment::{Sentiment, SentimentClient};
