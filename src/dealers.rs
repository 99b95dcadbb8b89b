use log::warn;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::get_request;
use crate::records::{DealerRecord, StrictDealer};

/// Fetches every dealer served by the get-dealerships cloud function.
/// The batch is best-effort: an entry that does not map is logged and
/// skipped rather than failing the whole call.
pub async fn get_all_dealers(url: &str) -> Result<Vec<DealerRecord>, ApiError> {
    let json = get_request(url, None, &[]).await?;
    let Some(entries) = json.as_array() else {
        return Err(ApiError::Shape(
            "expected a top-level list of dealers".to_string(),
        ));
    };

    let mut dealers = Vec::new();
    for entry in entries {
        match serde_json::from_value::<DealerRecord>(entry.clone()) {
            Ok(dealer) => dealers.push(dealer),
            Err(e) => warn!("skipping dealer entry that failed to map: {e}"),
        }
    }
    Ok(dealers)
}

/// Fetches a single dealer by id. The response is shaped as
/// `{ "entries": [ ... ] }`; the first entry wins. Missing, empty or
/// malformed entries yield None.
pub async fn get_dealer_by_id(url: &str, dealer_id: i64) -> Result<Option<DealerRecord>, ApiError> {
    let id = dealer_id.to_string();
    let json = get_request(url, None, &[("dealerId", id.as_str())]).await?;

    let Some(entry) = json
        .get("entries")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
    else {
        warn!("Failed to retrieve dealer information for dealerId={dealer_id}");
        return Ok(None);
    };

    match serde_json::from_value::<DealerRecord>(entry.clone()) {
        Ok(dealer) => Ok(Some(dealer)),
        Err(e) => {
            warn!("dealer entry for dealerId={dealer_id} failed to map: {e}");
            Ok(None)
        }
    }
}

/// Fetches the dealers for one state. This path trusts the upstream
/// schema: docs map without defaults and the first doc missing a
/// required key fails the call.
pub async fn get_dealers_by_state(url: &str, state: &str) -> Result<Vec<DealerRecord>, ApiError> {
    let json = get_request(url, None, &[("state", state)]).await?;
    let docs = json
        .pointer("/body/docs")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::Shape("missing body.docs in state query response".to_string()))?;

    docs.iter()
        .map(|doc| {
            serde_json::from_value::<StrictDealer>(doc.clone())
                .map(DealerRecord::from)
                .map_err(ApiError::from)
        })
        .collect()
}
