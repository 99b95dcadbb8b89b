use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::ApiError;

/// GET against a cloud function endpoint, returning the parsed JSON body.
/// With an api key the request is sent with HTTP Basic auth, username
/// "apikey" and the key as password.
pub async fn get_request(
    url: &str,
    api_key: Option<&str>,
    params: &[(&str, &str)],
) -> Result<Value, ApiError> {
    info!("GET from {url}");
    let client = reqwest::Client::new();

    let mut request = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .query(params);
    if let Some(key) = api_key {
        request = request.basic_auth("apikey", Some(key));
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            error!("An error occurred while making GET request to {url}: {e}");
            return Err(e.into());
        }
    };
    info!("With status {}", response.status());

    let json = response.json::<Value>().await?;
    Ok(json)
}

/// POST with a JSON payload. The response is returned unparsed so the
/// caller can inspect status and body itself.
pub async fn post_request(
    url: &str,
    payload: &Value,
    params: &[(&str, &str)],
) -> Result<reqwest::Response, ApiError> {
    info!("POST to {url}");
    let client = reqwest::Client::new();

    let response = match client.post(url).query(params).json(payload).send().await {
        Ok(r) => r,
        Err(e) => {
            error!("An error occurred while making POST request to {url}: {e}");
            return Err(e.into());
        }
    };
    info!("With status {}", response.status());

    Ok(response)
}
