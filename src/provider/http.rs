//! HTTP client construction, auth headers and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::EaselError;

/// Build a client with the configured request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, EaselError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()?)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str, accept: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a transport error, turning client timeouts into [`EaselError::Timeout`].
pub fn send_error(error: reqwest::Error, timeout: Duration) -> EaselError {
    if error.is_timeout() {
        EaselError::Timeout(timeout.as_millis() as u64)
    } else {
        EaselError::Network(error)
    }
}

/// Map a non-success HTTP status and body to an error.
pub fn status_to_error(status: u16, body: &str) -> EaselError {
    let json = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = json
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.as_str().map(str::to_string).or_else(|| Some(e.to_string())))
        .unwrap_or_else(|| body.to_string());

    match status {
        401 | 403 => EaselError::Authentication(message),
        429 => EaselError::RateLimited,
        503 => match json
            .as_ref()
            .and_then(|v| v.get("estimated_time"))
            .and_then(|t| t.as_f64())
        {
            Some(estimated_secs) => EaselError::ModelLoading { estimated_secs },
            None => EaselError::api(status, message),
        },
        _ => EaselError::api(status, message),
    }
}
