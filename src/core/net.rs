// src/core/net.rs

// Blocking HTTPS GET. Callers that must not block run it on a worker thread.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::config::options::SourceOptions;
use crate::error::FetchError;

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub fn http_get(url: &str, opts: &SourceOptions) -> Result<String, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(opts.timeout)
        .build()?;

    logd!("Net: GET {}", url);
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    logd!("Net: {} bytes from {}", body.len(), url);
    Ok(body)
}
