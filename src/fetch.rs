//! Homepage fetch and content validation

use std::time::Duration;

use log::debug;

use crate::error::{AppError, AppResult};

/// Issue a single GET against `http://127.0.0.1:<port>/` with a whole-request
/// timeout. No retries: a timeout, connect failure, or non-200 status is the
/// final verdict for this run.
pub(crate) fn fetch_homepage(port: u16, timeout: Duration) -> AppResult<String> {
    let url = format!("http://127.0.0.1:{port}/");
    debug!("GET {url}");

    // no_proxy: the request must hit the loopback listener directly even if
    // the environment configures an HTTP proxy.
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()?;
    let response = client.get(&url).send()?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(AppError::UnexpectedStatus(status.as_u16()));
    }
    Ok(response.text()?)
}

/// Literal, case-sensitive substring check against the fetched body.
pub(crate) fn check_marker(body: &str, marker: &str) -> AppResult<()> {
    if body.contains(marker) {
        Ok(())
    } else {
        Err(AppError::MissingMarker(marker.to_string()))
    }
}
