//! REST API helpers for the experiments backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! page fetch degrades to an error banner without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ExperimentPageResponse;

#[cfg(any(test, feature = "hydrate"))]
fn experiments_endpoint(page: u64) -> String {
    format!("/api/experiments?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn experiments_request_failed_message(status: u16) -> String {
    format!("experiments request failed: {status}")
}

/// Fetch one page of experiments from `/api/experiments?page={n}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the payload does not parse.
pub async fn fetch_experiments(page: u64) -> Result<ExperimentPageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = experiments_endpoint(page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(experiments_request_failed_message(resp.status()));
        }
        resp.json::<ExperimentPageResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err("not available on server".to_owned())
    }
}
