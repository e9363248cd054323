//! REST API helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and copy
//! drafting failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DescribeResponse, Identity};

#[cfg(any(test, feature = "hydrate"))]
fn describe_failed_message(status: u16) -> String {
    format!("description request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_describe_input(name: &str) -> Result<&str, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a product name first.".to_owned());
    }
    Ok(name)
}

/// Fetch the currently authenticated identity from the auth backend.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::config::AUTH_ME_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Identity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session on the auth backend.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(crate::config::AUTH_LOGOUT_ENDPOINT)
            .send()
            .await
        {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Draft a short menu description via `POST /api/menu/describe`.
///
/// The server already degrades to fallback copy when generation fails, so
/// an `Err` here means the request itself could not be made.
///
/// # Errors
///
/// Returns an error string for a blank name, a transport failure, or a
/// non-OK status.
pub async fn generate_description(name: &str, ingredients: &str) -> Result<DescribeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let name = validate_describe_input(name)?;
        let payload = super::types::DescribeRequest { name, ingredients: ingredients.trim() };
        let resp = gloo_net::http::Request::post(crate::config::DESCRIBE_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(describe_failed_message(resp.status()));
        }
        resp.json::<DescribeResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, ingredients);
        Err("not available on server".to_owned())
    }
}
