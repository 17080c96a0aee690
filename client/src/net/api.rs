//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning an error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so delivery failures land in
//! the form's error status without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::{ContactForm, SubmitError};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Map a non-2xx response to a [`SubmitError`], keeping the server's message
/// when it sent one.
#[cfg(any(test, feature = "hydrate"))]
fn contact_failure(status: u16, body: Option<super::types::ApiError>) -> SubmitError {
    match body {
        Some(body) if !body.error.is_empty() => SubmitError::Rejected { status, message: body.error },
        _ => SubmitError::Status(status),
    }
}

/// Deliver the inquiry with `POST /api/contact`.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the request cannot be sent or the server
/// rejects it.
pub async fn send_contact(form: &ContactForm) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<super::types::ApiError>().await.ok();
        Err(contact_failure(status, body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SubmitError::Unavailable)
    }
}
