//! Form-relay transport for the contact form.
//!
//! Client-side (csr): real multipart POST via `gloo-net`.
//! Native builds: `BrowserTransport` reports `TransportError::Unavailable`
//! since the relay is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors carry the underlying message for logging; callers map
//! them to a sanitized user-facing outcome instead of showing them raw.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use async_trait::async_trait;
use serde::Deserialize;

use crate::state::contact::FormSubmission;

/// Message shown when the relay rejects a submission without usable detail.
pub const GENERIC_REJECTION: &str = "Failed to send message. Please try again later.";

/// Raw relay response: status code plus the unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Any 2xx status counts as success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error messages from a `{ "errors": [ { "message": ... } ] }` body.
    ///
    /// Returns `None` when the body is not JSON, has no `errors` list, or the
    /// list is empty.
    #[must_use]
    pub fn error_messages(&self) -> Option<Vec<String>> {
        let body: RelayErrorBody = serde_json::from_str(&self.body).ok()?;
        let messages = body
            .errors?
            .into_iter()
            .map(|item| item.message)
            .collect::<Vec<_>>();
        if messages.is_empty() { None } else { Some(messages) }
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    errors: Option<Vec<RelayErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorItem {
    #[serde(default)]
    message: String,
}

/// Failure to obtain any response from the relay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay transport not available outside the browser")]
    Unavailable,
}

/// Outbound channel to the form relay.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait(?Send)]
pub trait RelayTransport {
    /// POST the submission's fields to its endpoint with `Accept: application/json`.
    async fn post_form(&self, submission: &FormSubmission) -> Result<RelayResponse, TransportError>;
}

/// Browser `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl RelayTransport for BrowserTransport {
    async fn post_form(&self, submission: &FormSubmission) -> Result<RelayResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let form = web_sys::FormData::new().map_err(|e| TransportError::Request(format!("{e:?}")))?;
            for (name, value) in submission.pairs() {
                form.append_with_str(name, value)
                    .map_err(|e| TransportError::Request(format!("{e:?}")))?;
            }
            let resp = gloo_net::http::Request::post(submission.endpoint())
                .header("Accept", "application/json")
                .body(form)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            // An unreadable body on an error response falls back to the generic message.
            let body = resp.text().await.unwrap_or_default();
            Ok(RelayResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = submission;
            Err(TransportError::Unavailable)
        }
    }
}
