//! Browser-side calls to the lead API
//!
//! Requests only run in the hydrated bundle; the server build gets stubs
//! that report a network error so SSR never blocks on its own API.

use crate::core::intake::IntakeForm;
use crate::core::lead::{CreateLeadResponse, LeadListResponse};

/// Lead API path, served by the same origin
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Errors from a lead API call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// POST the completed form
#[cfg(not(feature = "ssr"))]
pub async fn submit_lead(form: &IntakeForm) -> Result<CreateLeadResponse, ClientError> {
    use gloo_net::http::Request;

    let response = Request::post(LEADS_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(|e| ClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }

    response
        .json::<CreateLeadResponse>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// GET the recent leads
#[cfg(not(feature = "ssr"))]
pub async fn fetch_leads() -> Result<LeadListResponse, ClientError> {
    use gloo_net::http::Request;

    let response = Request::get(LEADS_ENDPOINT)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }

    response
        .json::<LeadListResponse>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(feature = "ssr")]
pub async fn submit_lead(_form: &IntakeForm) -> Result<CreateLeadResponse, ClientError> {
    Err(ClientError::Network("not available on the server".to_string()))
}

#[cfg(feature = "ssr")]
pub async fn fetch_leads() -> Result<LeadListResponse, ClientError> {
    Err(ClientError::Network("not available on the server".to_string()))
}
