//! Lead API endpoints
//!
//! - POST /api/leads - Store a lead submitted by the intake chat
//! - GET /api/leads - List recent leads (`?limit=N`, newest first)
//!
//! Both routes answer CORS preflight requests from any origin.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use super::store::LeadStore;
use crate::core::config::{DEFAULT_LEADS_LIST_LIMIT, clamp_list_limit};
use crate::core::db::models::{CreateLead, format_timestamp};
use crate::core::db::repositories::LeadRepositoryError;
use crate::core::intake::{FieldError, IntakeForm};
use crate::core::lead::{CreateLeadResponse, Lead, LeadListResponse};

/// Preflight cache lifetime sent in `Access-Control-Max-Age`
const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Lead API state
#[derive(Clone)]
pub struct LeadApiState {
    pub store: LeadStore,
    /// Listing size used when the request has no `limit`
    pub default_limit: i64,
}

impl LeadApiState {
    pub fn new(store: LeadStore) -> Self {
        Self {
            store,
            default_limit: DEFAULT_LEADS_LIST_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = clamp_list_limit(limit);
        self
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Lead API error types
#[derive(Debug, thiserror::Error)]
pub enum LeadApiError {
    #[error("Invalid lead: {0}")]
    Validation(#[from] FieldError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<LeadRepositoryError> for LeadApiError {
    fn from(err: LeadRepositoryError) -> Self {
        match err {
            LeadRepositoryError::DatabaseError(e) => LeadApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for LeadApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            LeadApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            LeadApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Query parameters for listing leads
#[derive(Debug, Deserialize, Default)]
pub struct ListLeadsQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Router
// ============================================================================

/// CORS policy for the lead endpoints
pub fn lead_api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// Create the lead API router
pub fn lead_api_router(state: LeadApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(
            "/api/leads",
            get(list_leads_handler).post(create_lead_handler),
        )
        .layer(lead_api_cors())
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/leads
async fn create_lead_handler(
    State(state): State<Arc<LeadApiState>>,
    Json(form): Json<IntakeForm>,
) -> Result<Json<CreateLeadResponse>, LeadApiError> {
    if let Err(err) = form.validate() {
        tracing::warn!("Rejected lead submission: {}", err);
        return Err(err.into());
    }

    let lead = state.store.create(&CreateLead::from(&form)).await.map_err(|e| {
        tracing::error!("Failed to store lead: {}", e);
        LeadApiError::from(e)
    })?;

    tracing::info!(
        "Lead {} stored ({}, {} services)",
        lead.id,
        lead.object_type,
        lead.services.len()
    );

    Ok(Json(CreateLeadResponse {
        success: true,
        lead_id: lead.id,
        created_at: format_timestamp(&lead.created_at),
    }))
}

/// GET /api/leads
async fn list_leads_handler(
    State(state): State<Arc<LeadApiState>>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<LeadListResponse>, LeadApiError> {
    let limit = query
        .limit
        .map(clamp_list_limit)
        .unwrap_or(state.default_limit);

    tracing::debug!("Listing up to {} leads from {} store", limit, state.store.kind());

    let rows = state.store.list_recent(limit).await.map_err(|e| {
        tracing::error!("Failed to list leads: {}", e);
        LeadApiError::from(e)
    })?;

    let leads: Vec<Lead> = rows.into_iter().map(Lead::from).collect();
    Ok(Json(LeadListResponse::new(leads)))
}

// ============================================================================
// Tests
// ============================================================================
