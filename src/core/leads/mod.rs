//! Lead intake API and storage

pub mod api;
pub mod store;

pub use api::{ApiError, LeadApiError, LeadApiState, ListLeadsQuery, lead_api_cors, lead_api_router};
pub use store::{InMemoryLeadStore, LeadStore};
