//! Database repositories
//!
//! Repositories encapsulate data access logic and provide a clean API for
//! the lead API to interact with the database.

pub mod lead;

pub use lead::{LeadRepository, LeadRepositoryError};
