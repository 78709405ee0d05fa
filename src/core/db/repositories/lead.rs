//! Lead repository for database operations
//!
//! Inserts submitted leads and lists the most recent ones.

use sqlx::PgPool;

use crate::core::db::models::{CreateLead, LeadRow};

const LEAD_COLUMNS: &str = "id, name, phone, city, address, object_type, object_type_other, \
     area, rooms, services, start_time, deadline, budget, materials_interest, \
     consultation_type, created_at";

/// Lead repository error types
#[derive(Debug, thiserror::Error)]
pub enum LeadRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Lead repository for database operations
#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    /// Create a new lead repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a lead, returning the stored row with its id and timestamp
    pub async fn create(&self, dto: &CreateLead) -> Result<LeadRow, LeadRepositoryError> {
        let lead = sqlx::query_as::<_, LeadRow>(&format!(
            r#"
            INSERT INTO leads (
                name, phone, city, address, object_type, object_type_other,
                area, rooms, services, start_time, deadline, budget,
                materials_interest, consultation_type
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {LEAD_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(&dto.city)
        .bind(&dto.address)
        .bind(&dto.object_type)
        .bind(&dto.object_type_other)
        .bind(&dto.area)
        .bind(&dto.rooms)
        .bind(&dto.services)
        .bind(&dto.start_time)
        .bind(&dto.deadline)
        .bind(&dto.budget)
        .bind(&dto.materials_interest)
        .bind(&dto.consultation_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    /// Most recent leads first
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<LeadRow>, LeadRepositoryError> {
        let leads = sqlx::query_as::<_, LeadRow>(&format!(
            r#"
            SELECT {LEAD_COLUMNS}
            FROM leads
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }
}
