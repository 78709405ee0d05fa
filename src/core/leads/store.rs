//! Lead storage backends
//!
//! The API talks to a [`LeadStore`], which is either the PostgreSQL
//! repository or an in-process store used when no database is configured.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use crate::core::db::models::{CreateLead, LeadRow};
use crate::core::db::repositories::{LeadRepository, LeadRepositoryError};

/// In-memory lead storage
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    leads: DashMap<i64, LeadRow>,
    next_id: AtomicI64,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, dto: &CreateLead) -> LeadRow {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = dto.clone().into_row(id, Utc::now());
        self.leads.insert(id, row.clone());
        row
    }

    /// Newest first; ties broken by id so insertion order is kept
    pub fn list_recent(&self, limit: i64) -> Vec<LeadRow> {
        let mut rows: Vec<LeadRow> = self.leads.iter().map(|entry| entry.value().clone()).collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        rows
    }
}

/// Backend used by the lead API
#[derive(Clone)]
pub enum LeadStore {
    Postgres(LeadRepository),
    InMemory(Arc<InMemoryLeadStore>),
}

impl LeadStore {
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryLeadStore::new()))
    }

    pub fn postgres(repo: LeadRepository) -> Self {
        Self::Postgres(repo)
    }

    /// Short backend name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "in-memory",
        }
    }

    pub async fn create(&self, dto: &CreateLead) -> Result<LeadRow, LeadRepositoryError> {
        match self {
            Self::Postgres(repo) => repo.create(dto).await,
            Self::InMemory(store) => Ok(store.create(dto)),
        }
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<LeadRow>, LeadRepositoryError> {
        match self {
            Self::Postgres(repo) => repo.list_recent(limit).await,
            Self::InMemory(store) => Ok(store.list_recent(limit)),
        }
    }
}
