//! Database models
//!
//! Entity structs mapping to the `leads` table and their conversions to and
//! from the shared wire types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::intake::{IntakeForm, is_present};
use crate::core::lead::Lead;

// ============================================================================
// Lead Model
// ============================================================================

/// Row of the `leads` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeadRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub object_type: String,
    pub object_type_other: Option<String>,
    pub area: String,
    pub rooms: Option<String>,
    pub services: Vec<String>,
    pub start_time: String,
    pub deadline: Option<String>,
    pub budget: String,
    pub materials_interest: String,
    pub consultation_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            city: row.city,
            address: row.address,
            object_type: row.object_type,
            object_type_other: row.object_type_other,
            area: row.area,
            rooms: row.rooms,
            services: row.services,
            start_time: row.start_time,
            deadline: row.deadline,
            budget: row.budget,
            materials_interest: row.materials_interest,
            consultation_type: row.consultation_type,
            created_at: format_timestamp(&row.created_at),
        }
    }
}

/// RFC 3339 timestamp as sent to clients
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Lead data for insertion (without id and timestamp)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLead {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub object_type: String,
    pub object_type_other: Option<String>,
    pub area: String,
    pub rooms: Option<String>,
    pub services: Vec<String>,
    pub start_time: String,
    pub deadline: Option<String>,
    pub budget: String,
    pub materials_interest: String,
    pub consultation_type: String,
}

impl CreateLead {
    /// Row values for a stored lead; blank optional fields become NULL
    pub fn into_row(self, id: i64, created_at: DateTime<Utc>) -> LeadRow {
        LeadRow {
            id,
            name: self.name,
            phone: self.phone,
            city: self.city,
            address: self.address,
            object_type: self.object_type,
            object_type_other: self.object_type_other,
            area: self.area,
            rooms: self.rooms,
            services: self.services,
            start_time: self.start_time,
            deadline: self.deadline,
            budget: self.budget,
            materials_interest: self.materials_interest,
            consultation_type: self.consultation_type,
            created_at,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    is_present(value).then(|| value.trim().to_string())
}

impl From<&IntakeForm> for CreateLead {
    fn from(form: &IntakeForm) -> Self {
        let object_type_other = if form.is_other_object_type() {
            optional(&form.object_type_other)
        } else {
            None
        };

        Self {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            city: form.city.trim().to_string(),
            address: form.address.trim().to_string(),
            object_type: form.object_type.clone(),
            object_type_other,
            area: form.area.trim().to_string(),
            rooms: optional(&form.rooms),
            services: form.services.clone(),
            start_time: form.start_time.clone(),
            deadline: optional(&form.deadline),
            budget: form.budget.clone(),
            materials_interest: form.materials_interest.clone(),
            consultation_type: form.consultation_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intake::{OBJECT_TYPE_OTHER, complete_form};
    use chrono::TimeZone;

    #[test]
    fn test_create_lead_from_form_trims_and_nulls_blanks() {
        let mut form = complete_form();
        form.name = "  Иван ".to_string();
        form.rooms = " ".to_string();
        form.deadline = String::new();

        let lead = CreateLead::from(&form);

        assert_eq!(lead.name, "Иван");
        assert_eq!(lead.rooms, None);
        assert_eq!(lead.deadline, None);
        assert_eq!(lead.object_type_other, None);
    }

    #[test]
    fn test_object_type_other_kept_only_for_other() {
        let mut form = complete_form();
        form.object_type_other = "Склад".to_string();
        assert_eq!(CreateLead::from(&form).object_type_other, None);

        form.object_type = OBJECT_TYPE_OTHER.to_string();
        assert_eq!(
            CreateLead::from(&form).object_type_other,
            Some("Склад".to_string())
        );
    }

    #[test]
    fn test_row_to_lead_formats_timestamp() {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0).unwrap();
        let row = CreateLead::from(&complete_form()).into_row(42, created_at);

        let lead = Lead::from(row);

        assert_eq!(lead.id, 42);
        assert_eq!(lead.created_at, "2025-03-07T14:05:00+00:00");
        assert_eq!(lead.rooms, Some("2".to_string()));
    }
}
