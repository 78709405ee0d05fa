//! Lead wire types shared by the API and the lead viewer
//!
//! `Lead` mirrors a stored submission with snake_case keys; responses wrap
//! it in a `success` envelope. The helpers at the bottom format a lead for
//! the viewer cards.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use super::intake::OBJECT_TYPE_OTHER;

/// Stored lead as returned by `GET /api/leads`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub object_type: String,
    #[serde(default)]
    pub object_type_other: Option<String>,
    pub area: String,
    #[serde(default)]
    pub rooms: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub start_time: String,
    #[serde(default)]
    pub deadline: Option<String>,
    pub budget: String,
    pub materials_interest: String,
    pub consultation_type: String,
    pub created_at: String,
}

/// Body of `GET /api/leads`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadListResponse {
    pub success: bool,
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub total: usize,
}

impl LeadListResponse {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            success: true,
            total: leads.len(),
            leads,
        }
    }
}

/// Body of a successful `POST /api/leads`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadResponse {
    pub success: bool,
    pub lead_id: i64,
    pub created_at: String,
}

/// Leads carried by a listing attempt.
///
/// A failed request and `success: false` are both errors; the viewer logs
/// them and falls back to the empty state.
pub fn leads_from_response<E: std::fmt::Display>(
    result: Result<LeadListResponse, E>,
) -> Result<Vec<Lead>, String> {
    match result {
        Ok(response) if response.success => Ok(response.leads),
        Ok(_) => Err("lead listing reported success: false".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

impl Lead {
    /// Object type with the free-form description substituted for "Другое"
    pub fn display_object_type(&self) -> &str {
        if self.object_type == OBJECT_TYPE_OTHER {
            self.object_type_other.as_deref().unwrap_or(&self.object_type)
        } else {
            &self.object_type
        }
    }

    /// "75 м², 2 комн." style summary
    pub fn display_area(&self) -> String {
        match self.rooms.as_deref().filter(|r| !r.trim().is_empty()) {
            Some(rooms) => format!("{} м², {} комн.", self.area, rooms),
            None => format!("{} м²", self.area),
        }
    }

    pub fn display_address(&self) -> String {
        format!("{}, {}", self.city, self.address)
    }

    /// Deadline if one was given
    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(&self.phone)
    }

    /// Creation time in the viewer's local zone
    pub fn display_created_at(&self) -> String {
        format_created_at(&self.created_at, &Local)
    }
}

/// WhatsApp chat link for a phone number written in any format
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}", digits)
}

/// Format an RFC 3339 timestamp as `dd.mm.yyyy, hh:mm` in `tz`.
///
/// Unparseable input is returned unchanged.
pub fn format_created_at<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(tz).format("%d.%m.%Y, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
pub(crate) fn sample_lead(id: i64) -> Lead {
    Lead {
        id,
        name: "Иван".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        city: "Москва".to_string(),
        address: "ул. Примерная, д. 1".to_string(),
        object_type: "Квартира на вторичке".to_string(),
        object_type_other: None,
        area: "52".to_string(),
        rooms: Some("2".to_string()),
        services: vec!["Капитальный ремонт во вторичке".to_string()],
        start_time: "В течение месяца".to_string(),
        deadline: None,
        budget: "1-2 млн. руб.".to_string(),
        materials_interest: "Да, интересует".to_string(),
        consultation_type: "Выезд на объект".to_string(),
        created_at: "2025-03-07T14:05:00+00:00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_decode_listing_with_snake_case_keys() {
        let json = r#"{
            "success": true,
            "leads": [{
                "id": 7,
                "name": "Анна",
                "phone": "+7 900 000-00-00",
                "city": "Тверь",
                "address": "пр. Мира, 3",
                "object_type": "Другое",
                "object_type_other": "Склад",
                "area": "300",
                "rooms": null,
                "services": ["Только дизайн-проект"],
                "start_time": "В ближайшие 3 месяца",
                "deadline": null,
                "budget": "Более 2 млн. руб.",
                "materials_interest": "Нет, спасибо",
                "consultation_type": "Видео-консультация",
                "created_at": "2025-01-02T09:30:00+00:00"
            }],
            "total": 1
        }"#;

        let response: LeadListResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.leads.len(), 1);
        assert_eq!(response.leads[0].display_object_type(), "Склад");
        assert_eq!(response.leads[0].rooms, None);
    }

    #[test]
    fn test_decode_listing_without_total() {
        let response: LeadListResponse =
            serde_json::from_str(r#"{"success": true, "leads": []}"#).unwrap();
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_empty_success_is_empty_list() {
        let result: Result<_, String> = Ok(LeadListResponse::new(vec![]));
        assert_eq!(leads_from_response(result), Ok(vec![]));
    }

    #[test]
    fn test_unsuccessful_listing_is_an_error() {
        let result: Result<_, String> = Ok(LeadListResponse {
            success: false,
            leads: vec![sample_lead(1)],
            total: 1,
        });
        assert!(leads_from_response(result).is_err());
    }

    #[test]
    fn test_transport_failure_is_an_error() {
        let result: Result<LeadListResponse, _> = Err("connection refused");
        assert_eq!(
            leads_from_response(result),
            Err("connection refused".to_string())
        );
    }

    #[test]
    fn test_successful_listing_keeps_order() {
        let result: Result<_, String> =
            Ok(LeadListResponse::new(vec![sample_lead(3), sample_lead(1)]));
        let ids: Vec<_> = leads_from_response(result)
            .unwrap()
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_create_response_uses_camel_case() {
        let body = CreateLeadResponse {
            success: true,
            lead_id: 12,
            created_at: "2025-01-02T09:30:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["leadId"], 12);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_display_area() {
        let mut lead = sample_lead(1);
        assert_eq!(lead.display_area(), "52 м², 2 комн.");

        lead.rooms = Some(String::new());
        assert_eq!(lead.display_area(), "52 м²");

        lead.rooms = None;
        assert_eq!(lead.display_area(), "52 м²");
    }

    #[test]
    fn test_display_object_type_other_without_description() {
        let mut lead = sample_lead(1);
        lead.object_type = OBJECT_TYPE_OTHER.to_string();
        assert_eq!(lead.display_object_type(), OBJECT_TYPE_OTHER);
    }

    #[test]
    fn test_whatsapp_link_strips_formatting() {
        assert_eq!(
            whatsapp_link("+7 (999) 123-45-67"),
            "https://wa.me/79991234567"
        );
        assert_eq!(sample_lead(1).tel_link(), "tel:+7 (999) 123-45-67");
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at("2025-03-07T14:05:00+00:00", &Utc),
            "07.03.2025, 14:05"
        );
        assert_eq!(
            format_created_at("2025-03-07T14:05:00.123456+03:00", &Utc),
            "07.03.2025, 11:05"
        );
        assert_eq!(format_created_at("вчера", &Utc), "вчера");
    }

    #[test]
    fn test_format_created_at_converts_to_viewer_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();

        assert_eq!(
            format_created_at("2025-03-07T14:05:00+00:00", &moscow),
            "07.03.2025, 17:05"
        );
        assert_eq!(
            format_created_at("2025-12-31T22:30:00Z", &moscow),
            "01.01.2026, 01:30"
        );
    }

    #[test]
    fn test_deadline_blank_is_none() {
        let mut lead = sample_lead(1);
        lead.deadline = Some("  ".to_string());
        assert_eq!(lead.deadline(), None);

        lead.deadline = Some("к лету".to_string());
        assert_eq!(lead.deadline(), Some("к лету"));
    }
}
