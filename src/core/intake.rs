//! Intake form model
//!
//! The record filled in by the conversational calculator, the fixed answer
//! sets offered by its radio groups and checkboxes, and the field-level
//! validation shared by the wizard and the lead API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object type value that requires a free-form description
pub const OBJECT_TYPE_OTHER: &str = "Другое";

/// Selectable object types (radio group on step 3)
pub const OBJECT_TYPES: &[&str] = &[
    "Черновая квартира в новостройке",
    "Квартира на вторичке",
    "Частный дом, коттедж",
    "Коммерческое помещение",
    OBJECT_TYPE_OTHER,
];

/// Services that can be combined on step 5
pub const SERVICES: &[&str] = &[
    "Ремонт под ключ «с нуля»",
    "Капитальный ремонт во вторичке",
    "Дизайн-проект с реализацией",
    "Только дизайн-проект",
];

pub const START_TIMES: &[&str] = &[
    "В течение месяца",
    "В ближайшие 3 месяца",
    "Пока на стадии сбора информации",
];

pub const BUDGETS: &[&str] = &[
    "500 тыс. – 1 млн. руб.",
    "1-2 млн. руб.",
    "Более 2 млн. руб.",
];

pub const MATERIALS_INTEREST: &[&str] = &["Да, интересует", "Нет, спасибо"];

pub const CONSULTATION_TYPES: &[&str] = &[
    "Позвонить по телефону",
    "Видео-консультация",
    "Выезд на объект",
];

/// A single named field of the intake form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    City,
    Address,
    ObjectType,
    ObjectTypeOther,
    Area,
    Rooms,
    Services,
    StartTime,
    Deadline,
    Budget,
    MaterialsInterest,
    ConsultationType,
}

impl Field {
    /// Every field in form order
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Phone,
        Field::City,
        Field::Address,
        Field::ObjectType,
        Field::ObjectTypeOther,
        Field::Area,
        Field::Rooms,
        Field::Services,
        Field::StartTime,
        Field::Deadline,
        Field::Budget,
        Field::MaterialsInterest,
        Field::ConsultationType,
    ];

    /// Fields edited on the given step, in form order
    pub fn on_step(step: u8) -> impl Iterator<Item = Field> {
        Self::ALL.into_iter().filter(move |f| f.owning_step() == step)
    }

    /// Index of the wizard step that is allowed to write this field
    pub fn owning_step(self) -> u8 {
        match self {
            Field::Name => 0,
            Field::Phone => 1,
            Field::City | Field::Address => 2,
            Field::ObjectType | Field::ObjectTypeOther => 3,
            Field::Area | Field::Rooms => 4,
            Field::Services => 5,
            Field::StartTime => 6,
            Field::Deadline => 7,
            Field::Budget => 8,
            Field::MaterialsInterest => 9,
            Field::ConsultationType => 10,
        }
    }

    /// JSON key used in the create-lead request body
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::City => "city",
            Field::Address => "address",
            Field::ObjectType => "objectType",
            Field::ObjectTypeOther => "objectTypeOther",
            Field::Area => "area",
            Field::Rooms => "rooms",
            Field::Services => "services",
            Field::StartTime => "startTime",
            Field::Deadline => "deadline",
            Field::Budget => "budget",
            Field::MaterialsInterest => "materialsInterest",
            Field::ConsultationType => "consultationType",
        }
    }

    /// Closed answer set for radio/checkbox fields, `None` for free text
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Field::ObjectType => Some(OBJECT_TYPES),
            Field::Services => Some(SERVICES),
            Field::StartTime => Some(START_TIMES),
            Field::Budget => Some(BUDGETS),
            Field::MaterialsInterest => Some(MATERIALS_INTEREST),
            Field::ConsultationType => Some(CONSULTATION_TYPES),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether a text value counts as filled in
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Lead data collected by the intake wizard
///
/// Serialized with the camelCase keys the create-lead endpoint expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeForm {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub object_type: String,
    pub object_type_other: String,
    pub area: String,
    pub rooms: String,
    pub services: Vec<String>,
    pub start_time: String,
    pub deadline: String,
    pub budget: String,
    pub materials_interest: String,
    pub consultation_type: String,
}

impl IntakeForm {
    /// Read a text field. `Services` is joined with ", ".
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Services => self.services.join(", "),
            other => self.text(other).to_string(),
        }
    }

    fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::City => &self.city,
            Field::Address => &self.address,
            Field::ObjectType => &self.object_type,
            Field::ObjectTypeOther => &self.object_type_other,
            Field::Area => &self.area,
            Field::Rooms => &self.rooms,
            Field::StartTime => &self.start_time,
            Field::Deadline => &self.deadline,
            Field::Budget => &self.budget,
            Field::MaterialsInterest => &self.materials_interest,
            Field::ConsultationType => &self.consultation_type,
            Field::Services => "",
        }
    }

    /// Write a text field. Writing `Services` toggles that one entry, the same
    /// as [`IntakeForm::toggle_service`].
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::City => self.city = value,
            Field::Address => self.address = value,
            Field::ObjectType => {
                if value != OBJECT_TYPE_OTHER {
                    self.object_type_other.clear();
                }
                self.object_type = value;
            }
            Field::ObjectTypeOther => self.object_type_other = value,
            Field::Area => self.area = value,
            Field::Rooms => self.rooms = value,
            Field::Services => self.toggle_service(&value),
            Field::StartTime => self.start_time = value,
            Field::Deadline => self.deadline = value,
            Field::Budget => self.budget = value,
            Field::MaterialsInterest => self.materials_interest = value,
            Field::ConsultationType => self.consultation_type = value,
        }
    }

    /// Add the service if it is not selected, remove it otherwise
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Whether the field holds a usable value
    pub fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::Services => !self.services.is_empty(),
            other => is_present(self.text(other)),
        }
    }

    pub fn is_other_object_type(&self) -> bool {
        self.object_type == OBJECT_TYPE_OTHER
    }

    /// Object type as shown to people: the free-form text for "Другое"
    pub fn resolved_object_type(&self) -> &str {
        if self.is_other_object_type() {
            &self.object_type_other
        } else {
            &self.object_type
        }
    }

    /// Check a complete submission the way the lead API does before storing it
    pub fn validate(&self) -> Result<(), FieldError> {
        const REQUIRED: &[Field] = &[
            Field::Name,
            Field::Phone,
            Field::City,
            Field::Address,
            Field::ObjectType,
            Field::Area,
            Field::Services,
            Field::StartTime,
            Field::Budget,
            Field::MaterialsInterest,
            Field::ConsultationType,
        ];

        for &field in REQUIRED {
            if !self.is_filled(field) {
                return Err(FieldError::Missing(field));
            }
        }

        if self.is_other_object_type() && !self.is_filled(Field::ObjectTypeOther) {
            return Err(FieldError::Missing(Field::ObjectTypeOther));
        }

        for field in [
            Field::ObjectType,
            Field::StartTime,
            Field::Budget,
            Field::MaterialsInterest,
            Field::ConsultationType,
        ] {
            check_option(field, self.text(field))?;
        }

        for service in &self.services {
            check_option(Field::Services, service)?;
        }

        Ok(())
    }
}

/// Ensure a value belongs to the field's closed answer set (if it has one)
pub fn check_option(field: Field, value: &str) -> Result<(), FieldError> {
    match field.options() {
        Some(options) if !options.contains(&value) => Err(FieldError::UnknownOption {
            field,
            value: value.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Field validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Field '{0}' is required")]
    Missing(Field),

    #[error("Value '{value}' is not a valid option for '{field}'")]
    UnknownOption { field: Field, value: String },
}

#[cfg(test)]
pub(crate) fn complete_form() -> IntakeForm {
    IntakeForm {
        name: "Иван".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        city: "Москва".to_string(),
        address: "ул. Примерная, д. 1".to_string(),
        object_type: OBJECT_TYPES[1].to_string(),
        object_type_other: String::new(),
        area: "52".to_string(),
        rooms: "2".to_string(),
        services: vec![SERVICES[1].to_string()],
        start_time: START_TIMES[0].to_string(),
        deadline: String::new(),
        budget: BUDGETS[1].to_string(),
        materials_interest: MATERIALS_INTEREST[0].to_string(),
        consultation_type: CONSULTATION_TYPES[2].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_an_owning_step() {
        assert_eq!(Field::Name.owning_step(), 0);
        assert_eq!(Field::Address.owning_step(), 2);
        assert_eq!(Field::ObjectTypeOther.owning_step(), 3);
        assert_eq!(Field::Rooms.owning_step(), 4);
        assert_eq!(Field::Deadline.owning_step(), 7);
        assert_eq!(Field::ConsultationType.owning_step(), 10);
    }

    #[test]
    fn test_fields_on_step() {
        let step2: Vec<_> = Field::on_step(2).collect();
        assert_eq!(step2, vec![Field::City, Field::Address]);

        let step4: Vec<_> = Field::on_step(4).collect();
        assert_eq!(step4, vec![Field::Area, Field::Rooms]);

        let covered: usize = (0..=10).map(|step| Field::on_step(step).count()).sum();
        assert_eq!(covered, Field::ALL.len());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(complete_form()).unwrap();

        assert_eq!(json["objectType"], "Квартира на вторичке");
        assert_eq!(json["materialsInterest"], "Да, интересует");
        assert_eq!(json["consultationType"], "Выезд на объект");
        assert!(json["services"].is_array());
        assert!(json.get("object_type").is_none());
    }

    #[test]
    fn test_deserialize_missing_keys_default_to_empty() {
        let form: IntakeForm = serde_json::from_str(r#"{"name": "Пётр"}"#).unwrap();

        assert_eq!(form.name, "Пётр");
        assert!(form.phone.is_empty());
        assert!(form.services.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_present() {
        let mut form = IntakeForm::default();
        form.set(Field::Name, "   ");
        assert!(!form.is_filled(Field::Name));

        form.set(Field::Name, " Анна ");
        assert!(form.is_filled(Field::Name));
    }

    #[test]
    fn test_toggle_service_twice_restores_selection() {
        let mut form = IntakeForm::default();
        form.toggle_service(SERVICES[0]);
        let before = form.services.clone();

        form.toggle_service(SERVICES[2]);
        form.toggle_service(SERVICES[2]);

        assert_eq!(form.services, before);
    }

    #[test]
    fn test_set_services_toggles_single_entry() {
        let mut form = IntakeForm::default();
        form.toggle_service(SERVICES[0]);

        form.set(Field::Services, SERVICES[1]);
        assert_eq!(form.services, vec![SERVICES[0], SERVICES[1]]);

        form.set(Field::Services, SERVICES[0]);
        assert_eq!(form.services, vec![SERVICES[1]]);
    }

    #[test]
    fn test_leaving_other_object_type_clears_description() {
        let mut form = IntakeForm::default();
        form.set(Field::ObjectType, OBJECT_TYPE_OTHER);
        form.set(Field::ObjectTypeOther, "Склад");
        assert_eq!(form.resolved_object_type(), "Склад");

        form.set(Field::ObjectType, OBJECT_TYPES[0]);
        assert!(form.object_type_other.is_empty());
        assert_eq!(form.resolved_object_type(), OBJECT_TYPES[0]);
    }

    #[test]
    fn test_validate_complete_form() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = complete_form();
        form.phone.clear();
        form.budget.clear();

        assert_eq!(form.validate(), Err(FieldError::Missing(Field::Phone)));
    }

    #[test]
    fn test_validate_optional_fields_may_be_empty() {
        let mut form = complete_form();
        form.rooms.clear();
        form.deadline.clear();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_description_for_other() {
        let mut form = complete_form();
        form.object_type = OBJECT_TYPE_OTHER.to_string();

        assert_eq!(
            form.validate(),
            Err(FieldError::Missing(Field::ObjectTypeOther))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_options() {
        let mut form = complete_form();
        form.budget = "Миллиард".to_string();
        assert!(matches!(
            form.validate(),
            Err(FieldError::UnknownOption {
                field: Field::Budget,
                ..
            })
        ));

        let mut form = complete_form();
        form.services.push("Покраска забора".to_string());
        assert!(matches!(
            form.validate(),
            Err(FieldError::UnknownOption {
                field: Field::Services,
                ..
            })
        ));
    }

    #[test]
    fn test_check_option_allows_free_text_fields() {
        assert!(check_option(Field::Deadline, "к сентябрю").is_ok());
        assert!(check_option(Field::StartTime, "завтра").is_err());
    }
}
