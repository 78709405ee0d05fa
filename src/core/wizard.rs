//! Intake wizard state machine
//!
//! The calculator chat is a fixed sequence of steps `0..=LAST_STEP`. Each
//! step owns a group of form fields, a prompt shown when the step is entered
//! and a rule that turns the collected fields into the user's transcript
//! line. All of this lives in [`STEPS`]; the transition functions below only
//! consult the table.
//!
//! Transitions are reducer-style: every operation takes the current
//! [`WizardState`] by reference and returns a new one, so a rejected edit or
//! an incomplete step leaves the caller's state untouched.
//!
//! Advancing happens in two phases so the UI can pace the conversation:
//! [`WizardState::record_answer`] echoes the user's answer immediately and
//! [`WizardState::enter_next`] moves to the next step after
//! [`PROMPT_DELAY_MS`].

use serde::{Deserialize, Serialize};

use super::intake::{Field, FieldError, IntakeForm, check_option};

/// Index of the final step; completing it submits the form
pub const LAST_STEP: u8 = 10;

/// Pause between the user's answer and the next prompt
pub const PROMPT_DELAY_MS: u32 = 500;

/// Transcript text used when no deadline was given on step 7
pub const FLEXIBLE_DEADLINE: &str = "Сроки гибкие";

/// Message appended once the lead has been submitted
pub const CLOSING_MESSAGE: &str =
    "Спасибо! Мы свяжемся с вами в ближайшее время для уточнения деталей 🚀";

/// Static description of one wizard step
pub struct StepSpec {
    /// Fields that must be filled before the step can be completed
    pub required: &'static [Field],
    /// System message shown when the step is entered
    pub prompt: &'static str,
    /// Builds the user's transcript line from the form
    pub answer: fn(&IntakeForm) -> String,
}

pub static STEPS: [StepSpec; LAST_STEP as usize + 1] = [
    StepSpec {
        required: &[Field::Name],
        prompt: "Здравствуйте! Я помогу подобрать оптимальное решение для вашего ремонта. Как вас зовут?",
        answer: |form| format!("Меня зовут {}", form.name.trim()),
    },
    StepSpec {
        required: &[Field::Phone],
        prompt: "Отлично! Теперь укажите ваш контактный телефон",
        answer: |form| form.phone.trim().to_string(),
    },
    StepSpec {
        required: &[Field::City, Field::Address],
        prompt: "Спасибо! В каком городе находится объект и его адрес?",
        answer: |form| format!("{}, {}", form.city.trim(), form.address.trim()),
    },
    StepSpec {
        required: &[Field::ObjectType],
        prompt: "Понятно. Какой тип объекта вы планируете ремонтировать?",
        answer: |form| form.resolved_object_type().trim().to_string(),
    },
    StepSpec {
        required: &[Field::Area],
        prompt: "Хорошо! Укажите площадь объекта и количество комнат",
        answer: |form| {
            let mut text = format!("{} м²", form.area.trim());
            if form.is_filled(Field::Rooms) {
                text.push_str(&format!(", комнат: {}", form.rooms.trim()));
            }
            text
        },
    },
    StepSpec {
        required: &[Field::Services],
        prompt: "Отлично! Что именно вы планируете делать?",
        answer: |form| form.services.join(", "),
    },
    StepSpec {
        required: &[Field::StartTime],
        prompt: "Когда вы планируете начать ремонт?",
        answer: |form| form.start_time.clone(),
    },
    StepSpec {
        required: &[],
        prompt: "Есть ли желаемые сроки завершения работ?",
        answer: |form| {
            if form.is_filled(Field::Deadline) {
                form.deadline.trim().to_string()
            } else {
                FLEXIBLE_DEADLINE.to_string()
            }
        },
    },
    StepSpec {
        required: &[Field::Budget],
        prompt: "Какой у вас ориентировочный бюджет на ремонт?",
        answer: |form| form.budget.clone(),
    },
    StepSpec {
        required: &[Field::MaterialsInterest],
        prompt: "У нас есть собственный магазин материалов! Хотите узнать подробнее?",
        answer: |form| form.materials_interest.clone(),
    },
    StepSpec {
        required: &[Field::ConsultationType],
        prompt: "Как вам удобнее получить консультацию?",
        answer: |form| form.consultation_type.clone(),
    },
];

/// Who produced a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    System,
    User,
}

/// One line of the conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sequence_id: u32,
    pub text: String,
    pub origin: Origin,
}

impl TranscriptEntry {
    pub fn is_system(&self) -> bool {
        self.origin == Origin::System
    }
}

/// Errors returned when editing the form through the wizard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Field '{field}' cannot be edited on step {step}")]
    FieldNotEditable { field: Field, step: u8 },

    #[error("Field '{0}' is a selection; toggle its entries instead")]
    SelectionField(Field),

    #[error(transparent)]
    InvalidValue(#[from] FieldError),

    #[error("The request has already been submitted")]
    AlreadySubmitted,
}

/// Errors returned when trying to complete a step
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    #[error("Step cannot be completed: field '{0}' is required")]
    Incomplete(Field),

    #[error("The request has already been submitted")]
    AlreadySubmitted,

    #[error("Transition was computed for step {expected}, wizard is on step {actual}")]
    Stale { expected: u8, actual: u8 },
}

/// Outcome of completing the current step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Step the transition was computed for
    pub from: u8,
    /// User's transcript line; nothing is appended when empty
    pub answer: String,
    /// Step entered next, `None` when the final step is being submitted
    pub next: Option<u8>,
    /// System message appended on entering the next step
    pub prompt: &'static str,
    /// Form snapshot to send to the lead API (final step only)
    pub submission: Option<IntakeForm>,
}

impl Transition {
    pub fn is_submission(&self) -> bool {
        self.submission.is_some()
    }
}

/// Complete state of one wizard session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    step: u8,
    transcript: Vec<TranscriptEntry>,
    form: IntakeForm,
    submitted: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh session: step 0 with the greeting already in the transcript
    pub fn new() -> Self {
        let mut state = Self {
            step: 0,
            transcript: Vec::new(),
            form: IntakeForm::default(),
            submitted: false,
        };
        state.push(STEPS[0].prompt.to_string(), Origin::System);
        state
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_final_step(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Table entry of the current step
    pub fn spec(&self) -> &'static StepSpec {
        &STEPS[self.step as usize]
    }

    /// Write a text or single-choice field owned by the current step.
    /// Services are edited with [`WizardState::toggle_service`].
    pub fn set_field(&self, field: Field, value: &str) -> Result<Self, WizardError> {
        self.ensure_editable(field)?;
        if field == Field::Services {
            return Err(WizardError::SelectionField(field));
        }
        check_option(field, value)?;

        let mut next = self.clone();
        next.form.set(field, value);
        Ok(next)
    }

    /// Select or deselect a service on the services step
    pub fn toggle_service(&self, service: &str) -> Result<Self, WizardError> {
        self.ensure_editable(Field::Services)?;
        check_option(Field::Services, service)?;

        let mut next = self.clone();
        next.form.toggle_service(service);
        Ok(next)
    }

    /// First field keeping the current step from completing
    pub fn missing_field(&self) -> Option<Field> {
        let spec = self.spec();
        if let Some(&field) = spec.required.iter().find(|&&f| !self.form.is_filled(f)) {
            return Some(field);
        }
        if spec.required.contains(&Field::ObjectType)
            && self.form.is_other_object_type()
            && !self.form.is_filled(Field::ObjectTypeOther)
        {
            return Some(Field::ObjectTypeOther);
        }
        None
    }

    /// Whether the advance control should be enabled
    pub fn can_advance(&self) -> bool {
        !self.submitted && self.missing_field().is_none()
    }

    /// Compute the transition completing the current step
    pub fn transition(&self) -> Result<Transition, AdvanceError> {
        if self.submitted {
            return Err(AdvanceError::AlreadySubmitted);
        }
        if let Some(field) = self.missing_field() {
            return Err(AdvanceError::Incomplete(field));
        }

        let answer = (self.spec().answer)(&self.form);
        let transition = if self.is_final_step() {
            Transition {
                from: self.step,
                answer,
                next: None,
                prompt: CLOSING_MESSAGE,
                submission: Some(self.form.clone()),
            }
        } else {
            let next = self.step + 1;
            Transition {
                from: self.step,
                answer,
                next: Some(next),
                prompt: STEPS[next as usize].prompt,
                submission: None,
            }
        };
        Ok(transition)
    }

    /// First phase: echo the user's answer
    pub fn record_answer(&self, transition: &Transition) -> Result<Self, AdvanceError> {
        self.ensure_current(transition)?;

        let mut next = self.clone();
        if !transition.answer.is_empty() {
            next.push(transition.answer.clone(), Origin::User);
        }
        Ok(next)
    }

    /// Second phase: move to the next step and show its prompt, or close the
    /// session after the final step
    pub fn enter_next(&self, transition: &Transition) -> Result<Self, AdvanceError> {
        self.ensure_current(transition)?;

        let mut next = self.clone();
        match transition.next {
            Some(step) => next.step = step,
            None => next.submitted = true,
        }
        next.push(transition.prompt.to_string(), Origin::System);
        Ok(next)
    }

    /// Complete the current step without pacing
    pub fn advance(&self) -> Result<(Self, Transition), AdvanceError> {
        let transition = self.transition()?;
        let next = self
            .record_answer(&transition)?
            .enter_next(&transition)?;
        Ok((next, transition))
    }

    fn ensure_editable(&self, field: Field) -> Result<(), WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if field.owning_step() != self.step {
            return Err(WizardError::FieldNotEditable {
                field,
                step: self.step,
            });
        }
        Ok(())
    }

    fn ensure_current(&self, transition: &Transition) -> Result<(), AdvanceError> {
        if self.submitted {
            return Err(AdvanceError::AlreadySubmitted);
        }
        if transition.from != self.step {
            return Err(AdvanceError::Stale {
                expected: transition.from,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn push(&mut self, text: String, origin: Origin) {
        let sequence_id = self.transcript.len() as u32;
        self.transcript.push(TranscriptEntry {
            sequence_id,
            text,
            origin,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intake::{
        BUDGETS, CONSULTATION_TYPES, MATERIALS_INTEREST, OBJECT_TYPE_OTHER, OBJECT_TYPES,
        SERVICES, START_TIMES,
    };

    fn set(state: WizardState, field: Field, value: &str) -> WizardState {
        state.set_field(field, value).unwrap()
    }

    fn advance(state: WizardState) -> WizardState {
        state.advance().unwrap().0
    }

    /// Walk the wizard up to (but not through) the given step
    fn state_at(step: u8) -> WizardState {
        let mut state = WizardState::new();
        while state.step() < step {
            state = match state.step() {
                0 => set(state, Field::Name, "Иван"),
                1 => set(state, Field::Phone, "+7 999 123-45-67"),
                2 => set(set(state, Field::City, "Казань"), Field::Address, "ул. Баумана, 5"),
                3 => set(state, Field::ObjectType, OBJECT_TYPES[0]),
                4 => set(state, Field::Area, "75"),
                5 => state.toggle_service(SERVICES[0]).unwrap(),
                6 => set(state, Field::StartTime, START_TIMES[1]),
                7 => state,
                8 => set(state, Field::Budget, BUDGETS[2]),
                9 => set(state, Field::MaterialsInterest, MATERIALS_INTEREST[1]),
                _ => unreachable!(),
            };
            state = advance(state);
        }
        state
    }

    fn last_text(state: &WizardState) -> &str {
        &state.transcript().last().unwrap().text
    }

    fn user_answer(state: &WizardState) -> &str {
        let transcript = state.transcript();
        &transcript[transcript.len() - 2].text
    }

    #[test]
    fn test_new_wizard_starts_with_greeting() {
        let state = WizardState::new();

        assert_eq!(state.step(), 0);
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0].origin, Origin::System);
        assert_eq!(state.transcript()[0].sequence_id, 0);
        assert!(!state.can_advance());
    }

    #[test]
    fn test_name_step_scenario() {
        let state = set(WizardState::new(), Field::Name, "Иван");
        let state = advance(state);

        assert_eq!(state.step(), 1);
        let texts: Vec<_> = state.transcript().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                STEPS[0].prompt,
                "Меня зовут Иван",
                "Отлично! Теперь укажите ваш контактный телефон",
            ]
        );
        assert_eq!(state.transcript()[1].origin, Origin::User);
        assert_eq!(state.transcript()[2].origin, Origin::System);
    }

    #[test]
    fn test_incomplete_steps_do_not_change_state() {
        for step in 0..LAST_STEP {
            if step == 7 {
                continue;
            }
            let state = state_at(step);
            let err = state.advance().unwrap_err();

            assert!(matches!(err, AdvanceError::Incomplete(_)), "step {step}");
            assert!(!state.can_advance());
            assert_eq!(state.step(), step);
        }
    }

    #[test]
    fn test_deadline_step_falls_back_to_flexible() {
        let state = advance(state_at(7));

        assert_eq!(state.step(), 8);
        assert_eq!(user_answer(&state), FLEXIBLE_DEADLINE);
    }

    #[test]
    fn test_deadline_step_uses_entered_text() {
        let state = set(state_at(7), Field::Deadline, "к сентябрю 2025");
        let state = advance(state);

        assert_eq!(user_answer(&state), "к сентябрю 2025");
    }

    #[test]
    fn test_city_and_address_both_required() {
        let state = set(state_at(2), Field::City, "Казань");
        assert_eq!(state.missing_field(), Some(Field::Address));

        let state = set(state, Field::Address, "ул. Баумана, 5");
        let state = advance(state);
        assert_eq!(user_answer(&state), "Казань, ул. Баумана, 5");
    }

    #[test]
    fn test_other_object_type_requires_description() {
        let state = set(state_at(3), Field::ObjectType, OBJECT_TYPE_OTHER);

        assert!(!state.can_advance());
        assert_eq!(
            state.advance().unwrap_err(),
            AdvanceError::Incomplete(Field::ObjectTypeOther)
        );

        let state = set(state, Field::ObjectTypeOther, "Склад");
        let state = advance(state);
        assert_eq!(state.step(), 4);
        assert_eq!(user_answer(&state), "Склад");
    }

    #[test]
    fn test_area_answer_with_and_without_rooms() {
        let without = advance(set(state_at(4), Field::Area, "75"));
        assert_eq!(user_answer(&without), "75 м²");

        let with = set(set(state_at(4), Field::Area, "75"), Field::Rooms, "3");
        let with = advance(with);
        assert_eq!(user_answer(&with), "75 м², комнат: 3");
    }

    #[test]
    fn test_services_joined_in_selection_order() {
        let state = state_at(5)
            .toggle_service(SERVICES[3])
            .unwrap()
            .toggle_service(SERVICES[0])
            .unwrap();
        let state = advance(state);

        assert_eq!(
            user_answer(&state),
            format!("{}, {}", SERVICES[3], SERVICES[0])
        );
    }

    #[test]
    fn test_service_toggle_is_idempotent() {
        let base = state_at(5).toggle_service(SERVICES[1]).unwrap();
        let toggled = base
            .toggle_service(SERVICES[2])
            .unwrap()
            .toggle_service(SERVICES[2])
            .unwrap();

        assert_eq!(toggled.form().services, base.form().services);
    }

    #[test]
    fn test_service_selection_order_does_not_change_membership() {
        let a = state_at(5)
            .toggle_service(SERVICES[0])
            .unwrap()
            .toggle_service(SERVICES[2])
            .unwrap();
        let b = state_at(5)
            .toggle_service(SERVICES[2])
            .unwrap()
            .toggle_service(SERVICES[0])
            .unwrap();

        for service in SERVICES {
            assert_eq!(a.form().has_service(service), b.form().has_service(service));
        }
    }

    #[test]
    fn test_deselecting_all_services_blocks_advance() {
        let state = state_at(5)
            .toggle_service(SERVICES[0])
            .unwrap()
            .toggle_service(SERVICES[0])
            .unwrap();

        assert_eq!(state.missing_field(), Some(Field::Services));
    }

    #[test]
    fn test_fields_of_other_steps_are_not_editable() {
        let state = state_at(1);

        assert_eq!(
            state.set_field(Field::Name, "Пётр").unwrap_err(),
            WizardError::FieldNotEditable {
                field: Field::Name,
                step: 1
            }
        );
        assert!(state.set_field(Field::Budget, BUDGETS[0]).is_err());
        assert!(state.toggle_service(SERVICES[0]).is_err());
    }

    #[test]
    fn test_services_cannot_be_overwritten_as_text() {
        let state = state_at(5);

        for value in ["", "Покраска забора", SERVICES[0]] {
            assert_eq!(
                state.set_field(Field::Services, value).unwrap_err(),
                WizardError::SelectionField(Field::Services)
            );
        }
        assert!(!state.can_advance());
        assert!(state.form().services.is_empty());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let state = state_at(8);
        let err = state.set_field(Field::Budget, "Бесплатно").unwrap_err();

        assert!(matches!(err, WizardError::InvalidValue(_)));
        assert!(state.toggle_service("Нет такой").is_err());
    }

    #[test]
    fn test_step_increases_by_one_and_never_exceeds_last() {
        let mut previous = WizardState::new().step();
        for step in 1..=LAST_STEP {
            let state = state_at(step);
            assert_eq!(state.step(), previous + 1);
            previous = state.step();
        }
        assert_eq!(previous, LAST_STEP);

        let state = set(state_at(LAST_STEP), Field::ConsultationType, CONSULTATION_TYPES[0]);
        let (state, _) = state.advance().unwrap();
        assert_eq!(state.step(), LAST_STEP);
    }

    #[test]
    fn test_transcript_length_counts_answers_and_prompts() {
        for advances in 0..=LAST_STEP {
            let state = state_at(advances);
            assert_eq!(state.transcript().len(), 1 + 2 * advances as usize);
        }
    }

    #[test]
    fn test_sequence_ids_are_monotonic() {
        let state = state_at(6);
        for (index, entry) in state.transcript().iter().enumerate() {
            assert_eq!(entry.sequence_id as usize, index);
        }
    }

    #[test]
    fn test_final_step_submits_form() {
        let state = set(state_at(LAST_STEP), Field::ConsultationType, CONSULTATION_TYPES[1]);
        let (done, transition) = state.advance().unwrap();

        assert!(transition.is_submission());
        let submission = transition.submission.unwrap();
        assert_eq!(submission.name, "Иван");
        assert_eq!(submission.consultation_type, CONSULTATION_TYPES[1]);
        assert!(submission.validate().is_ok());

        assert!(done.is_submitted());
        assert_eq!(user_answer(&done), CONSULTATION_TYPES[1]);
        assert_eq!(last_text(&done), CLOSING_MESSAGE);
    }

    #[test]
    fn test_no_transitions_after_submission() {
        let state = set(state_at(LAST_STEP), Field::ConsultationType, CONSULTATION_TYPES[1]);
        let (done, _) = state.advance().unwrap();

        assert_eq!(done.advance().unwrap_err(), AdvanceError::AlreadySubmitted);
        assert_eq!(
            done.set_field(Field::ConsultationType, CONSULTATION_TYPES[0])
                .unwrap_err(),
            WizardError::AlreadySubmitted
        );
        assert!(!done.can_advance());
    }

    #[test]
    fn test_two_phase_advance_paces_prompt() {
        let state = set(WizardState::new(), Field::Name, "Иван");
        let transition = state.transition().unwrap();

        let answered = state.record_answer(&transition).unwrap();
        assert_eq!(answered.step(), 0);
        assert_eq!(answered.transcript().len(), 2);

        let entered = answered.enter_next(&transition).unwrap();
        assert_eq!(entered.step(), 1);
        assert_eq!(last_text(&entered), STEPS[1].prompt);
    }

    #[test]
    fn test_stale_transition_rejected() {
        let state = set(WizardState::new(), Field::Name, "Иван");
        let transition = state.transition().unwrap();
        let (moved, _) = state.advance().unwrap();

        assert_eq!(
            moved.enter_next(&transition).unwrap_err(),
            AdvanceError::Stale {
                expected: 0,
                actual: 1
            }
        );
    }

    #[test]
    fn test_each_step_prompt_asks_for_its_own_fields() {
        assert!(STEPS[1].prompt.contains("телефон"));
        assert!(STEPS[2].prompt.contains("город"));
        assert!(STEPS[4].prompt.contains("площадь"));
        assert!(STEPS[8].prompt.contains("бюджет"));
        assert!(STEPS[10].prompt.contains("консультацию"));
    }
}
