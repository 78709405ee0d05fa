//! Conversational repair-cost calculator
//!
//! Renders a [`WizardState`] as a chat: the transcript on top and the inputs
//! of the current step below it. Completing a step echoes the answer right
//! away and shows the next prompt after
//! [`PROMPT_DELAY_MS`](crate::core::wizard::PROMPT_DELAY_MS). The last step
//! sends the form to the lead API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::intake::Field;
use crate::core::wizard::{TranscriptEntry, WizardState};
use crate::ui::api::submit_lead;
use crate::ui::common::{
    BaseModal, Button, ButtonSize, CheckboxField, FormField, RadioGroupField, Spinner,
    SpinnerSize, SpinnerStyle,
};
use crate::ui::icon::icons;
use crate::ui::notifications::use_notifications;

const SUBMIT_SUCCESS: &str = "Заявка отправлена! Мы свяжемся с вами в ближайшее время";

const MATERIALS_HINT: &str = "Мы предлагаем комплексное решение: дизайн + все материалы + ремонт. \
     Это выгоднее и гарантирует точное соответствие проекту.";

/// How a field is presented on its step
#[derive(Clone, Copy)]
struct FieldUi {
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    required: bool,
}

fn field_ui(field: Field) -> FieldUi {
    let (label, placeholder, input_type, required) = match field {
        Field::Name => ("Ваше имя", "Иван Иванов", "text", true),
        Field::Phone => ("Контактный телефон", "+7 (999) 999-99-99", "tel", true),
        Field::City => ("Город", "Москва", "text", true),
        Field::Address => ("Адрес объекта", "ул. Примерная, д. 1", "text", true),
        Field::ObjectType => ("Тип объекта", "", "radio", true),
        Field::ObjectTypeOther => ("Укажите тип", "Укажите тип", "text", true),
        Field::Area => ("Площадь объекта (м²)", "75", "number", true),
        Field::Rooms => ("Количество комнат", "2", "number", false),
        Field::Services => ("Что планируете делать? (можно несколько)", "", "checkbox", true),
        Field::StartTime => ("Когда планируете начать?", "", "radio", true),
        Field::Deadline => (
            "Желаемые сроки завершения",
            "Например: к сентябрю 2025",
            "text",
            false,
        ),
        Field::Budget => ("Ориентировочный бюджет", "", "radio", true),
        Field::MaterialsInterest => ("Интересует наш магазин материалов?", "", "radio", true),
        Field::ConsultationType => ("Как удобнее получить консультацию?", "", "radio", true),
    };
    FieldUi {
        label,
        placeholder,
        input_type,
        required,
    }
}

/// Text shown next to a radio option; the submitted value stays unchanged
fn option_label(field: Field, value: &'static str) -> &'static str {
    match (field, value) {
        (Field::ObjectType, "Коммерческое помещение") => "Коммерческое помещение (офис, магазин)",
        (Field::MaterialsInterest, "Да, интересует") => "Да, хочу узнать подробнее",
        (Field::ConsultationType, "Видео-консультация") => "Назначить видео-консультацию",
        (Field::ConsultationType, "Выезд на объект") => "Пригласить замерщика на объект",
        _ => value,
    }
}

/// Whether the field's input is rendered for the current form
fn is_visible(state: &WizardState, field: Field) -> bool {
    field != Field::ObjectTypeOther || state.form().is_other_object_type()
}

/// Chat modal driving one intake session
#[component]
pub fn IntakeChat(
    /// Whether the chat is open
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(WizardState::new());
    // True between echoing an answer and showing the next prompt
    let pending = RwSignal::new(false);
    // Bumped on close so delayed prompts of a discarded session are dropped
    let session = RwSignal::new(0u64);

    let on_close = Callback::new(move |_: ()| {
        is_open.set(false);
        session.update(|s| *s += 1);
        pending.set(false);
        state.set(WizardState::new());
    });

    let edit = Callback::new(move |(field, value): (Field, String)| {
        let result = state.with_untracked(|s| s.set_field(field, &value));
        match result {
            Ok(next) => state.set(next),
            Err(e) => leptos::logging::warn!("Ignoring edit of {}: {}", field, e),
        }
    });

    let toggle_service = Callback::new(move |service: String| {
        let result = state.with_untracked(|s| s.toggle_service(&service));
        match result {
            Ok(next) => state.set(next),
            Err(e) => leptos::logging::warn!("Ignoring service toggle: {}", e),
        }
    });

    let advance = Callback::new(move |_: ()| {
        if pending.get_untracked() {
            return;
        }

        let current = state.get_untracked();
        let transition = match current.transition() {
            Ok(transition) => transition,
            Err(e) => {
                leptos::logging::warn!("Step {} not complete: {}", current.step(), e);
                return;
            }
        };

        match current.record_answer(&transition) {
            Ok(next) => state.set(next),
            Err(e) => {
                leptos::logging::warn!("Failed to record answer: {}", e);
                return;
            }
        }

        if let Some(form) = transition.submission.clone() {
            spawn_local(async move {
                match submit_lead(&form).await {
                    Ok(created) => {
                        leptos::logging::log!("Lead #{} submitted", created.lead_id);
                        notifications.success(SUBMIT_SUCCESS, "");
                    }
                    Err(e) => leptos::logging::error!("Failed to submit lead: {}", e),
                }
            });
        }

        pending.set(true);
        let ticket = session.get_untracked();
        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::future::TimeoutFuture::new(crate::core::wizard::PROMPT_DELAY_MS).await;

            if session.get_untracked() != ticket {
                return;
            }
            let result = state.with_untracked(|s| s.enter_next(&transition));
            match result {
                Ok(next) => state.set(next),
                Err(e) => leptos::logging::warn!("Dropping delayed prompt: {}", e),
            }
            pending.set(false);
        });
    });

    view! {
        <BaseModal
            title="Калькулятор ремонта"
            subtitle="Ответьте на вопросы для расчёта"
            icon=icons::MESSAGE_CIRCLE
            is_open=is_open.into()
            on_close=on_close
        >
            <div class="flex-1 overflow-y-auto p-6 space-y-4 chat-body">
                <For
                    each=move || state.with(|s| s.transcript().to_vec())
                    key=|entry| entry.sequence_id
                    children=|entry| view! { <ChatBubble entry=entry /> }
                />

                <Show when=move || pending.get()>
                    <div class="flex justify-start">
                        <div class="chat-bubble-system">
                            <Spinner style=SpinnerStyle::Dots size=SpinnerSize::Small />
                        </div>
                    </div>
                </Show>

                <Show when=move || !pending.get() && !state.with(|s| s.is_submitted())>
                    <StepPanel state=state edit=edit toggle_service=toggle_service advance=advance />
                </Show>
            </div>
        </BaseModal>
    }
}

#[component]
fn ChatBubble(entry: TranscriptEntry) -> impl IntoView {
    let (row_class, bubble_class) = if entry.is_system() {
        ("flex justify-start", "chat-bubble-system")
    } else {
        ("flex justify-end", "chat-bubble-user")
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>{entry.text}</div>
        </div>
    }
}

/// Inputs and advance button of the current step
#[component]
fn StepPanel(
    state: RwSignal<WizardState>,
    edit: Callback<(Field, String)>,
    toggle_service: Callback<String>,
    advance: Callback<()>,
) -> impl IntoView {
    let step = Memo::new(move |_| state.with(|s| s.step()));
    let cannot_advance = Signal::derive(move || !state.with(|s| s.can_advance()));

    view! {
        <div class="bg-white p-6 rounded-2xl shadow-sm space-y-4">
            {move || {
                let step = step.get();
                let hint = (step == 9).then(|| view! {
                    <p class="text-sm text-muted">{MATERIALS_HINT}</p>
                });
                let inputs = Field::on_step(step)
                    .map(|field| view! {
                        <FieldInput field=field state=state edit=edit toggle_service=toggle_service />
                    })
                    .collect_view();
                view! { {hint} {inputs} }
            }}
            <Button
                on_click=advance
                disabled=cannot_advance
                size=ButtonSize::Large
                class="w-full mt-4".to_string()
            >
                {move || if state.with(|s| s.is_final_step()) { "Отправить заявку" } else { "Далее" }}
            </Button>
        </div>
    }
}

/// Input for one field, chosen by its answer set
#[component]
fn FieldInput(
    field: Field,
    state: RwSignal<WizardState>,
    edit: Callback<(Field, String)>,
    toggle_service: Callback<String>,
) -> impl IntoView {
    let ui = field_ui(field);
    let value = Signal::derive(move || state.with(|s| s.form().get(field)));
    let visible = Memo::new(move |_| state.with(|s| is_visible(s, field)));

    let render = move || match (field, field.options()) {
        (Field::Services, Some(services)) => view! {
            <div class="space-y-3">
                <span class="label">
                    {ui.label}
                    <span class="text-red-500 ml-0.5">"*"</span>
                </span>
                {services
                    .iter()
                    .enumerate()
                    .map(|(index, &service)| {
                        let checked =
                            Signal::derive(move || state.with(|s| s.form().has_service(service)));
                        view! {
                            <CheckboxField
                                id=format!("service-{}", index)
                                label=service
                                checked=checked
                                on_change=Callback::new(move |_: bool| toggle_service.run(service.to_string()))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        (_, Some(options)) => view! {
            <RadioGroupField
                name=field.key()
                label=ui.label
                required=ui.required
                options=options.iter().map(|&o| (o, option_label(field, o))).collect()
                value=value
                on_change=Callback::new(move |v: String| edit.run((field, v)))
            />
        }
        .into_any(),
        (_, None) => view! {
            <FormField
                id=field.key()
                label=ui.label
                required=ui.required
                input_type=ui.input_type
                placeholder=ui.placeholder
                value=value
                on_input=Callback::new(move |v: String| edit.run((field, v)))
            />
        }
        .into_any(),
    };

    move || visible.get().then(render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intake::{CONSULTATION_TYPES, MATERIALS_INTEREST, OBJECT_TYPE_OTHER, OBJECT_TYPES};

    #[test]
    fn test_option_labels_keep_plain_values() {
        assert_eq!(option_label(Field::StartTime, "В течение месяца"), "В течение месяца");
        assert_eq!(option_label(Field::ObjectType, OBJECT_TYPE_OTHER), OBJECT_TYPE_OTHER);
    }

    #[test]
    fn test_option_labels_expand_short_values() {
        assert_eq!(
            option_label(Field::ObjectType, OBJECT_TYPES[3]),
            "Коммерческое помещение (офис, магазин)"
        );
        assert_eq!(
            option_label(Field::MaterialsInterest, MATERIALS_INTEREST[0]),
            "Да, хочу узнать подробнее"
        );
        assert_eq!(
            option_label(Field::ConsultationType, CONSULTATION_TYPES[2]),
            "Пригласить замерщика на объект"
        );
    }

    #[test]
    fn test_required_markers_follow_wizard_rules() {
        assert!(field_ui(Field::Name).required);
        assert!(!field_ui(Field::Rooms).required);
        assert!(!field_ui(Field::Deadline).required);
    }

    #[test]
    fn test_other_object_type_input_only_for_other() {
        let state = WizardState::new();
        assert!(!is_visible(&state, Field::ObjectTypeOther));
        assert!(is_visible(&state, Field::Name));
    }
}
