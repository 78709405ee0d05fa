//! Lead viewer page
//!
//! Loads the recent submissions once and renders one card per lead, newest
//! first. A failed load is logged and shown as the empty state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::lead::{Lead, leads_from_response};
use crate::ui::api::fetch_leads;
use crate::ui::common::{Badge, BadgeSize, BadgeVariant, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};

/// Lead viewer page component
#[component]
pub fn LeadsPage() -> impl IntoView {
    let leads = RwSignal::new(Vec::<Lead>::new());
    let loading = RwSignal::new(true);

    // Load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match leads_from_response(fetch_leads().await) {
                Ok(list) => leads.set(list),
                Err(e) => {
                    leptos::logging::error!("Ошибка загрузки заявок: {}", e);
                    leads.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <Title text="Заявки клиентов" />

        <div class="min-h-screen landing-bg p-4">
            <div class="container mx-auto max-w-6xl">
                <div class="flex items-center justify-between mb-8 pt-8">
                    <div>
                        <h1 class="text-4xl font-bold text-gradient mb-2">"Заявки клиентов"</h1>
                        <p class="text-muted">{move || format!("Всего заявок: {}", leads.with(Vec::len))}</p>
                    </div>
                    <A href="/" attr:class="btn-base btn-outline gap-2">
                        <Icon name=icons::HOME class="icon-btn" />
                        "На главную"
                    </A>
                </div>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex justify-center items-center h-64">
                                <Spinner size=SpinnerSize::Large centered=true />
                            </div>
                        }.into_any()
                    } else if leads.with(Vec::is_empty) {
                        view! { <EmptyState /> }.into_any()
                    } else {
                        view! {
                            <div class="space-y-4">
                                <For
                                    each=move || leads.get()
                                    key=|lead| lead.id
                                    children=|lead| view! { <LeadCard lead=lead /> }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="card p-12 text-center">
            <Icon name=icons::INBOX class="w-16 h-16 mx-auto mb-4 opacity-50" />
            <h3 class="text-xl font-semibold mb-2">"Пока нет заявок"</h3>
            <p class="text-muted">"Заявки будут появляться здесь после заполнения формы на сайте"</p>
        </div>
    }
}

#[component]
fn LeadCard(lead: Lead) -> impl IntoView {
    let created_at = lead.display_created_at();
    let object_type = lead.display_object_type().to_string();
    let area = lead.display_area();
    let address = lead.display_address();
    let deadline = lead.deadline().map(str::to_string);
    let tel_link = lead.tel_link();
    let whatsapp_link = lead.whatsapp_link();

    view! {
        <div class="card p-6 hover:shadow-lg transition-shadow">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-2xl font-bold mb-1">{lead.name}</h3>
                    <div class="flex items-center gap-2 text-muted">
                        <Icon name=icons::CALENDAR class="w-4 h-4" />
                        <span class="text-sm">{created_at}</span>
                    </div>
                </div>
                <Badge size=BadgeSize::Large>{format!("#{}", lead.id)}</Badge>
            </div>

            <div class="grid md:grid-cols-2 gap-4 mb-4">
                <LeadFact icon=icons::PHONE label="Телефон" value=lead.phone />
                <LeadFact icon=icons::MAP_PIN label="Адрес" value=address />
                <LeadFact icon=icons::HOME label="Тип объекта" value=object_type />
                <LeadFact icon=icons::RULER label="Площадь" value=area />
            </div>

            <div class="space-y-3 mb-4">
                <div>
                    <div class="text-sm text-muted mb-1">"Услуги:"</div>
                    <div class="flex flex-wrap gap-2">
                        {lead.services.into_iter().map(|service| view! {
                            <Badge variant=BadgeVariant::Outline>{service}</Badge>
                        }).collect_view()}
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-3 text-sm">
                    <LeadDetail label="Старт:" value=lead.start_time />
                    {deadline.map(|deadline| view! { <LeadDetail label="Дедлайн:" value=deadline /> })}
                    <LeadDetail label="Бюджет:" value=lead.budget />
                </div>

                <div class="grid md:grid-cols-2 gap-3 text-sm">
                    <LeadDetail label="Материалы:" value=lead.materials_interest />
                    <LeadDetail label="Консультация:" value=lead.consultation_type />
                </div>
            </div>

            <div class="flex gap-2">
                <a href=tel_link class="btn-base btn-primary btn-sm gap-2">
                    <Icon name=icons::PHONE class="w-4 h-4 icon-invert" />
                    "Позвонить"
                </a>
                <a href=whatsapp_link target="_blank" rel="noopener noreferrer" class="btn-base btn-outline btn-sm gap-2">
                    <Icon name=icons::MESSAGE_CIRCLE class="w-4 h-4" />
                    "WhatsApp"
                </a>
            </div>
        </div>
    }
}

#[component]
fn LeadFact(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <div class="w-8 h-8 icon-tile-soft rounded-lg flex items-center justify-center flex-shrink-0">
                <Icon name=icon class="w-4 h-4" />
            </div>
            <div>
                <div class="text-sm text-muted">{label}</div>
                <div class="font-semibold">{value}</div>
            </div>
        </div>
    }
}

#[component]
fn LeadDetail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <span class="text-muted">{label}</span>
            " "
            <span class="font-medium">{value}</span>
        </div>
    }
}
