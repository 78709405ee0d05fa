//! Landing page component
//!
//! The public site of the renovation company:
//! - Header with section navigation and a call-to-action
//! - Hero with entry points to the calculator and the portfolio
//! - Services, filterable portfolio, company stats and contacts
//! - The intake chat modal, opened by every call-to-action

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::catalog::{
    ALL_LABEL, COMPANY_NAME, COMPANY_STATS, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, PORTFOLIO,
    PortfolioFilter, PortfolioItem, SERVICE_CARDS, ServiceCard, filter_portfolio,
};
use crate::ui::common::{Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::intake_chat::IntakeChat;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let chat_open = RwSignal::new(false);
    let open_chat = Callback::new(move |_: ()| chat_open.set(true));

    view! {
        <SeoMeta />

        <div class="min-h-screen landing-bg">
            <Header on_cta=open_chat />

            // Hero Section
            <section class="pt-32 pb-20 px-4">
                <div class="container mx-auto text-center">
                    <Badge variant=BadgeVariant::Secondary class="mb-4 animate-fade-in">
                        "Ремонт с гарантией качества"
                    </Badge>
                    <h2 class="text-5xl md:text-7xl font-bold mb-6 animate-scale-in text-gradient">
                        "Создаём интерьеры"<br />"вашей мечты"
                    </h2>
                    <p class="text-xl text-muted mb-8 max-w-2xl mx-auto animate-fade-in">
                        "Полный цикл работ от дизайн-проекта до финишной отделки. Собственный магазин материалов и команда профессионалов"
                    </p>
                    <div class="flex gap-4 justify-center animate-fade-in">
                        <Button size=ButtonSize::Large icon=icons::SPARKLES on_click=open_chat>
                            "Начать ремонт"
                        </Button>
                        <Button
                            size=ButtonSize::Large
                            variant=ButtonVariant::Outline
                            icon=icons::IMAGE
                            on_click=Callback::new(|_: ()| scroll_to_section("portfolio"))
                        >
                            "Посмотреть работы"
                        </Button>
                    </div>
                </div>
            </section>

            <ServicesSection />
            <PortfolioSection />
            <AboutSection />
            <ContactsSection on_cta=open_chat />

            <footer class="py-8 px-4 bg-white/80 backdrop-blur-md border-t">
                <div class="container mx-auto text-center text-muted">
                    <p>{format!("© 2024 {}. Все права защищены.", COMPANY_NAME)}</p>
                </div>
            </footer>

            <IntakeChat is_open=chat_open />
        </div>
    }
}

/// Smoothly scroll to a section by element id
fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=format!("{} - ремонт квартир и домов под ключ", COMPANY_NAME) />
        <Meta
            name="description"
            content="Ремонт под ключ, дизайн-проекты и капитальный ремонт. Рассчитайте стоимость ремонта онлайн."
        />
    }
}

/// Fixed header with section links
#[component]
fn Header(on_cta: Callback<()>) -> impl IntoView {
    view! {
        <header class="fixed top-0 w-full bg-white/80 backdrop-blur-md z-40 shadow-sm">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gradient">{COMPANY_NAME}</h1>
                <nav class="hidden md:flex gap-8">
                    <a href="#services" class="nav-link">"Услуги"</a>
                    <a href="#portfolio" class="nav-link">"Портфолио"</a>
                    <a href="#about" class="nav-link">"О компании"</a>
                    <a href="#contacts" class="nav-link">"Контакты"</a>
                </nav>
                <Button icon=icons::MESSAGE_CIRCLE on_click=on_cta>
                    "Получить расчет"
                </Button>
            </div>
        </header>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 px-4 bg-white/50 backdrop-blur-sm">
            <div class="container mx-auto">
                <h3 class="text-4xl font-bold text-center mb-12">"Наши услуги"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SERVICE_CARDS.iter().map(|card| view! { <ServiceCardView card=card /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCardView(card: &'static ServiceCard) -> impl IntoView {
    view! {
        <div class="card p-6 hover:shadow-lg transition-all hover:-translate-y-1">
            <div class="w-12 h-12 icon-tile rounded-lg flex items-center justify-center mb-4">
                <Icon name=card.icon class="w-6 h-6 icon-invert" />
            </div>
            <h4 class="text-xl font-semibold mb-2">{card.title}</h4>
            <p class="text-muted">{card.description}</p>
        </div>
    }
}

/// Portfolio with category filter buttons
#[component]
fn PortfolioSection() -> impl IntoView {
    let selected = RwSignal::new(ALL_LABEL);
    let visible = Memo::new(move |_| {
        let filter = PortfolioFilter::from_label(selected.get()).unwrap_or_default();
        filter_portfolio(PORTFOLIO, filter)
    });

    view! {
        <section id="portfolio" class="py-20 px-4">
            <div class="container mx-auto">
                <h3 class="text-4xl font-bold text-center mb-8">"Наши работы"</h3>
                <p class="text-center text-muted mb-8 text-lg">
                    "Посмотрите трансформацию объектов до и после ремонта"
                </p>

                <div class="flex gap-2 justify-center mb-8 flex-wrap">
                    {PortfolioFilter::all().map(PortfolioFilter::label).map(|label| {
                        let class = move || {
                            if selected.get() == label { "btn-base btn-primary btn-sm" } else { "btn-base btn-outline btn-sm" }
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                aria-pressed=move || (selected.get() == label).to_string()
                                on:click=move |_| selected.set(label)
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <For
                        each=move || visible.get()
                        key=|item| item.id
                        children=|item| view! { <PortfolioCard item=item /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="card overflow-hidden hover:shadow-xl transition-all">
            <div class="grid grid-cols-2">
                <BeforeAfterImage src=item.before alt="До ремонта" caption="До" variant=BadgeVariant::Secondary />
                <BeforeAfterImage src=item.after alt="После ремонта" caption="После" variant=BadgeVariant::Primary />
            </div>
            <div class="p-6">
                <div class="flex items-center gap-2 mb-2">
                    <Badge variant=BadgeVariant::Outline>{item.category}</Badge>
                    <Badge variant=BadgeVariant::Secondary>{item.area}</Badge>
                </div>
                <p class="text-muted">{item.description}</p>
            </div>
        </div>
    }
}

#[component]
fn BeforeAfterImage(
    src: &'static str,
    alt: &'static str,
    caption: &'static str,
    variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <div class="relative group">
            <img src=src alt=alt class="w-full h-64 object-cover" />
            <div class="absolute inset-0 bg-black/50 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity">
                <Badge variant=variant size=BadgeSize::Large>{caption}</Badge>
            </div>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let accents = ["text-primary", "text-secondary", "text-accent"];

    view! {
        <section id="about" class="py-20 px-4 bg-white/50 backdrop-blur-sm">
            <div class="container mx-auto max-w-4xl text-center">
                <h3 class="text-4xl font-bold mb-6">"О компании"</h3>
                <p class="text-lg text-muted mb-8">
                    "Более 10 лет мы создаём качественные интерьеры для жилых и коммерческих объектов. \
                     Наша команда: профессиональные дизайнеры, прорабы и мастера, которые превращают ваши идеи в реальность."
                </p>
                <div class="grid md:grid-cols-3 gap-8 mt-12">
                    {COMPANY_STATS.iter().zip(accents.iter().cycle()).map(|(stat, accent)| view! {
                        <div>
                            <div class=format!("text-5xl font-bold mb-2 {}", accent)>{stat.value}</div>
                            <div class="text-muted">{stat.caption}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactsSection(on_cta: Callback<()>) -> impl IntoView {
    view! {
        <section id="contacts" class="py-20 px-4">
            <div class="container mx-auto max-w-4xl">
                <h3 class="text-4xl font-bold text-center mb-12">"Контакты"</h3>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="card p-8 space-y-6">
                        <ContactRow icon=icons::PHONE title="Телефон" value=CONTACT_PHONE />
                        <ContactRow icon=icons::MAIL title="Email" value=CONTACT_EMAIL />
                        <ContactRow icon=icons::MAP_PIN title="Адрес" value=CONTACT_ADDRESS />
                    </div>
                    <div class="card p-8 cta-card">
                        <h4 class="text-xl font-semibold mb-4">"Готовы начать?"</h4>
                        <p class="text-muted mb-6">
                            "Нажмите кнопку ниже и ответьте на несколько вопросов. Мы подготовим для вас индивидуальное предложение!"
                        </p>
                        <Button
                            size=ButtonSize::Large
                            icon=icons::MESSAGE_CIRCLE
                            class="w-full".to_string()
                            on_click=on_cta
                        >
                            "Получить расчет"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(icon: &'static str, title: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-10 h-10 icon-tile-soft rounded-lg flex items-center justify-center">
                <Icon name=icon class="w-5 h-5" />
            </div>
            <div>
                <h4 class="font-semibold mb-1">{title}</h4>
                <p class="text-muted">{value}</p>
            </div>
        </div>
    }
}
