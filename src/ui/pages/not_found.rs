//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::COMPANY_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Report 404 to the client when rendered on the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen landing-bg flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white rounded-full flex items-center justify-center shadow-sm">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-bold text-gradient mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Страница не найдена"</h2>

                <p class="text-muted mb-8 max-w-md mx-auto">
                    "Такой страницы нет или она была перемещена."
                </p>

                <A href="/" attr:class="btn-base btn-primary btn-lg">
                    "На главную"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted">{format!("© 2024 {}", COMPANY_NAME)}</p>
            </div>
        </div>
    }
}
