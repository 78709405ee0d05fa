#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;
    use zdesremont::app::*;
    use zdesremont::core::config::Config;
    use zdesremont::core::db::{DbConfig, LeadRepository, create_pool_with_migrations};
    use zdesremont::core::leads::{LeadApiState, LeadStore, lead_api_router};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        "Config loaded: database={}, leads_list_limit={}",
        config.has_database(),
        config.leads_list_limit
    );

    // Leads go to PostgreSQL when DATABASE_URL is set, otherwise they live in memory
    let store = match DbConfig::from_config(&config) {
        Some(db_config) => {
            let pool = create_pool_with_migrations(&db_config).await?;
            LeadStore::postgres(LeadRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, leads are kept in memory only");
            LeadStore::in_memory()
        }
    };
    tracing::info!("Lead store: {}", store.kind());

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz bundles when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let lead_api = lead_api_router(
        LeadApiState::new(store).with_default_limit(config.leads_list_limit),
    );

    let app = Router::new()
        .merge(lead_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Lead API: http://{}/api/leads", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
