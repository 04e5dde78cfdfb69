#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use leptos::logging::log;
    use leptos::prelude::*;
    use studytrack::core::Locale;
    use studytrack::core::config::{Config, DEFAULT_LOG_FILTER};
    use studytrack::server::site_router;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load application config from environment variables
    let config = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_new(config.log_filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let default_locale = match config.default_locale() {
        Ok(locale) => locale,
        Err(err) => {
            tracing::warn!("{err}; falling back to '{}'", Locale::default());
            Locale::default()
        }
    };

    tracing::info!(
        "Config loaded: default_locale={}, compression={}, log_filter={}",
        default_locale,
        config.compression,
        config.log_filter()
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).expect("failed to read leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = site_router(leptos_options, default_locale, config.compression);

    log!("listening on http://{}", &addr);
    log!("locales: / ({}), /uz, /en", default_locale);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
