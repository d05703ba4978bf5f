#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use authdeck::app::*;
    use authdeck::core::config::Config;
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load application config from environment variables
    let config = Config::from_env()?;

    // Log config status (without revealing secrets)
    tracing::info!(
        auth_base_url = config.auth_base_url.as_deref().unwrap_or("<same origin>"),
        username_login = config.username_login,
        database = config.has_database(),
        auth_secret = config.has_auth_secret(),
        "config loaded"
    );
    if !config.has_auth_secret() {
        tracing::warn!("AUTH_SECRET is not set; the auth service will reject sessions");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed .br / .gz assets when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let client_config = config.client();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let client_config = client_config.clone();
                move || provide_context(client_config.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler_with_context(
            move || provide_context(client_config.clone()),
            shell,
        ))
        .with_state(leptos_options)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
