use std::net::SocketAddr;
use std::sync::Arc;

use shipdash_core::countries::lookup::CountryLookup;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shipdash_api::config::ServerConfig;
use shipdash_api::router::build_app_router;
use shipdash_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shipdash_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        search_default = config.search.default,
        search_max = config.search.max,
        "Loaded server configuration"
    );

    // --- Country table ---
    let countries = Arc::new(
        CountryLookup::from_builtin().expect("built-in country table must be valid"),
    );
    tracing::info!(countries = countries.len(), "Country lookup table loaded");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        countries,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolves on ctrl-c, or SIGTERM on unix, so in-flight validations finish
/// before the listener closes.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "ctrl-c handler failed");
            }
            tracing::info!(signal = "SIGINT", "Shutting down dashboard API");
        }
        () = terminate => {
            tracing::info!(signal = "SIGTERM", "Shutting down dashboard API");
        }
    }
}
