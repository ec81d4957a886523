pub mod config;
pub mod error;
pub mod health;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use error::ServerError;
use state::AppState;

/// Build the Axum router from a config.
///
/// `GET /` returns the index document; any other path is looked up under the
/// web root and falls through to an empty 404 when absent.
pub fn build_app(config: ServerConfig) -> Router<()> {
    let web_root = config.web_root.clone();
    let index_path = config.index_path();
    let compression = config.compression;
    let cache_control = HeaderValue::from_str(&config.cache_control)
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));
    let state = AppState::new(config);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route_service("/", ServeFile::new(index_path))
        .fallback_service(ServeDir::new(&web_root))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .layer(TraceLayer::new_for_http());

    if compression {
        app.layer(CompressionLayer::new())
    } else {
        app
    }
}

/// Validate the config, bind, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;
    let addr = config.socket_addr()?;
    let web_root = config.web_root.clone();
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(web_root = %web_root, "Housley Bouncer listening at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
