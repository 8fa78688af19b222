pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::ServiceConfig;
use routes::AppState;

/// Connects, migrates, and builds the router. Split out of `main` so
/// the integration tests can stand up the same app against an
/// in-memory database.
pub async fn build_app(config: &ServiceConfig) -> anyhow::Result<Router> {
    let db_config = db::Config::new(config.database.url.clone());
    let client = Arc::new(db::Client::new(&db_config).await?);
    let facade = Arc::new(pairing_core::Facade::new(client.clone(), config.scheduling));

    let state = AppState { facade, db: client, default_algorithm: config.scheduling.default_algorithm };

    let cors = CorsLayer::new().allow_methods([axum::http::Method::GET]).allow_origin(Any);

    Ok(Router::new()
        .route("/schedule", get(routes::schedule))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Installs a `tracing-subscriber` `fmt` layer (driven by `RUST_LOG`) for
/// the HTTP layer's own spans. `tracing_subscriber`'s `tracing-log`
/// feature registers itself as the global `log` logger too, so the `log`
/// records `pairing-core` and `db` emit directly are forwarded through
/// the same layer — a second, separate `log` logger would fail to
/// install alongside it.
pub fn init_tracing() {
    use tracing_subscriber::filter::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
