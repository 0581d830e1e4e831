use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    orders::{LogSink, OrderIntake},
    signals::setup_signal_handlers,
};

/// Order forms are small; anything bigger is not a legitimate client
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the boost-desk API server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path)
        .context("Failed to install signal handlers")?;
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState {
        config: config_swap,
        intake: OrderIntake::new(Arc::new(LogSink)),
    };

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("Invalid server host '{}'", config.server.host))?,
        config.server.port,
    ));

    info!("Starting boost-desk on {}", addr);
    info!(
        "Configuration: metrics {}, contact window {} minutes",
        if config.metrics.enabled { "enabled" } else { "disabled" },
        config.intake.contact_window_minutes
    );
    info!("Orders are forwarded to the '{}' sink", app_state.intake.sink_name());

    let app = create_router(&config, app_state, metrics_handle);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let api_routes = Router::new()
        .route("/ready", get(handlers::health::readiness_check))
        .route("/v1/catalog", get(handlers::catalog::get_catalog))
        .route(
            "/v1/quotes/credit-farm",
            post(handlers::quotes::quote_credit_farm),
        )
        .route(
            "/v1/quotes/powerleveling",
            post(handlers::quotes::quote_powerleveling),
        )
        .route(
            "/v1/orders/credit-farm",
            post(handlers::orders::submit_credit_farm),
        )
        .route(
            "/v1/orders/powerleveling",
            post(handlers::orders::submit_powerleveling),
        )
        .with_state(app_state);

    let mut router = Router::new().route("/health", get(handlers::health::health_check));

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(
                &config.metrics.endpoint,
                get(handlers::metrics_handler::metrics),
            )
            .with_state(handle);
        router = router.merge(metrics_routes);
    }

    router
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
