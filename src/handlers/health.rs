use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::AppState;

/// Liveness check: the process is up and serving
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "boost-desk",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Readiness check
///
/// Reports the sink orders go to and the settings currently in effect, so a
/// SIGHUP reload can be confirmed from outside.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "service": "boost-desk",
            "order_sink": state.intake.sink_name(),
            "contact_window_minutes": config.intake.contact_window_minutes,
            "metrics_enabled": config.metrics.enabled,
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::orders::{LogSink, OrderIntake};
    use arc_swap::ArcSwap;
    use std::sync::Arc;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["service"], "boost-desk");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_reflects_reloaded_config() {
        let config = Arc::new(ArcSwap::from_pointee(Config::default()));
        let state = AppState {
            config: config.clone(),
            intake: OrderIntake::new(Arc::new(LogSink)),
        };

        let body = body_json(readiness_check(State(state.clone())).await.into_response()).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["order_sink"], "log");
        assert_eq!(body["contact_window_minutes"], 30);

        let mut reloaded = Config::default();
        reloaded.intake.contact_window_minutes = 5;
        config.store(Arc::new(reloaded));

        let body = body_json(readiness_check(State(state)).await.into_response()).await;
        assert_eq!(body["contact_window_minutes"], 5);
    }
}
