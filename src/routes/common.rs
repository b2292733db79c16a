//! Liveness, readiness and build info. Only `/ready` touches the database.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::Connection;

/// Shared by `/health` and `/ready`; `database` is only reported by `/ready`.
#[derive(Serialize)]
struct ProbeStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl ProbeStatus {
    const ALIVE: ProbeStatus = ProbeStatus {
        status: "ok",
        database: None,
    };
    const READY: ProbeStatus = ProbeStatus {
        status: "ok",
        database: Some("ok"),
    };
    const DEGRADED: ProbeStatus = ProbeStatus {
        status: "degraded",
        database: Some("unavailable"),
    };
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD_INFO: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn alive() -> Json<ProbeStatus> {
    Json(ProbeStatus::ALIVE)
}

async fn database_reachable(state: &AppState) -> bool {
    let Ok(mut conn) = state.connect().await else {
        return false;
    };
    let ok = sqlx::query("SELECT 1").fetch_optional(&mut conn).await.is_ok();
    let _ = conn.close().await;
    ok
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeStatus>) {
    if database_reachable(&state).await {
        (StatusCode::OK, Json(ProbeStatus::READY))
    } else {
        tracing::warn!("readiness check: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, Json(ProbeStatus::DEGRADED))
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD_INFO)
}

/// GET /health, /ready, /version and /info (an alias of /version).
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(alive))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .route("/info", get(build_info))
        .with_state(state)
}
