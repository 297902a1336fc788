//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 (含数据库) | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    database: CheckResult,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    status: &'static str,
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /health
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let start = Instant::now();
    let ping = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.pool())
        .await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let database = match ping {
        Ok(_) => CheckResult {
            status: "ok",
            latency_ms,
            error: None,
        },
        Err(e) => {
            tracing::error!("Health check database ping failed: {}", e);
            CheckResult {
                status: "error",
                latency_ms,
                error: Some(e.to_string()),
            }
        }
    };

    Json(HealthResponse {
        status: if database.error.is_none() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
