//! HTTP API
//!
//! # 路由
//!
//! | 前缀 | 模块 | 认证 |
//! |------|------|------|
//! | /health | [`health`] | 无 |
//! | /api/accounts | [`accounts`] | 注册无需认证 |
//! | /api/companies | [`companies`] | 信息公开，其余需认证 |
//! | /api/tables | [`tables`] | 餐厅账号 |
//! | /api/menus, /api/menu-categories | [`menus`] | 餐厅账号 / 公开 |
//! | /api/photos | [`photos`] | 餐厅账号 |

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

pub mod accounts;
pub mod companies;
pub mod health;
pub mod menus;
pub mod photos;
pub mod tables;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(accounts::router())
        .merge(companies::router())
        .merge(tables::router())
        .merge(menus::router())
        .merge(photos::router())
}

/// Build the fully configured application with middleware and state
///
/// Used by the HTTP server and by integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS
        .layer(CorsLayer::permissive())
        // Gzip
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Request ID - set outermost so logging and the response both see it
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
