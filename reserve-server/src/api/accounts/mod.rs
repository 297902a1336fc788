//! Accounts API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/accounts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/customers", post(handler::register_customer))
        .route("/companies", post(handler::register_company))
        .route("/me", get(handler::me).put(handler::update_me))
}
