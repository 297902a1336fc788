//! Dining Table API 模块
//!
//! All routes act on the tables of the calling company account.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::provision))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
