//! Companies API 模块
//!
//! Company profile plus the reservation views hanging off it.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/companies", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/reserved-users", get(handler::reserved_users))
        .route(
            "/{id}/reservations",
            get(handler::list_reservations).post(handler::create_reservation),
        )
}
