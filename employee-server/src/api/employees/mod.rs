//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Base path for the employee resource
pub const EMPLOYEE_ROUTE_V1: &str = "/api/v1/employees";

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest(EMPLOYEE_ROUTE_V1, routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_all).post(handler::save))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
