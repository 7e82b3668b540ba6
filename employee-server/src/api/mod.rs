//! API Routing Module
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`employees`] - employee CRUD endpoints

pub mod employees;
pub mod health;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// Assemble the full application router
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
