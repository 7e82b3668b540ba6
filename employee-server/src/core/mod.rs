//! Core module: configuration, state and server lifecycle
//!
//! - [`Config`] - runtime configuration
//! - [`ServerState`] - shared application state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - process-level errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, setup_environment};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
