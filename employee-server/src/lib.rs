//! Employee API server
//!
//! A CRUD REST service for employee records, backed by an embedded SurrealDB
//! store. Handlers validate the wire payload, a service layer enforces the
//! business invariants, and every response is wrapped in a uniform envelope.
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/       # configuration, state, server lifecycle
//! ├── api/        # HTTP routes and handlers
//! ├── services/   # business-rule layer
//! ├── db/         # models, conversion, repositories
//! └── utils/      # errors, envelope, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerState, setup_environment};
pub use self::services::EmployeeService;
pub use self::utils::logger::{init_logger, init_logger_with_file};
pub use self::utils::{ApiResponse, AppError, AppResult};
