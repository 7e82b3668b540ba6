//! Utility module
//!
//! - [`AppError`] - application error type, translated to HTTP at the boundary
//! - [`ApiResponse`] - uniform response envelope
//! - [`AppResult`] - result alias used by handlers and services
//! - validation and logging helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{ApiResponse, AppError};
pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
