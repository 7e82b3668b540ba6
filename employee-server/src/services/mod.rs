//! Business services
//!
//! The service layer sits between the HTTP handlers and the repositories and
//! owns the business invariants (existence, email uniqueness on create).

pub mod employee;

pub use employee::{EmployeeService, PageRequest};
