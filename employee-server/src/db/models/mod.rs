//! Database Models

pub mod employee;
pub mod serde_helpers;

pub use employee::{EMPLOYEE_TABLE, Employee, EmployeeDto, EmployeeId};
