//!
//! Roster Core - Domain model and workflow for the Roster service
//!
//! This crate defines the employee domain model, the repository interface
//! that storage backends implement, and the employee workflow that enforces
//! email uniqueness on creation and merges fields on update.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - entities, value objects and repository interfaces
pub mod domain;

/// Application services - the employee workflow
pub mod application;

/// Error types
pub mod error;

// Re-export key types
pub use application::employee_service::EmployeeService;
pub use domain::employee::{Employee, EmployeeId};
pub use domain::repository::EmployeeRepository;
pub use error::CoreError;
