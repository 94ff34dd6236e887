//! In-memory record store implementation for Roster
//!
//! This crate provides an in-memory implementation of the employee
//! repository interface defined in the roster-core crate. It is primarily
//! useful for development, testing, and simple deployments where persistence
//! is not required.

pub mod repositories;
pub use repositories::InMemoryEmployeeRepository;
