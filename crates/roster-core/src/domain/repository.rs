//! Repository traits for the Roster Core
//!
//! This module defines the record store interface used by the employee
//! workflow. Storage crates implement it to provide different persistence
//! mechanisms.

use async_trait::async_trait;

use super::employee::{Employee, EmployeeId};
use crate::CoreError;

/// Repository for employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return it with its assigned id
    async fn insert(&self, employee: &Employee) -> Result<Employee, CoreError>;

    /// Get all employees in storage order
    async fn find_all(&self) -> Result<Vec<Employee>, CoreError>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError>;

    /// Find an employee by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, CoreError>;

    /// Insert or replace an employee keyed by id.
    ///
    /// An employee without an id is inserted.
    async fn save(&self, employee: &Employee) -> Result<Employee, CoreError>;

    /// Delete an employee. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), CoreError>;

    /// Find an employee by first and last name
    async fn find_by_name_parts(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, CoreError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<bool, CoreError>;
}
