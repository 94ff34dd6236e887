use crate::{
    domain::employee::{Employee, EmployeeId},
    domain::repository::EmployeeRepository,
    CoreError,
};
use std::sync::Arc;

/// Service implementing the employee workflow.
///
/// Creation rejects a candidate whose email is already stored. The check and
/// the insert are two separate store calls, so concurrent creates with the
/// same email are not serialised here; a store that enforces a unique index
/// reports the collision as [`CoreError::Conflict`] instead.
pub struct EmployeeService {
    /// Repository for employee records
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// Create an employee, rejecting a duplicate email
    pub async fn create(&self, candidate: Employee) -> Result<Employee, CoreError> {
        if candidate.email.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Employee email must not be empty".to_string(),
            ));
        }

        if self
            .employee_repo
            .find_by_email(&candidate.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %candidate.email, "Employee already exists with given email");
            return Err(CoreError::Conflict {
                email: candidate.email,
            });
        }

        // Ids are assigned by the store
        let candidate = Employee {
            id: None,
            ..candidate
        };
        let saved = self.employee_repo.insert(&candidate).await?;

        tracing::info!(
            employee_id = ?saved.id,
            email = %saved.email,
            "Employee created"
        );

        Ok(saved)
    }

    /// List all employees in store order
    pub async fn list_all(&self) -> Result<Vec<Employee>, CoreError> {
        self.employee_repo.find_all().await
    }

    /// Get an employee by ID
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError> {
        self.employee_repo.find_by_id(id).await
    }

    /// Update an employee's names and email.
    ///
    /// Returns `None` when no employee has the given id. Email uniqueness is
    /// not re-checked here.
    pub async fn update(
        &self,
        id: EmployeeId,
        patch: Employee,
    ) -> Result<Option<Employee>, CoreError> {
        let Some(mut existing) = self.employee_repo.find_by_id(id).await? else {
            tracing::debug!(employee_id = %id, "Employee not found for update");
            return Ok(None);
        };

        existing.merge_from(&patch);
        let updated = self.employee_repo.save(&existing).await?;

        tracing::info!(employee_id = %id, "Employee updated");

        Ok(Some(updated))
    }

    /// Delete an employee by ID
    pub async fn delete_by_id(&self, id: EmployeeId) -> Result<(), CoreError> {
        self.employee_repo.delete_by_id(id).await?;

        tracing::info!(employee_id = %id, "Employee deleted");

        Ok(())
    }

    /// Find an employee by first and last name
    pub async fn find_by_name_parts(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, CoreError> {
        self.employee_repo
            .find_by_name_parts(first_name, last_name)
            .await
    }

    /// Check that the underlying store is reachable
    pub async fn check_store_health(&self) -> Result<bool, CoreError> {
        self.employee_repo.health_check().await
    }
}
