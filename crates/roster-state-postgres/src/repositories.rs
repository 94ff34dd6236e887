use roster_core::{
    CoreError,
    domain::employee::{Employee, EmployeeId},
    domain::repository::EmployeeRepository,
};
use async_trait::async_trait;
use tracing::{debug, error};

use crate::PostgresConnection;

const SELECT_COLUMNS: &str = "SELECT id, first_name, last_name, email FROM employees";

const INSERT_EMPLOYEE: &str = "
    INSERT INTO employees (first_name, last_name, email)
    VALUES ($1, $2, $3)
    RETURNING id, first_name, last_name, email
";

const UPSERT_EMPLOYEE: &str = "
    INSERT INTO employees (id, first_name, last_name, email)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO UPDATE SET
        first_name = EXCLUDED.first_name,
        last_name = EXCLUDED.last_name,
        email = EXCLUDED.email
    RETURNING id, first_name, last_name, email
";

/// Row shape of the `employees` table
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: Some(EmployeeId(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

/// Map a write failure, reporting unique violations on email as conflicts.
///
/// The schema carries no unique index on email, but one added by an operator
/// is surfaced the same way as the workflow's own duplicate check.
fn map_write_error(err: sqlx::Error, employee: &Employee, action: &str) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() != Some("employees_pkey") {
            return CoreError::Conflict {
                email: employee.email.clone(),
            };
        }
    }
    error!(?err, action, "Employee write failed");
    CoreError::StateStoreError(format!("Failed to {} employee: {}", action, err))
}

fn map_read_error(err: sqlx::Error) -> CoreError {
    CoreError::StateStoreError(format!("Database error: {}", err))
}

/// Postgres implementation of the EmployeeRepository
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    conn: PostgresConnection,
}

impl PostgresEmployeeRepository {
    /// Create a new Postgres employee repository
    pub fn new(conn: PostgresConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<Employee, CoreError> {
        let row: EmployeeRow = sqlx::query_as(INSERT_EMPLOYEE)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .fetch_one(self.conn.pool())
            .await
            .map_err(|e| map_write_error(e, employee, "insert"))?;

        debug!(employee_id = row.id, "Inserted employee row");
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, CoreError> {
        let query = format!("{} ORDER BY id", SELECT_COLUMNS);

        let rows: Vec<EmployeeRow> = sqlx::query_as(&query)
            .fetch_all(self.conn.pool())
            .await
            .map_err(map_read_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError> {
        let query = format!("{} WHERE id = $1", SELECT_COLUMNS);

        let row: Option<EmployeeRow> = sqlx::query_as(&query)
            .bind(id.0)
            .fetch_optional(self.conn.pool())
            .await
            .map_err(map_read_error)?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, CoreError> {
        // Duplicates can exist (no unique index), so pick the oldest row
        let query = format!("{} WHERE email = $1 ORDER BY id LIMIT 1", SELECT_COLUMNS);

        let row: Option<EmployeeRow> = sqlx::query_as(&query)
            .bind(email)
            .fetch_optional(self.conn.pool())
            .await
            .map_err(map_read_error)?;

        Ok(row.map(Employee::from))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, CoreError> {
        let Some(id) = employee.id else {
            return self.insert(employee).await;
        };

        let row: EmployeeRow = sqlx::query_as(UPSERT_EMPLOYEE)
            .bind(id.0)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .fetch_one(self.conn.pool())
            .await
            .map_err(|e| map_write_error(e, employee, "save"))?;

        debug!(employee_id = row.id, "Saved employee row");
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(self.conn.pool())
            .await
            .map_err(|e| CoreError::StateStoreError(format!("Failed to delete employee: {}", e)))?;

        debug!(employee_id = %id, rows = result.rows_affected(), "Deleted employee");
        Ok(())
    }

    async fn find_by_name_parts(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, CoreError> {
        let query = format!(
            "{} WHERE first_name = $1 AND last_name = $2 ORDER BY id LIMIT 1",
            SELECT_COLUMNS
        );

        let row: Option<EmployeeRow> = sqlx::query_as(&query)
            .bind(first_name)
            .bind(last_name)
            .fetch_optional(self.conn.pool())
            .await
            .map_err(map_read_error)?;

        Ok(row.map(Employee::from))
    }

    async fn health_check(&self) -> Result<bool, CoreError> {
        sqlx::query("SELECT 1")
            .execute(self.conn.pool())
            .await
            .map(|_| true)
            .map_err(map_read_error)
    }
}
