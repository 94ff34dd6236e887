use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use async_trait::async_trait;

use roster_core::{
    CoreError,
    domain::employee::{Employee, EmployeeId},
    domain::repository::EmployeeRepository,
};

/// Rows keyed by id, plus the id sequence
#[derive(Default)]
struct EmployeeTable {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl EmployeeTable {
    fn next_id(&mut self) -> Result<EmployeeId, CoreError> {
        self.last_id = self.last_id.checked_add(1).ok_or_else(|| {
            CoreError::StateStoreError("Employee id sequence exhausted".to_string())
        })?;
        Ok(EmployeeId(self.last_id))
    }
}

/// In-memory implementation of the EmployeeRepository
///
/// Ids start at 1 and are never reused. Rows are returned in ascending id
/// order. No uniqueness constraint is placed on email.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    table: Arc<RwLock<EmployeeTable>>,
}

impl InMemoryEmployeeRepository {
    /// Create a new, empty in-memory employee repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no rows
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<Employee, CoreError> {
        let mut table = self.table.write().await;
        let id = table.next_id()?;
        let stored = employee.clone().with_id(id);
        table.rows.insert(id.0, stored.clone());
        debug!(employee_id = %id, "In-memory insert");
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|e| e.email == email).cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, CoreError> {
        let mut table = self.table.write().await;

        let id = match employee.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly supplied ids
                if id.0 > table.last_id {
                    table.last_id = id.0;
                }
                id
            }
            None => table.next_id()?,
        };

        let stored = employee.clone().with_id(id);
        table.rows.insert(id.0, stored.clone());
        debug!(employee_id = %id, "In-memory save");

        Ok(stored)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), CoreError> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id.0).is_none() {
            debug!(employee_id = %id, "In-memory delete of missing employee");
        }
        Ok(())
    }

    async fn find_by_name_parts(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, CoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn health_check(&self) -> Result<bool, CoreError> {
        Ok(true)
    }
}
