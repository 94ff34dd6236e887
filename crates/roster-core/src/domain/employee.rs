use serde::{Deserialize, Serialize};
use std::fmt;

/// Value object: Employee ID
///
/// Surrogate key assigned by the store on first insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Entity: Employee
///
/// An employee without an `id` is a candidate that has not been stored yet.
/// The same shape is used as the patch for updates, in which case only
/// `first_name`, `last_name` and `email` are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, absent before the first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Email address, unique across all employees
    pub email: String,
}

impl Employee {
    /// Create a new employee candidate without an id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Return a copy of this employee carrying the given id
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrite the mutable fields with the values from `patch`.
    ///
    /// Exactly `first_name`, `last_name` and `email` are copied; the id of
    /// `self` is kept and the id of `patch` is ignored.
    pub fn merge_from(&mut self, patch: &Employee) {
        self.first_name = patch.first_name.clone();
        self.last_name = patch.last_name.clone();
        self.email = patch.email.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_candidate_serializes_without_id() {
        let employee = Employee::new("John", "Doe", "johndoe@gmail.com");
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(
            value,
            json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "johndoe@gmail.com"
            })
        );
    }

    #[test]
    fn test_stored_employee_serializes_numeric_id() {
        let employee = Employee::new("John", "Doe", "johndoe@gmail.com").with_id(EmployeeId(7));
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["id"], json!(7));
    }

    #[test]
    fn test_deserialize_without_id() {
        let employee: Employee = serde_json::from_value(json!({
            "firstName": "Jean",
            "lastName": "Dupont",
            "email": "jeandupont@gmail.com"
        }))
        .unwrap();

        assert_eq!(employee.id, None);
        assert_eq!(employee.first_name, "Jean");
    }

    #[test]
    fn test_deserialize_rejects_missing_email() {
        let result = serde_json::from_value::<Employee>(json!({
            "firstName": "Jean",
            "lastName": "Dupont"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_merge_from_copies_three_fields_and_keeps_id() {
        let mut stored =
            Employee::new("Ivan", "Attal", "ivanattal@gmail.com").with_id(EmployeeId(3));
        let patch = Employee::new("Ivan - UPDATED", "Attal - UPDATED", "ivanattal.updated@gmail.com")
            .with_id(EmployeeId(99));

        stored.merge_from(&patch);

        assert_eq!(
            stored,
            Employee {
                id: Some(EmployeeId(3)),
                first_name: "Ivan - UPDATED".to_string(),
                last_name: "Attal - UPDATED".to_string(),
                email: "ivanattal.updated@gmail.com".to_string(),
            }
        );
    }
}
