/// Generate SQL migrations for the PostgreSQL record store
///
/// Every statement is idempotent, so migrations are applied on each start.
/// No unique constraint is placed on `email`; uniqueness is checked by the
/// employee workflow.
pub fn generate_migrations() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "20240401000000_create_employees",
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL
            );
            "#
        ),
        (
            "20240402000000_employee_lookup_indexes",
            r#"
            -- Plain index backing the duplicate-email check on create
            CREATE INDEX IF NOT EXISTS idx_employees_email ON employees(email);

            CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(first_name, last_name);
            "#
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_idempotent() {
        let migrations = generate_migrations();

        let names: Vec<_> = migrations.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        for (name, sql) in &migrations {
            assert!(sql.contains("IF NOT EXISTS"), "migration {} is not idempotent", name);
        }
    }

    #[test]
    fn test_email_is_not_unique_in_schema() {
        for (_, sql) in generate_migrations() {
            assert!(!sql.to_uppercase().contains("UNIQUE"));
        }
    }
}
