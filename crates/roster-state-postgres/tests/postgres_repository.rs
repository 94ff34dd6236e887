//! Tests against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -p roster-state-postgres -- --ignored`.

use roster_core::{CoreError, Employee, EmployeeId, EmployeeRepository};
use roster_state_postgres::{PostgresConfig, PostgresConnection, PostgresEmployeeRepository};
use tokio::sync::{Mutex, MutexGuard};

const EMAIL_INDEX: &str = "employees_email_unique";

// Tests share one database and truncate it, so they run one at a time
static DB_LOCK: Mutex<()> = Mutex::const_new(());

struct TestDb {
    _lock: MutexGuard<'static, ()>,
    conn: PostgresConnection,
    repo: PostgresEmployeeRepository,
}

async fn setup_database() -> TestDb {
    let _ = tracing_subscriber::fmt::try_init();
    let lock = DB_LOCK.lock().await;

    let config = PostgresConfig {
        connection_string: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| PostgresConfig::default().connection_string),
        ..Default::default()
    };
    let conn = PostgresConnection::new(&config).await.unwrap();

    sqlx::query(&format!("DROP INDEX IF EXISTS {}", EMAIL_INDEX))
        .execute(conn.pool())
        .await
        .unwrap();
    sqlx::query("TRUNCATE employees RESTART IDENTITY")
        .execute(conn.pool())
        .await
        .unwrap();

    TestDb {
        _lock: lock,
        repo: PostgresEmployeeRepository::new(conn.clone()),
        conn,
    }
}

fn nolibee() -> Employee {
    Employee::new("Nolibée", "Perceval", "nolibeeperceval@gmail.com")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_insert_and_find() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;

    let saved = repo.insert(&nolibee()).await?;
    let id = saved.id.unwrap();
    assert!(id.0 > 0);

    let by_id = repo.find_by_id(id).await?.unwrap();
    assert_eq!(by_id.email, "nolibeeperceval@gmail.com");

    let by_email = repo.find_by_email("nolibeeperceval@gmail.com").await?;
    assert_eq!(by_email.and_then(|e| e.id), Some(id));

    let by_name = repo.find_by_name_parts("Nolibée", "Perceval").await?.unwrap();
    assert_eq!(by_name.last_name, "Perceval");

    Ok(())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_find_all_and_save() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;
    repo.insert(&nolibee()).await?;
    let mut jean = repo
        .insert(&Employee::new("Jean", "Dupont", "jeandupont@gmail.com"))
        .await?;

    assert_eq!(repo.find_all().await?.len(), 2);

    jean.first_name = "John Dervish".to_string();
    jean.email = "johndervish@gmail.com".to_string();
    let updated = repo.save(&jean).await?;

    assert_eq!(updated.id, jean.id);
    assert_eq!(updated.first_name, "John Dervish");
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_delete_is_idempotent() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;
    let id = repo.insert(&nolibee()).await?.id.unwrap();

    repo.delete_by_id(id).await?;
    assert!(repo.find_by_id(id).await?.is_none());
    repo.delete_by_id(id).await?;
    assert!(repo.find_by_id(EmployeeId(999)).await?.is_none());

    Ok(())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_health_check() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;

    assert!(repo.health_check().await?);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_unique_email_index_reports_conflict() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;
    sqlx::query(&format!("CREATE UNIQUE INDEX {} ON employees (email)", EMAIL_INDEX))
        .execute(db.conn.pool())
        .await
        .unwrap();

    repo.insert(&nolibee()).await?;
    let mut jean = repo
        .insert(&Employee::new("Jean", "Dupont", "jeandupont@gmail.com"))
        .await?;

    let duplicate = repo
        .insert(&Employee::new("Other", "Person", "nolibeeperceval@gmail.com"))
        .await;
    assert_eq!(
        duplicate,
        Err(CoreError::Conflict { email: "nolibeeperceval@gmail.com".to_string() })
    );

    jean.email = "nolibeeperceval@gmail.com".to_string();
    let moved = repo.save(&jean).await;
    assert_eq!(
        moved,
        Err(CoreError::Conflict { email: "nolibeeperceval@gmail.com".to_string() })
    );
    assert_eq!(repo.find_all().await?.len(), 2);

    sqlx::query(&format!("DROP INDEX {}", EMAIL_INDEX))
        .execute(db.conn.pool())
        .await
        .unwrap();

    Ok(())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_primary_key_collision_is_a_store_error() -> Result<(), CoreError> {
    let db = setup_database().await;
    let repo = &db.repo;

    // An explicit id does not advance the BIGSERIAL sequence
    repo.save(&nolibee().with_id(EmployeeId(2))).await?;
    let first = repo
        .insert(&Employee::new("Jean", "Dupont", "jeandupont@gmail.com"))
        .await?;
    assert_eq!(first.id, Some(EmployeeId(1)));

    let second = repo
        .insert(&Employee::new("Other", "Person", "other@gmail.com"))
        .await;

    assert!(matches!(second, Err(CoreError::StateStoreError(_))));

    Ok(())
}
