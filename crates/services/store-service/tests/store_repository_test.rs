//! Store repository tests against SeaORM's mock database.

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

use domain::NewStore;
use store_service_lib::repository::entities::{store, store_user};
use store_service_lib::repository::{SeaOrmStoreRepository, StoreRepository};

fn store_row(id: Uuid, name: &str) -> store::Model {
    let now = Utc::now();
    store::Model {
        id,
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn store_user_row(store_id: Uuid, user_id: &str) -> store_user::Model {
    store_user::Model {
        id: Uuid::new_v4(),
        store_id,
        user_id: user_id.to_string(),
        created_at: Utc::now(),
    }
}

fn repository(db: DatabaseConnection) -> SeaOrmStoreRepository {
    SeaOrmStoreRepository::new(db)
}

/// SQL of every statement recorded inside transactions, in order.
fn transaction_statements(db: DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
        .collect()
}

#[tokio::test]
async fn test_create_with_owner_returns_store_and_link() {
    let store_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![store_row(store_id, "My Store")]])
        .append_query_results([vec![store_user_row(store_id, "user_1")]])
        .into_connection();

    let repo = repository(db);
    let (store, link) = repo
        .create_with_owner(NewStore::new("My Store").unwrap(), "user_1".to_string())
        .await
        .unwrap();

    assert_eq!(store.id, store_id);
    assert_eq!(store.name, "My Store");
    assert_eq!(link.store_id, store.id);
    assert_eq!(link.user_id, "user_1");

    let statements = transaction_statements(repo.into_inner());
    assert_eq!(statements.first().map(String::as_str), Some("BEGIN"));
    assert_eq!(statements.last().map(String::as_str), Some("COMMIT"));
    assert!(statements.iter().any(|s| s.starts_with(r#"INSERT INTO "stores""#)));
    assert!(statements.iter().any(|s| s.starts_with(r#"INSERT INTO "store_users""#)));
}

#[tokio::test]
async fn test_create_with_owner_fails_when_link_insert_fails() {
    // Only the store insert has a result; the link insert errors out.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![store_row(Uuid::new_v4(), "My Store")]])
        .into_connection();

    let repo = repository(db);
    let err = repo
        .create_with_owner(NewStore::new("My Store").unwrap(), "user_1".to_string())
        .await
        .unwrap_err();
    assert!(err.is_unexpected());

    // The store insert must be undone along with the failed link insert.
    let statements = transaction_statements(repo.into_inner());
    assert_eq!(statements.first().map(String::as_str), Some("BEGIN"));
    assert!(statements.iter().any(|s| s.starts_with(r#"INSERT INTO "stores""#)));
    assert_eq!(statements.last().map(String::as_str), Some("ROLLBACK"));
    assert!(!statements.iter().any(|s| s == "COMMIT"));
}

#[tokio::test]
async fn test_find_for_user_returns_member_store() {
    let store_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![store_row(store_id, "My Store")]])
        .into_connection();

    let store = repository(db)
        .find_for_user(store_id, "user_1")
        .await
        .unwrap()
        .expect("store should be found");

    assert_eq!(store.id, store_id);
}

#[tokio::test]
async fn test_find_for_user_returns_none_for_non_member() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<store::Model>::new()])
        .into_connection();

    let store = repository(db)
        .find_for_user(Uuid::new_v4(), "someone_else")
        .await
        .unwrap();

    assert!(store.is_none());
}

#[tokio::test]
async fn test_list_for_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            store_row(Uuid::new_v4(), "First"),
            store_row(Uuid::new_v4(), "Second"),
        ]])
        .into_connection();

    let stores = repository(db).list_for_user("user_1").await.unwrap();

    let names: Vec<&str> = stores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_ping() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    assert!(repository(db).ping().await.is_ok());
}
