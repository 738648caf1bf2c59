//! SeaORM user store tests against in-memory SQLite.

use user_directory::errors::AppError;
use user_directory::infra::{Database, UserRepository, UserStore};
use user_directory::NewUser;

mod common;
use common::{jane, john, sqlite_connection, JOHN_EMAIL};

async fn setup_store() -> UserStore {
    UserStore::new(sqlite_connection().await)
}

#[tokio::test]
async fn test_save_assigns_identifier_and_keeps_fields() {
    let store = setup_store().await;
    let input = john();

    let saved = store.save(input.clone()).await.unwrap();

    assert!(saved.user_id > 0);
    assert_eq!(saved.first_name, input.first_name);
    assert_eq!(saved.last_name, input.last_name);
    assert_eq!(saved.email, input.email);
    assert_eq!(saved.password, input.password);
}

#[tokio::test]
async fn test_find_all_in_insertion_order() {
    let store = setup_store().await;
    let first = store.save(john()).await.unwrap();
    let second = store.save(jane()).await.unwrap();
    let third = store
        .save(NewUser::new("Al", "Able", "al@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(store.find_all().await.unwrap(), vec![first, second, third]);
}

#[tokio::test]
async fn test_find_by_email() {
    let store = setup_store().await;
    let saved = store.save(john()).await.unwrap();
    store.save(jane()).await.unwrap();

    assert_eq!(store.find_by_email(JOHN_EMAIL).await.unwrap(), Some(saved));
    assert!(store
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_find_by_email_and_password_is_exact() {
    let store = setup_store().await;
    let saved = store.save(john()).await.unwrap();

    assert_eq!(
        store
            .find_by_email_and_password(JOHN_EMAIL, "password")
            .await
            .unwrap(),
        Some(saved)
    );
    assert!(store
        .find_by_email_and_password(JOHN_EMAIL, "PASSWORD")
        .await
        .unwrap()
        .is_none());
    assert!(store
        .find_by_email_and_password("jane.doe@example.com", "password")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_email_violates_unique_constraint() {
    let store = setup_store().await;
    store.save(john()).await.unwrap();

    let result = store
        .save(NewUser::new("Other", "Person", JOHN_EMAIL, "x"))
        .await;

    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains(JOHN_EMAIL)),
        other => panic!("expected conflict, got {:?}", other),
    }
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let store = setup_store().await;
    let saved = store.save(john()).await.unwrap();

    store.delete(&saved).await.unwrap();

    assert!(store.find_by_id(saved.user_id).await.unwrap().is_none());
    assert!(store.find_all().await.unwrap().is_empty());
    // Deleting a missing row is a no-op
    store.delete(&saved).await.unwrap();
}

#[tokio::test]
async fn test_database_ping_and_migration_status() {
    let database = Database::from_connection(sqlite_connection().await);

    database.ping().await.unwrap();
    let status = database.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert!(status.iter().all(|(_, applied)| *applied));
}
