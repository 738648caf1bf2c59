//! User service tests over the in-memory store.

use std::sync::Arc;

use user_directory::errors::AppError;
use user_directory::infra::{InMemoryUserStore, UserRepository};
use user_directory::services::{UserManager, UserService};
use user_directory::NewUser;

mod common;
use common::{jane, john, JOHN_EMAIL};

fn setup() -> (UserManager<InMemoryUserStore>, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    (UserManager::new(store.clone()), store)
}

#[tokio::test]
async fn test_create_then_get_details() {
    let (service, _store) = setup();
    let created = service.create_user(john()).await.unwrap();

    let details = service
        .get_user_details(JOHN_EMAIL, "password")
        .await
        .unwrap();

    assert_eq!(details.id, created.user_id);
    assert_eq!(details.email, created.email);
    assert_eq!(details.first_name, created.first_name);
    assert_eq!(details.last_name, created.last_name);
}

#[tokio::test]
async fn test_get_details_requires_both_fields() {
    let (service, _store) = setup();
    service.create_user(john()).await.unwrap();

    let wrong_password = service.get_user_details(JOHN_EMAIL, "Password").await;
    let wrong_email = service
        .get_user_details("jane.doe@example.com", "password")
        .await;

    assert!(matches!(wrong_password, Err(AppError::NotFound(_))));
    assert!(matches!(wrong_email, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_duplicate_create_leaves_store_unchanged() {
    let (service, store) = setup();
    let original = service.create_user(john()).await.unwrap();

    let result = service
        .create_user(NewUser::new("Other", "Person", JOHN_EMAIL, "different"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(store.find_all().await.unwrap(), vec![original]);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_email_keep_one_record() {
    let (service, store) = setup();
    let service = Arc::new(service);

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_user(NewUser::new(format!("Jane{}", i), "Doe", "jane.doe@example.com", "pw"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_list_users_in_creation_order() {
    let (service, _store) = setup();
    let first = service.create_user(john()).await.unwrap();
    let second = service.create_user(jane()).await.unwrap();

    let users = service.list_users().await.unwrap();

    assert_eq!(users, vec![first, second]);
}

#[tokio::test]
async fn test_get_user_after_store_delete() {
    let (service, store) = setup();
    let created = service.create_user(john()).await.unwrap();
    assert_eq!(
        service.get_user(created.user_id).await.unwrap(),
        Some(created.clone())
    );

    store.delete(&created).await.unwrap();

    assert!(service.get_user(created.user_id).await.unwrap().is_none());
}
