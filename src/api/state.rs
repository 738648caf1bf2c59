//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, InMemoryUserStore, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection, `None` when running on the in-memory store
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by the relational store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(UserStore::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(store)),
            database: Some(database),
        }
    }

    /// Create application state backed by an in-memory store.
    ///
    /// The store handle is shared so callers can seed or inspect it.
    pub fn in_memory(store: Arc<InMemoryUserStore>) -> Self {
        Self {
            user_service: Arc::new(UserManager::new(store)),
            database: None,
        }
    }
}
