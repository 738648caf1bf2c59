//! In-memory user repository.
//!
//! Backs tests and `serve --in-memory`. Rows live in a `Vec` so
//! `find_all` keeps insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::user_repository::{duplicate_email, UserRepository};
use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    last_id: UserId,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.user_id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        // Checked under the write lock, like a unique index
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict(duplicate_email(&user.email)));
        }

        table.last_id += 1;
        let user = user.into_user(table.last_id);
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .retain(|u| u.user_id != user.user_id);
        Ok(())
    }
}
