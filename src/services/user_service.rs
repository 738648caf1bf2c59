//! User service - Handles user-related use cases.
//!
//! Each operation is a single round-trip to the repository; no state is
//! kept between requests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MSG_INVALID_CREDENTIALS;
use crate::domain::{NewUser, User, UserByEmail, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{duplicate_email, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID, `None` when absent
    async fn get_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Look up the public profile for an email/password pair
    async fn get_user_details(&self, email: &str, password: &str) -> AppResult<UserByEmail>;

    /// Create a user, rejecting emails that are already registered
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn get_user_details(&self, email: &str, password: &str) -> AppResult<UserByEmail> {
        let user = self
            .users
            .find_by_email_and_password(email, password)
            .await?
            .ok_or_else(|| {
                tracing::info!(email, "No user matches the given credentials");
                AppError::not_found(MSG_INVALID_CREDENTIALS)
            })?;

        Ok(UserByEmail::from(user))
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            tracing::warn!(email = %new_user.email, "Rejecting user with taken email");
            return Err(AppError::conflict(duplicate_email(&new_user.email)));
        }

        let user = self.users.save(new_user).await?;
        tracing::debug!(user_id = user.user_id, "User created");
        Ok(user)
    }
}
