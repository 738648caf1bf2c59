//! User repository trait and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups are exact, case-sensitive matches. Implementations keep at most
/// one record per email and report a duplicate on save as
/// [`AppError::Conflict`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by identifier
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user matching both email and password
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>>;

    /// Persist a new user and return it with its assigned identifier
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Remove a user by identifier (no-op when absent)
    async fn delete(&self, user: &User) -> AppResult<()>;
}

/// Message carried by [`AppError::Conflict`] for a taken email.
pub fn duplicate_email(email: &str) -> String {
    format!("User with email {}", email)
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a unique-constraint violation on insert to a conflict.
fn insert_error(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(duplicate_email(email)),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::UserId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Password.eq(password))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let email = user.email.clone();
        let active_model = ActiveModel {
            user_id: ActiveValue::NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password: Set(user.password),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, &email))?;

        tracing::debug!(user_id = model.user_id, "User row inserted");
        Ok(User::from(model))
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let result = UserEntity::delete_by_id(user.user_id).exec(&self.db).await?;

        tracing::debug!(
            user_id = user.user_id,
            rows = result.rows_affected,
            "User row deleted"
        );
        Ok(())
    }
}
