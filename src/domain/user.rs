//! User domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier
pub type UserId = i64;

/// User domain entity
///
/// The password is kept as plain text and is part of the serialized shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier assigned by the store on save
    #[schema(example = 1)]
    pub user_id: UserId,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "password")]
    pub password: String,
}

/// User creation payload.
///
/// Fields left out of the request body, or sent as `null`, default to
/// empty strings; a client-supplied `userId` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    #[schema(example = "Jane")]
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[schema(example = "Doe")]
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[schema(example = "jane.doe@example.com")]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[schema(example = "password")]
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Attach a store-assigned identifier.
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Public profile returned by the credentials lookup (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserByEmail {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
}

impl From<User> for UserByEmail {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
