//! Domain layer - Core business entities
//!
//! Plain data types shared by the store, the service and the HTTP layer.

pub mod user;

pub use user::{NewUser, User, UserByEmail, UserId};
