//! Application services layer - Use cases and business logic.
//!
//! Services depend on the repository trait, not on a storage engine.

mod user_service;

pub use user_service::{UserManager, UserService};
