//! Account registration and profile management.

pub mod service;

pub use service::{RegisterUser, UpdateUserInfo, UserService};
