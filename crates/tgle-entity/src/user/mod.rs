//! User domain entities.

pub mod model;
pub mod provider;

pub use model::{CreateUser, User};
pub use provider::AuthProvider;
