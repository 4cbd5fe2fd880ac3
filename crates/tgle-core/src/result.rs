//! Convenience result type alias for TGLE.

use crate::error::AppError;

/// A specialized `Result` type for TGLE operations.
pub type AppResult<T> = Result<T, AppError>;
