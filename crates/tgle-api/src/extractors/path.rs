//! Typed path parameter helpers.

use std::str::FromStr;

use tgle_core::error::AppError;

/// Parses a numeric id from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

#[cfg(test)]
mod tests {
    use tgle_core::types::ConcertId;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id::<ConcertId>("42").unwrap(), ConcertId(42));
        assert!(parse_id::<ConcertId>("forty-two").is_err());
    }
}
