//! Cache key builders for all TGLE cache entries.

/// Cache key marking a JWT (by its `jti`) as revoked.
pub fn revoked_token(jti: &str) -> String {
    format!("jwt:revoked:{jti}")
}
