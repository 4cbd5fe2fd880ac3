//! Storage provider implementations.

#[cfg(feature = "local")]
pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

#[cfg(feature = "local")]
pub use local::LocalStorageProvider;
#[cfg(feature = "s3")]
pub use s3::S3StorageProvider;

/// Join a public base URL and an object key with exactly one `/`.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Strip a public base URL from `url`, yielding the object key.
pub(crate) fn strip_base(base: &str, url: &str) -> Option<String> {
    let rest = url.strip_prefix(base.trim_end_matches('/'))?;
    let key = rest.strip_prefix('/')?;
    (!key.is_empty()).then(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_strip() {
        let url = join_url("http://localhost:3000/uploads/", "/users/a.png");
        assert_eq!(url, "http://localhost:3000/uploads/users/a.png");
        assert_eq!(
            strip_base("http://localhost:3000/uploads", &url).as_deref(),
            Some("users/a.png")
        );
        assert_eq!(strip_base("https://cdn.example.com", &url), None);
        assert_eq!(strip_base("http://localhost:3000/uploads", "http://localhost:3000/uploads/"), None);
    }
}
