//! CORS layer configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use tgle_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// `token_header` is exposed so browsers can read the token the login
/// response carries in a header of that name.
pub fn build_cors_layer(config: &CorsConfig, token_header: &str) -> CorsLayer {
    let mut layer = CorsLayer::new();
    let wildcard = config.allowed_origins.iter().any(|o| o == "*");

    // Origins
    if wildcard {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer
        .allow_methods(methods)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if let Ok(name) = HeaderName::from_bytes(token_header.as_bytes()) {
        layer = layer.expose_headers([name]);
    }

    // Credentialed requests cannot be combined with a wildcard origin.
    if config.allow_credentials && !wildcard {
        layer = layer.allow_credentials(true);
    }

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
