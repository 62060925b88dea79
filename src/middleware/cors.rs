use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::error::{Error, Result};

pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Restricts to `CORS_ALLOWED_ORIGIN` when configured, otherwise permissive.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(permissive_cors());
    };
    let origin = HeaderValue::from_str(origin)
        .map_err(|_| Error::Config(format!("Invalid CORS_ALLOWED_ORIGIN: {}", origin)))?;
    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(origin))
}
