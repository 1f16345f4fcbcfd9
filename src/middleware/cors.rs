//! Middleware de CORS

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::environment::EnvironmentConfig;

/// CORS según el entorno: permisivo en desarrollo, restringido a los
/// orígenes configurados en producción.
pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(&config.cors_origins)
    } else {
        CorsLayer::very_permissive()
    }
}

/// Crear middleware de CORS con orígenes específicos
fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        match HeaderValue::from_str(origin) {
            Ok(header_value) => cors = cors.allow_origin(header_value),
            Err(_) => log::warn!("Origen CORS inválido, ignorado: {}", origin),
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
