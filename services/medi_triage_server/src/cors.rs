use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::{ConfigError, CorsConfig};

/// Credentialed CORS for the configured origins; methods and headers are
/// mirrored from the preflight request.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.header_values()?))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
