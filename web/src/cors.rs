use axum::http::HeaderValue;
use log::*;
use service::config::Config;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds the CORS layer from the configured origins.
///
/// Credentials are always allowed. Browsers refuse a literal `*` alongside credentials, so a
/// `*` entry is served by mirroring the request `Origin`, and methods and headers are
/// mirrored from the preflight request.
pub(crate) fn layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        info!("CORS: allowing any origin");
        AllowOrigin::mirror_request()
    } else {
        let origins = parse_origins(config);
        info!("CORS: allowing origins {:?}", origins);
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

fn parse_origins(config: &Config) -> Vec<HeaderValue> {
    config
        .origins()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect()
}
