use crate::{
    controller::{self, ask_controller, health_check_controller},
    cors, params,
    response::{self, ErrorResponse},
    sse::handler as sse_handler,
    AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use service::config::Config;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "legalrag-backend"
        ),
        paths(
            health_check_controller::health_check,
            ask_controller::ask,
            sse_handler::ask_stream,
        ),
        components(
            schemas(
                domain::Citation,
                params::ask::AskParams,
                response::ask::AskResponse,
                response::health::HealthResponse,
                ErrorResponse,
            )
        ),
        tags(
            (name = "legalrag", description = "Question answering over internal legal documents")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors::layer(&app_state.config);

    Router::new()
        .merge(health_routes())
        .merge(ask_routes())
        .merge(api_doc_routes(&app_state.config))
        .fallback(controller::not_found)
        .layer(cors)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn ask_routes() -> Router {
    Router::new()
        .route("/ask", post(ask_controller::ask))
        .route("/ask/stream", get(sse_handler::ask_stream))
}

/// Serves the OpenAPI document at `/api-docs/openapi.json` and its RapiDoc UI at `/rapidoc`.
fn api_doc_routes(config: &Config) -> Router {
    let mut openapi = ApiDoc::openapi();
    openapi.info.title = config.app_name.clone();

    RapiDoc::with_openapi("/api-docs/openapi.json", openapi)
        .path("/rapidoc")
        .into()
}
