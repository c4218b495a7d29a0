use serde::Serialize;
use service::config::API_VERSION;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"status": "ok", "version": "0.1.0"}))]
pub(crate) struct HealthResponse {
    pub(crate) status: String,
    pub(crate) version: String,
}

impl HealthResponse {
    pub(crate) fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}
