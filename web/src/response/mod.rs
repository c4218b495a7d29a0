//! Response bodies returned by the endpoints.

use serde::Serialize;
use utoipa::ToSchema;

pub(crate) mod ask;
pub(crate) mod health;

/// Body of every error response, e.g. `{"detail": "Not Found"}`.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub(crate) detail: String,
}

impl ErrorResponse {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
