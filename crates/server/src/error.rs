use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error enum for crate-specific errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// There is no collection with this id.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// [stac_axum_core::Error]
    #[error(transparent)]
    Core(#[from] stac_axum_core::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// An extension's client implements neither the synchronous nor the
    /// asynchronous execution capability.
    ///
    /// Raised at registration time, before any route is added.
    #[error("{0} implements neither a synchronous nor an asynchronous client")]
    UnimplementedCapability(&'static str),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::CollectionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("internal server error: {}", self);
        }
        let body = Json(json!({
            "code": status.as_u16(),
            "description": self.to_string(),
        }));
        (status, body).into_response()
    }
}
