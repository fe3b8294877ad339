//! The uniform response envelope and the status mapping for service
//! failures. A few endpoints keep the live system's flatter shapes; those
//! are built inline in their handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use service::errors::ServiceError;

pub fn success(status: StatusCode, message: &str, data: Value) -> Response {
    (
        status,
        Json(json!({ "status": "success", "message": message, "data": data })),
    )
        .into_response()
}

pub fn error(status: StatusCode, message: &str, description: &str) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message,
            "errors": { "code": status.as_u16(), "description": description }
        })),
    )
        .into_response()
}

pub fn status_of(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::Dependency(_) | ServiceError::SequenceGeneration(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Uniform-envelope rendering of a service failure under the endpoint's own
/// headline message.
pub fn failure(message: &str, err: &ServiceError) -> Response {
    error(status_of(err), message, err.description())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_its_status_code() {
        assert_eq!(status_of(&ServiceError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(&ServiceError::Conflict("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(&ServiceError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(&ServiceError::not_found_in_documents("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&ServiceError::Dependency("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(&ServiceError::SequenceGeneration("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
