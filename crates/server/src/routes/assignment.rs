use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use service::assignment::{self, AssignmentOutcome};
use service::errors::ServiceError;

use crate::envelope;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    #[serde(rename = "DRC_ID")]
    pub drc_id: Option<i64>,
    #[serde(rename = "Service_ID")]
    pub service_id: Option<i64>,
}

pub async fn service_to_drc(
    State(state): State<AppState>,
    Json(body): Json<AssignmentRequest>,
) -> Response {
    let (Some(drc_id), Some(service_id)) = (body.drc_id, body.service_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Both DRC_ID and Service_ID are required.",
            })),
        )
            .into_response();
    };

    match assignment::assign_service_to_drc(state.relational(), drc_id, service_id).await {
        Ok(AssignmentOutcome::Created { id }) => envelope::success(
            StatusCode::CREATED,
            "Service assigned to DRC successfully.",
            json!({
                "id": id,
                "drc_id": drc_id,
                "service_id": service_id,
                "assignment_status": "Active",
            }),
        ),
        Ok(AssignmentOutcome::Reactivated) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Service status updated to active.",
            })),
        )
            .into_response(),
        Err(err @ ServiceError::Conflict(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "message": err.description() })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Failed to assign service to DRC.",
                "errors": { "database": err.description() },
            })),
        )
            .into_response(),
    }
}

pub async fn remove_service_from_drc(
    State(state): State<AppState>,
    Json(body): Json<AssignmentRequest>,
) -> Response {
    let (Some(drc_id), Some(service_id)) = (body.drc_id, body.service_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Failed to remove service from DRC.",
                "errors": { "field_name": "DRC_ID and Service_ID are required" },
            })),
        )
            .into_response();
    };

    match assignment::remove_service_from_drc(state.relational(), drc_id, service_id).await {
        Ok(()) => envelope::success(
            StatusCode::OK,
            "Service removed successfully from DRC.",
            json!({
                "drc_id": drc_id,
                "service_id": service_id,
                "assignment_status": "Inactive",
            }),
        ),
        Err(err @ ServiceError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": err.description() })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Failed to remove service from DRC.",
                "errors": { "database": err.description() },
            })),
        )
            .into_response(),
    }
}
