use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use models::status::RecordStatus;
use service::errors::{ServiceError, StoreSide};
use service::service_type;

use crate::envelope;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterServiceTypeRequest {
    pub service_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeServiceStatusRequest {
    pub service_id: Option<i64>,
    #[schema(value_type = String)]
    pub service_status: Option<RecordStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceByIdRequest {
    pub service_id: Option<i64>,
}

#[utoipa::path(post, path = "/service/Register_Service_Type", tag = "service",
    request_body = RegisterServiceTypeRequest,
    responses((status = 200, description = "OK"), (status = 400, description = "Bad Request")))]
pub async fn register_service_type(
    State(state): State<AppState>,
    Json(body): Json<RegisterServiceTypeRequest>,
) -> Response {
    // Flat response shapes on this endpoint, as the clients expect.
    let Some(service_type_name) = body.service_type.filter(|s| !s.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "service_type is required." })),
        )
            .into_response();
    };

    match service_type::register_service_type(
        state.relational(),
        state.documents.as_ref(),
        &service_type_name,
    )
    .await
    {
        Ok(registered) => (
            StatusCode::OK,
            Json(json!({
                "message": "Service data stored successfully",
                "service": registered,
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": "Error storing service data",
                "error": err.description(),
            })),
        )
            .into_response(),
    }
}

#[utoipa::path(patch, path = "/service/Change_Service_Status", tag = "service",
    request_body = ChangeServiceStatusRequest,
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn change_service_status(
    State(state): State<AppState>,
    Json(body): Json<ChangeServiceStatusRequest>,
) -> Response {
    let (Some(service_id), Some(service_status)) = (body.service_id, body.service_status) else {
        return envelope::error(
            StatusCode::BAD_REQUEST,
            "Failed to update the service status.",
            "Missing required fields: service_id or service_status.",
        );
    };

    match service_type::change_service_status(
        state.relational(),
        state.documents.as_ref(),
        service_id,
        service_status,
    )
    .await
    {
        Ok(updated) => envelope::success(
            StatusCode::OK,
            "Service status updated successfully in both MySQL and MongoDB.",
            json!(updated),
        ),
        Err(err @ ServiceError::NotFound { store: StoreSide::Document, .. }) => {
            envelope::failure("Failed to update the service status in MongoDB.", &err)
        }
        Err(err) => envelope::failure("Failed to update the service status.", &err),
    }
}

pub async fn service_details(State(state): State<AppState>) -> Response {
    let merged = service_type::list_services(state.relational(), state.documents.as_ref()).await;
    if merged.is_empty() {
        // Listings cannot tell an empty catalog from total failure.
        return envelope::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to retrieve service details.",
            "Internal server error occurred while fetching service details.",
        );
    }
    envelope::success(
        StatusCode::OK,
        "Service details retrieved successfully.",
        json!({ "relational": merged.relational, "document": merged.document }),
    )
}

pub async fn service_details_by_id(
    State(state): State<AppState>,
    Json(body): Json<ServiceByIdRequest>,
) -> Response {
    let Some(service_id) = body.service_id else {
        return envelope::error(
            StatusCode::BAD_REQUEST,
            "Failed to retrieve service details.",
            "Service ID is required.",
        );
    };

    let merged =
        service_type::find_service(state.relational(), state.documents.as_ref(), service_id).await;
    if merged.is_absent() {
        return envelope::error(
            StatusCode::NOT_FOUND,
            "Service not found.",
            &format!("No service found with service_id: {service_id}."),
        );
    }
    envelope::success(
        StatusCode::OK,
        "Service details retrieved successfully.",
        json!({
            "relational": merged.relational.flatten(),
            "document": merged.document.flatten(),
        }),
    )
}

pub async fn active_service_details(State(state): State<AppState>) -> Response {
    let merged =
        service_type::list_active_services(state.relational(), state.documents.as_ref()).await;
    if merged.is_empty() {
        return envelope::error(
            StatusCode::NOT_FOUND,
            "No active services found.",
            "There are no services with active status.",
        );
    }
    envelope::success(
        StatusCode::OK,
        "Active services retrieved successfully.",
        json!({ "relational": merged.relational, "document": merged.document }),
    )
}
