use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use models::status::RecordStatus;
use service::drc;
use service::errors::{ServiceError, StoreSide};

use crate::envelope;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterDrcRequest {
    #[serde(rename = "DRC_Name")]
    pub drc_name: Option<String>,
    #[serde(rename = "DRC_Abbreviation")]
    pub drc_abbreviation: Option<String>,
    #[serde(rename = "Contact_Number")]
    pub contact_number: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeDrcStatusRequest {
    pub drc_id: Option<i64>,
    #[schema(value_type = String)]
    pub drc_status: Option<RecordStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DrcByIdRequest {
    #[serde(rename = "DRC_ID")]
    pub drc_id: Option<i64>,
}

#[utoipa::path(post, path = "/DRC/Register_DRC", tag = "drc", request_body = RegisterDrcRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn register_drc(
    State(state): State<AppState>,
    Json(body): Json<RegisterDrcRequest>,
) -> Response {
    // This endpoint's 400/500 shapes use `field_name`/`exception` keys
    // instead of the code/description pair; kept as the clients expect.
    let (Some(drc_name), Some(drc_abbreviation), Some(contact_number)) =
        (body.drc_name, body.drc_abbreviation, body.contact_number)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Failed to register DRC.",
                "errors": { "field_name": "All fields are required" }
            })),
        )
            .into_response();
    };

    let input = drc::NewDrc { drc_name, drc_abbreviation, contact_number };
    match drc::register_drc(state.relational(), state.documents.as_ref(), input).await {
        Ok(registered) => envelope::success(
            StatusCode::CREATED,
            "DRC registered successfully.",
            json!(registered),
        ),
        Err(err @ ServiceError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Failed to register DRC.",
                "errors": { "field_name": err.description() }
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Failed to register DRC.",
                "errors": { "exception": err.description() }
            })),
        )
            .into_response(),
    }
}

#[utoipa::path(patch, path = "/DRC/Change_DRC_Status", tag = "drc", request_body = ChangeDrcStatusRequest,
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn change_drc_status(
    State(state): State<AppState>,
    Json(body): Json<ChangeDrcStatusRequest>,
) -> Response {
    let (Some(drc_id), Some(drc_status)) = (body.drc_id, body.drc_status) else {
        return envelope::error(
            StatusCode::BAD_REQUEST,
            "Failed to update DRC status.",
            "DRC ID and status are required.",
        );
    };

    match drc::change_drc_status(state.relational(), state.documents.as_ref(), drc_id, drc_status).await
    {
        Ok(()) => envelope::success(
            StatusCode::OK,
            "DRC status updated successfully.",
            json!({ "drc_id": drc_id, "drc_status": drc_status }),
        ),
        Err(err @ ServiceError::NotFound { store: StoreSide::Document, .. }) => {
            envelope::failure("Failed to update DRC status in MongoDB.", &err)
        }
        Err(err) => envelope::failure("Failed to update DRC status.", &err),
    }
}

pub async fn drc_details(State(state): State<AppState>) -> Response {
    let merged = drc::list_drcs(state.relational(), state.documents.as_ref()).await;
    if merged.is_empty() {
        // Listings cannot tell an empty catalog from total failure.
        return envelope::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to retrieve DRC details.",
            "Internal server error occurred while fetching DRC details.",
        );
    }
    envelope::success(
        StatusCode::OK,
        "All DRC details retrieved successfully.",
        json!({ "relational": merged.relational, "document": merged.document }),
    )
}

pub async fn drc_details_by_id(
    State(state): State<AppState>,
    Json(body): Json<DrcByIdRequest>,
) -> Response {
    let Some(drc_id) = body.drc_id else {
        return envelope::error(
            StatusCode::BAD_REQUEST,
            "Failed to retrieve DRC details.",
            "DRC ID is required.",
        );
    };

    let merged = drc::find_drc(state.relational(), state.documents.as_ref(), drc_id).await;
    if merged.is_absent() {
        return envelope::error(
            StatusCode::NOT_FOUND,
            "DRC not found.",
            &format!("No DRC found with drc_id: {drc_id}."),
        );
    }
    envelope::success(
        StatusCode::OK,
        "DRC details retrieved successfully.",
        json!({
            "relational": merged.relational.flatten(),
            "document": merged.document.flatten(),
        }),
    )
}

pub async fn active_drc_details(State(state): State<AppState>) -> Response {
    let merged = drc::list_active_drcs(state.relational(), state.documents.as_ref()).await;
    if merged.is_empty() {
        return envelope::error(
            StatusCode::NOT_FOUND,
            "No active DRCs found.",
            "There are no DRCs with active status.",
        );
    }
    envelope::success(
        StatusCode::OK,
        "Active DRC details retrieved successfully.",
        json!({ "relational": merged.relational, "document": merged.document }),
    )
}

pub async fn drc_with_services(State(state): State<AppState>) -> Response {
    match drc::list_drcs_with_services(state.relational()).await {
        Ok(list) => envelope::success(
            StatusCode::OK,
            "All DRC details retrieved successfully.",
            json!(list),
        ),
        Err(err) => envelope::failure("Failed to retrieve DRC details.", &err),
    }
}

pub async fn drc_with_services_by_drc_id(
    State(state): State<AppState>,
    Json(body): Json<DrcByIdRequest>,
) -> Response {
    // A missing id answers 404, not 400; existing clients match on it.
    let Some(drc_id) = body.drc_id else {
        return envelope::error(
            StatusCode::NOT_FOUND,
            "Failed to retrieve DRC details.",
            "DRC with the given ID not found",
        );
    };

    match drc::drc_with_services_by_id(state.relational(), drc_id).await {
        Ok(mut list) => {
            // A single hit is unwrapped from the array.
            let data = if list.len() == 1 { json!(list.remove(0)) } else { json!(list) };
            envelope::success(StatusCode::OK, "DRC details retrieved successfully.", data)
        }
        Err(err) => envelope::failure("Failed to retrieve DRC details.", &err),
    }
}
