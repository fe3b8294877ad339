use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use models::status::RecordStatus;
use service::recovery_officer;

use crate::envelope;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoByIdRequest {
    pub ro_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SuspendRoRequest {
    pub ro_id: Option<i64>,
    #[schema(value_type = String)]
    pub ro_status: Option<RecordStatus>,
}

pub async fn ro_details(State(state): State<AppState>) -> Response {
    match recovery_officer::list_recovery_officers(state.relational(), state.documents.as_ref()).await
    {
        Ok(list) if list.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": "No Recovery Officer(s) found." })),
        )
            .into_response(),
        Ok(list) => envelope::success(
            StatusCode::OK,
            "Recovery Officer(s) retrieved successfully.",
            json!(list),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Database error",
                "error": err.description(),
            })),
        )
            .into_response(),
    }
}

pub async fn ro_details_by_id(
    State(state): State<AppState>,
    Json(body): Json<RoByIdRequest>,
) -> Response {
    let Some(ro_id) = body.ro_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "message": "ro_id is required." })),
        )
            .into_response();
    };

    match recovery_officer::find_recovery_officer(state.relational(), ro_id).await {
        Ok(Some(officer)) => envelope::success(
            StatusCode::OK,
            "Recovery Officer retrieved successfully.",
            json!(officer),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "error",
                "message": format!("No Recovery Officer found with ro_id: {ro_id}."),
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Database error",
                "error": err.description(),
            })),
        )
            .into_response(),
    }
}

/// The weaker consistency flow: the caller gets the answer as soon as the
/// relational update lands; the document copy follows best-effort.
pub async fn suspend_ro(
    State(state): State<AppState>,
    Json(body): Json<SuspendRoRequest>,
) -> Response {
    let (Some(ro_id), Some(ro_status)) = (body.ro_id, body.ro_status) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "message": "ro_id and ro_status are required." })),
        )
            .into_response();
    };

    match recovery_officer::suspend_recovery_officer(
        state.relational(),
        state.documents.clone(),
        ro_id,
        ro_status,
    )
    .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Recovery Officer status updated successfully.",
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Database updating error",
                "error": err.description(),
            })),
        )
            .into_response(),
    }
}
