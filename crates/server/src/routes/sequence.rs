use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use service::sequence;

use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SequenceRequest {
    pub collection_name: Option<String>,
}

#[utoipa::path(post, path = "/sequence/Document_Sequence", tag = "sequence",
    request_body = SequenceRequest,
    responses((status = 200, description = "OK"), (status = 404, description = "Unknown collection")))]
pub async fn document_sequence(
    State(state): State<AppState>,
    Json(body): Json<SequenceRequest>,
) -> Response {
    // This endpoint uses a singular `error` key; kept as the clients expect.
    let Some(collection_name) = body.collection_name.filter(|s| !s.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Failed to retrieve next sequence details.",
                "error": { "code": 400, "description": "collection_name is required." }
            })),
        )
            .into_response();
    };

    match sequence::next_for_collection(state.documents.as_ref(), &collection_name).await {
        Ok(Some(value)) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Successfully retrieved next sequence value.",
                "data": { "sequence": value }
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "not found",
                "message": "Unknown collection or sequence name.",
                "data": { "sequence": -1 }
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "An error occurred while retrieving the next sequence value.",
                "error": err.description(),
            })),
        )
            .into_response(),
    }
}
