use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use service::rtom;

use crate::envelope;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RtomByIdRequest {
    pub rtom_id: Option<i64>,
}

pub async fn rtom_details(State(state): State<AppState>) -> Response {
    match rtom::list_rtoms(state.relational()).await {
        Ok(rows) => envelope::success(
            StatusCode::OK,
            "All RTOM details retrieved successfully.",
            json!(rows),
        ),
        Err(err) => envelope::failure("Failed to retrieve RTOM details.", &err),
    }
}

pub async fn rtom_details_by_id(
    State(state): State<AppState>,
    Json(body): Json<RtomByIdRequest>,
) -> Response {
    let Some(rtom_id) = body.rtom_id else {
        return envelope::error(
            StatusCode::BAD_REQUEST,
            "Failed to retrieve RTOM details.",
            "RTOM ID is required.",
        );
    };

    match rtom::find_rtoms_by_id(state.relational(), rtom_id).await {
        // The row set keeps its array shape even for a single id.
        Ok(rows) => envelope::success(
            StatusCode::OK,
            "All RTOM details retrieved successfully.",
            json!(rows),
        ),
        Err(err) => envelope::failure("Failed to retrieve RTOM details.", &err),
    }
}
