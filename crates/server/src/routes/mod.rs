use axum::routing::{get, patch, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi;
use crate::AppState;

pub mod assignment;
pub mod drc;
pub mod recovery_officer;
pub mod rtom;
pub mod sequence;
pub mod service_type;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: one group per entity, swagger, and the
/// shared trace/cors layers.
pub fn build_router(state: AppState) -> Router {
    let drc_routes = Router::new()
        .route("/Register_DRC", post(drc::register_drc))
        .route("/Change_DRC_Status", patch(drc::change_drc_status))
        .route("/DRC_Details", get(drc::drc_details))
        .route("/DRC_Details_By_ID", post(drc::drc_details_by_id))
        .route("/Active_DRC_Details", get(drc::active_drc_details))
        .route("/DRC_with_Services", get(drc::drc_with_services))
        .route("/DRC_with_Services_By_DRC_ID", post(drc::drc_with_services_by_drc_id));

    let service_routes = Router::new()
        .route("/Register_Service_Type", post(service_type::register_service_type))
        .route("/Change_Service_Status", patch(service_type::change_service_status))
        .route("/Service_Details", get(service_type::service_details))
        .route("/Service_Details_By_Id", post(service_type::service_details_by_id))
        .route("/Active_Service_Details", get(service_type::active_service_details));

    let assignment_routes = Router::new()
        .route("/Service_to_DRC", post(assignment::service_to_drc))
        .route("/Remove_Service_From_DRC", patch(assignment::remove_service_from_drc));

    let ro_routes = Router::new()
        .route("/RO_Details", get(recovery_officer::ro_details))
        .route("/RO_Details_By_ID", post(recovery_officer::ro_details_by_id))
        .route("/Suspend_RO", patch(recovery_officer::suspend_ro));

    let rtom_routes = Router::new()
        .route("/RTOM_Details", get(rtom::rtom_details))
        .route("/RTOM_Details_By_ID", post(rtom::rtom_details_by_id));

    let sequence_routes =
        Router::new().route("/Document_Sequence", post(sequence::document_sequence));

    Router::new()
        .route("/health", get(health))
        .nest("/DRC", drc_routes)
        .nest("/service", service_routes)
        .nest("/DRC_service", assignment_routes)
        .nest("/recovery_officer", ro_routes)
        .nest("/RTOM", rtom_routes)
        .nest("/sequence", sequence_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
