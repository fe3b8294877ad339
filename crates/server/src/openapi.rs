use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::drc::register_drc,
        crate::routes::drc::change_drc_status,
        crate::routes::service_type::register_service_type,
        crate::routes::service_type::change_service_status,
        crate::routes::sequence::document_sequence,
    ),
    components(schemas(
        crate::routes::drc::RegisterDrcRequest,
        crate::routes::drc::ChangeDrcStatusRequest,
        crate::routes::service_type::RegisterServiceTypeRequest,
        crate::routes::service_type::ChangeServiceStatusRequest,
        crate::routes::sequence::SequenceRequest,
    )),
    tags(
        (name = "drc"),
        (name = "service"),
        (name = "sequence"),
    )
)]
pub struct ApiDoc;
