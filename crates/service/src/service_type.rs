//! Service-type catalog operations.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use models::docs::ServiceDocument;
use models::service_type;
use models::status::RecordStatus;

use crate::dual::{self, Merged};
use crate::errors::ServiceError;
use crate::storage::DocumentStore;
use crate::{require_relational, sequence};

/// Register a service type with a counter-minted id, Active by default.
pub async fn register_service_type(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    service_type_name: &str,
) -> Result<ServiceDocument, ServiceError> {
    let trimmed = service_type_name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation("service_type is required.".into()));
    }

    let ty = trimmed.to_string();
    let doc_ty = ty.clone();
    let row_ty = ty.clone();
    let service_id = dual::register_with_sequence(
        store,
        sequence::SERVICE_ID,
        |id| async move {
            store
                .insert_service(ServiceDocument {
                    service_id: id,
                    service_type: doc_ty,
                    service_status: RecordStatus::Active,
                })
                .await
                .map_err(ServiceError::from)
        },
        |id| async move {
            let db = require_relational(db)?;
            let am = service_type::ActiveModel {
                service_id: Set(id),
                service_type: Set(row_ty),
                service_status: Set(RecordStatus::Active),
            };
            service_type::Entity::insert(am).exec(db).await?;
            Ok(())
        },
    )
    .await?;

    Ok(ServiceDocument {
        service_id,
        service_type: ty,
        service_status: RecordStatus::Active,
    })
}

/// Change the status in both stores and answer with the canonical
/// relational row, re-read after the updates.
pub async fn change_service_status(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    service_id: i64,
    status: RecordStatus,
) -> Result<service_type::Model, ServiceError> {
    dual::change_status(
        || async move {
            let db = require_relational(db)?;
            let res = service_type::Entity::update_many()
                .col_expr(service_type::Column::ServiceStatus, Expr::value(status))
                .filter(service_type::Column::ServiceId.eq(service_id))
                .exec(db)
                .await?;
            Ok(res.rows_affected)
        },
        || async move { Ok(store.update_service_status(service_id, status).await?.is_some()) },
        "Service not found for the given service_id.",
        "Service not found in MongoDB for the given service_id.",
    )
    .await?;

    let db = require_relational(db)?;
    service_type::Entity::find_by_id(service_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service not found for the given service_id."))
}

pub async fn list_services(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
) -> Merged<Vec<service_type::Model>, Vec<ServiceDocument>> {
    dual::read_both(
        "service_details",
        async move {
            let db = require_relational(db)?;
            Ok(service_type::Entity::find().all(db).await?)
        },
        async move { Ok(store.list_services().await?) },
    )
    .await
}

pub async fn find_service(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    service_id: i64,
) -> Merged<Option<service_type::Model>, Option<ServiceDocument>> {
    dual::read_both(
        "service_details_by_id",
        async move {
            let db = require_relational(db)?;
            Ok(service_type::Entity::find_by_id(service_id).one(db).await?)
        },
        async move { Ok(store.find_service(service_id).await?) },
    )
    .await
}

pub async fn list_active_services(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
) -> Merged<Vec<service_type::Model>, Vec<ServiceDocument>> {
    dual::read_both(
        "active_service_details",
        async move {
            let db = require_relational(db)?;
            Ok(service_type::Entity::find()
                .filter(service_type::Column::ServiceStatus.eq(RecordStatus::Active))
                .all(db)
                .await?)
        },
        async move {
            let all = store.list_services().await?;
            Ok(all
                .into_iter()
                .filter(|s| s.service_status == RecordStatus::Active)
                .collect())
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;
    use crate::errors::StoreSide;
    use crate::test_support::FakeDocumentStore;

    #[tokio::test]
    async fn register_rejects_blank_type_without_touching_either_store() {
        let store = FakeDocumentStore::default();
        let err = register_service_type(None, &store, "   ").await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(store.sequence_calls(), 0);
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn fresh_counter_yields_service_id_one() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();
        let store = FakeDocumentStore::default();

        let registered = register_service_type(Some(&db), &store, "Internet").await.unwrap();

        assert_eq!(registered.service_id, 1);
        assert_eq!(registered.service_type, "Internet");
        assert_eq!(registered.service_status, RecordStatus::Active);
    }

    #[tokio::test]
    async fn registered_service_shows_up_in_the_active_listing() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .append_query_results([vec![service_type::Model {
                service_id: 1,
                service_type: "Internet".to_string(),
                service_status: RecordStatus::Active,
            }]])
            .into_connection();
        let store = FakeDocumentStore::default();

        register_service_type(Some(&db), &store, "Internet").await.unwrap();
        let merged = list_active_services(Some(&db), &store).await;

        let relational = merged.relational.unwrap();
        assert_eq!(relational[0].service_id, 1);
        let document = merged.document.unwrap();
        assert_eq!(document[0].service_type, "Internet");
    }

    #[tokio::test]
    async fn document_write_failure_aborts_before_the_relational_insert() {
        let store = FakeDocumentStore::failing_writes();

        // db is None: reaching the relational step would answer "relational
        // store unavailable" instead, so the abort happened at the document
        // write.
        let err = register_service_type(None, &store, "Internet").await.unwrap_err();

        assert!(matches!(err, ServiceError::Dependency(ref msg) if msg.contains("write")));
        assert_eq!(store.write_calls(), 1);
    }

    #[tokio::test]
    async fn sequence_failure_is_fatal_before_any_write() {
        let store = FakeDocumentStore::failing_sequence();
        let err = register_service_type(None, &store, "Internet").await.unwrap_err();

        assert!(matches!(err, ServiceError::SequenceGeneration(_)));
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn unknown_relational_id_never_reaches_the_document_store() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
            .into_connection();
        let store = FakeDocumentStore::default();

        let err = change_service_status(Some(&db), &store, 77, RecordStatus::Inactive)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { store: StoreSide::Relational, .. }));
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn status_change_answers_with_the_reread_relational_row() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .append_query_results([vec![service_type::Model {
                service_id: 5,
                service_type: "Internet".to_string(),
                service_status: RecordStatus::Inactive,
            }]])
            .into_connection();
        let store = FakeDocumentStore::default();
        store.services.lock().unwrap().push(ServiceDocument {
            service_id: 5,
            service_type: "Internet".to_string(),
            service_status: RecordStatus::Active,
        });

        let updated = change_service_status(Some(&db), &store, 5, RecordStatus::Inactive)
            .await
            .unwrap();

        assert_eq!(updated.service_status, RecordStatus::Inactive);
        // The document copy was updated too.
        let docs = store.services.lock().unwrap();
        assert_eq!(docs[0].service_status, RecordStatus::Inactive);
    }

    #[tokio::test]
    async fn lookup_merges_a_failing_document_side_into_null() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![service_type::Model {
                service_id: 2,
                service_type: "PEO TV".to_string(),
                service_status: RecordStatus::Active,
            }]])
            .into_connection();
        let store = FakeDocumentStore::failing_reads();

        let merged = find_service(Some(&db), &store, 2).await;

        assert!(merged.relational.as_ref().is_some_and(|r| r.is_some()));
        assert!(merged.document.is_none());
        assert!(!merged.is_absent());
    }
}
