//! Debt Recovery Company operations: registration and status changes through
//! the dual-write coordinator, merged reads, and the services join.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Serialize;
use tracing::warn;

use models::company_owned_services;
use models::debt_recovery_company;
use models::docs::DrcDocument;
use models::service_type;
use models::status::RecordStatus;

use crate::dual::{self, Merged};
use crate::errors::ServiceError;
use crate::storage::DocumentStore;
use crate::{require_relational, sequence};

pub struct NewDrc {
    pub drc_name: String,
    pub drc_abbreviation: String,
    pub contact_number: String,
}

/// Register a company: counter, document copy, relational row, in that
/// order. The returned document doubles as the response payload.
pub async fn register_drc(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    input: NewDrc,
) -> Result<DrcDocument, ServiceError> {
    if input.drc_name.trim().is_empty()
        || input.drc_abbreviation.trim().is_empty()
        || input.contact_number.trim().is_empty()
    {
        return Err(ServiceError::Validation("All fields are required".into()));
    }

    let template = DrcDocument {
        drc_id: 0,
        drc_name: input.drc_name.trim().to_string(),
        drc_abbreviation: input.drc_abbreviation.trim().to_string(),
        contact_number: input.contact_number.trim().to_string(),
        drc_status: RecordStatus::Active,
        drc_end_date: None,
        created_by: "Admin".to_string(),
        created_at: Utc::now(),
        services_of_drc: Vec::new(),
    };

    let doc = template.clone();
    let row = template.clone();
    let drc_id = dual::register_with_sequence(
        store,
        sequence::DRC_ID,
        |id| async move {
            store
                .insert_drc(DrcDocument { drc_id: id, ..doc })
                .await
                .map_err(ServiceError::from)
        },
        |id| async move {
            let db = require_relational(db)?;
            let am = debt_recovery_company::ActiveModel {
                drc_id: Set(id),
                drc_name: Set(row.drc_name),
                drc_abbreviation: Set(row.drc_abbreviation),
                contact_number: Set(row.contact_number),
                drc_status: Set(row.drc_status),
                drc_end_date: Set(None),
                created_by: Set(row.created_by),
                created_at: Set(row.created_at),
            };
            debt_recovery_company::Entity::insert(am).exec(db).await?;
            Ok(())
        },
    )
    .await?;

    Ok(DrcDocument { drc_id, ..template })
}

pub async fn change_drc_status(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    drc_id: i64,
    status: RecordStatus,
) -> Result<(), ServiceError> {
    dual::change_status(
        || async move {
            let db = require_relational(db)?;
            let res = debt_recovery_company::Entity::update_many()
                .col_expr(debt_recovery_company::Column::DrcStatus, Expr::value(status))
                .filter(debt_recovery_company::Column::DrcId.eq(drc_id))
                .exec(db)
                .await?;
            Ok(res.rows_affected)
        },
        || async move { Ok(store.update_drc_status(drc_id, status).await?.is_some()) },
        "No record found with the provided DRC ID.",
        "No DRC found in MongoDB for the given drc_id.",
    )
    .await
}

pub async fn list_drcs(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
) -> Merged<Vec<debt_recovery_company::Model>, Vec<DrcDocument>> {
    dual::read_both(
        "drc_details",
        async move {
            let db = require_relational(db)?;
            Ok(debt_recovery_company::Entity::find().all(db).await?)
        },
        async move { Ok(store.list_drcs().await?) },
    )
    .await
}

pub async fn find_drc(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
    drc_id: i64,
) -> Merged<Option<debt_recovery_company::Model>, Option<DrcDocument>> {
    dual::read_both(
        "drc_details_by_id",
        async move {
            let db = require_relational(db)?;
            Ok(debt_recovery_company::Entity::find_by_id(drc_id).one(db).await?)
        },
        async move { Ok(store.find_drc(drc_id).await?) },
    )
    .await
}

pub async fn list_active_drcs(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
) -> Merged<Vec<debt_recovery_company::Model>, Vec<DrcDocument>> {
    dual::read_both(
        "active_drc_details",
        async move {
            let db = require_relational(db)?;
            Ok(debt_recovery_company::Entity::find()
                .filter(debt_recovery_company::Column::DrcStatus.eq(RecordStatus::Active))
                .all(db)
                .await?)
        },
        async move {
            let all = store.list_drcs().await?;
            Ok(all
                .into_iter()
                .filter(|d| d.drc_status == RecordStatus::Active)
                .collect())
        },
    )
    .await
}

#[derive(Debug, Serialize)]
pub struct OwnedService {
    pub id: i64,
    pub service_id: i64,
    pub service_type: String,
    pub service_status: RecordStatus,
}

#[derive(Debug, Serialize)]
pub struct DrcWithServices {
    pub drc: debt_recovery_company::Model,
    pub services: Vec<OwnedService>,
}

/// All companies, each with its assigned services as structured children.
pub async fn list_drcs_with_services(
    db: Option<&DatabaseConnection>,
) -> Result<Vec<DrcWithServices>, ServiceError> {
    let db = require_relational(db)?;
    let drcs = debt_recovery_company::Entity::find().all(db).await?;
    let assignments = company_owned_services::Entity::find()
        .find_also_related(service_type::Entity)
        .all(db)
        .await?;
    Ok(group_services(drcs, assignments))
}

pub async fn drc_with_services_by_id(
    db: Option<&DatabaseConnection>,
    drc_id: i64,
) -> Result<Vec<DrcWithServices>, ServiceError> {
    let db = require_relational(db)?;
    let drc = debt_recovery_company::Entity::find_by_id(drc_id).one(db).await?;
    let assignments = company_owned_services::Entity::find()
        .filter(company_owned_services::Column::DrcId.eq(drc_id))
        .find_also_related(service_type::Entity)
        .all(db)
        .await?;
    Ok(group_services(drc.into_iter().collect(), assignments))
}

/// One parent, many children. An assignment whose service row is gone is
/// skipped rather than poisoning the whole listing; a company without
/// services gets an empty list.
fn group_services(
    drcs: Vec<debt_recovery_company::Model>,
    rows: Vec<(company_owned_services::Model, Option<service_type::Model>)>,
) -> Vec<DrcWithServices> {
    let mut by_drc: HashMap<i64, Vec<OwnedService>> = HashMap::new();
    for (assignment, service) in rows {
        let Some(service) = service else {
            warn!(assignment_id = assignment.id, "assignment references a missing service type");
            continue;
        };
        by_drc.entry(assignment.drc_id).or_default().push(OwnedService {
            id: assignment.id,
            service_id: service.service_id,
            service_type: service.service_type,
            service_status: service.service_status,
        });
    }

    drcs.into_iter()
        .map(|drc| {
            let services = by_drc.remove(&drc.drc_id).unwrap_or_default();
            DrcWithServices { drc, services }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use models::status::AssignmentStatus;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;
    use crate::errors::StoreSide;
    use crate::test_support::FakeDocumentStore;

    fn drc_row(drc_id: i64, name: &str) -> debt_recovery_company::Model {
        debt_recovery_company::Model {
            drc_id,
            drc_name: name.to_string(),
            drc_abbreviation: "ABB".to_string(),
            contact_number: "0112223344".to_string(),
            drc_status: RecordStatus::Active,
            drc_end_date: None,
            created_by: "Admin".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 21, 0, 0, 0).unwrap(),
        }
    }

    fn assignment_row(id: i64, drc_id: i64, service_id: i64) -> company_owned_services::Model {
        let at = Utc.with_ymd_and_hms(2024, 11, 21, 0, 0, 0).unwrap();
        company_owned_services::Model {
            id,
            drc_id,
            service_id,
            assignment_status: AssignmentStatus::Active,
            created_by: "Admin".to_string(),
            created_at: at,
            changed_by: "Admin".to_string(),
            changed_at: at,
        }
    }

    fn service_row(service_id: i64, ty: &str) -> service_type::Model {
        service_type::Model {
            service_id,
            service_type: ty.to_string(),
            service_status: RecordStatus::Active,
        }
    }

    #[tokio::test]
    async fn register_rejects_missing_fields_without_touching_either_store() {
        let store = FakeDocumentStore::default();
        let input = NewDrc {
            drc_name: "CMS".to_string(),
            drc_abbreviation: String::new(),
            contact_number: "0112223344".to_string(),
        };

        let err = register_drc(None, &store, input).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(store.sequence_calls(), 0);
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn register_assigns_the_counter_value_and_writes_both_stores() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();
        let store = FakeDocumentStore::default();

        let input = NewDrc {
            drc_name: "CMS Collections".to_string(),
            drc_abbreviation: "CMS".to_string(),
            contact_number: "0112223344".to_string(),
        };
        let registered = register_drc(Some(&db), &store, input).await.unwrap();

        assert_eq!(registered.drc_id, 1);
        assert_eq!(registered.drc_status, RecordStatus::Active);
        assert_eq!(registered.created_by, "Admin");
        let docs = store.drcs.lock().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].drc_id, 1);
        assert!(docs[0].services_of_drc.is_empty());
    }

    #[tokio::test]
    async fn change_status_reports_the_document_store_when_only_it_misses() {
        // Relational update hits one row; the document copy is absent.
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 1 }])
            .into_connection();
        let store = FakeDocumentStore::default();

        let err = change_drc_status(Some(&db), &store, 9, RecordStatus::Inactive)
            .await
            .unwrap_err();

        match err {
            ServiceError::NotFound { store: side, message } => {
                assert_eq!(side, StoreSide::Document);
                assert!(message.contains("MongoDB"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn change_status_skips_the_document_store_for_unknown_relational_id() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
            .into_connection();
        let store = FakeDocumentStore::default();

        let err = change_drc_status(Some(&db), &store, 404, RecordStatus::Inactive)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { store: StoreSide::Relational, .. }));
        assert_eq!(store.write_calls(), 0);
    }

    #[tokio::test]
    async fn merged_listing_survives_a_failing_document_store() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![drc_row(1, "CMS Collections")]])
            .into_connection();
        let store = FakeDocumentStore::failing_reads();

        let merged = list_drcs(Some(&db), &store).await;

        assert_eq!(merged.relational.as_ref().map(Vec::len), Some(1));
        assert!(merged.document.is_none());
        assert!(!merged.is_empty());
        assert_eq!(store.read_calls(), 1);
    }

    #[test]
    fn grouping_tolerates_companies_without_services() {
        let grouped = group_services(vec![drc_row(1, "CMS Collections")], vec![]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].services.is_empty());
    }

    #[test]
    fn grouping_skips_assignments_with_missing_service_rows() {
        let rows = vec![
            (assignment_row(10, 1, 2), Some(service_row(2, "Internet"))),
            (assignment_row(11, 1, 3), None),
        ];
        let grouped = group_services(vec![drc_row(1, "CMS Collections")], rows);

        assert_eq!(grouped[0].services.len(), 1);
        assert_eq!(grouped[0].services[0].service_type, "Internet");
    }
}
