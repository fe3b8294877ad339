//! DRC↔service assignment toggling. Relational-only: the document store
//! carries no assignment collection.
//!
//! Per (drc_id, service_id) pair: no row → insert Active; Inactive row →
//! flip it back in place; Active row → conflict. Removal flips Active to
//! Inactive. Rows are never deleted.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use models::company_owned_services;
use models::status::AssignmentStatus;

use crate::errors::ServiceError;
use crate::require_relational;

#[derive(Debug, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// A new row was inserted with this id.
    Created { id: i64 },
    /// An existing Inactive row was flipped back to Active.
    Reactivated,
}

pub async fn assign_service_to_drc(
    db: Option<&DatabaseConnection>,
    drc_id: i64,
    service_id: i64,
) -> Result<AssignmentOutcome, ServiceError> {
    let db = require_relational(db)?;

    let existing = company_owned_services::Entity::find()
        .filter(company_owned_services::Column::DrcId.eq(drc_id))
        .filter(company_owned_services::Column::ServiceId.eq(service_id))
        .one(db)
        .await?;

    match existing {
        Some(row) if row.assignment_status == AssignmentStatus::Active => Err(
            ServiceError::Conflict("An active service already exists for this company.".into()),
        ),
        Some(row) => {
            company_owned_services::Entity::update_many()
                .col_expr(
                    company_owned_services::Column::AssignmentStatus,
                    Expr::value(AssignmentStatus::Active),
                )
                .col_expr(company_owned_services::Column::ChangedBy, Expr::value("Admin"))
                .col_expr(company_owned_services::Column::ChangedAt, Expr::value(Utc::now()))
                .filter(company_owned_services::Column::Id.eq(row.id))
                .exec(db)
                .await?;
            Ok(AssignmentOutcome::Reactivated)
        }
        None => {
            let now = Utc::now();
            let am = company_owned_services::ActiveModel {
                id: NotSet,
                drc_id: Set(drc_id),
                service_id: Set(service_id),
                assignment_status: Set(AssignmentStatus::Active),
                created_by: Set("Admin".to_string()),
                created_at: Set(now),
                changed_by: Set("Admin".to_string()),
                changed_at: Set(now),
            };
            let res = company_owned_services::Entity::insert(am).exec(db).await?;
            Ok(AssignmentOutcome::Created { id: res.last_insert_id })
        }
    }
}

pub async fn remove_service_from_drc(
    db: Option<&DatabaseConnection>,
    drc_id: i64,
    service_id: i64,
) -> Result<(), ServiceError> {
    let db = require_relational(db)?;

    let active = company_owned_services::Entity::find()
        .filter(company_owned_services::Column::DrcId.eq(drc_id))
        .filter(company_owned_services::Column::ServiceId.eq(service_id))
        .filter(company_owned_services::Column::AssignmentStatus.eq(AssignmentStatus::Active))
        .one(db)
        .await?;
    if active.is_none() {
        return Err(ServiceError::not_found(
            "No active service found for the specified DRC and Service ID.",
        ));
    }

    let res = company_owned_services::Entity::update_many()
        .col_expr(
            company_owned_services::Column::AssignmentStatus,
            Expr::value(AssignmentStatus::Inactive),
        )
        .col_expr(company_owned_services::Column::ChangedBy, Expr::value("Admin"))
        .col_expr(company_owned_services::Column::ChangedAt, Expr::value(Utc::now()))
        .filter(company_owned_services::Column::DrcId.eq(drc_id))
        .filter(company_owned_services::Column::ServiceId.eq(service_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("No matching service found to update."));
    }

    Ok(())
}
