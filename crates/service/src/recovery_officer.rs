//! Recovery Officer reads and the suspend flow.
//!
//! Suspension is deliberately weaker than the shared status-change pattern:
//! the relational update answers the caller, and the document copy catches
//! up afterwards on a best-effort basis.

use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use tracing::{error, warn};

use models::debt_recovery_company;
use models::recovery_officer;
use models::recovery_officer_rtoms;
use models::rtom;
use models::status::RecordStatus;

use crate::errors::ServiceError;
use crate::require_relational;
use crate::storage::DocumentStore;

#[derive(Debug, Serialize)]
pub struct RtomRef {
    pub rtom_id: i64,
    pub area_name: String,
}

/// One officer with the company name and assigned regions denormalized in.
#[derive(Debug, Serialize)]
pub struct RoDetails {
    pub ro_id: i64,
    pub ro_name: String,
    pub contact_number: String,
    pub drc_id: i64,
    pub drc_name: Option<String>,
    pub ro_status: RecordStatus,
    pub login_type: String,
    pub login_user_id: String,
    pub remark: Option<String>,
    pub rtoms_for_ro: Vec<RtomRef>,
}

pub async fn list_recovery_officers(
    db: Option<&DatabaseConnection>,
    store: &dyn DocumentStore,
) -> Result<Vec<RoDetails>, ServiceError> {
    let db = require_relational(db)?;
    let officers = recovery_officer::Entity::find()
        .find_also_related(debt_recovery_company::Entity)
        .all(db)
        .await?;
    let rtom_rows = recovery_officer_rtoms::Entity::find()
        .find_also_related(rtom::Entity)
        .all(db)
        .await?;

    // The secondary copy is queried independently; its failure never aborts
    // the relational listing.
    if let Err(err) = store.list_recovery_officers().await {
        warn!(error = %err, "document-store officer listing failed");
    }

    Ok(group_rtoms(officers, rtom_rows))
}

pub async fn find_recovery_officer(
    db: Option<&DatabaseConnection>,
    ro_id: i64,
) -> Result<Option<recovery_officer::Model>, ServiceError> {
    let db = require_relational(db)?;
    Ok(recovery_officer::Entity::find_by_id(ro_id).one(db).await?)
}

/// Update the relational row and return; the document copy is refreshed in a
/// detached task whose failure (or missing document) is only logged.
pub async fn suspend_recovery_officer(
    db: Option<&DatabaseConnection>,
    store: Arc<dyn DocumentStore>,
    ro_id: i64,
    status: RecordStatus,
) -> Result<(), ServiceError> {
    let db = require_relational(db)?;
    recovery_officer::Entity::update_many()
        .col_expr(recovery_officer::Column::RoStatus, Expr::value(status))
        .filter(recovery_officer::Column::RoId.eq(ro_id))
        .exec(db)
        .await?;

    tokio::spawn(async move {
        match store.update_ro_status(ro_id, status).await {
            Ok(0) => warn!(ro_id, "recovery officer missing from document store"),
            Ok(_) => {}
            Err(err) => error!(ro_id, error = %err, "document-store status update failed"),
        }
    });

    Ok(())
}

/// One parent, many children; a link row whose region is gone is skipped,
/// an officer without regions gets an empty list.
fn group_rtoms(
    officers: Vec<(recovery_officer::Model, Option<debt_recovery_company::Model>)>,
    rows: Vec<(recovery_officer_rtoms::Model, Option<rtom::Model>)>,
) -> Vec<RoDetails> {
    let mut by_ro: HashMap<i64, Vec<RtomRef>> = HashMap::new();
    for (link, region) in rows {
        let Some(region) = region else {
            warn!(link_id = link.id, "rtom link references a missing region");
            continue;
        };
        by_ro.entry(link.ro_id).or_default().push(RtomRef {
            rtom_id: region.rtom_id,
            area_name: region.area_name,
        });
    }

    officers
        .into_iter()
        .map(|(officer, company)| RoDetails {
            rtoms_for_ro: by_ro.remove(&officer.ro_id).unwrap_or_default(),
            drc_name: company.map(|c| c.drc_name),
            ro_id: officer.ro_id,
            ro_name: officer.ro_name,
            contact_number: officer.contact_number,
            drc_id: officer.drc_id,
            ro_status: officer.ro_status,
            login_type: officer.login_type,
            login_user_id: officer.login_user_id,
            remark: officer.remark,
        })
        .collect()
}
