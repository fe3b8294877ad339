//! RTOM (regional operating area) reads. Relational only: the regions have
//! no document-store operations.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::rtom;

use crate::errors::ServiceError;
use crate::require_relational;

pub async fn list_rtoms(db: Option<&DatabaseConnection>) -> Result<Vec<rtom::Model>, ServiceError> {
    let db = require_relational(db)?;
    Ok(rtom::Entity::find().all(db).await?)
}

/// Answered as a row set, like the listing; the route keeps the array shape
/// even for a single id.
pub async fn find_rtoms_by_id(
    db: Option<&DatabaseConnection>,
    rtom_id: i64,
) -> Result<Vec<rtom::Model>, ServiceError> {
    let db = require_relational(db)?;
    Ok(rtom::Entity::find()
        .filter(rtom::Column::RtomId.eq(rtom_id))
        .all(db)
        .await?)
}
