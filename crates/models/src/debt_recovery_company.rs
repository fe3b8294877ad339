use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::status::RecordStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debt_recovery_company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub drc_id: i64,
    pub drc_name: String,
    pub drc_abbreviation: String,
    pub contact_number: String,
    pub drc_status: RecordStatus,
    pub drc_end_date: Option<DateTimeUtc>,
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_owned_services::Entity")]
    CompanyOwnedServices,
    #[sea_orm(has_many = "super::recovery_officer::Entity")]
    RecoveryOfficer,
}

impl Related<super::company_owned_services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyOwnedServices.def()
    }
}

impl Related<super::recovery_officer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecoveryOfficer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
