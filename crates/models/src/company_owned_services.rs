//! DRC↔service assignment rows. Never deleted; the pair history accumulates
//! Inactive rows while business logic keeps at most one Active per pair.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::status::AssignmentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_owned_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub drc_id: i64,
    pub service_id: i64,
    pub assignment_status: AssignmentStatus,
    pub created_by: String,
    pub created_at: DateTimeUtc,
    pub changed_by: String,
    pub changed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::debt_recovery_company::Entity",
        from = "Column::DrcId",
        to = "super::debt_recovery_company::Column::DrcId"
    )]
    DebtRecoveryCompany,
    #[sea_orm(
        belongs_to = "super::service_type::Entity",
        from = "Column::ServiceId",
        to = "super::service_type::Column::ServiceId"
    )]
    ServiceType,
}

impl Related<super::debt_recovery_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DebtRecoveryCompany.def()
    }
}

impl Related<super::service_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
