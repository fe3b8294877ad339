use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::status::RecordStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recovery_officer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ro_id: i64,
    pub ro_name: String,
    pub contact_number: String,
    pub drc_id: i64,
    pub ro_status: RecordStatus,
    pub login_type: String,
    pub login_user_id: String,
    pub remark: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::debt_recovery_company::Entity",
        from = "Column::DrcId",
        to = "super::debt_recovery_company::Column::DrcId"
    )]
    DebtRecoveryCompany,
    #[sea_orm(has_many = "super::recovery_officer_rtoms::Entity")]
    RecoveryOfficerRtoms,
}

impl Related<super::debt_recovery_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DebtRecoveryCompany.def()
    }
}

impl Related<super::recovery_officer_rtoms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecoveryOfficerRtoms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
