use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::status::RecordStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rtom")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rtom_id: i64,
    pub rtom_abbreviation: String,
    pub area_name: String,
    pub rtom_status: RecordStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recovery_officer_rtoms::Entity")]
    RecoveryOfficerRtoms,
}

impl Related<super::recovery_officer_rtoms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecoveryOfficerRtoms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
