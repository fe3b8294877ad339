use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recovery_officer_rtoms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub ro_id: i64,
    pub rtom_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recovery_officer::Entity",
        from = "Column::RoId",
        to = "super::recovery_officer::Column::RoId"
    )]
    RecoveryOfficer,
    #[sea_orm(
        belongs_to = "super::rtom::Entity",
        from = "Column::RtomId",
        to = "super::rtom::Column::RtomId"
    )]
    Rtom,
}

impl Related<super::recovery_officer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecoveryOfficer.def()
    }
}

impl Related<super::rtom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rtom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
