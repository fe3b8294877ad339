use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::status::RecordStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i64,
    pub service_type: String,
    pub service_status: RecordStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_owned_services::Entity")]
    CompanyOwnedServices,
}

impl Related<super::company_owned_services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyOwnedServices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
