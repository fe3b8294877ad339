//! Lifecycle statuses shared by both stores. Entities are never deleted;
//! these values model removal instead.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RecordStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Pending")]
    Pending,
}

/// Assignments only toggle between the two; there is no Pending assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AssignmentStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordStatus::Active).unwrap();
        assert_eq!(json, "\"Active\"");
        let back: RecordStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(back, RecordStatus::Pending);
    }
}
