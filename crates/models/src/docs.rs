//! Document-store record shapes. Collection names are fixed by the existing
//! deployment, so both backends can share one database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{AssignmentStatus, RecordStatus};

pub const DRC_COLLECTION: &str = "Debt_recovery_company";
pub const SERVICES_COLLECTION: &str = "Services";
pub const RECOVERY_OFFICER_COLLECTION: &str = "Recovery_officer";
pub const COUNTERS_COLLECTION: &str = "counters";

/// One named sequence counter; `_id` is the counter name itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterDocument {
    #[serde(rename = "_id")]
    pub name: String,
    pub seq: i64,
}

/// Embedded entry of `services_of_drc` on a company document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedServiceEntry {
    pub service_type: String,
    pub drc_service_status: AssignmentStatus,
    pub status_change_dtm: DateTime<Utc>,
    pub status_changed_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrcDocument {
    pub drc_id: i64,
    pub drc_name: String,
    pub drc_abbreviation: String,
    pub contact_number: String,
    pub drc_status: RecordStatus,
    #[serde(default)]
    pub drc_end_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub services_of_drc: Vec<OwnedServiceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDocument {
    pub service_id: i64,
    pub service_type: String,
    pub service_status: RecordStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryOfficerDocument {
    pub ro_id: i64,
    pub ro_name: String,
    pub contact_number: String,
    pub ro_status: RecordStatus,
    pub drc_name: String,
    #[serde(default)]
    pub rtoms_for_ro: Vec<String>,
    pub login_type: String,
    pub login_user_id: String,
    #[serde(default)]
    pub remark: Option<String>,
}
