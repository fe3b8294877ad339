//! Service layer providing business-oriented operations on top of models.
//! - Each entity module instantiates the shared dual-store patterns.
//! - Store handles are passed in, never ambient, so tests can substitute fakes.
//! - Provides clear error types and documented interfaces.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod dual;
pub mod sequence;

pub mod assignment;
pub mod drc;
pub mod recovery_officer;
pub mod rtom;
pub mod service_type;

use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// The relational handle is optional for the whole process lifetime: startup
/// keeps serving when the connect fails. Resolve it at the point of use so a
/// document-store read can still succeed without it.
pub fn require_relational(db: Option<&DatabaseConnection>) -> Result<&DatabaseConnection, ServiceError> {
    db.ok_or_else(|| ServiceError::Dependency("relational store unavailable".into()))
}
