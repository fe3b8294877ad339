//! Document-store interface and its MongoDB implementation.
//!
//! The trait is the seam the entity services depend on; tests substitute an
//! in-memory fake, production wires [`mongo::MongoStore`].

use async_trait::async_trait;
use thiserror::Error;

use models::docs::{DrcDocument, RecoveryOfficerDocument, ServiceDocument};
use models::status::RecordStatus;

pub mod mongo;

pub use mongo::MongoStore;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document store error: {0}")]
    Backend(String),
    #[error("counter {0} returned no document")]
    CounterMissing(String),
}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Secondary-store operations used by the entity services.
///
/// `next_sequence` must be atomic under concurrent callers: it is the single
/// increment-and-return primitive of the backing store, never a
/// read-then-write pair.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Increment and fetch the named counter; the first call for an unseen
    /// name initializes it and returns 1.
    async fn next_sequence(&self, counter: &str) -> Result<i64>;

    async fn insert_drc(&self, doc: DrcDocument) -> Result<()>;
    /// Returns the updated document, or `None` when no copy matched.
    async fn update_drc_status(&self, drc_id: i64, status: RecordStatus) -> Result<Option<DrcDocument>>;
    async fn list_drcs(&self) -> Result<Vec<DrcDocument>>;
    async fn find_drc(&self, drc_id: i64) -> Result<Option<DrcDocument>>;

    async fn insert_service(&self, doc: ServiceDocument) -> Result<()>;
    async fn update_service_status(
        &self,
        service_id: i64,
        status: RecordStatus,
    ) -> Result<Option<ServiceDocument>>;
    async fn list_services(&self) -> Result<Vec<ServiceDocument>>;
    async fn find_service(&self, service_id: i64) -> Result<Option<ServiceDocument>>;

    async fn list_recovery_officers(&self) -> Result<Vec<RecoveryOfficerDocument>>;
    /// Returns the number of matched documents.
    async fn update_ro_status(&self, ro_id: i64, status: RecordStatus) -> Result<u64>;
}
