//! The two cross-store coordination patterns every entity service
//! instantiates: write both stores in a fixed order, or read both stores and
//! degrade gracefully.
//!
//! No transaction spans the stores. A partial write leaves them divergent;
//! that outcome is reported, logged, and otherwise left alone.

use std::future::Future;

use tracing::warn;

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Registration: allocate the id, write the document copy, then the
/// relational row.
///
/// A sequence failure aborts before any write. A document failure aborts
/// before the relational write. A relational failure after the document
/// write surfaces to the caller, but the document copy stays behind.
pub async fn register_with_sequence<WD, FD, WR, FR>(
    store: &dyn DocumentStore,
    counter: &str,
    write_document: WD,
    write_relational: WR,
) -> Result<i64, ServiceError>
where
    WD: FnOnce(i64) -> FD,
    FD: Future<Output = Result<(), ServiceError>>,
    WR: FnOnce(i64) -> FR,
    FR: Future<Output = Result<(), ServiceError>>,
{
    let id = store
        .next_sequence(counter)
        .await
        .map_err(|e| ServiceError::SequenceGeneration(e.to_string()))?;

    write_document(id).await?;

    if let Err(err) = write_relational(id).await {
        warn!(counter, id, error = %err, "relational write failed after document write; stores diverged");
        return Err(err);
    }

    Ok(id)
}

/// Status change: relational update first, then the document copy.
///
/// Zero relational rows stops everything with `missing_relational`. A
/// missing document after a successful relational update reports
/// `missing_document`; the relational row stays updated, and the message
/// has to say which store is out of step.
pub async fn change_status<UR, FR, UD, FD>(
    update_relational: UR,
    update_document: UD,
    missing_relational: &str,
    missing_document: &str,
) -> Result<(), ServiceError>
where
    UR: FnOnce() -> FR,
    FR: Future<Output = Result<u64, ServiceError>>,
    UD: FnOnce() -> FD,
    FD: Future<Output = Result<bool, ServiceError>>,
{
    let affected = update_relational().await?;
    if affected == 0 {
        return Err(ServiceError::not_found(missing_relational));
    }

    if !update_document().await? {
        return Err(ServiceError::not_found_in_documents(missing_document));
    }

    Ok(())
}

/// Outcome of querying both stores independently. A failed side is `None`;
/// the caller never sees the error beyond the log line.
#[derive(Debug)]
pub struct Merged<R, D> {
    pub relational: Option<R>,
    pub document: Option<D>,
}

/// Issue both reads, keeping whatever each side produced. The order of the
/// two awaits is not significant; neither side can abort the other.
pub async fn read_both<R, D, FR, FD>(label: &str, relational: FR, document: FD) -> Merged<R, D>
where
    FR: Future<Output = Result<R, ServiceError>>,
    FD: Future<Output = Result<D, ServiceError>>,
{
    let relational = match relational.await {
        Ok(v) => Some(v),
        Err(err) => {
            warn!(label, error = %err, "relational read failed, degrading to document side");
            None
        }
    };

    let document = match document.await {
        Ok(v) => Some(v),
        Err(err) => {
            warn!(label, error = %err, "document read failed, degrading to relational side");
            None
        }
    };

    Merged { relational, document }
}

impl<R, D> Merged<Vec<R>, Vec<D>> {
    /// Neither store produced a row. Listings answer 500 here, lookups 404;
    /// the route decides.
    pub fn is_empty(&self) -> bool {
        self.relational.as_ref().map_or(true, |v| v.is_empty())
            && self.document.as_ref().map_or(true, |v| v.is_empty())
    }
}

impl<R, D> Merged<Option<R>, Option<D>> {
    pub fn is_absent(&self) -> bool {
        self.relational.as_ref().map_or(true, |v| v.is_none())
            && self.document.as_ref().map_or(true, |v| v.is_none())
    }
}
