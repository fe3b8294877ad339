//! Named counters backing id allocation, plus the public endpoint's
//! collection-name mapping.

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

pub const DRC_ID: &str = "drc_id";
pub const SERVICE_ID: &str = "service_id";

/// Counters reachable through `/sequence/Document_Sequence`, keyed by the
/// collection they serve. Anything else is unknown, not an error.
fn counter_for(collection_name: &str) -> Option<&'static str> {
    match collection_name {
        "Services" => Some(SERVICE_ID),
        "Debt_recovery_company" => Some(DRC_ID),
        _ => None,
    }
}

/// `Ok(None)` means the collection name maps to no counter; the route turns
/// that into its 404 with the `-1` sentinel.
pub async fn next_for_collection(
    store: &dyn DocumentStore,
    collection_name: &str,
) -> Result<Option<i64>, ServiceError> {
    let Some(counter) = counter_for(collection_name) else {
        return Ok(None);
    };
    let value = store
        .next_sequence(counter)
        .await
        .map_err(|e| ServiceError::SequenceGeneration(e.to_string()))?;
    Ok(Some(value))
}
