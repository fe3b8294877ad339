pub mod envelope;
pub mod openapi;
pub mod routes;
pub mod startup;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::storage::DocumentStore;

pub use startup::run;

/// Shared handler state: the pooled relational handle (absent when startup
/// could not connect it) and the long-lived document store.
#[derive(Clone)]
pub struct AppState {
    pub relational: Option<DatabaseConnection>,
    pub documents: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn relational(&self) -> Option<&DatabaseConnection> {
        self.relational.as_ref()
    }
}
