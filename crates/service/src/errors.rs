use thiserror::Error;

/// Which datastore a not-found refers to. Status changes update the
/// relational store first, so a document-side miss means the stores have
/// already diverged and the message must say which copy is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSide {
    Relational,
    Document,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found ({store:?}): {message}")]
    NotFound { store: StoreSide, message: String },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("sequence generation failed: {0}")]
    SequenceGeneration(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { store: StoreSide::Relational, message: message.into() }
    }

    pub fn not_found_in_documents(message: impl Into<String>) -> Self {
        Self::NotFound { store: StoreSide::Document, message: message.into() }
    }

    /// The human-readable part, without the variant prefix; handlers put it
    /// in the envelope's `errors.description`.
    pub fn description(&self) -> &str {
        match self {
            Self::Validation(s)
            | Self::Conflict(s)
            | Self::Dependency(s)
            | Self::SequenceGeneration(s) => s,
            Self::NotFound { message, .. } => message,
        }
    }
}

impl From<crate::storage::StorageError> for ServiceError {
    fn from(err: crate::storage::StorageError) -> Self {
        Self::Dependency(err.to_string())
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Dependency(err.to_string())
    }
}
