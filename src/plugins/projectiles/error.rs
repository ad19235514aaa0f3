//! Catalog errors.
//!
//! Every variant is a configuration mistake. Nothing here is retryable.

use thiserror::Error;

use super::kind::ProjectileKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The prototype document as a whole is unusable (not JSON, or not an array of records).
    #[error("malformed prototype document: {0}")]
    MalformedDocument(String),

    /// A prototype record could not be turned into a prototype. The whole load fails.
    #[error("malformed prototype record #{index}: {reason}")]
    MalformedData { index: usize, reason: String },

    /// Random selection was asked for a kind with no registered prototypes.
    #[error("no prototypes registered for projectile kind `{0}`")]
    UnknownType(ProjectileKind),
}

impl CatalogError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            index,
            reason: reason.into(),
        }
    }
}
