use thiserror::Error;

use tillfront_core::{DomainError, ProductId};
use tillfront_events::StoreOperation;

/// Failure talking to the remote product service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Tagged failure surfaced by every [`ProductStore`](crate::ProductStore) operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// Local precondition failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] DomainError),
    /// Reading the collection failed.
    #[error("failed to load products: {0}")]
    Fetch(String),
    /// The service has no product with this id.
    #[error("product {0} not found")]
    NotFound(ProductId),
    /// A single-product call failed at transport or status-check level.
    #[error("failed to {op}: {reason}")]
    Sync { op: StoreOperation, reason: String },
}

impl StoreError {
    pub(crate) fn sync(op: StoreOperation, reason: impl Into<String>) -> Self {
        StoreError::Sync {
            op,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
