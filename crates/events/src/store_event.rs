//! Notifications published by the product store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tillfront_core::{OperationId, ProductId};

use crate::event::Event;

/// Which store operation a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "product_id", rename_all = "snake_case")]
pub enum StoreOperation {
    Load,
    Create,
    FetchOne(ProductId),
    Update(ProductId),
    Delete(ProductId),
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::Load => "load",
            StoreOperation::Create => "create",
            StoreOperation::FetchOne(_) => "fetch_one",
            StoreOperation::Update(_) => "update",
            StoreOperation::Delete(_) => "delete",
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            StoreOperation::Load | StoreOperation::Create => None,
            StoreOperation::FetchOne(id) | StoreOperation::Update(id) | StoreOperation::Delete(id) => {
                Some(*id)
            }
        }
    }

    /// Whether this operation mutates the remote collection.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            StoreOperation::Create | StoreOperation::Update(_) | StoreOperation::Delete(_)
        )
    }
}

impl core::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreOperation::Load => f.write_str("load products"),
            StoreOperation::Create => f.write_str("create product"),
            StoreOperation::FetchOne(id) => write!(f, "fetch product {id}"),
            StoreOperation::Update(id) => write!(f, "update product {id}"),
            StoreOperation::Delete(id) => write!(f, "delete product {id}"),
        }
    }
}

/// Outcome notification for one store operation.
///
/// Every operation that reaches the network emits `Started` followed by
/// exactly one of `Succeeded` / `Failed` carrying the same `op_id`. A
/// validation failure emits only `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoreEvent {
    Started {
        op_id: OperationId,
        operation: StoreOperation,
        occurred_at: DateTime<Utc>,
    },
    Succeeded {
        op_id: OperationId,
        operation: StoreOperation,
        message: String,
        occurred_at: DateTime<Utc>,
    },
    Failed {
        op_id: OperationId,
        operation: StoreOperation,
        reason: String,
        occurred_at: DateTime<Utc>,
    },
}

impl StoreEvent {
    pub fn started(op_id: OperationId, operation: StoreOperation) -> Self {
        StoreEvent::Started {
            op_id,
            operation,
            occurred_at: Utc::now(),
        }
    }

    pub fn succeeded(op_id: OperationId, operation: StoreOperation, message: impl Into<String>) -> Self {
        StoreEvent::Succeeded {
            op_id,
            operation,
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }

    pub fn failed(op_id: OperationId, operation: StoreOperation, reason: impl Into<String>) -> Self {
        StoreEvent::Failed {
            op_id,
            operation,
            reason: reason.into(),
            occurred_at: Utc::now(),
        }
    }

    pub fn op_id(&self) -> OperationId {
        match self {
            StoreEvent::Started { op_id, .. }
            | StoreEvent::Succeeded { op_id, .. }
            | StoreEvent::Failed { op_id, .. } => *op_id,
        }
    }

    pub fn operation(&self) -> StoreOperation {
        match self {
            StoreEvent::Started { operation, .. }
            | StoreEvent::Succeeded { operation, .. }
            | StoreEvent::Failed { operation, .. } => *operation,
        }
    }

    /// `Succeeded` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StoreEvent::Started { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StoreEvent::Failed { .. })
    }
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::Started { .. } => "store.operation.started",
            StoreEvent::Failed { .. } => "store.operation.failed",
            StoreEvent::Succeeded { operation, .. } => match operation {
                StoreOperation::Load => "store.products.loaded",
                StoreOperation::Create => "store.product.created",
                StoreOperation::FetchOne(_) => "store.product.fetched",
                StoreOperation::Update(_) => "store.product.updated",
                StoreOperation::Delete(_) => "store.product.deleted",
            },
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::Started { occurred_at, .. }
            | StoreEvent::Succeeded { occurred_at, .. }
            | StoreEvent::Failed { occurred_at, .. } => *occurred_at,
        }
    }
}
