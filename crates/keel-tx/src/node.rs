//! The public node interface.
//!
//! The core never talks to the network itself; broadcasting goes through this
//! trait and returns whatever transaction the node hands back, typically a
//! copy with `id` and `height` populated once accepted. Retry and backoff
//! policy belong to implementations, not to this crate.

use async_trait::async_trait;
use thiserror::Error;

use crate::any::AnyTransaction;

/// A node that accepts signed transactions for broadcast.
#[async_trait]
pub trait PublicNode {
    /// Submit a transaction to the network.
    async fn broadcast(&self, transaction: AnyTransaction) -> Result<AnyTransaction, NodeError>;
}

/// Failure at the node boundary. Opaque to this crate beyond the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("node request failed: {0}")]
    Request(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),
}
