//! Error types for the transaction framework.

use keel_core::{InvalidArgumentError, KeyError, PreconditionError};
use thiserror::Error;

use crate::node::NodeError;

/// Errors that can occur while building, encoding, signing, or broadcasting
/// a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    /// A required field was not set before the operation.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Malformed or incomplete external input.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// Missing or malformed key material.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// No packer is registered for this (type, version) pair.
    #[error("unsupported {name} transaction version {version}")]
    UnsupportedVersion { name: &'static str, version: u8 },

    /// No transaction type is registered for this tag.
    #[error("unsupported transaction type {0}")]
    UnsupportedType(i64),

    /// The node broadcast failed.
    #[error(transparent)]
    Node(#[from] NodeError),

    /// The node answered a broadcast with a different transaction type.
    #[error("node returned a different transaction type")]
    UnexpectedResponse,
}
