//! Error types for account construction.

use keel_core::KeyError;
use thiserror::Error;

/// Derived or declared address and keys are mutually inconsistent.
///
/// Raised at construction time, so an inconsistent account is never usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAccountError {
    #[error("public {kind} key doesn't match secret {kind} key")]
    KeyMismatch { kind: &'static str },

    #[error("sign key doesn't match encrypt key")]
    SignEncryptMismatch,

    #[error("address doesn't match keypair; possible network mismatch")]
    AddressMismatch,

    #[error("no key material or address supplied")]
    Empty,

    #[error(transparent)]
    Key(#[from] KeyError),
}
