//! Shared error types for the Keel client.

use thiserror::Error;

/// Missing or malformed key material required for an operation.
///
/// Always surfaced to the caller, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid {kind} key length: expected {expected} bytes, got {got}")]
    Length {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("malformed {0} key")]
    Malformed(&'static str),

    #[error("unable to sign message; no secret sign key")]
    NoSecretSignKey,

    #[error("unable to verify message; no public sign key")]
    NoPublicSignKey,

    #[error("unable to encrypt message; no secret encryption key")]
    NoSecretEncryptKey,

    #[error("unable to encrypt message; no public encryption key for recipient")]
    NoRecipientEncryptKey,

    #[error("unable to decrypt message; no public encryption key for sender")]
    NoSenderEncryptKey,
}

/// Authenticated decryption failed: wrong key, tampered ciphertext, or a
/// mangled nonce. Never retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to decrypt message")]
pub struct DecryptError;

/// An operation was invoked before the required state was established.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PreconditionError {
    message: &'static str,
}

impl PreconditionError {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Malformed or incomplete external input.
///
/// The message always names the specific missing or mismatched fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    #[error("invalid data, missing keys: {keys}")]
    MissingKeys { keys: String },

    #[error("invalid type {got}, should be {expected}")]
    WrongType { got: i64, expected: u8 },

    #[error("invalid {subject}; is it {encoding} encoded?")]
    BadEncoding {
        subject: &'static str,
        encoding: &'static str,
    },

    #[error("invalid {subject}: {reason}")]
    Malformed {
        subject: &'static str,
        reason: String,
    },
}

/// Composite error for operations that can fail on either key material or
/// authenticated decryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),
}
