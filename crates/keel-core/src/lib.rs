//! # Keel Core
//!
//! Pure primitives for the Keel client: digest pipelines, boundary encodings,
//! key material, and the cryptography provider.
//!
//! This crate contains no I/O and no networking. It is pure computation over
//! cryptographic data, and every derivation matches the network's validators
//! bit for bit.
//!
//! ## Key Types
//!
//! - [`SignPublicKey`] / [`SignSecretKey`] - Ed25519 signing material
//! - [`EncryptPublicKey`] / [`EncryptSecretKey`] - X25519 encryption material
//! - [`KeyPair`] - public-only vs. full capability, visible in the type
//! - [`Signature`] - a detached Ed25519 signature
//!
//! ## Digest pipelines
//!
//! The address scheme and the chain-id scheme share an inner BLAKE2b-256 but
//! differ in the outer hash (Keccak-256 vs. SHA-256). See [`digest`].

pub mod crypto;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod keys;

pub use encoding::Encoding;
pub use error::{CryptoError, DecryptError, InvalidArgumentError, KeyError, PreconditionError};
pub use keys::{
    EncryptKeyPair, EncryptPublicKey, EncryptSecretKey, KeyPair, SignKeyPair, SignPublicKey,
    SignSecretKey, Signature,
};
