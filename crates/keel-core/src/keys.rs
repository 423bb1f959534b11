//! Key material newtypes.
//!
//! All identifiers are fixed-width byte arrays wrapped in newtypes so the two
//! curves (Ed25519 for signing, X25519 for encryption) cannot be mixed up at
//! compile time. Whether a keypair can sign or only verify is visible in the
//! type: [`KeyPair::PublicOnly`] vs [`KeyPair::Full`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::KeyError;

/// A 32-byte Ed25519 public signing key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignPublicKey(pub [u8; 32]);

impl SignPublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| KeyError::Malformed("public sign"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for SignPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignPublicKey({})", &self.to_base58())
    }
}

impl AsRef<[u8]> for SignPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for SignPublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SignPublicKey {
    type Error = KeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into().map_err(|_| KeyError::Length {
            kind: "public sign",
            expected: 32,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A 64-byte Ed25519 secret signing key in the libsodium layout: the 32-byte
/// seed followed by the 32-byte public key. Externally supplied secret keys
/// from the network round-trip unchanged in this form.
#[derive(Clone, PartialEq, Eq)]
pub struct SignSecretKey(pub [u8; 64]);

impl SignSecretKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// The 32-byte Ed25519 seed half.
    pub fn seed(&self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&self.0[..32]);
        seed
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| KeyError::Malformed("secret sign"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for SignSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material.
        write!(f, "SignSecretKey(..)")
    }
}

impl From<[u8; 64]> for SignSecretKey {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SignSecretKey {
    type Error = KeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 64] = slice.try_into().map_err(|_| KeyError::Length {
            kind: "secret sign",
            expected: 64,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A 32-byte X25519 public encryption key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptPublicKey(pub [u8; 32]);

impl EncryptPublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| KeyError::Malformed("public encryption"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for EncryptPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptPublicKey({})", &self.to_base58())
    }
}

impl AsRef<[u8]> for EncryptPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EncryptPublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for EncryptPublicKey {
    type Error = KeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into().map_err(|_| KeyError::Length {
            kind: "public encryption",
            expected: 32,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A 32-byte X25519 secret encryption key.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptSecretKey(pub [u8; 32]);

impl EncryptSecretKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| KeyError::Malformed("secret encryption"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for EncryptSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptSecretKey(..)")
    }
}

impl From<[u8; 32]> for EncryptSecretKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for EncryptSecretKey {
    type Error = KeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into().map_err(|_| KeyError::Length {
            kind: "secret encryption",
            expected: 32,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from a base58 string.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| KeyError::Malformed("signature"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_base58()[..16])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = KeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 64] = slice.try_into().map_err(|_| KeyError::Length {
            kind: "signature",
            expected: 64,
            got: slice.len(),
        })?;
        Ok(Self(arr))
    }
}

/// A keypair for one curve.
///
/// The secret half is optional by construction: an account built from public
/// keys alone can verify and receive, but not sign or decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPair<P, S> {
    /// Verify/encrypt-receive only.
    PublicOnly { public: P },

    /// Full capability.
    Full { public: P, secret: S },
}

impl<P, S> KeyPair<P, S> {
    /// Create a public-only keypair.
    pub fn public_only(public: P) -> Self {
        Self::PublicOnly { public }
    }

    /// Create a full keypair.
    pub fn full(public: P, secret: S) -> Self {
        Self::Full { public, secret }
    }

    /// The public key, always present.
    pub fn public(&self) -> &P {
        match self {
            Self::PublicOnly { public } | Self::Full { public, .. } => public,
        }
    }

    /// The secret key, if this pair carries one.
    pub fn secret(&self) -> Option<&S> {
        match self {
            Self::PublicOnly { .. } => None,
            Self::Full { secret, .. } => Some(secret),
        }
    }

    /// Whether this pair can produce signatures / decrypt.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }
}

/// An Ed25519 signing keypair.
pub type SignKeyPair = KeyPair<SignPublicKey, SignSecretKey>;

/// An X25519 encryption keypair.
pub type EncryptKeyPair = KeyPair<EncryptPublicKey, EncryptSecretKey>;
