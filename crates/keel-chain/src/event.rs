//! The event contract consumed by a chain.
//!
//! Events themselves live outside this crate; the chain only relies on the
//! small surface below. The chain sets the `previous` link before an event is
//! signed, and reads the content hash afterwards — it never computes event
//! hashes itself.

use std::fmt;

use keel_core::{InvalidArgumentError, SignPublicKey, Signature};

/// A 32-byte event content hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventHash(pub [u8; 32]);

impl EventHash {
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
    pub fn from_base58(text: &str) -> Result<Self, InvalidArgumentError> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| InvalidArgumentError::BadEncoding {
                subject: "event hash",
                encoding: "base58",
            })?;

        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| InvalidArgumentError::Malformed {
                subject: "event hash",
                reason: format!("expected 32 bytes, got {}", bytes.len()),
            })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for EventHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHash({})", self.to_base58())
    }
}

impl fmt::Display for EventHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl AsRef<[u8]> for EventHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EventHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// The contract an event type has to satisfy to live on a chain.
pub trait Event {
    /// The hash of the preceding event, if the chain has stamped one.
    fn previous(&self) -> Option<&EventHash>;

    /// Stamp the link to the preceding event. Called by the chain on append,
    /// before the event is signed.
    fn set_previous(&mut self, hash: EventHash);

    /// Record the signer's public key. Set before the message is built, since
    /// the signed bytes may include it.
    fn set_sign_key(&mut self, key: SignPublicKey);

    /// Record the signature over [`message`](Event::message).
    fn set_signature(&mut self, signature: Signature);

    /// The exact bytes to sign.
    fn message(&self) -> Vec<u8>;

    /// The content hash. Stable once the event is signed; the hash may fold
    /// in the signature, so it must not be read before signing completes.
    fn hash(&self) -> EventHash;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_hash_base58_roundtrip() {
        let hash = EventHash::from_bytes([0xab; 32]);
        assert_eq!(EventHash::from_base58(&hash.to_base58()).unwrap(), hash);
    }

    #[test]
    fn test_event_hash_wrong_length_rejected() {
        // 20 bytes of base58 is not a hash
        let text = bs58::encode([0u8; 20]).into_string();
        assert!(EventHash::from_base58(&text).is_err());
    }
}
