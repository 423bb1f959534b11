//! Event chains.
//!
//! A chain is an ordered, hash-linked sequence of signed events anchored to
//! one account identity. The chain id embeds a nonce and a digest of the
//! account's public signing key; the first link hash is the SHA-256 of the
//! raw id, and every later link is the hash of the preceding event.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use keel_core::digest::{id_hash, sha256};
use keel_core::{InvalidArgumentError, KeyError, PreconditionError, SignPublicKey};
use keel_identity::Account;

use crate::event::{Event, EventHash};

/// Type byte of a derived chain id.
pub const CHAIN_ID_TYPE: u8 = 0x40;

/// Byte length of the nonce embedded in a derived chain id.
pub const CHAIN_NONCE_LENGTH: usize = 20;

/// A chain identifier.
///
/// Derived ids follow the fixed layout below; explicitly supplied ids are
/// treated as opaque bytes, so chains migrated from elsewhere keep working.
///
/// `[type 0x40][nonce 20][id_hash(sign key) 20][checksum 4]`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChainId(Vec<u8>);

impl ChainId {
    /// Wrap raw id bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Derive a chain id for a public signing key.
    ///
    /// With a nonce seed the id is fully deterministic: the nonce is the
    /// first 20 bytes of `sha256(seed)`. Without one, 20 random bytes are
    /// drawn from the process CSPRNG.
    pub fn derive(sign_key: &SignPublicKey, nonce_seed: Option<&[u8]>) -> Self {
        let nonce = match nonce_seed {
            Some(seed) => {
                let digest = sha256(seed);
                let mut nonce = [0u8; CHAIN_NONCE_LENGTH];
                nonce.copy_from_slice(&digest[..CHAIN_NONCE_LENGTH]);
                nonce
            }
            None => {
                let mut nonce = [0u8; CHAIN_NONCE_LENGTH];
                rand::thread_rng().fill_bytes(&mut nonce);
                nonce
            }
        };

        Self::derive_with_nonce(sign_key, nonce)
    }

    /// Derive a chain id from an explicit 20-byte nonce.
    pub fn derive_with_nonce(sign_key: &SignPublicKey, nonce: [u8; CHAIN_NONCE_LENGTH]) -> Self {
        let namespace = id_hash(sign_key.as_bytes());

        let mut bytes = Vec::with_capacity(45);
        bytes.push(CHAIN_ID_TYPE);
        bytes.extend_from_slice(&nonce);
        bytes.extend_from_slice(&namespace[..20]);

        let checksum = id_hash(&bytes);
        bytes.extend_from_slice(&checksum[..4]);

        Self(bytes)
    }

    /// The initial link hash of a chain with this id: `sha256(raw id)`.
    pub fn initial_hash(&self) -> EventHash {
        EventHash(sha256(&self.0))
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl FromStr for ChainId {
    type Err = InvalidArgumentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| InvalidArgumentError::BadEncoding {
                subject: "chain id",
                encoding: "base58",
            })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self.to_base58())
    }
}

/// An ordered, hash-linked sequence of events owned by one account.
///
/// Appending from two threads is not safe: reading the latest hash and
/// pushing the event is not atomic. A chain is owned by a single caller.
#[derive(Debug, Clone)]
pub struct EventChain<E> {
    id: Option<ChainId>,
    events: Vec<E>,
    latest_hash: Option<EventHash>,
}

impl<E: Event> EventChain<E> {
    /// Create an uninitialized chain; call [`init_for`](Self::init_for) to
    /// give it an identity.
    pub fn new() -> Self {
        Self {
            id: None,
            events: Vec::new(),
            latest_hash: None,
        }
    }

    /// Create a chain with an explicit id, and optionally an explicit latest
    /// hash. Without one, the latest hash starts as the id's initial hash.
    pub fn with_id(id: ChainId, latest_hash: Option<EventHash>) -> Self {
        let latest_hash = latest_hash.unwrap_or_else(|| id.initial_hash());
        Self {
            id: Some(id),
            events: Vec::new(),
            latest_hash: Some(latest_hash),
        }
    }

    /// The chain id, if initialized.
    pub fn id(&self) -> Option<&ChainId> {
        self.id.as_ref()
    }

    /// The events appended so far, in order.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Initialize this chain for an account, deriving a fresh id bound to the
    /// account's public signing key.
    ///
    /// A nonce seed makes the id deterministic, which is what test fixtures
    /// want; production chains use a random nonce.
    pub fn init_for(
        &mut self,
        account: &Account,
        nonce_seed: Option<&[u8]>,
    ) -> Result<(), PreconditionError> {
        if self.id.is_some() {
            return Err(PreconditionError::new("chain id already set"));
        }

        let sign_key = account.public_sign_key().ok_or(PreconditionError::new(
            "unable to create event chain; public sign key unknown",
        ))?;

        let id = ChainId::derive(sign_key, nonce_seed);
        self.latest_hash = Some(id.initial_hash());
        self.id = Some(id);
        Ok(())
    }

    /// The hash a new event should use as its `previous` link.
    ///
    /// Only an empty chain answers from the cached initial/explicit hash;
    /// once events exist the answer always comes from the last event.
    pub fn latest_hash(&self) -> Option<EventHash> {
        match self.events.last() {
            None => self.latest_hash,
            Some(event) => Some(event.hash()),
        }
    }

    /// Append an event: stamp its `previous` link with the current latest
    /// hash, push it, and invalidate the cache.
    ///
    /// Returns the appended event so it can be signed in the same expression.
    pub fn add(&mut self, mut event: E) -> &mut E {
        if let Some(previous) = self.latest_hash() {
            event.set_previous(previous);
        }

        self.events.push(event);
        self.latest_hash = None;

        let last = self.events.len() - 1;
        &mut self.events[last]
    }
}

impl<E: Event> Default for EventChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Account-side event operations.
pub trait SignsEvents {
    /// Sign an event: record the signer key, sign the event's message, record
    /// the signature, and return the resulting content hash. The key goes in
    /// first since the signed bytes may include it, and the hash is read last
    /// since it may fold in the signature.
    fn sign_event<E: Event>(&self, event: &mut E) -> Result<EventHash, KeyError>;

    /// Create a new event chain for this account, optionally with a
    /// deterministic nonce seed.
    fn create_event_chain<E: Event>(
        &self,
        nonce_seed: Option<&[u8]>,
    ) -> Result<EventChain<E>, PreconditionError>;
}

impl SignsEvents for Account {
    fn sign_event<E: Event>(&self, event: &mut E) -> Result<EventHash, KeyError> {
        let sign_key = *self.public_sign_key().ok_or(KeyError::NoPublicSignKey)?;
        event.set_sign_key(sign_key);

        let signature = self.sign_message(&event.message())?;
        event.set_signature(signature);

        Ok(event.hash())
    }

    fn create_event_chain<E: Event>(
        &self,
        nonce_seed: Option<&[u8]>,
    ) -> Result<EventChain<E>, PreconditionError> {
        let mut chain = EventChain::new();
        chain.init_for(self, nonce_seed)?;
        Ok(chain)
    }
}
