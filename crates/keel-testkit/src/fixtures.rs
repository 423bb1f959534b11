//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: deterministic accounts and a
//! concrete event type for chain scenarios.

use bytes::Bytes;

use keel_chain::{Event, EventHash};
use keel_core::digest::sha256;
use keel_core::{SignPublicKey, Signature};
use keel_identity::{Account, AccountFactory, Network};

/// Passphrase pinned by the reference client's test suite.
pub const REFERENCE_PHRASE: &str =
    "df3dd6d884714288a39af0bd973a1771c9f00f168cf040d6abb6a50dd5e055d8";

/// A test fixture with a deterministic factory and account.
pub struct TestFixture {
    pub factory: AccountFactory,
    pub account: Account,
}

impl TestFixture {
    /// Create the reference fixture: testnet, nonce 0, reference passphrase.
    pub fn new() -> Self {
        Self::with_passphrase(REFERENCE_PHRASE)
    }

    /// Create a deterministic fixture for an arbitrary passphrase.
    pub fn with_passphrase(passphrase: &str) -> Self {
        let mut factory = AccountFactory::with_nonce(Network::Testnet, 0);
        let account = factory.seed(passphrase);
        Self { factory, account }
    }

    /// The account's public signing key.
    pub fn sign_key(&self) -> SignPublicKey {
        *self.account.public_sign_key().expect("seeded account has sign keys")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create distinct deterministic accounts for multi-party tests.
pub fn multi_party_accounts(count: usize) -> Vec<Account> {
    (0..count)
        .map(|i| TestFixture::with_passphrase(&format!("party {i}")).account)
        .collect()
}

/// A concrete event for chain tests.
///
/// The signed message is the newline-joined base58 body, timestamp, previous
/// link, and signer key; the content hash is the SHA-256 of that message.
#[derive(Debug, Clone)]
pub struct TestEvent {
    pub body: Bytes,
    pub timestamp: i64,
    pub previous: Option<EventHash>,
    pub sign_key: Option<SignPublicKey>,
    pub signature: Option<Signature>,
}

impl TestEvent {
    pub fn new(body: impl Into<Bytes>, timestamp: i64) -> Self {
        Self {
            body: body.into(),
            timestamp,
            previous: None,
            sign_key: None,
            signature: None,
        }
    }
}

impl Event for TestEvent {
    fn previous(&self) -> Option<&EventHash> {
        self.previous.as_ref()
    }

    fn set_previous(&mut self, hash: EventHash) {
        self.previous = Some(hash);
    }

    fn set_sign_key(&mut self, key: SignPublicKey) {
        self.sign_key = Some(key);
    }

    fn set_signature(&mut self, signature: Signature) {
        self.signature = Some(signature);
    }

    fn message(&self) -> Vec<u8> {
        let body = keel_core::Encoding::Base58.encode(&self.body);
        let previous = self.previous.map(|hash| hash.to_base58()).unwrap_or_default();
        let sign_key = self.sign_key.map(|key| key.to_base58()).unwrap_or_default();

        format!("{body}\n{}\n{previous}\n{sign_key}", self.timestamp).into_bytes()
    }

    fn hash(&self) -> EventHash {
        EventHash::from_bytes(sha256(&self.message()))
    }
}
