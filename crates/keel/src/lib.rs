//! # Keel
//!
//! The unified client API for the Keel network: cryptographic identities,
//! hash-linked event chains, and signed transactions.
//!
//! ## Overview
//!
//! The client is pure computation over cryptographic data. It derives
//! accounts from seed material, computes checksummed network addresses,
//! signs and verifies messages, encrypts between accounts, appends events to
//! tamper-evident chains, and serializes transactions into the exact binary
//! form the network validates. Talking to a node happens through the
//! [`PublicNode`] trait; nothing else does I/O.
//!
//! ## Usage
//!
//! ```rust
//! use keel::{AccountFactory, Network, RevokeAssociation, Transaction};
//!
//! let mut factory = AccountFactory::new(Network::Testnet);
//! let account = factory.seed("my brainwallet passphrase");
//!
//! let party = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();
//! let mut tx = RevokeAssociation::new(party, 42);
//! tx.sign_with(&account).unwrap();
//!
//! assert!(tx.is_signed());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `keel::core` - digests, encodings, key material, cryptography
//! - `keel::identity` - accounts, addresses, the account factory
//! - `keel::chain` - event chains
//! - `keel::tx` - the transaction framework and node interface

// Re-export component crates
pub use keel_chain as chain;
pub use keel_core as core;
pub use keel_identity as identity;
pub use keel_tx as tx;

// Re-export the main types for convenience
pub use keel_chain::{ChainId, Event, EventChain, EventHash, SignsEvents};
pub use keel_core::{
    CryptoError, DecryptError, Encoding, EncryptKeyPair, EncryptPublicKey, EncryptSecretKey,
    InvalidArgumentError, KeyError, KeyPair, PreconditionError, SignKeyPair, SignPublicKey,
    SignSecretKey, Signature,
};
pub use keel_identity::{
    Account, AccountFactory, AccountKeys, Address, InvalidAccountError, Network,
};
pub use keel_tx::{
    AnyTransaction, CancelSponsor, NodeError, PublicNode, RevokeAssociation, Transaction, TxError,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        Account, AccountFactory, Address, AnyTransaction, CancelSponsor, Encoding, Event,
        EventChain, Network, PublicNode, RevokeAssociation, SignsEvents, Transaction,
    };
}
