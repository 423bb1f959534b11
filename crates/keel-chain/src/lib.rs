//! # Keel Chain
//!
//! Hash-linked event chains scoped to one account identity.
//!
//! A chain assigns each appended event the hash of its predecessor, giving
//! tamper-evident ordering. The chain id itself is derived from the owning
//! account's public signing key plus a nonce, and the first link hash is the
//! SHA-256 of the raw id — so an empty chain already has a well-defined
//! anchor for its first event.
//!
//! Event types live outside this crate and only implement the small
//! [`Event`] contract; the chain never computes an event's content hash.

pub mod chain;
pub mod event;

pub use chain::{ChainId, EventChain, SignsEvents, CHAIN_ID_TYPE, CHAIN_NONCE_LENGTH};
pub use event::{Event, EventHash};
