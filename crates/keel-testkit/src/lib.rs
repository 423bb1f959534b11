//! # Keel Testkit
//!
//! Testing utilities for the Keel client.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: outputs pinned by the network's reference client, so a
//!   wire-format regression fails loudly
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: deterministic accounts and a concrete event type
//!
//! ## Golden Vectors
//!
//! ```rust
//! use keel_testkit::vectors;
//!
//! vectors::verify_all_vectors();
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use keel_testkit::fixtures::{TestEvent, TestFixture};
//! use keel_chain::{EventChain, SignsEvents};
//!
//! let fixture = TestFixture::new();
//! let mut chain: EventChain<TestEvent> = fixture
//!     .account
//!     .create_event_chain(Some(b"fixture"))
//!     .unwrap();
//! fixture
//!     .account
//!     .sign_event(chain.add(TestEvent::new(&b"hello"[..], 1519862400000)))
//!     .unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_accounts, TestEvent, TestFixture, REFERENCE_PHRASE};
pub use vectors::{
    account_vectors, association_proof_vectors, chain_id_vectors, initial_hash_vectors,
    verify_all_vectors,
};
