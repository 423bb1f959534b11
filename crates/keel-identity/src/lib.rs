//! # Keel Identity
//!
//! Accounts, addresses, and the account factory.
//!
//! An [`Account`] is a cryptographic identity: a signing keypair, an
//! encryption keypair, and the network address derived from them. Accounts
//! are built by an [`AccountFactory`] — from a passphrase, from raw key
//! material, or from public keys alone — and are immutable afterwards.
//!
//! The factory validates everything at construction time: a derived or
//! declared address that disagrees with the keys is an
//! [`InvalidAccountError`], so an inconsistent account is never observable.

pub mod account;
pub mod address;
pub mod error;
pub mod factory;

pub use account::Account;
pub use address::{Address, Network, ADDRESS_LENGTH, ADDRESS_VERSION};
pub use error::InvalidAccountError;
pub use factory::{AccountFactory, AccountKeys};
