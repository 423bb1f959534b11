//! # Keel Tx
//!
//! Transaction construction, canonical binary encoding, signing, and
//! broadcast delegation.
//!
//! Every transaction type declares a numeric tag, a default version, and a
//! minimum fee, and encodes itself to the exact byte sequence the network
//! signs and validates. The lifecycle is one-directional:
//!
//! ```text
//! unsigned → signed (≥1 proof) → broadcast-pending → confirmed (id + height)
//! ```
//!
//! Nothing here performs network I/O; broadcasting goes through the
//! [`PublicNode`] trait and returns the node's answer untouched.

pub mod any;
pub mod cancel_sponsor;
pub mod common;
mod data;
pub mod error;
pub mod node;
mod pack;
pub mod revoke_association;

pub use any::AnyTransaction;
pub use cancel_sponsor::CancelSponsor;
pub use common::{Transaction, TxCommon};
pub use error::TxError;
pub use node::{NodeError, PublicNode};
pub use revoke_association::RevokeAssociation;
