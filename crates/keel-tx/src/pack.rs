//! Binary packers: the closed (type, version) → layout registry.
//!
//! Each packer is a pure function from a transaction's fields to the exact
//! byte sequence the network signs and validates. Integers are big-endian and
//! fixed width; optional fields are flagged and omitted entirely when absent,
//! never zero-filled. New versions get new packers; existing layouts are
//! frozen.
//!
//! | type | version | packer              |
//! |------|---------|---------------------|
//! | 17   | 1       | [`association_v1`]  |
//! | 19   | 1       | [`cancel_sponsor_v1`] |

use keel_core::SignPublicKey;
use keel_identity::Address;

/// Association layout, version 1 (shared by associations and revocations):
///
/// `type(1) ‖ version(1) ‖ network(1) ‖ sender key(32) ‖ party(26) ‖
/// association type(u32) ‖ hash flag(1) [‖ length(u16) ‖ hash] ‖
/// timestamp(u64) ‖ fee(u64)`
///
/// 82 bytes without a hash, 116 with a 32-byte one.
#[allow(clippy::too_many_arguments)]
pub(crate) fn association_v1(
    tx_type: u8,
    version: u8,
    sender: &Address,
    sender_public_key: &SignPublicKey,
    party: &Address,
    association_type: u32,
    hash: Option<&[u8]>,
    timestamp: i64,
    fee: u64,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(84 + hash.map_or(0, |h| 2 + h.len()));

    bytes.push(tx_type);
    bytes.push(version);
    bytes.push(sender.network_byte());
    bytes.extend_from_slice(sender_public_key.as_bytes());
    bytes.extend_from_slice(party.as_bytes());
    bytes.extend_from_slice(&association_type.to_be_bytes());

    match hash {
        Some(hash) => {
            bytes.push(1);
            bytes.extend_from_slice(&(hash.len() as u16).to_be_bytes());
            bytes.extend_from_slice(hash);
        }
        None => bytes.push(0),
    }

    bytes.extend_from_slice(&(timestamp as u64).to_be_bytes());
    bytes.extend_from_slice(&fee.to_be_bytes());

    bytes
}

/// Sponsorship cancel layout, version 1:
///
/// `type(1) ‖ version(1) ‖ network(1) ‖ sender key(32) ‖ recipient(26) ‖
/// timestamp(u64) ‖ fee(u64)` — 77 bytes.
pub(crate) fn cancel_sponsor_v1(
    tx_type: u8,
    version: u8,
    sender: &Address,
    sender_public_key: &SignPublicKey,
    recipient: &Address,
    timestamp: i64,
    fee: u64,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(77);

    bytes.push(tx_type);
    bytes.push(version);
    bytes.push(sender.network_byte());
    bytes.extend_from_slice(sender_public_key.as_bytes());
    bytes.extend_from_slice(recipient.as_bytes());
    bytes.extend_from_slice(&(timestamp as u64).to_be_bytes());
    bytes.extend_from_slice(&fee.to_be_bytes());

    bytes
}
