//! Proptest generators for property-based testing.

use proptest::prelude::*;

use keel_core::crypto::{create_encrypt_keys, create_sign_keys};
use keel_core::{EncryptKeyPair, SignKeyPair};
use keel_identity::{Account, AccountFactory, Network};

/// Generate a 32-byte derivation seed.
pub fn seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Generate a signing keypair.
pub fn sign_keys() -> impl Strategy<Value = SignKeyPair> {
    seed().prop_map(|seed| create_sign_keys(&seed))
}

/// Generate an encryption keypair.
pub fn encrypt_keys() -> impl Strategy<Value = EncryptKeyPair> {
    seed().prop_map(|seed| create_encrypt_keys(&seed))
}

/// Generate a brainwallet passphrase.
pub fn passphrase() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,63}".prop_map(String::from)
}

/// Generate a factory nonce in the range a fresh factory starts from.
pub fn factory_nonce() -> impl Strategy<Value = u32> {
    0u32..=0xFFFF
}

/// Generate a network, including custom bytes.
pub fn network() -> impl Strategy<Value = Network> {
    prop_oneof![
        Just(Network::Mainnet),
        Just(Network::Testnet),
        any::<u8>().prop_map(Network::Custom),
    ]
}

/// Generate message bytes up to the given length.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a deterministic account from a passphrase, nonce, and network.
pub fn account() -> impl Strategy<Value = Account> {
    (passphrase(), factory_nonce(), network()).prop_map(|(phrase, nonce, network)| {
        AccountFactory::with_nonce(network, nonce).seed(&phrase)
    })
}
