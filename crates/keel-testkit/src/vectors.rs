//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the client must reproduce these outputs exactly:
//! the vectors were generated by the network's reference client against the
//! test network, so a mismatch means a broken wire format, not a broken test.

use serde::Serialize;

use keel_chain::{ChainId, EventChain, SignsEvents, CHAIN_NONCE_LENGTH};
use keel_core::{Encoding, SignPublicKey};
use keel_identity::{Account, AccountFactory, Network};
use keel_tx::{RevokeAssociation, Transaction};

use crate::fixtures::TestEvent;

/// Seed-to-account derivation vector.
#[derive(Debug, Clone, Serialize)]
pub struct AccountVector {
    pub name: &'static str,
    pub nonce: u32,
    pub passphrase: &'static str,
    pub expected_address: &'static str,
    pub expected_sign_key: &'static str,
}

/// All account derivation vectors (test network).
pub fn account_vectors() -> Vec<AccountVector> {
    vec![AccountVector {
        name: "reference account",
        nonce: 0,
        passphrase: "df3dd6d884714288a39af0bd973a1771c9f00f168cf040d6abb6a50dd5e055d8",
        expected_address: "3MtHYnCkd3oFZr21yb2vEdngcSGXvuNNCq2",
        expected_sign_key: "4EcSxUkMxqxBEBUBL2oKz3ARVsbyRJTivWpNrYQGdguz",
    }]
}

/// Derive the account a vector describes.
pub fn build_account(vector: &AccountVector) -> Account {
    AccountFactory::with_nonce(Network::Testnet, vector.nonce).seed(vector.passphrase)
}

/// Chain-id derivation vector. `nonce_seed: None` means the all-zero
/// 20-byte nonce.
#[derive(Debug, Clone, Serialize)]
pub struct ChainIdVector {
    pub name: &'static str,
    pub sign_key: &'static str,
    pub nonce_seed: Option<&'static str>,
    pub expected_id: &'static str,
    pub expected_initial_hash: &'static str,
}

/// All chain-id derivation vectors.
pub fn chain_id_vectors() -> Vec<ChainIdVector> {
    vec![
        ChainIdVector {
            name: "seeded nonce",
            sign_key: "8MeRTc26xZqPmQ3Q29RJBwtgtXDPwR7P9QNArymjPLVQ",
            nonce_seed: Some("foo"),
            expected_id: "2b6QYLttL2R3CLGL4fUB9vaXXX4c5HJanjV5QecmAYLCrD52o6is1fRMGShUUF",
            expected_initial_hash: "8FjrD9Req4C61RcawRC5HaTUvuetU2BwABTiQBVheU2R",
        },
        ChainIdVector {
            name: "zero nonce",
            sign_key: "8MeRTc26xZqPmQ3Q29RJBwtgtXDPwR7P9QNArymjPLVQ",
            nonce_seed: None,
            expected_id: "2ar3wSjTm1fA33qgckZ5Kxn1x89gKKGi6TJsZjRoqb7sjUE8GZXjLaYCbCa2GX",
            expected_initial_hash: "3NTzfLcXq1D5BRzhj9EyVbmAcLsz1pa6ZjdxRySbYze1",
        },
    ]
}

/// Derive the chain id a vector describes.
pub fn derive_chain_id(vector: &ChainIdVector) -> ChainId {
    let sign_key = SignPublicKey::from_base58(vector.sign_key).expect("vector sign key");

    match vector.nonce_seed {
        Some(seed) => ChainId::derive(&sign_key, Some(seed.as_bytes())),
        None => ChainId::derive_with_nonce(&sign_key, [0u8; CHAIN_NONCE_LENGTH]),
    }
}

/// Initial-hash vector for an explicitly supplied (opaque) chain id.
#[derive(Debug, Clone, Serialize)]
pub struct InitialHashVector {
    pub id: &'static str,
    pub expected_hash: &'static str,
}

/// All initial-hash vectors.
pub fn initial_hash_vectors() -> Vec<InitialHashVector> {
    vec![InitialHashVector {
        id: "L1hGimV7Pp2CFNUnTCitqWDbk9Zng3r3uc66dAG6hLwEx",
        expected_hash: "9HM1ykH7AxLgdCqBBeUhvoTH4jkq3zsZe4JGTrjXVENg",
    }]
}

/// Revoke-association signing vector: fixed account, fields, and timestamp
/// produce a fixed binary length and a fixed proof.
#[derive(Debug, Clone, Serialize)]
pub struct AssociationProofVector {
    pub name: &'static str,
    pub passphrase: &'static str,
    pub party: &'static str,
    pub association_type: u32,
    pub hash_hex: Option<&'static str>,
    pub timestamp: i64,
    pub expected_binary_len: usize,
    pub expected_proof: &'static str,
}

/// All revoke-association signing vectors.
pub fn association_proof_vectors() -> Vec<AssociationProofVector> {
    vec![
        AssociationProofVector {
            name: "without hash",
            passphrase: "df3dd6d884714288a39af0bd973a1771c9f00f168cf040d6abb6a50dd5e055d8",
            party: "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1",
            association_type: 42,
            hash_hex: None,
            timestamp: 1519862400,
            expected_binary_len: 82,
            expected_proof: "3MHD8faY9rNpYh58KdLZxdp9Btby3SkzmtCv7R4sM1EvccKvRD4rKXua5h4ENsCkrkfNkApNF7UqxR5M2C3GXXWZ",
        },
        AssociationProofVector {
            name: "with sha256(foo) hash",
            passphrase: "df3dd6d884714288a39af0bd973a1771c9f00f168cf040d6abb6a50dd5e055d8",
            party: "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1",
            association_type: 42,
            hash_hex: Some("2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"),
            timestamp: 1519862400,
            expected_binary_len: 116,
            expected_proof: "66XHTtBAa3XDmhThKb43zRUBBAEk73B9Bcs1Dx4UwhQUjnaSUUhVVKsYzN1hfZaURALDq1tV83WUW6GbTAyM7zjQ",
        },
    ]
}

/// Build and sign the transaction a vector describes.
pub fn build_signed_revocation(vector: &AssociationProofVector) -> RevokeAssociation {
    let account =
        AccountFactory::with_nonce(Network::Testnet, 0).seed(vector.passphrase);
    let party = vector.party.parse().expect("vector party address");

    let mut tx = match vector.hash_hex {
        Some(hash) => {
            RevokeAssociation::with_encoded_hash(party, vector.association_type, hash, Encoding::Hex)
                .expect("vector hash")
        }
        None => RevokeAssociation::new(party, vector.association_type),
    };

    tx.common_mut().timestamp = Some(vector.timestamp);
    tx.sign_with(&account).expect("signing the vector transaction");
    tx
}

/// Run every vector and panic on the first mismatch.
pub fn verify_all_vectors() {
    for vector in account_vectors() {
        let account = build_account(&vector);
        assert_eq!(
            account.address().to_base58(),
            vector.expected_address,
            "address mismatch for {}",
            vector.name
        );
        assert_eq!(
            account.public_sign_key().expect("sign key").to_base58(),
            vector.expected_sign_key,
            "sign key mismatch for {}",
            vector.name
        );
    }

    for vector in chain_id_vectors() {
        let id = derive_chain_id(&vector);
        assert_eq!(id.to_base58(), vector.expected_id, "id mismatch for {}", vector.name);
        assert_eq!(
            id.initial_hash().to_base58(),
            vector.expected_initial_hash,
            "initial hash mismatch for {}",
            vector.name
        );
    }

    for vector in initial_hash_vectors() {
        let id: ChainId = vector.id.parse().expect("vector id");
        let chain: EventChain<TestEvent> = EventChain::with_id(id, None);
        assert_eq!(
            chain.latest_hash().expect("initial hash").to_base58(),
            vector.expected_hash,
            "initial hash mismatch for explicit id"
        );
    }

    for vector in association_proof_vectors() {
        let tx = build_signed_revocation(&vector);
        let binary = tx.to_binary().expect("vector binary");

        assert_eq!(
            binary.len(),
            vector.expected_binary_len,
            "binary length mismatch for {}",
            vector.name
        );
        assert_eq!(
            tx.common().proofs[0].to_base58(),
            vector.expected_proof,
            "proof mismatch for {}",
            vector.name
        );
    }
}

/// The chain-id vectors exercised through the account-side API rather than
/// the raw derivation.
pub fn verify_chain_vectors_via_account() {
    for vector in chain_id_vectors() {
        let Some(seed) = vector.nonce_seed else {
            continue;
        };

        let sign_key = SignPublicKey::from_base58(vector.sign_key).expect("vector sign key");
        let account = AccountFactory::with_nonce(Network::Testnet, 0)
            .create_public(Some(sign_key), None)
            .expect("public account");

        let chain: EventChain<TestEvent> = account
            .create_event_chain(Some(seed.as_bytes()))
            .expect("chain init");

        assert_eq!(chain.id().expect("chain id").to_base58(), vector.expected_id);
        assert_eq!(
            chain.latest_hash().expect("initial hash").to_base58(),
            vector.expected_initial_hash
        );
    }
}
