//! Revoking an association between two accounts.

use serde_json::{Map, Value};

use keel_core::{Encoding, InvalidArgumentError, PreconditionError};
use keel_identity::Address;

use crate::any::AnyTransaction;
use crate::common::{Transaction, TxCommon};
use crate::data::{
    as_object, assert_type, address_field, common_from_data, common_to_json, opt_hash_field,
    require_keys, u32_field,
};
use crate::error::TxError;
use crate::pack;

/// Transaction revoking an association with another account.
///
/// The optional content hash pins the revocation to a specific association
/// when several share the same type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeAssociation {
    common: TxCommon,
    party: Address,
    association_type: u32,
    hash: Option<Vec<u8>>,
}

impl RevokeAssociation {
    /// Create a revocation for a party and association type code, with the
    /// default version and minimum fee.
    pub fn new(party: Address, association_type: u32) -> Self {
        Self {
            common: TxCommon::new(Self::DEFAULT_VERSION, Self::MINIMUM_FEE),
            party,
            association_type,
            hash: None,
        }
    }

    /// Create a revocation carrying a raw content hash.
    pub fn with_hash(party: Address, association_type: u32, hash: impl Into<Vec<u8>>) -> Self {
        let mut tx = Self::new(party, association_type);
        tx.hash = Some(hash.into());
        tx
    }

    /// Create a revocation with a content hash supplied in a text encoding.
    pub fn with_encoded_hash(
        party: Address,
        association_type: u32,
        hash: &str,
        encoding: Encoding,
    ) -> Result<Self, InvalidArgumentError> {
        let hash = encoding.decode(hash, "association hash")?;
        Ok(Self::with_hash(party, association_type, hash))
    }

    /// The account the association pointed at.
    pub fn party(&self) -> &Address {
        &self.party
    }

    /// The association type code.
    pub fn association_type(&self) -> u32 {
        self.association_type
    }

    /// The raw content hash, if one was attached.
    pub fn raw_hash(&self) -> Option<&[u8]> {
        self.hash.as_deref()
    }

    /// The content hash in the requested text encoding.
    pub fn hash(&self, encoding: Encoding) -> Option<String> {
        self.hash.as_deref().map(|hash| encoding.encode(hash))
    }
}

impl Transaction for RevokeAssociation {
    const TYPE: u8 = 17;
    const TYPE_NAME: &'static str = "revoke association";
    const DEFAULT_VERSION: u8 = 1;
    const MINIMUM_FEE: u64 = 100_000_000;

    fn common(&self) -> &TxCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut TxCommon {
        &mut self.common
    }

    fn to_binary(&self) -> Result<Vec<u8>, TxError> {
        let sender_public_key = self
            .common
            .sender_public_key
            .as_ref()
            .ok_or(PreconditionError::new("sender public key not set"))?;
        let timestamp = self
            .common
            .timestamp
            .ok_or(PreconditionError::new("timestamp not set"))?;
        let sender = self
            .common
            .sender
            .as_ref()
            .ok_or(PreconditionError::new("sender address not set"))?;

        match self.common.version {
            1 => Ok(pack::association_v1(
                Self::TYPE,
                1,
                sender,
                sender_public_key,
                &self.party,
                self.association_type,
                self.hash.as_deref(),
                timestamp,
                self.common.fee,
            )),
            version => Err(TxError::UnsupportedVersion {
                name: Self::TYPE_NAME,
                version,
            }),
        }
    }

    fn from_data(data: &Value) -> Result<Self, TxError> {
        let data = as_object(data)?;
        require_keys(
            data,
            &[
                "party",
                "associationType",
                "version",
                "sender",
                "senderPublicKey",
                "timestamp",
                "fee",
                "proofs",
            ],
        )?;
        assert_type(data, Self::TYPE)?;

        Ok(Self {
            common: common_from_data(data)?,
            party: address_field(data, "party", "party address")?,
            association_type: u32_field(data, "associationType")?,
            hash: opt_hash_field(data, "hash")?,
        })
    }

    fn json_serialize(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Self::TYPE.into());
        map.insert("party".into(), self.party.to_base58().into());
        map.insert("associationType".into(), self.association_type.into());
        if let Some(hash) = &self.hash {
            map.insert("hash".into(), Encoding::Base58.encode(hash).into());
        }
        common_to_json(&self.common, &mut map);
        Value::Object(map)
    }
}

impl From<RevokeAssociation> for AnyTransaction {
    fn from(tx: RevokeAssociation) -> Self {
        AnyTransaction::RevokeAssociation(tx)
    }
}

impl TryFrom<AnyTransaction> for RevokeAssociation {
    type Error = TxError;

    fn try_from(any: AnyTransaction) -> Result<Self, Self::Error> {
        match any {
            AnyTransaction::RevokeAssociation(tx) => Ok(tx),
            _ => Err(TxError::UnexpectedResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::digest::sha256;
    use keel_identity::{AccountFactory, Network};
    use serde_json::json;

    const PARTY: &str = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1";

    fn party() -> Address {
        PARTY.parse().unwrap()
    }

    fn signer() -> keel_identity::Account {
        AccountFactory::with_nonce(Network::Testnet, 0)
            .seed("df3dd6d884714288a39af0bd973a1771c9f00f168cf040d6abb6a50dd5e055d8")
    }

    fn full_data() -> Value {
        json!({
            "type": 17,
            "version": 1,
            "party": "3N9ChkxWXqgdWLLErWFrSwjqARB6NtYsvZh",
            "associationType": 42,
            "hash": "3yMApqCuCjXDWPrbjfR5mjCPTHqFG8Pux1TxQrEM35jj",
            "sender": "3NBcx7AQqDopBj3WfwCVARNYuZyt1L9xEVM",
            "senderPublicKey": "7gghhSwKRvshZwwh6sG97mzo1qoFtHEQK7iM4vGcnEt7",
            "timestamp": 1610154732000i64,
            "fee": 100000000,
            "proofs": [
                "4NrsjbkkWyH4K57jf9MQ5Ya9ccvXtCg2BQV2LsHMMacZZojbcRgesB1MruVQtCaZdvFSswwju5zCxisG3ZaQ2LKF"
            ],
        })
    }

    #[test]
    fn test_construct_defaults() {
        let tx = RevokeAssociation::new(party(), 42);

        assert_eq!(tx.common().fee, 100_000_000);
        assert_eq!(tx.common().version, 1);
        assert_eq!(tx.party(), &party());
        assert_eq!(tx.association_type(), 42);
        assert!(tx.raw_hash().is_none());
        assert!(!tx.is_signed());
    }

    // sha256("foo")
    const FOO_HASH_HEX: &str = "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae";

    #[test]
    fn test_hash_accessor_encodes() {
        let digest = sha256(b"foo");
        let tx = RevokeAssociation::with_hash(party(), 42, digest.to_vec());

        assert_eq!(tx.hash(Encoding::Hex).unwrap(), FOO_HASH_HEX);
        assert_eq!(
            tx.hash(Encoding::Base58).unwrap(),
            "3yMApqCuCjXDWPrbjfR5mjCPTHqFG8Pux1TxQrEM35jj"
        );
    }

    #[test]
    fn test_with_encoded_hash_accepts_hex() {
        let digest = sha256(b"foo");
        let tx = RevokeAssociation::with_encoded_hash(party(), 42, FOO_HASH_HEX, Encoding::Hex)
            .unwrap();
        assert_eq!(tx.raw_hash(), Some(digest.as_slice()));
    }

    #[test]
    fn test_to_binary_without_sender_key_fails() {
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.common_mut().timestamp = Some(1519862400);

        let err = tx.to_binary().unwrap_err();
        assert_eq!(err.to_string(), "sender public key not set");
    }

    #[test]
    fn test_to_binary_without_timestamp_fails() {
        let account = signer();
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.common_mut().sender = Some(*account.address());
        tx.common_mut().sender_public_key = account.public_sign_key().copied();

        let err = tx.to_binary().unwrap_err();
        assert_eq!(err.to_string(), "timestamp not set");
    }

    #[test]
    fn test_to_binary_unsupported_version() {
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.common_mut().version = 99;
        tx.common_mut().timestamp = Some(1519862400);
        let account = signer();
        tx.common_mut().sender = Some(*account.address());
        tx.common_mut().sender_public_key = account.public_sign_key().copied();

        let err = tx.to_binary().unwrap_err();
        assert_eq!(
            err,
            TxError::UnsupportedVersion {
                name: "revoke association",
                version: 99
            }
        );
    }

    #[test]
    fn test_sign_produces_82_byte_binary() {
        let account = signer();
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.common_mut().timestamp = Some(1519862400);

        tx.sign_with(&account).unwrap();

        assert!(tx.is_signed());
        assert_eq!(tx.to_binary().unwrap().len(), 82);
        assert_eq!(
            tx.common().sender.unwrap().to_base58(),
            "3MtHYnCkd3oFZr21yb2vEdngcSGXvuNNCq2"
        );
        assert_eq!(
            tx.common().sender_public_key.as_ref().unwrap().to_base58(),
            "4EcSxUkMxqxBEBUBL2oKz3ARVsbyRJTivWpNrYQGdguz"
        );
        // Unchanged by signing.
        assert_eq!(tx.common().timestamp, Some(1519862400));

        let proof = &tx.common().proofs[0];
        assert!(account.verify(proof, &tx.to_binary().unwrap()).unwrap());
    }

    #[test]
    fn test_sign_with_hash_produces_116_byte_binary() {
        let account = signer();
        let mut tx = RevokeAssociation::with_hash(party(), 42, sha256(b"foo").to_vec());
        tx.common_mut().timestamp = Some(1519862400);

        tx.sign_with(&account).unwrap();

        assert_eq!(tx.to_binary().unwrap().len(), 116);
        let proof = &tx.common().proofs[0];
        assert!(account.verify(proof, &tx.to_binary().unwrap()).unwrap());
    }

    #[test]
    fn test_signing_twice_appends_proofs() {
        let account = signer();
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.common_mut().timestamp = Some(1519862400);

        tx.sign_with(&account).unwrap();
        tx.sign_with(&account).unwrap();

        assert_eq!(tx.common().proofs.len(), 2);
        // Same account, same bytes: deterministic signatures agree.
        assert_eq!(tx.common().proofs[0], tx.common().proofs[1]);
    }

    #[test]
    fn test_sign_without_secret_key_fails() {
        let account = signer();
        let public = AccountFactory::with_nonce(Network::Testnet, 0)
            .create_public(account.public_sign_key().copied(), None)
            .unwrap();

        let mut tx = RevokeAssociation::new(party(), 42);
        assert!(matches!(
            tx.sign_with(&public),
            Err(TxError::Key(keel_core::KeyError::NoSecretSignKey))
        ));
        // A failed signing attempt leaves the transaction untouched.
        assert!(tx.common().sender.is_none());
        assert!(!tx.is_signed());
    }

    #[test]
    fn test_sign_stamps_missing_timestamp() {
        let account = signer();
        let mut tx = RevokeAssociation::new(party(), 42);
        tx.sign_with(&account).unwrap();

        assert!(tx.common().timestamp.is_some());
    }

    #[test]
    fn test_from_data_copies_fields_verbatim() {
        let tx = RevokeAssociation::from_data(&full_data()).unwrap();

        assert_eq!(tx.party().to_base58(), "3N9ChkxWXqgdWLLErWFrSwjqARB6NtYsvZh");
        assert_eq!(tx.association_type(), 42);
        assert_eq!(
            tx.hash(Encoding::Base58).unwrap(),
            "3yMApqCuCjXDWPrbjfR5mjCPTHqFG8Pux1TxQrEM35jj"
        );
        assert_eq!(tx.common().fee, 100_000_000);
        assert_eq!(tx.common().timestamp, Some(1610154732000));
        assert_eq!(tx.common().proofs.len(), 1);
        assert!(tx.common().id.is_none());
        assert!(tx.common().height.is_none());
    }

    #[test]
    fn test_from_data_keeps_id_and_height() {
        let mut data = full_data();
        data["id"] = "UMkS6oU6GfhhZngST6opVQYvCbLMnWVL4q6SC46F7ch".into();
        data["height"] = 1221474.into();

        let tx = RevokeAssociation::from_data(&data).unwrap();
        assert_eq!(
            tx.common().id.as_deref(),
            Some("UMkS6oU6GfhhZngST6opVQYvCbLMnWVL4q6SC46F7ch")
        );
        assert_eq!(tx.common().height, Some(1221474));
    }

    #[test]
    fn test_from_data_missing_keys_all_reported() {
        let err = RevokeAssociation::from_data(&json!({"type": 17})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid data, missing keys: party, associationType, version, sender, \
             senderPublicKey, timestamp, fee, proofs"
        );
    }

    #[test]
    fn test_from_data_wrong_type_tag() {
        let mut data = full_data();
        data["type"] = 99.into();

        let err = RevokeAssociation::from_data(&data).unwrap_err();
        assert_eq!(err.to_string(), "invalid type 99, should be 17");
    }

    #[test]
    fn test_json_roundtrip_for_confirmed_transaction() {
        let mut data = full_data();
        data["id"] = "UMkS6oU6GfhhZngST6opVQYvCbLMnWVL4q6SC46F7ch".into();
        data["height"] = 1221474.into();

        let tx = RevokeAssociation::from_data(&data).unwrap();
        let serialized = tx.json_serialize();

        assert_eq!(serialized, data);
        assert_eq!(RevokeAssociation::from_data(&serialized).unwrap(), tx);
    }

    #[test]
    fn test_json_serialize_omits_absent_hash() {
        let tx = RevokeAssociation::new(party(), 42);
        let value = tx.json_serialize();
        assert!(value.get("hash").is_none());
        assert!(value.get("id").is_none());
        assert!(value.get("height").is_none());
    }
}
