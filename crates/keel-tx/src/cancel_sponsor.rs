//! Ending the sponsorship of another account's transaction fees.

use serde_json::{Map, Value};

use keel_core::PreconditionError;
use keel_identity::Address;

use crate::any::AnyTransaction;
use crate::common::{Transaction, TxCommon};
use crate::data::{
    as_object, assert_type, address_field, common_from_data, common_to_json, require_keys,
};
use crate::error::TxError;
use crate::pack;

/// Transaction that stops sponsoring an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelSponsor {
    common: TxCommon,
    recipient: Address,
}

impl CancelSponsor {
    /// Create a sponsorship cancel for a recipient, with the default version
    /// and minimum fee.
    pub fn new(recipient: Address) -> Self {
        Self {
            common: TxCommon::new(Self::DEFAULT_VERSION, Self::MINIMUM_FEE),
            recipient,
        }
    }

    /// The account that was being sponsored.
    pub fn recipient(&self) -> &Address {
        &self.recipient
    }
}

impl Transaction for CancelSponsor {
    const TYPE: u8 = 19;
    const TYPE_NAME: &'static str = "cancel sponsor";
    const DEFAULT_VERSION: u8 = 1;
    const MINIMUM_FEE: u64 = 500_000_000;

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
            1 => Ok(pack::cancel_sponsor_v1(
                Self::TYPE,
                1,
                sender,
                sender_public_key,
                &self.recipient,
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
                "recipient",
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
            recipient: address_field(data, "recipient", "recipient address")?,
        })
    }

    fn json_serialize(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Self::TYPE.into());
        map.insert("recipient".into(), self.recipient.to_base58().into());
        common_to_json(&self.common, &mut map);
        Value::Object(map)
    }
}

impl From<CancelSponsor> for AnyTransaction {
    fn from(tx: CancelSponsor) -> Self {
        AnyTransaction::CancelSponsor(tx)
    }
}

impl TryFrom<AnyTransaction> for CancelSponsor {
    type Error = TxError;

    fn try_from(any: AnyTransaction) -> Result<Self, Self::Error> {
        match any {
            AnyTransaction::CancelSponsor(tx) => Ok(tx),
            _ => Err(TxError::UnexpectedResponse),
        }
    }
}
