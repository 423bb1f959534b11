//! Tagged-variant dispatch over the concrete transaction types.
//!
//! The set of variants is closed: the type tag in interchange data selects a
//! variant here, and everything else (packers, required keys) hangs off the
//! concrete type.

use serde_json::Value;

use crate::cancel_sponsor::CancelSponsor;
use crate::common::{Transaction, TxCommon};
use crate::data::as_object;
use crate::error::TxError;
use crate::revoke_association::RevokeAssociation;

/// Any transaction type this client knows how to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyTransaction {
    RevokeAssociation(RevokeAssociation),
    CancelSponsor(CancelSponsor),
}

impl AnyTransaction {
    /// Reconstruct a transaction from interchange data, dispatching on the
    /// type tag.
    pub fn from_data(data: &Value) -> Result<Self, TxError> {
        let object = as_object(data)?;
        let tag = object
            .get("type")
            .and_then(Value::as_i64)
            .ok_or(TxError::InvalidArgument(
                keel_core::InvalidArgumentError::Malformed {
                    subject: "type",
                    reason: "missing or not an integer".into(),
                },
            ))?;

        match tag {
            tag if tag == i64::from(RevokeAssociation::TYPE) => {
                RevokeAssociation::from_data(data).map(Into::into)
            }
            tag if tag == i64::from(CancelSponsor::TYPE) => {
                CancelSponsor::from_data(data).map(Into::into)
            }
            other => Err(TxError::UnsupportedType(other)),
        }
    }

    /// The numeric type tag of the wrapped transaction.
    pub fn type_tag(&self) -> u8 {
        match self {
            AnyTransaction::RevokeAssociation(_) => RevokeAssociation::TYPE,
            AnyTransaction::CancelSponsor(_) => CancelSponsor::TYPE,
        }
    }

    /// The shared fields of the wrapped transaction.
    pub fn common(&self) -> &TxCommon {
        match self {
            AnyTransaction::RevokeAssociation(tx) => tx.common(),
            AnyTransaction::CancelSponsor(tx) => tx.common(),
        }
    }

    /// Mutable access to the shared fields, for node implementations that
    /// fill in `id` and `height`.
    pub fn common_mut(&mut self) -> &mut TxCommon {
        match self {
            AnyTransaction::RevokeAssociation(tx) => tx.common_mut(),
            AnyTransaction::CancelSponsor(tx) => tx.common_mut(),
        }
    }

    /// The canonical signing bytes of the wrapped transaction.
    pub fn to_binary(&self) -> Result<Vec<u8>, TxError> {
        match self {
            AnyTransaction::RevokeAssociation(tx) => tx.to_binary(),
            AnyTransaction::CancelSponsor(tx) => tx.to_binary(),
        }
    }

    /// The interchange mapping of the wrapped transaction.
    pub fn json_serialize(&self) -> Value {
        match self {
            AnyTransaction::RevokeAssociation(tx) => tx.json_serialize(),
            AnyTransaction::CancelSponsor(tx) => tx.json_serialize(),
        }
    }

    /// Whether the wrapped transaction carries at least one proof.
    pub fn is_signed(&self) -> bool {
        !self.common().proofs.is_empty()
    }
}
