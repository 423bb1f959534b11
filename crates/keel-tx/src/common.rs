//! Fields and behavior shared by every transaction type.

use async_trait::async_trait;
use serde_json::Value;

use keel_core::{KeyError, SignPublicKey, Signature};
use keel_identity::{Account, Address};

use crate::any::AnyTransaction;
use crate::error::TxError;
use crate::node::PublicNode;

/// The fields every transaction carries.
///
/// `id` and `height` are assigned by the network once a transaction is
/// accepted and confirmed; the client only ever copies them, never computes
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxCommon {
    pub version: u8,
    pub sender: Option<Address>,
    pub sender_public_key: Option<SignPublicKey>,
    /// Epoch milliseconds.
    pub timestamp: Option<i64>,
    pub fee: u64,
    /// Signatures over the canonical binary form, append-only.
    pub proofs: Vec<Signature>,
    pub id: Option<String>,
    pub height: Option<u64>,
}

impl TxCommon {
    pub(crate) fn new(version: u8, fee: u64) -> Self {
        Self {
            version,
            sender: None,
            sender_public_key: None,
            timestamp: None,
            fee,
            proofs: Vec::new(),
            id: None,
            height: None,
        }
    }
}

/// A typed, versioned on-chain transaction.
///
/// Concrete types declare their numeric tag, default version, and minimum
/// fee, and implement the encoding trio (`to_binary`, `from_data`,
/// `json_serialize`). Signing and broadcast are shared behavior.
#[async_trait]
pub trait Transaction:
    Sized + Send + Into<AnyTransaction> + TryFrom<AnyTransaction, Error = TxError>
{
    /// Numeric type tag on the network.
    const TYPE: u8;

    /// Human name used in error messages.
    const TYPE_NAME: &'static str;

    /// Version newly constructed transactions carry.
    const DEFAULT_VERSION: u8;

    /// The network's minimum fee for this type, also the constructor default.
    const MINIMUM_FEE: u64;

    fn common(&self) -> &TxCommon;
    fn common_mut(&mut self) -> &mut TxCommon;

    /// Produce the exact byte sequence that is signed and validated.
    ///
    /// Fails with a precondition error when the sender public key or the
    /// timestamp is missing, and with an unsupported-version error when no
    /// packer exists for `(TYPE, version)`.
    fn to_binary(&self) -> Result<Vec<u8>, TxError>;

    /// Reconstruct a transaction from interchange data.
    ///
    /// Every missing required key is reported in one message; the type tag
    /// must match [`TYPE`](Self::TYPE); all fields are copied verbatim,
    /// including `id` and `height` when present.
    fn from_data(data: &Value) -> Result<Self, TxError>;

    /// Emit the interchange mapping. The inverse of
    /// [`from_data`](Self::from_data) for confirmed transactions.
    fn json_serialize(&self) -> Value;

    /// A transaction is signed once it carries at least one proof.
    fn is_signed(&self) -> bool {
        !self.common().proofs.is_empty()
    }

    /// Sign this transaction with an account.
    ///
    /// Sets the sender address and public key from the signer when unset,
    /// stamps the current time when no timestamp was chosen, and appends a
    /// signature over [`to_binary`](Self::to_binary). Signing again appends
    /// another proof; earlier proofs are never dropped.
    fn sign_with(&mut self, account: &Account) -> Result<&mut Self, TxError> {
        if !account.can_sign() {
            return Err(KeyError::NoSecretSignKey.into());
        }

        if self.common().sender.is_none() {
            let public = *account.public_sign_key().ok_or(KeyError::NoPublicSignKey)?;
            let common = self.common_mut();
            common.sender = Some(*account.address());
            common.sender_public_key = Some(public);
        }

        if self.common().timestamp.is_none() {
            self.common_mut().timestamp = Some(now_millis());
        }

        let binary = self.to_binary()?;
        let proof = account.sign_message(&binary)?;
        self.common_mut().proofs.push(proof);

        Ok(self)
    }

    /// Hand this transaction to a node for broadcast.
    ///
    /// Pure pass-through: no local mutation, no retries. The node's answer is
    /// returned as this transaction type, typically a copy with `id` set.
    async fn broadcast_to<N>(self, node: &N) -> Result<Self, TxError>
    where
        N: PublicNode + Sync + ?Sized,
    {
        tracing::debug!(tx_type = Self::TYPE, "broadcasting transaction");
        let response = node.broadcast(self.into()).await?;
        Self::try_from(response)
    }
}

/// Current time in epoch milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
