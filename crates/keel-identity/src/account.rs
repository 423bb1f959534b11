//! An account (aka wallet).
//!
//! A cryptographic identity: an address plus optional signing and encryption
//! keypairs. Accounts are immutable after construction; they are built by the
//! [`AccountFactory`](crate::AccountFactory) and never mutated.

use keel_core::crypto;
use keel_core::{
    CryptoError, EncryptKeyPair, EncryptPublicKey, KeyError, SignKeyPair, SignPublicKey, Signature,
};

use crate::address::Address;

/// A cryptographic identity on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    address: Address,
    sign: Option<SignKeyPair>,
    encrypt: Option<EncryptKeyPair>,
}

impl Account {
    pub(crate) fn new(
        address: Address,
        sign: Option<SignKeyPair>,
        encrypt: Option<EncryptKeyPair>,
    ) -> Self {
        Self {
            address,
            sign,
            encrypt,
        }
    }

    /// The account's address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The signing keypair, if present.
    pub fn sign_keys(&self) -> Option<&SignKeyPair> {
        self.sign.as_ref()
    }

    /// The encryption keypair, if present.
    pub fn encrypt_keys(&self) -> Option<&EncryptKeyPair> {
        self.encrypt.as_ref()
    }

    /// The public signing key, if present.
    pub fn public_sign_key(&self) -> Option<&SignPublicKey> {
        self.sign.as_ref().map(|pair| pair.public())
    }

    /// The public encryption key, if present.
    pub fn public_encrypt_key(&self) -> Option<&EncryptPublicKey> {
        self.encrypt.as_ref().map(|pair| pair.public())
    }

    /// Whether this account can produce signatures.
    pub fn can_sign(&self) -> bool {
        self.sign.as_ref().is_some_and(|pair| pair.is_full())
    }

    /// Sign a message with this account's secret signing key.
    pub fn sign_message(&self, message: &[u8]) -> Result<Signature, KeyError> {
        let secret = self
            .sign
            .as_ref()
            .and_then(|pair| pair.secret())
            .ok_or(KeyError::NoSecretSignKey)?;

        Ok(crypto::sign(secret, message))
    }

    /// Verify a signature over a message against this account's public
    /// signing key.
    ///
    /// A failed verification returns `Ok(false)`; only missing key material
    /// is an error.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<bool, KeyError> {
        let public = self.public_sign_key().ok_or(KeyError::NoPublicSignKey)?;
        Ok(crypto::verify(public, signature, message))
    }

    /// Encrypt a message for another account. The nonce is appended.
    pub fn encrypt_for(&self, recipient: &Account, message: &[u8]) -> Result<Vec<u8>, KeyError> {
        let secret = self
            .encrypt
            .as_ref()
            .and_then(|pair| pair.secret())
            .ok_or(KeyError::NoSecretEncryptKey)?;

        let public = recipient
            .public_encrypt_key()
            .ok_or(KeyError::NoRecipientEncryptKey)?;

        crypto::encrypt(secret, public, message)
    }

    /// Decrypt a message from another account.
    pub fn decrypt_from(&self, sender: &Account, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let secret = self
            .encrypt
            .as_ref()
            .and_then(|pair| pair.secret())
            .ok_or(KeyError::NoSecretEncryptKey)?;

        let public = sender
            .public_encrypt_key()
            .ok_or(KeyError::NoSenderEncryptKey)?;

        Ok(crypto::decrypt(secret, public, sealed)?)
    }
}
