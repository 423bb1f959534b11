//! The account factory.
//!
//! Derives deterministic seeds from passphrases, builds keypairs, and
//! reconstructs accounts from externally supplied key material. Each factory
//! owns its own incrementing nonce; two factories never share nonce state.

use rand::Rng;

use keel_core::crypto::{
    convert_sign_to_encrypt, create_encrypt_keys, create_sign_keys, public_encrypt_key,
    public_sign_key,
};
use keel_core::digest::{secure_hash, sha256};
use keel_core::{
    EncryptKeyPair, EncryptPublicKey, EncryptSecretKey, KeyError, KeyPair, SignKeyPair,
    SignPublicKey, SignSecretKey,
};

use crate::account::Account;
use crate::address::{Address, Network};
use crate::error::InvalidAccountError;

/// Externally supplied key material for [`AccountFactory::create`].
///
/// Any combination may be given; the factory derives what is missing and
/// validates what is redundant.
#[derive(Debug, Clone, Default)]
pub struct AccountKeys {
    pub sign_secret: Option<SignSecretKey>,
    pub sign_public: Option<SignPublicKey>,
    pub encrypt_secret: Option<EncryptSecretKey>,
    pub encrypt_public: Option<EncryptPublicKey>,
    pub address: Option<Address>,
}

/// Creates new accounts (aka wallets) for one network.
#[derive(Debug, Clone)]
pub struct AccountFactory {
    network: Network,
    nonce: u32,
}

impl AccountFactory {
    /// Create a factory with a random starting nonce in `0..=0xFFFF`.
    pub fn new(network: Network) -> Self {
        let nonce = rand::thread_rng().gen_range(0..=0xFFFFu32);
        Self { network, nonce }
    }

    /// Create a factory with a pinned starting nonce, for reproducible
    /// derivations.
    pub const fn with_nonce(network: Network, nonce: u32) -> Self {
        Self { network, nonce }
    }

    /// The network this factory derives addresses for.
    pub fn network(&self) -> Network {
        self.network
    }

    fn next_nonce(&mut self) -> u32 {
        let nonce = self.nonce;
        self.nonce = self.nonce.wrapping_add(1);
        nonce
    }

    /// Derive a 32-byte account seed from a passphrase.
    ///
    /// Pipeline: `sha256( keccak256( blake2b256( u32_le(nonce) ‖ passphrase ) ) )`.
    /// The nonce auto-increments, so repeated derivations from the same
    /// factory yield distinct seeds.
    pub fn create_account_seed(&mut self, passphrase: &str) -> [u8; 32] {
        let nonce = self.next_nonce();

        let mut base = Vec::with_capacity(4 + passphrase.len());
        base.extend_from_slice(&nonce.to_le_bytes());
        base.extend_from_slice(passphrase.as_bytes());

        sha256(&secure_hash(&base))
    }

    /// Derive the address for a public signing key on this factory's network.
    pub fn address_from_sign_key(&self, public: &SignPublicKey) -> Result<Address, KeyError> {
        Address::from_sign_key(public, self.network)
    }

    /// Derive the address for a public encryption key on this factory's
    /// network.
    pub fn address_from_encrypt_key(&self, public: &EncryptPublicKey) -> Address {
        Address::from_encrypt_key(public, self.network)
    }

    /// Create a new account from a passphrase.
    pub fn seed(&mut self, passphrase: &str) -> Account {
        let seed = self.create_account_seed(passphrase);

        let sign = create_sign_keys(&seed);
        let encrypt = create_encrypt_keys(&seed);
        let address = Address::from_encrypt_key(encrypt.public(), self.network);

        Account::new(address, Some(sign), Some(encrypt))
    }

    /// Reconstruct an account from externally supplied key material.
    ///
    /// Derives missing halves, checks every redundant piece for consistency,
    /// and auto-derives encryption keys when only signing keys are given.
    pub fn create(&self, keys: AccountKeys) -> Result<Account, InvalidAccountError> {
        let sign = Self::calc_sign_keys(&keys)?;
        let mut encrypt = Self::calc_encrypt_keys(&keys)?;

        if encrypt.is_none() {
            if let Some(sign) = &sign {
                encrypt = Some(convert_sign_to_encrypt(sign)?);
            }
        }

        let address = self.calc_address(keys.address, sign.as_ref(), encrypt.as_ref())?;
        Ok(Account::new(address, sign, encrypt))
    }

    /// Create a verification-only account from public keys.
    pub fn create_public(
        &self,
        sign: Option<SignPublicKey>,
        encrypt: Option<EncryptPublicKey>,
    ) -> Result<Account, InvalidAccountError> {
        self.create(AccountKeys {
            sign_public: sign,
            encrypt_public: encrypt,
            ..AccountKeys::default()
        })
    }

    /// Create a full account from a secret signing key alone.
    pub fn create_from_sign_secret(
        &self,
        secret: SignSecretKey,
    ) -> Result<Account, InvalidAccountError> {
        self.create(AccountKeys {
            sign_secret: Some(secret),
            ..AccountKeys::default()
        })
    }

    fn calc_sign_keys(keys: &AccountKeys) -> Result<Option<SignKeyPair>, InvalidAccountError> {
        match (keys.sign_secret.as_ref(), keys.sign_public.as_ref()) {
            (Some(secret), supplied) => {
                let public = public_sign_key(secret);
                if supplied.is_some_and(|given| *given != public) {
                    return Err(InvalidAccountError::KeyMismatch { kind: "sign" });
                }
                Ok(Some(KeyPair::full(public, secret.clone())))
            }
            (None, Some(public)) => Ok(Some(KeyPair::public_only(*public))),
            (None, None) => Ok(None),
        }
    }

    fn calc_encrypt_keys(keys: &AccountKeys) -> Result<Option<EncryptKeyPair>, InvalidAccountError> {
        match (keys.encrypt_secret.as_ref(), keys.encrypt_public.as_ref()) {
            (Some(secret), supplied) => {
                let public = public_encrypt_key(secret);
                if supplied.is_some_and(|given| *given != public) {
                    return Err(InvalidAccountError::KeyMismatch { kind: "encrypt" });
                }
                Ok(Some(KeyPair::full(public, secret.clone())))
            }
            (None, Some(public)) => Ok(Some(KeyPair::public_only(*public))),
            (None, None) => Ok(None),
        }
    }

    fn calc_address(
        &self,
        supplied: Option<Address>,
        sign: Option<&SignKeyPair>,
        encrypt: Option<&EncryptKeyPair>,
    ) -> Result<Address, InvalidAccountError> {
        let from_sign = sign
            .map(|pair| Address::from_sign_key(pair.public(), self.network))
            .transpose()?;
        let from_encrypt =
            encrypt.map(|pair| Address::from_encrypt_key(pair.public(), self.network));

        if let (Some(a), Some(b)) = (&from_sign, &from_encrypt) {
            if a != b {
                return Err(InvalidAccountError::SignEncryptMismatch);
            }
        }

        let derived = from_sign.or(from_encrypt);

        match (supplied, derived) {
            (Some(address), Some(derived)) if address != derived => {
                Err(InvalidAccountError::AddressMismatch)
            }
            (Some(address), _) => Ok(address),
            (None, Some(derived)) => Ok(derived),
            (None, None) => Err(InvalidAccountError::Empty),
        }
    }
}
