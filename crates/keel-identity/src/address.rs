//! Network addresses.
//!
//! An address binds a public key to a network: one version byte, one network
//! byte, a 20-byte digest of the encryption-curve public key, and a 4-byte
//! checksum over the first 22 bytes. Both digests run through the
//! Keccak-over-BLAKE2b pipeline.

use std::fmt;
use std::str::FromStr;

use keel_core::crypto::convert_sign_to_encrypt;
use keel_core::digest::secure_hash;
use keel_core::{EncryptPublicKey, InvalidArgumentError, KeyError, KeyPair, SignPublicKey};

/// Version byte for standard accounts.
pub const ADDRESS_VERSION: u8 = 0x01;

/// Byte length of a raw address.
pub const ADDRESS_LENGTH: usize = 26;

/// The network an address is scoped to, identified by a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Custom(u8),
}

impl Network {
    /// The raw network byte embedded in addresses.
    pub const fn byte(self) -> u8 {
        match self {
            Network::Mainnet => b'W',
            Network::Testnet => b'T',
            Network::Custom(byte) => byte,
        }
    }
}

impl From<u8> for Network {
    fn from(byte: u8) -> Self {
        match byte {
            b'W' => Network::Mainnet,
            b'T' => Network::Testnet,
            other => Network::Custom(other),
        }
    }
}

/// A checksummed, versioned, network-scoped account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Derive an address from a public encryption key.
    pub fn from_encrypt_key(public: &EncryptPublicKey, network: Network) -> Self {
        let digest = secure_hash(public.as_bytes());

        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_VERSION;
        bytes[1] = network.byte();
        bytes[2..22].copy_from_slice(&digest[..20]);

        let checksum = secure_hash(&bytes[..22]);
        bytes[22..].copy_from_slice(&checksum[..4]);

        Self(bytes)
    }

    /// Derive an address from a public signing key.
    ///
    /// Addresses are always computed over the encryption-curve key, so the
    /// signing key is mapped onto its X25519 equivalent first.
    pub fn from_sign_key(public: &SignPublicKey, network: Network) -> Result<Self, KeyError> {
        let converted = convert_sign_to_encrypt(&KeyPair::public_only(*public))?;
        Ok(Self::from_encrypt_key(converted.public(), network))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// The embedded version byte.
    pub const fn version(&self) -> u8 {
        self.0[0]
    }

    /// The embedded network byte.
    pub const fn network_byte(&self) -> u8 {
        self.0[1]
    }

    /// The network this address is scoped to.
    pub fn network(&self) -> Network {
        Network::from(self.0[1])
    }

    /// Encode as base58.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = InvalidArgumentError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ADDRESS_LENGTH] =
            slice.try_into().map_err(|_| InvalidArgumentError::Malformed {
                subject: "address",
                reason: format!("expected {} bytes, got {}", ADDRESS_LENGTH, slice.len()),
            })?;

        if bytes[0] != ADDRESS_VERSION {
            return Err(InvalidArgumentError::Malformed {
                subject: "address",
                reason: format!("unknown version byte 0x{:02x}", bytes[0]),
            });
        }

        let checksum = secure_hash(&bytes[..22]);
        if bytes[22..] != checksum[..4] {
            return Err(InvalidArgumentError::Malformed {
                subject: "address",
                reason: "checksum mismatch".into(),
            });
        }

        Ok(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = InvalidArgumentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|_| InvalidArgumentError::BadEncoding {
                subject: "address",
                encoding: "base58",
            })?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::crypto::{create_encrypt_keys, create_sign_keys};

    #[test]
    fn test_address_layout() {
        let keys = create_encrypt_keys(&[0x42; 32]);
        let address = Address::from_encrypt_key(keys.public(), Network::Testnet);

        assert_eq!(address.version(), ADDRESS_VERSION);
        assert_eq!(address.network_byte(), b'T');
        assert_eq!(address.network(), Network::Testnet);
    }

    #[test]
    fn test_address_roundtrip_base58() {
        let keys = create_encrypt_keys(&[0x42; 32]);
        let address = Address::from_encrypt_key(keys.public(), Network::Mainnet);

        let text = address.to_base58();
        assert_eq!(text.parse::<Address>().unwrap(), address);
    }

    #[test]
    fn test_known_network_address_parses() {
        // Genuine testnet address from the reference network.
        let address: Address = "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1".parse().unwrap();
        assert_eq!(address.network(), Network::Testnet);
        assert_eq!(address.to_base58(), "3N3Cn2pYtqzj7N9pviSesNe8KG9Cmb718Y1");
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let keys = create_encrypt_keys(&[0x42; 32]);
        let address = Address::from_encrypt_key(keys.public(), Network::Testnet);

        let mut bytes = *address.as_bytes();
        bytes[25] ^= 0x01;
        assert!(Address::try_from(bytes.as_slice()).is_err());
    }

    #[test]
    fn test_non_base58_rejected() {
        let err = "not an address 0OIl".parse::<Address>().unwrap_err();
        assert_eq!(err.to_string(), "invalid address; is it base58 encoded?");
    }

    #[test]
    fn test_sign_and_encrypt_keys_derive_same_address() {
        let seed = [0x07; 32];
        let sign_keys = create_sign_keys(&seed);
        let encrypt_keys = create_encrypt_keys(&seed);

        let from_sign = Address::from_sign_key(sign_keys.public(), Network::Testnet).unwrap();
        let from_encrypt = Address::from_encrypt_key(encrypt_keys.public(), Network::Testnet);
        assert_eq!(from_sign, from_encrypt);
    }

    #[test]
    fn test_network_changes_address() {
        let keys = create_encrypt_keys(&[0x42; 32]);
        let mainnet = Address::from_encrypt_key(keys.public(), Network::Mainnet);
        let testnet = Address::from_encrypt_key(keys.public(), Network::Testnet);
        assert_ne!(mainnet, testnet);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_derived_address_validates_and_roundtrips(seed in any::<[u8; 32]>()) {
                let keys = create_encrypt_keys(&seed);
                let address = Address::from_encrypt_key(keys.public(), Network::Testnet);

                let parsed: Address = address.to_base58().parse().unwrap();
                prop_assert_eq!(parsed, address);
            }

            #[test]
            fn prop_both_key_kinds_agree(seed in any::<[u8; 32]>()) {
                let from_sign =
                    Address::from_sign_key(create_sign_keys(&seed).public(), Network::Mainnet)
                        .unwrap();
                let from_encrypt =
                    Address::from_encrypt_key(create_encrypt_keys(&seed).public(), Network::Mainnet);
                prop_assert_eq!(from_sign, from_encrypt);
            }
        }
    }
}
