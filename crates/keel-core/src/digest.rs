//! Digest pipelines used by the address and chain-id schemes.
//!
//! The network composes three primitives in two fixed pipelines. The address
//! scheme runs Keccak-256 over a BLAKE2b-256 digest; the chain-id scheme runs
//! SHA-256 over the same inner digest. The outer hashes differ on purpose and
//! the two pipelines must never be swapped for one another.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use sha2::{Digest, Sha256, Sha512};
use sha3::Keccak256;

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b with a 256-bit digest, the network's general-purpose hash.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

/// Keccak-256 (the pre-standard SHA-3 variant).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-512, used when stretching seeds into curve secrets.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha512::digest(data));
    out
}

/// Address-scheme pipeline: `keccak256(blake2b256(x))`.
///
/// The first 20 bytes form an address digest, the first 4 a checksum.
pub fn secure_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}

/// Chain-id-scheme pipeline: `sha256(blake2b256(x))`.
pub fn id_hash(data: &[u8]) -> [u8; 32] {
    sha256(&blake2b256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_value() {
        // sha256("foo")
        assert_eq!(
            hex::encode(sha256(b"foo")),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn test_keccak256_known_value() {
        // Keccak-256 of the empty string, not SHA3-256
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_blake2b256_known_value() {
        assert_eq!(
            hex::encode(blake2b256(b"")),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
    }

    #[test]
    fn test_pipelines_differ() {
        let data = b"pipeline input";
        assert_eq!(secure_hash(data), keccak256(&blake2b256(data)));
        assert_eq!(id_hash(data), sha256(&blake2b256(data)));
        assert_ne!(secure_hash(data), id_hash(data));
    }

    #[test]
    fn test_sha512_length() {
        assert_eq!(sha512(b"seed").len(), 64);
    }
}
