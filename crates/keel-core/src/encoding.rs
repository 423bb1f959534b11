//! Text encodings used at the library boundary.
//!
//! The client itself only ever works with raw bytes; base58, base64, and hex
//! appear where byte strings cross the API boundary (displayed addresses and
//! keys, externally supplied content hashes, data interchange).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::InvalidArgumentError;

/// Selector for a boundary text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Base58,
    Base64,
    Hex,
}

impl Encoding {
    /// Name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Base58 => "base58",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
        }
    }

    /// Encode raw bytes to text.
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Encoding::Base58 => bs58::encode(data).into_string(),
            Encoding::Base64 => BASE64.encode(data),
            Encoding::Hex => hex::encode(data),
        }
    }

    /// Decode text to raw bytes.
    pub fn decode(self, text: &str, subject: &'static str) -> Result<Vec<u8>, InvalidArgumentError> {
        let decoded = match self {
            Encoding::Base58 => bs58::decode(text).into_vec().ok(),
            Encoding::Base64 => BASE64.decode(text).ok(),
            Encoding::Hex => hex::decode(text).ok(),
        };

        decoded.ok_or(InvalidArgumentError::BadEncoding {
            subject,
            encoding: self.name(),
        })
    }
}
