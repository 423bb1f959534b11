//! Helpers for the flat data interchange shape.
//!
//! `from_data` and `json_serialize` speak a plain field-name-to-value
//! mapping. Field names and presence rules are part of the network contract,
//! so parsing is explicit here rather than derived: missing keys are
//! collected and reported in a single message, and the type tag is checked
//! separately after that.

use serde_json::{Map, Value};

use keel_core::{Encoding, InvalidArgumentError, SignPublicKey, Signature};
use keel_identity::Address;

use crate::common::TxCommon;

pub(crate) fn as_object(data: &Value) -> Result<&Map<String, Value>, InvalidArgumentError> {
    data.as_object().ok_or_else(|| InvalidArgumentError::Malformed {
        subject: "transaction data",
        reason: "expected an object".into(),
    })
}

/// Check that every required key is present, reporting all misses at once.
pub(crate) fn require_keys(
    data: &Map<String, Value>,
    keys: &[&str],
) -> Result<(), InvalidArgumentError> {
    let missing: Vec<&str> = keys
        .iter()
        .filter(|key| !data.contains_key(**key))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InvalidArgumentError::MissingKeys {
            keys: missing.join(", "),
        })
    }
}

/// Check that the data's type tag matches the expected transaction type.
pub(crate) fn assert_type(
    data: &Map<String, Value>,
    expected: u8,
) -> Result<(), InvalidArgumentError> {
    let got = data
        .get("type")
        .and_then(Value::as_i64)
        .ok_or_else(|| InvalidArgumentError::Malformed {
            subject: "type",
            reason: "expected an integer".into(),
        })?;

    if got == i64::from(expected) {
        Ok(())
    } else {
        Err(InvalidArgumentError::WrongType { got, expected })
    }
}

pub(crate) fn str_field<'a>(
    data: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, InvalidArgumentError> {
    data.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| InvalidArgumentError::Malformed {
            subject: key,
            reason: "expected a string".into(),
        })
}

pub(crate) fn opt_str_field<'a>(
    data: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a str>, InvalidArgumentError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| InvalidArgumentError::Malformed {
                subject: key,
                reason: "expected a string".into(),
            }),
    }
}

pub(crate) fn u64_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<u64, InvalidArgumentError> {
    data.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| InvalidArgumentError::Malformed {
            subject: key,
            reason: "expected an unsigned integer".into(),
        })
}

pub(crate) fn opt_u64_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<u64>, InvalidArgumentError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| InvalidArgumentError::Malformed {
                subject: key,
                reason: "expected an unsigned integer".into(),
            }),
    }
}

pub(crate) fn i64_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<i64, InvalidArgumentError> {
    data.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| InvalidArgumentError::Malformed {
            subject: key,
            reason: "expected an integer".into(),
        })
}

pub(crate) fn u32_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<u32, InvalidArgumentError> {
    let value = u64_field(data, key)?;
    u32::try_from(value).map_err(|_| InvalidArgumentError::Malformed {
        subject: key,
        reason: "out of range for a 32-bit integer".into(),
    })
}

pub(crate) fn u8_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<u8, InvalidArgumentError> {
    let value = u64_field(data, key)?;
    u8::try_from(value).map_err(|_| InvalidArgumentError::Malformed {
        subject: key,
        reason: "out of range for an 8-bit integer".into(),
    })
}

pub(crate) fn address_field(
    data: &Map<String, Value>,
    key: &'static str,
    subject: &'static str,
) -> Result<Address, InvalidArgumentError> {
    str_field(data, key)?
        .parse()
        .map_err(|_| InvalidArgumentError::BadEncoding {
            subject,
            encoding: "base58",
        })
}

fn proofs_field(data: &Map<String, Value>) -> Result<Vec<Signature>, InvalidArgumentError> {
    let list = data
        .get("proofs")
        .and_then(Value::as_array)
        .ok_or_else(|| InvalidArgumentError::Malformed {
            subject: "proofs",
            reason: "expected an array".into(),
        })?;

    list.iter()
        .map(|value| {
            let text = value.as_str().ok_or_else(|| InvalidArgumentError::Malformed {
                subject: "proofs",
                reason: "expected an array of strings".into(),
            })?;
            Signature::from_base58(text).map_err(|_| InvalidArgumentError::BadEncoding {
                subject: "proof",
                encoding: "base58",
            })
        })
        .collect()
}

/// Parse the fields every transaction type shares. All of them are required
/// in interchange data except `id` and `height`, which are copied verbatim
/// when present and left unset otherwise.
pub(crate) fn common_from_data(data: &Map<String, Value>) -> Result<TxCommon, InvalidArgumentError> {
    let sender = address_field(data, "sender", "sender address")?;
    let sender_public_key = SignPublicKey::from_base58(str_field(data, "senderPublicKey")?)
        .map_err(|_| InvalidArgumentError::BadEncoding {
            subject: "senderPublicKey",
            encoding: "base58",
        })?;

    Ok(TxCommon {
        version: u8_field(data, "version")?,
        sender: Some(sender),
        sender_public_key: Some(sender_public_key),
        timestamp: Some(i64_field(data, "timestamp")?),
        fee: u64_field(data, "fee")?,
        proofs: proofs_field(data)?,
        id: opt_str_field(data, "id")?.map(str::to_owned),
        height: opt_u64_field(data, "height")?,
    })
}

/// Write the shared fields into an interchange map. `id` and `height` are
/// emitted only when set.
pub(crate) fn common_to_json(common: &TxCommon, map: &mut Map<String, Value>) {
    map.insert("version".into(), common.version.into());

    if let Some(sender) = &common.sender {
        map.insert("sender".into(), sender.to_base58().into());
    }
    if let Some(key) = &common.sender_public_key {
        map.insert("senderPublicKey".into(), key.to_base58().into());
    }
    if let Some(timestamp) = common.timestamp {
        map.insert("timestamp".into(), timestamp.into());
    }

    map.insert("fee".into(), common.fee.into());
    map.insert(
        "proofs".into(),
        Value::Array(
            common
                .proofs
                .iter()
                .map(|proof| proof.to_base58().into())
                .collect(),
        ),
    );

    if let Some(id) = &common.id {
        map.insert("id".into(), id.clone().into());
    }
    if let Some(height) = common.height {
        map.insert("height".into(), height.into());
    }
}

/// Decode an optional content hash field from its interchange encoding.
pub(crate) fn opt_hash_field(
    data: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<Vec<u8>>, InvalidArgumentError> {
    opt_str_field(data, key)?
        .map(|text| Encoding::Base58.decode(text, "hash"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_keys_reports_every_miss_at_once() {
        let data = json!({"type": 17, "fee": 1});
        let object = as_object(&data).unwrap();

        let err = require_keys(object, &["party", "version", "fee", "proofs"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid data, missing keys: party, version, proofs"
        );
    }

    #[test]
    fn test_assert_type_mismatch_names_both_tags() {
        let data = json!({"type": 99});
        let object = as_object(&data).unwrap();

        let err = assert_type(object, 17).unwrap_err();
        assert_eq!(err.to_string(), "invalid type 99, should be 17");
    }

    #[test]
    fn test_opt_fields_treat_null_as_absent() {
        let data = json!({"id": null, "height": null});
        let object = as_object(&data).unwrap();

        assert_eq!(opt_str_field(object, "id").unwrap(), None);
        assert_eq!(opt_u64_field(object, "height").unwrap(), None);
    }

    #[test]
    fn test_non_object_data_rejected() {
        assert!(as_object(&json!([1, 2, 3])).is_err());
    }
}
