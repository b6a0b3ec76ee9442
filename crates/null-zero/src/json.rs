//! JSON codec and `serde` integration.
//!
//! Decoding accepts `null` or an unsigned integer literal. Encoding never
//! emits `null`: an absent value is written as `0`, so
//! `absent -> JSON -> decode` comes back as a present zero.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Error;
use crate::uint::{Uint, TYPE_NAME};

/// Field name reported when a number is outside the `u64` domain.
const FIELD_NAME: &str = "Uint";

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Uint {
    /// Decodes one JSON value into the receiver.
    ///
    /// - `null` decodes to absent.
    /// - A non-negative integer decodes to a present value, `0` included.
    /// - Any other number or JSON type yields [`Error::TypeMismatch`].
    /// - Malformed input yields [`Error::Syntax`] with the parser's error.
    ///
    /// On error the receiver is left absent.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), Error> {
        self.clear();
        let value: Value = serde_json::from_slice(data).map_err(|err| {
            tracing::debug!(error = %err, "malformed JSON for zero.Uint");
            err
        })?;
        match value {
            Value::Null => Ok(()),
            Value::Number(n) => match n.as_u64() {
                Some(v) => {
                    self.set_valid(v);
                    Ok(())
                }
                None => {
                    tracing::debug!(number = %n, "JSON number outside the u64 domain");
                    Err(Error::type_mismatch(format!("number {n}"), Some(FIELD_NAME)))
                }
            },
            other => {
                let kind = json_kind(&other);
                tracing::debug!(kind, "unexpected JSON type for zero.Uint");
                Err(Error::type_mismatch(kind, None))
            }
        }
    }

    /// Decodes a fresh instance from JSON bytes.
    ///
    /// ```
    /// use null_zero::Uint;
    ///
    /// assert_eq!(Uint::from_json(b"12345").unwrap(), Uint::new(12345, true));
    /// assert_eq!(Uint::from_json(b"null").unwrap(), Uint::absent());
    /// assert!(Uint::from_json(b"true").unwrap_err().is_type_mismatch());
    /// ```
    pub fn from_json(data: &[u8]) -> Result<Self, Error> {
        let mut u = Uint::default();
        u.unmarshal_json(data)?;
        Ok(u)
    }

    /// Encodes the value as a JSON number; absent encodes as `0`.
    pub fn marshal_json(&self) -> Vec<u8> {
        self.marshal_text()
    }
}

impl Serialize for Uint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value_or_zero())
    }
}

struct UintVisitor;

impl<'de> Visitor<'de> for UintVisitor {
    type Value = Uint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "null or an unsigned integer for {TYPE_NAME}")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Uint, E> {
        Ok(Uint::absent())
    }

    fn visit_none<E: de::Error>(self) -> Result<Uint, E> {
        Ok(Uint::absent())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Uint, D::Error> {
        deserializer.deserialize_any(UintVisitor)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uint, E> {
        Ok(Uint::new(v, true))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uint, E> {
        u64::try_from(v)
            .map(|v| Uint::new(v, true))
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Uint, E> {
        u64::try_from(v)
            .map(|v| Uint::new(v, true))
            .map_err(|_| E::invalid_value(Unexpected::Other("128-bit integer"), &self))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Uint, E> {
        u64::try_from(v)
            .map(|v| Uint::new(v, true))
            .map_err(|_| E::invalid_value(Unexpected::Other("128-bit integer"), &self))
    }
}

impl<'de> Deserialize<'de> for Uint {
    /// Goes through `deserialize_option` so that `null` and an omitted struct
    /// field both land in `visit_none`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(UintVisitor)
    }
}
