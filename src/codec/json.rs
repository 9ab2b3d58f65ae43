// ============================================================================
// JSON Codec
// Strict encoding, lenient decoding of Dec values
// ============================================================================
//
// Encoding always writes the canonical decimal text as a string. Decoding in
// human-readable formats also takes bare numbers, for data written by
// producers that serialized the field as a float or integer. Binary formats
// read the string form only.

use crate::numeric::Dec;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Error raised when JSON input does not hold a decimal value.
pub type DecodeError = serde_json::Error;

impl Serialize for Dec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Never a JSON number: keeps every digit and the canonical form
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(LenientVisitor)
        } else {
            // Binary formats: text only
            deserializer.deserialize_str(TextVisitor)
        }
    }
}

/// Accepts decimal text and JSON numbers.
struct LenientVisitor;

impl<'de> Visitor<'de> for LenientVisitor {
    type Value = Dec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string or a number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(de::Error::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        tracing::trace!("decoding float {} as Dec", v);
        Dec::from_f64(v).map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec::from(v))
    }
}

/// Accepts decimal text only.
struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Dec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(de::Error::custom)
    }
}

/// Encode as a JSON string literal, e.g. `"3.141592653589793"`.
///
/// # Errors
/// Propagates serializer errors; a `Dec` itself always encodes.
pub fn encode(value: &Dec) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decode from a JSON string or number.
///
/// # Errors
/// Returns a `DecodeError` for other JSON types or malformed decimal text.
pub fn decode(json: &str) -> Result<Dec, DecodeError> {
    serde_json::from_str(json)
}
