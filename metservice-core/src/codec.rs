//! Field codecs shared by every entity schema.
//!
//! The upstream API is inconsistent about numbers: the same logical value
//! shows up as `13` in one feed and `"13"` in another, sometimes across
//! releases of the same feed. Decoding therefore always accepts both the
//! native JSON form and a string holding the textual form. Encoding is
//! fixed per field: a field tagged with [`text`] is written as a string,
//! a field tagged with [`native`] as a plain JSON value.
//!
//! ```ignore
//! #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
//! pub max: Option<i64>,
//! ```

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value;
use std::fmt::Display;

/// How a present scalar is written back to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Native,
    Text,
}

/// A JSON scalar that may also arrive as a string.
pub trait Scalar: Sized + Serialize + DeserializeOwned + Display {
    /// Name used in mismatch messages.
    const KIND: &'static str;

    fn parse_text(text: &str) -> Option<Self>;
}

impl Scalar for i64 {
    const KIND: &'static str = "an integer";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "a number";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok().filter(|v: &f64| v.is_finite())
    }
}

impl Scalar for bool {
    const KIND: &'static str = "a boolean";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for String {
    const KIND: &'static str = "a string";

    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

/// Coerce one JSON value into `T`. `null` is absence, not an error.
pub fn decode<T: Scalar>(value: Value) -> Result<Option<T>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => T::parse_text(&text)
            .map(Some)
            .ok_or_else(|| mismatch::<T, _>(format!("found {text:?}"))),
        other => T::deserialize(other).map(Some).map_err(mismatch::<T, _>),
    }
}

fn mismatch<T: Scalar, E: Display>(detail: E) -> String {
    format!("expected {} or a string holding one: {detail}", T::KIND)
}

pub fn encode<T: Scalar, S: Serializer>(
    value: &Option<T>,
    encoding: Encoding,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match (value, encoding) {
        (None, _) => serializer.serialize_none(),
        (Some(v), Encoding::Native) => v.serialize(serializer),
        (Some(v), Encoding::Text) => serializer.collect_str(v),
    }
}

fn deserialize_scalar<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Scalar,
{
    let value = Value::deserialize(deserializer)?;
    decode(value).map_err(D::Error::custom)
}

/// Decode leniently, encode as a native JSON value.
pub mod native {
    use super::{Encoding, Scalar};
    use serde::{Deserializer, Serializer};

    pub fn serialize<T: Scalar, S: Serializer>(
        value: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::encode(value, Encoding::Native, serializer)
    }

    pub fn deserialize<'de, T: Scalar, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        super::deserialize_scalar(deserializer)
    }
}

/// Decode leniently, encode as a JSON string.
pub mod text {
    use super::{Encoding, Scalar};
    use serde::{Deserializer, Serializer};

    pub fn serialize<T: Scalar, S: Serializer>(
        value: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::encode(value, Encoding::Text, serializer)
    }

    pub fn deserialize<'de, T: Scalar, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        super::deserialize_scalar(deserializer)
    }
}

/// Sequences where `null` means "no entries".
pub mod seq {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let items = Option::<Vec<T>>::deserialize(deserializer)?;
        Ok(items.unwrap_or_default())
    }
}
