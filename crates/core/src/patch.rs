//! Serde helpers for PATCH-style partial updates.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Message for an explicit `null` on a field that cannot hold one.
pub const NULL_NOT_ALLOWED: &str = "This field may not be null.";

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]`:
///
/// - field missing      -> `None`
/// - field is `null`    -> `Some(None)`
/// - field has a value  -> `Some(Some(value))`
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional field that must not be explicitly `null`.
///
/// Use together with `#[serde(default)]` so a missing field stays `None`;
/// a `null` value is a deserialization error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom(NULL_NOT_ALLOWED)),
    }
}
