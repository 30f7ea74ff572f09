//! Field deserializers for loosely-typed plan JSON.
//!
//! Plans are written by language models and stored as free-form JSON. Blank values (`null`,
//! `false`, `0`, `""`) mean "not set", and a field of the wrong shape is read as absent instead
//! of failing the whole plan.

use chrono::{DateTime, NaiveDate};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::types::Scalar;

/// `null`, `false`, `0` and `""`: the values a plan uses to say "nothing here".
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Numbers and booleans are written out as text. Blank values, arrays and objects are `None`.
pub fn text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    if is_blank(&value) {
        return Ok(None);
    }
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(Scalar::Number(n).to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Numbers and strings are kept as they are, `true` becomes the text `true`.
pub fn scalar<'de, D>(d: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    if is_blank(&value) {
        return Ok(None);
    }
    Ok(match value {
        Value::Number(n) => Some(Scalar::Number(n)),
        Value::String(s) => Some(Scalar::Text(s)),
        Value::Bool(b) => Some(Scalar::Text(b.to_string())),
        _ => None,
    })
}

/// A record that is present whenever its value isn't blank.
///
/// Objects are decoded as `T`. Any other non-blank value stands for a record with nothing filled in.
pub fn record<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(d)?;
    if is_blank(&value) {
        return Ok(None);
    }
    match value {
        Value::Object(_) => Ok(Some(serde_json::from_value(value).unwrap_or_default())),
        _ => Ok(Some(T::default())),
    }
}

/// Keeps the elements that fit `T` and drops the rest.
///
/// Anything other than an array is `None`.
pub fn sequence<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(values) = Value::deserialize(d)? else {
        return Ok(None);
    };

    let items = values
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    Ok(Some(items))
}

/// Accepts `2024-05-06` as well as full RFC3339 timestamps, of which only the date is kept.
pub fn parse_date(v: &str) -> Option<NaiveDate> {
    let v = v.trim();
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(v).ok().map(|dt| dt.date_naive()))
}
