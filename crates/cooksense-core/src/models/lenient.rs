// ABOUTME: Tolerant serde helpers for partially-formed records returned by the AI endpoints
// ABOUTME: Accept numbers or strings, treat null and empty values as absent, skip bad list items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The generation endpoint relays model output verbatim, so any field may be
//! missing, `null`, a number where a string was expected, or the reverse.
//! These helpers never fail on shape mismatches; they degrade to "absent".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Render a JSON number the way a person would write it (`5`, not `5.0`)
#[must_use]
pub fn number_to_string(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => {
            format!("{}", float as i64)
        }
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

/// Convert a scalar JSON value to a non-empty string
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_to_string(n)),
        _ => None,
    }
}

/// Convert a scalar JSON value to a number
#[must_use]
pub fn scalar_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Optional string accepting strings, numbers, `null` or a missing field
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Optional number accepting numbers or numeric strings
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_f64))
}

/// List of strings; `null` becomes empty, a lone scalar becomes a one-item list
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// List of structured items; entries that do not decode are dropped
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON
pub fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Optional structured object; anything that is not a decodable object is absent
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON
pub fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(object @ Value::Object(_)) => serde_json::from_value(object).ok(),
        _ => None,
    })
}
