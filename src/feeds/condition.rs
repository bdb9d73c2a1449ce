//! External condition lookup (OpenWeatherMap current weather JSON).
//!
//! The Hong Kong feeds carry no reliable machine-readable condition, so the
//! coded condition comes from a JSON API instead. Only the `weather` array
//! is read:
//!
//! ```json
//! {"weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]}
//! ```
//!
//! When the array lists several conditions the **last** one is used.

use crate::error::SourceError;
use crate::models::Condition;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: Option<u32>,
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

/// Parse a JSON body and map its last `weather` entry to a [`Condition`].
///
/// # Errors
///
/// - [`SourceError::Parse`] when the body is not JSON
/// - [`SourceError::MissingData`] when `weather` is absent, not an array,
///   empty, or its last entry is not a condition object
pub fn extract(body: &str) -> Result<Condition, SourceError> {
    let payload: Value = serde_json::from_str(body)?;
    extract_value(&payload)
}

/// Map an already-parsed payload to a [`Condition`].
pub fn extract_value(payload: &Value) -> Result<Condition, SourceError> {
    let entries = payload
        .get("weather")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::MissingData("no `weather` array in response".to_string()))?;

    let last = entries
        .last()
        .ok_or_else(|| SourceError::MissingData("`weather` array is empty".to_string()))?;

    let condition = OwCondition::deserialize(last).map_err(|e| {
        SourceError::MissingData(format!("`weather` entry is not a condition: {e}"))
    })?;

    Ok(Condition {
        id: condition.id,
        name: condition.main,
        description: condition.description,
        icon: condition.icon,
    })
}
