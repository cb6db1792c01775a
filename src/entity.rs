//! Helpers for working with entity records
//!
//! An entity record is a JSON object with at least an @id and an @type.
//! @type is polymorphic (string or list of strings); every check goes
//! through the normalized list form.

use serde_json::Value;

/// Extract @id from an entity
pub fn extract_id(entity: &Value) -> Option<&str> {
    entity.get("@id").and_then(|v| v.as_str())
}

/// Extract @type as a list of type names
pub fn extract_types(entity: &Value) -> Vec<String> {
    match entity.get("@type") {
        Some(Value::String(t)) => vec![t.clone()],
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => vec![],
    }
}

/// Check if an entity has a specific @type, by exact membership
pub fn has_type(entity: &Value, type_name: &str) -> bool {
    extract_types(entity).iter().any(|t| t == type_name)
}
