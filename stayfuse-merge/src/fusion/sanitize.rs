//! Field value sanitization
//!
//! Pure, total functions applied to every supplier value before it enters the
//! canonical shape. Strings are trimmed; sequences lose their null and
//! empty-string elements while keeping the relative order of the rest; all
//! other shapes pass through unchanged.

use serde_json::Value;

/// Sanitize one supplier value
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !matches!(item, Value::Null))
                .filter(|item| item.as_str().map_or(true, |s| !s.is_empty()))
                .collect(),
        ),
        other => other,
    }
}

/// True when a sanitized value carries no information and must never
/// overwrite existing canonical data.
///
/// Numeric zero is deliberately NOT empty: a latitude of 0.0 or a destination
/// id of 0 is a legitimate contribution.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_trims_strings() {
        assert_eq!(sanitize(json!("  Beach Villas  ")), json!("Beach Villas"));
    }

    #[test]
    fn test_sanitize_drops_null_and_empty_list_elements() {
        let value = sanitize(json!(["Pool", null, "", "WiFi"]));
        assert_eq!(value, json!(["Pool", "WiFi"]));
    }

    #[test]
    fn test_sanitize_preserves_element_order() {
        let value = sanitize(json!(["c", null, "a", "", "b"]));
        assert_eq!(value, json!(["c", "a", "b"]));
    }

    #[test]
    fn test_sanitize_passes_other_types_through() {
        assert_eq!(sanitize(json!(5432)), json!(5432));
        assert_eq!(sanitize(json!({"lat": 1.2})), json!({"lat": 1.2}));
        assert_eq!(sanitize(json!(true)), json!(true));
    }

    #[test]
    fn test_emptiness_rule() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!(false)));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(0.0)));
        assert!(!is_empty(&json!("x")));
    }

    #[test]
    fn test_whitespace_only_string_becomes_empty() {
        let value = sanitize(json!("   "));
        assert!(is_empty(&value));
    }
}
