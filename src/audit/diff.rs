//! Diff generation for audit logging
//!
//! Summarizes which envelope fields an update changed. Sealed or hashed
//! fields are reported as changed without their values.

use serde_json::Value;

/// Fields whose values never appear in a diff
const SENSITIVE_FIELDS: [&str; 2] = ["payload", "password"];

/// Generate a human-readable diff between two JSON values
///
/// Nested objects are reported with dotted paths (`file.size`). Returns `None`
/// when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str, changes: &mut Vec<String>) {
    if before == after {
        return;
    }

    if SENSITIVE_FIELDS.contains(&prefix) {
        changes.push(format!("{}: (changed)", prefix));
        return;
    }

    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let path = join_path(prefix, key);
                match after_obj.get(key) {
                    Some(after_val) => collect_changes(before_val, after_val, &path, changes),
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        path,
                        format_value(&path, before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    let path = join_path(prefix, key);
                    changes.push(format!(
                        "{}: (added) -> {}",
                        path,
                        format_value(&path, after_val)
                    ));
                }
            }
        }
        _ => changes.push(format!(
            "{}: {} -> {}",
            prefix,
            format_value(prefix, before),
            format_value(prefix, after)
        )),
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Format a JSON value for human-readable display
fn format_value(path: &str, value: &Value) -> String {
    if SENSITIVE_FIELDS.contains(&path) && !value.is_null() {
        return "(redacted)".to_string();
    }

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let truncated: String = s.chars().take(47).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"name": "x", "maxAccessCount": 5});
        let after = json!({"name": "x", "maxAccessCount": 10});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "maxAccessCount: 5 -> 10");
    }

    #[test]
    fn test_nested_change_uses_dotted_path() {
        let before = json!({"file": {"id": "f1", "size": 10}});
        let after = json!({"file": {"id": "f1", "size": 20}});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "file.size: 10 -> 20");
    }

    #[test]
    fn test_payload_change_is_not_revealed() {
        let before = json!({"payload": {"nonce": "aaa", "ciphertext": "bbb"}});
        let after = json!({"payload": {"nonce": "ccc", "ciphertext": "ddd"}});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "payload: (changed)");
    }

    #[test]
    fn test_added_password_is_redacted() {
        let before = json!({"disabled": false});
        let after = json!({"disabled": false, "password": "$argon2id$v=19$..."});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "password: (added) -> (redacted)");
    }

    #[test]
    fn test_field_removed() {
        let before = json!({"expirationDate": "2030-01-01T00:00:00Z"});
        let after = json!({});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("expirationDate: \"2030-01-01T00:00:00Z\" -> (removed)"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "accessCount": 1});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"a": 1, "b": 2, "c": null});
        let after = json!({"a": 10, "b": 2, "c": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> 10"));
        assert!(diff.contains("c: null -> true"));
        assert!(!diff.contains("b:"));
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"accessId": "a".repeat(100)});
        let after = json!({"accessId": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
