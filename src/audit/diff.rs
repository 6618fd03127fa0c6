//! Change summaries for audit entries
//!
//! Compares the serialized record before and after an edit and lists the
//! fields that differ.

use serde_json::Value;

/// Describe the top-level fields that changed between two records
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Long descriptions would swamp the log line
            if s.chars().count() > 40 {
                let head: String = s.chars().take(37).collect();
                format!("\"{}...\"", head)
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
    fn test_amount_change() {
        let before = json!({"date": "2024-01-02", "amount": 7.0, "category": "Food"});
        let after = json!({"date": "2024-01-02", "amount": 9.5, "category": "Food"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 7.0 -> 9.5");
    }

    #[test]
    fn test_string_change() {
        let before = json!({"category": "Food"});
        let after = json!({"category": "Restaurants"});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "category: \"Food\" -> \"Restaurants\""
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"description": "old"});
        let after = json!({"category": "Other"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("description: \"old\" -> (removed)"));
        assert!(diff.contains("category: (added) -> \"Other\""));
    }

    #[test]
    fn test_no_change() {
        let value = json!({"amount": 1.0});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_string_truncated() {
        let before = json!({"description": "x".repeat(60)});
        let after = json!({"description": "y"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\" -> \"y\""));
    }
}
