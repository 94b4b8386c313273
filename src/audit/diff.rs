//! Change summaries between two serialized records

use serde_json::{Map, Value};

const MAX_STRING_LEN: usize = 40;

/// Describe top-level field changes, e.g. `amount: -12550 -> -13000`
///
/// Returns `None` when the values are equal.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(b), Value::Object(a)) => object_changes(b, a),
        _ if before != after => vec![format!("{} -> {}", render(before), render(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Names of the top-level fields that differ, in `before` order then added
pub fn changed_fields(before: &Value, after: &Value) -> Vec<String> {
    let (Value::Object(b), Value::Object(a)) = (before, after) else {
        return Vec::new();
    };

    let mut fields: Vec<String> = b
        .iter()
        .filter(|(key, value)| a.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    fields.extend(a.keys().filter(|key| !b.contains_key(*key)).cloned());
    fields
}

fn object_changes(before: &Map<String, Value>, after: &Map<String, Value>) -> Vec<String> {
    let mut changes = Vec::new();

    for (key, old) in before {
        match after.get(key) {
            Some(new) if new != old => {
                changes.push(format!("{}: {} -> {}", key, render(old), render(new)))
            }
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, render(old))),
        }
    }
    for (key, new) in after {
        if !before.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, render(new)));
        }
    }

    changes
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_LEN => {
            let head: String = s.chars().take(MAX_STRING_LEN - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_changed_fields_listed() {
        let before = json!({"description": "Taxi", "amount": -1500, "user": "K"});
        let after = json!({"description": "Taxi aeropuerto", "amount": -1500, "user": "K"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "description: \"Taxi\" -> \"Taxi aeropuerto\"");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"notes": "pagado a medias"});
        let after = json!({"paymentMethod": "yape"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("notes: \"pagado a medias\" -> (removed)"));
        assert!(diff.contains("paymentMethod: (added) -> \"yape\""));
    }

    #[test]
    fn test_equal_values_have_no_diff() {
        let value = json!({"isActive": true});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalars_and_collections() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");

        let diff = generate_diff(&json!({"goals": [1, 2]}), &json!({"goals": [1, 2, 3]})).unwrap();
        assert_eq!(diff, "goals: [2 items] -> [3 items]");
    }

    #[test]
    fn test_long_strings_are_truncated() {
        let before = json!({"notes": "a".repeat(100)});
        let after = json!({"notes": ""});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\" -> \"\""));
        assert!(diff.len() < 80);
    }

    #[test]
    fn test_changed_fields() {
        let before = json!({"cash": 50000, "savings": 420000, "checking": 54050});
        let after = json!({"cash": 50000, "savings": 500000, "checking": 54050});
        assert_eq!(changed_fields(&before, &after), vec!["savings"]);
        assert!(changed_fields(&json!(1), &json!(2)).is_empty());
    }
}
