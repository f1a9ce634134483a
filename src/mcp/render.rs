//! Plain-text summaries of ClickUp JSON.
//!
//! Rendering never fails: a field that is missing or of an unexpected shape
//! shows up as [`UNKNOWN`].

use serde_json::Value;

pub const UNKNOWN: &str = "Unknown";

/// Fields tried, in order, when looking for a display name.
const NAME_FIELDS: [&str; 5] = ["name", "username", "email", "title", "label"];

/// Text form of a scalar field, or [`UNKNOWN`].
pub fn field(value: &Value, key: &str) -> String {
    value.get(key).map_or_else(|| UNKNOWN.to_string(), scalar)
}

/// Text form of a nested field such as `status.status`.
pub fn path(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .try_fold(value, |current, key| current.get(key))
        .map_or_else(|| UNKNOWN.to_string(), scalar)
}

pub fn id(value: &Value) -> String {
    field(value, "id")
}

/// Best human label: a name-like field, then the identifier.
pub fn display_name(value: &Value) -> String {
    name_field(value)
        .map(str::to_string)
        .unwrap_or_else(|| id(value))
}

/// `Name (ID: id)`
pub fn summary(value: &Value) -> String {
    format!("{} (ID: {})", display_name(value), id(value))
}

/// `Created task: Name (ID: id)`
pub fn created(kind: &str, value: &Value) -> String {
    format!("Created {}: {}", kind, summary(value))
}

/// `Updated task: Name (ID: id)`
pub fn updated(kind: &str, value: &Value) -> String {
    format!("Updated {}: {}", kind, summary(value))
}

/// `Deleted task: Name (ID: id)`. Deletes usually answer with an empty
/// body, in which case the requested id doubles as the name.
pub fn deleted(kind: &str, id: &str, response: &Value) -> String {
    let name = name_field(response).unwrap_or(id);
    format!("Deleted {}: {} (ID: {})", kind, name, id)
}

/// `- Name (ID: id)`
pub fn bullet(value: &Value) -> String {
    format!("- {}", summary(value))
}

/// Heading plus one bullet per element, or `No <plural> found.`
pub fn listing<F>(heading: &str, plural: &str, items: &Value, line: F) -> String
where
    F: Fn(&Value) -> String,
{
    let items = match items {
        Value::Array(items) => items.as_slice(),
        Value::Null => &[],
        other => std::slice::from_ref(other),
    };

    if items.is_empty() {
        return format!("No {} found.", plural);
    }

    let lines: Vec<String> = items.iter().map(line).collect();
    format!("{}:\n{}", heading, lines.join("\n"))
}

/// Heading plus the standard bullet per element.
pub fn bullets(heading: &str, plural: &str, items: &Value) -> String {
    listing(heading, plural, items, bullet)
}

fn name_field(value: &Value) -> Option<&str> {
    NAME_FIELDS
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_prefers_name() {
        let value = json!({"id": "9", "name": "Write spec", "username": "ada"});
        assert_eq!(summary(&value), "Write spec (ID: 9)");
    }

    #[test]
    fn test_display_name_fallback_order() {
        assert_eq!(display_name(&json!({"id": 1, "username": "ada"})), "ada");
        assert_eq!(display_name(&json!({"id": 1, "email": "a@b.c"})), "a@b.c");
        assert_eq!(display_name(&json!({"id": 42})), "42");
        assert_eq!(display_name(&json!({"name": ""})), UNKNOWN);
    }

    #[test]
    fn test_missing_fields_render_unknown() {
        assert_eq!(summary(&json!({})), "Unknown (ID: Unknown)");
        assert_eq!(field(&json!({"id": {"nested": true}}), "id"), UNKNOWN);
        assert_eq!(path(&json!({"status": {}}), &["status", "status"]), UNKNOWN);
        assert_eq!(
            path(&json!({"status": {"status": "open"}}), &["status", "status"]),
            "open"
        );
    }

    #[test]
    fn test_numeric_ids() {
        assert_eq!(summary(&json!({"id": 183, "username": "ada"})), "ada (ID: 183)");
    }

    #[test]
    fn test_listing() {
        let teams = json!([{"id": "1", "name": "Acme"}, {"id": "2"}]);
        assert_eq!(
            bullets("Available teams", "teams", &teams),
            "Available teams:\n- Acme (ID: 1)\n- 2 (ID: 2)"
        );
        assert_eq!(bullets("Available teams", "teams", &json!([])), "No teams found.");
        assert_eq!(bullets("Available teams", "teams", &Value::Null), "No teams found.");
    }

    #[test]
    fn test_entity_lines() {
        let task = json!({"id": "9", "name": "Write spec"});
        assert_eq!(created("task", &task), "Created task: Write spec (ID: 9)");
        assert_eq!(updated("task", &task), "Updated task: Write spec (ID: 9)");
        assert_eq!(deleted("task", "9", &json!({})), "Deleted task: 9 (ID: 9)");
        assert_eq!(
            deleted("goal", "g1", &json!({"name": "Ship"})),
            "Deleted goal: Ship (ID: g1)"
        );
    }
}
