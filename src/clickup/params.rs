//! Request parameter maps and their query-string encoding.

use serde_json::{Map, Value};

/// Body or query parameters for one request. Absent fields are simply not in
/// the map; a `null` entry is treated the same way.
pub type Params = Map<String, Value>;

/// Flatten parameters into query pairs.
///
/// Arrays become repeated `key[]` pairs, which is how ClickUp expects list
/// filters such as `statuses[]` and `assignees[]`.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{}[]", key);
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), scalar_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }
    pairs
}

/// Drop `null` entries so they are never sent over the wire.
pub fn without_nulls(mut params: Params) -> Params {
    params.retain(|_, v| !v.is_null());
    params
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_scalars_use_plain_string_form() {
        let pairs = query_pairs(&params(json!({
            "archived": false,
            "page": 2,
            "order_by": "created"
        })));

        assert!(pairs.contains(&("archived".to_string(), "false".to_string())));
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("order_by".to_string(), "created".to_string())));
    }

    #[test]
    fn test_arrays_repeat_bracketed_key() {
        let pairs = query_pairs(&params(json!({"statuses": ["open", "in review"]})));

        assert_eq!(
            pairs,
            vec![
                ("statuses[]".to_string(), "open".to_string()),
                ("statuses[]".to_string(), "in review".to_string()),
            ]
        );
    }

    #[test]
    fn test_nulls_are_skipped() {
        let pairs = query_pairs(&params(json!({"page": null, "tags": [null, "bug"]})));
        assert_eq!(pairs, vec![("tags[]".to_string(), "bug".to_string())]);

        let cleaned = without_nulls(params(json!({"name": "x", "status": null})));
        assert_eq!(Value::Object(cleaned), json!({"name": "x"}));
    }
}
