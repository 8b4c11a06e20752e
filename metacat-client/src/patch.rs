//! Structural diff between two JSON snapshots as RFC 6902 operations.
//!
//! Edits are sent to the server as the difference between the last-known
//! server copy and the locally edited copy, never as the full object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One JSON-patch operation. Only the kinds the diff produces are modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. } => path,
        }
    }
}

/// Computes the operations turning one snapshot into another.
pub trait StructuralDiff: Send + Sync {
    fn json_patch_diff(&self, old: &Value, new: &Value) -> Vec<PatchOperation>;
}

/// In-crate diff using `compare`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPatchDiff;

impl StructuralDiff for JsonPatchDiff {
    fn json_patch_diff(&self, old: &Value, new: &Value) -> Vec<PatchOperation> {
        compare(old, new)
    }
}

/// Diff two serializable entities.
pub fn diff_entities<T: Serialize>(
    old: &T,
    new: &T,
) -> Result<Vec<PatchOperation>, serde_json::Error> {
    let old = serde_json::to_value(old)?;
    let new = serde_json::to_value(new)?;
    Ok(compare(&old, &new))
}

/// Overlay the top-level keys of a PATCH response onto `current`.
///
/// Keys absent from the response keep their local value; keys listed in
/// `protected` are never overwritten. A response that is not an object
/// leaves `current` unchanged.
pub fn merge_response<T>(
    current: &T,
    response: &Value,
    protected: &[&str],
) -> Result<T, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(current)?;
    if let (Value::Object(target), Value::Object(fields)) = (&mut merged, response) {
        for (key, value) in fields {
            if !protected.contains(&key.as_str()) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    serde_json::from_value(merged)
}

/// Operations that turn `old` into `new`.
///
/// Existing keys are visited last-to-first so array removals keep earlier
/// indices valid; new keys are then added in order.
pub fn compare(old: &Value, new: &Value) -> Vec<PatchOperation> {
    let mut ops = Vec::new();
    match (old, new) {
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
            generate(old, new, "", &mut ops)
        }
        _ if old != new => ops.push(PatchOperation::Replace {
            path: String::new(),
            value: new.clone(),
        }),
        _ => {}
    }
    ops
}

fn generate(old: &Value, new: &Value, path: &str, ops: &mut Vec<PatchOperation>) {
    if old == new {
        return;
    }
    let old_entries = entries(old);
    let new_entries = entries(new);
    let mut deleted = false;

    for (key, old_value) in old_entries.iter().rev() {
        let child = format!("{}/{}", path, escape_path_component(key));
        match lookup(new, key) {
            Some(new_value) if same_container_kind(old_value, new_value) => {
                generate(old_value, new_value, &child, ops);
            }
            Some(new_value) => {
                if *old_value != new_value {
                    ops.push(PatchOperation::Replace {
                        path: child,
                        value: new_value.clone(),
                    });
                }
            }
            None => {
                ops.push(PatchOperation::Remove { path: child });
                deleted = true;
            }
        }
    }

    if !deleted && new_entries.len() == old_entries.len() {
        return;
    }

    for (key, new_value) in &new_entries {
        if lookup(old, key).is_none() {
            ops.push(PatchOperation::Add {
                path: format!("{}/{}", path, escape_path_component(key)),
                value: (*new_value).clone(),
            });
        }
    }
}

/// Both objects or both arrays.
fn same_container_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    )
}

fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => object_entries(map),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn object_entries(map: &Map<String, Value>) -> Vec<(String, &Value)> {
    map.iter().map(|(k, v)| (k.clone(), v)).collect()
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// JSON-pointer escaping: `~` → `~0`, `/` → `~1`.
pub fn escape_path_component(component: &str) -> String {
    if !component.contains('~') && !component.contains('/') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_response_keeps_missing_and_protected_keys() {
        let current = json!({ "id": "a", "name": "bot", "description": "svc", "version": 0.1 });
        let response = json!({ "id": "b", "version": 0.2 });

        let merged: Value = merge_response(&current, &response, &["id"]).expect("merge");

        assert_eq!(
            merged,
            json!({ "id": "a", "name": "bot", "description": "svc", "version": 0.2 })
        );
        let unchanged: Value = merge_response(&current, &json!(true), &[]).expect("merge");
        assert_eq!(unchanged, current);
    }

    #[test]
    fn test_no_edits_empty_patch() {
        let doc = json!({ "name": "ingestion-bot", "description": "svc" });
        assert!(compare(&doc, &doc.clone()).is_empty());
    }

    #[test]
    fn test_changed_scalar_is_single_replace() {
        let old = json!({ "name": "bot", "description": "old" });
        let new = json!({ "name": "bot", "description": "new" });
        assert_eq!(
            compare(&old, &new),
            vec![PatchOperation::Replace {
                path: "/description".to_string(),
                value: json!("new"),
            }]
        );
    }

    #[test]
    fn test_new_key_is_add() {
        let old = json!({ "name": "bot" });
        let new = json!({ "name": "bot", "displayName": "Bot" });
        assert_eq!(
            compare(&old, &new),
            vec![PatchOperation::Add {
                path: "/displayName".to_string(),
                value: json!("Bot"),
            }]
        );
    }

    #[test]
    fn test_removed_key_is_remove() {
        let old = json!({ "name": "bot", "description": "svc" });
        let new = json!({ "name": "bot" });
        assert_eq!(
            compare(&old, &new),
            vec![PatchOperation::Remove {
                path: "/description".to_string(),
            }]
        );
    }

    #[test]
    fn test_nested_objects_recurse() {
        let old = json!({ "botUser": { "name": "a", "displayName": "A" } });
        let new = json!({ "botUser": { "name": "a", "displayName": "B" } });
        assert_eq!(
            compare(&old, &new),
            vec![PatchOperation::Replace {
                path: "/botUser/displayName".to_string(),
                value: json!("B"),
            }]
        );
    }

    #[test]
    fn test_array_shrink_removes_from_end() {
        let old = json!({ "tags": ["a", "b", "c"] });
        let new = json!({ "tags": ["a"] });
        let paths: Vec<_> = compare(&old, &new)
            .iter()
            .map(|op| op.path().to_string())
            .collect();
        assert_eq!(paths, vec!["/tags/2", "/tags/1"]);
    }

    #[test]
    fn test_kind_change_replaces_whole_value() {
        let old = json!({ "owner": { "id": "1" } });
        let new = json!({ "owner": ["1"] });
        assert_eq!(
            compare(&old, &new),
            vec![PatchOperation::Replace {
                path: "/owner".to_string(),
                value: json!(["1"]),
            }]
        );
    }

    #[test]
    fn test_path_components_escaped() {
        assert_eq!(escape_path_component("a/b~c"), "a~1b~0c");
        let old = json!({ "a/b": 1 });
        let new = json!({ "a/b": 2 });
        assert_eq!(compare(&old, &new)[0].path(), "/a~1b");
    }

    #[test]
    fn test_operations_serialize_as_rfc6902() {
        let ops = vec![
            PatchOperation::Add {
                path: "/x".to_string(),
                value: json!(1),
            },
            PatchOperation::Remove {
                path: "/y".to_string(),
            },
        ];
        assert_eq!(
            serde_json::to_value(&ops).expect("serialize"),
            json!([{ "op": "add", "path": "/x", "value": 1 }, { "op": "remove", "path": "/y" }])
        );
    }
}
