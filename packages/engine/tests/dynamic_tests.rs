//! Tests for dynamic host objects
//!
//! A host object resolves keys on demand through a [`DynamicAccessor`]; the
//! engine only consults it when dynamic access is enabled.

use std::collections::HashMap;

use flowpath_engine::{
    ALLOW_DYNAMIC, CompiledPath, DynamicAccessor, JsonPathConfig, Value,
};
use serde_json::json;

struct Attributes(HashMap<String, Value>);

impl DynamicAccessor for Attributes {
    fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }
}

fn host() -> Value {
    let mut attributes = HashMap::new();
    attributes.insert("foo".to_string(), Value::from("bar"));
    attributes.insert("nested".to_string(), Value::from(json!({"list": [1, 2, 3]})));
    Value::dynamic(Attributes(attributes))
}

fn find(root: &Value, expression: &str, config: JsonPathConfig) -> serde_json::Value {
    CompiledPath::compile(expression)
        .expect("Failed to compile expression")
        .evaluate(root, config)
        .expect("Failed to evaluate expression")
        .to_json()
}

#[test]
fn test_dynamic_key_resolved_when_enabled() {
    let root = host();
    let config = JsonPathConfig::from_flags(ALLOW_DYNAMIC);
    assert_eq!(find(&root, "$.foo", config), json!(["bar"]));
}

#[test]
fn test_dynamic_key_ignored_when_disabled() {
    let root = host();
    assert_eq!(find(&root, "$.foo", JsonPathConfig::default()), json!([]));
}

#[test]
fn test_unknown_dynamic_key_is_no_match() {
    let root = host();
    let config = JsonPathConfig::new().allow_dynamic(true);
    assert_eq!(find(&root, "$.missing", config), json!([]));
}

#[test]
fn test_traversal_continues_below_dynamic_values() {
    let root = host();
    let config = JsonPathConfig::new().allow_dynamic(true);
    assert_eq!(find(&root, "$.nested.list[-1]", config), json!([3]));
    assert_eq!(find(&root, "$.nested.list[?(@ > 1)]", config), json!([2, 3]));
}

#[test]
fn test_dynamic_nodes_have_no_enumerable_children() {
    let root = host();
    let config = JsonPathConfig::new().allow_dynamic(true);
    assert_eq!(find(&root, "$.*", config), json!([]));
    assert_eq!(find(&root, "$[0]", config), json!([]));
}

#[test]
fn test_closure_accessor_inside_plain_document() {
    let mut map = indexmap::IndexMap::new();
    map.insert(
        "host".to_string(),
        Value::dynamic(|key: &str| (key == "name").then(|| Value::from("flowpath"))),
    );
    let root = Value::Object(map);

    let enabled = JsonPathConfig::new().allow_dynamic(true);
    assert_eq!(find(&root, "$.host.name", enabled), json!(["flowpath"]));
    assert_eq!(find(&root, "$['host']['name']", enabled), json!(["flowpath"]));
    assert_eq!(find(&root, "$.host.name", JsonPathConfig::default()), json!([]));
}

#[test]
fn test_dynamic_value_serializes_as_null() {
    let root = host();
    assert_eq!(find(&root, "$", JsonPathConfig::default()), json!([null]));
}
