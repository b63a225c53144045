//! Tests for the field tree builder.

use crate::fields::build_field_tree;
use crate::path::TreePath;
use crate::value::{Value, ValueKind};
use serde_json::json;

#[test]
fn kinds_follow_value_shapes() {
    let doc = Value::from_json(json!({"x": "v", "y": [1, 2], "z": {"w": "q"}}));
    let nodes = build_field_tree(&doc, &TreePath::root());

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].key, "x");
    assert_eq!(nodes[0].kind, ValueKind::Scalar);
    assert_eq!(nodes[1].key, "y");
    assert_eq!(nodes[1].kind, ValueKind::Array);
    assert_eq!(nodes[2].key, "z");
    assert_eq!(nodes[2].kind, ValueKind::Object);
}

#[test]
fn object_nodes_recurse_with_absolute_paths() {
    let doc = Value::from_json(json!({"z": {"w": "q"}}));
    let nodes = build_field_tree(&doc, &TreePath::root());

    let children = nodes[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].key, "w");
    assert_eq!(children[0].path, TreePath::root().key("z").key("w"));
    assert_eq!(children[0].value, Value::from("q"));
}

#[test]
fn base_path_prefixes_every_node() {
    let doc = Value::from_json(json!({"run": "make"}));
    let base = TreePath::root().key("jobs").key("build");
    let nodes = build_field_tree(&doc, &base);
    assert_eq!(nodes[0].path, TreePath::root().key("jobs").key("build").key("run"));
}

#[test]
fn scalar_values_are_string_coerced() {
    let doc = Value::from_json(json!({"count": 3, "flag": true, "label": "x"}));
    let nodes = build_field_tree(&doc, &TreePath::root());
    assert_eq!(nodes[0].value, Value::from("3"));
    assert_eq!(nodes[1].value, Value::from("true"));
    assert_eq!(nodes[2].value, Value::from("x"));
}

#[test]
fn null_becomes_empty_string() {
    let doc = Value::from_json(json!({"empty": null}));
    let nodes = build_field_tree(&doc, &TreePath::root());
    assert_eq!(nodes[0].kind, ValueKind::Scalar);
    assert_eq!(nodes[0].value, Value::from(""));
}

#[test]
fn array_nodes_keep_the_array_and_have_no_children() {
    let doc = Value::from_json(json!({"y": [1, 2]}));
    let nodes = build_field_tree(&doc, &TreePath::root());
    assert_eq!(nodes[0].value, Value::from_json(json!([1, 2])));
    assert!(nodes[0].children.is_none());
}

#[test]
fn non_object_roots_yield_no_nodes() {
    assert!(build_field_tree(&Value::from("scalar"), &TreePath::root()).is_empty());
    assert!(build_field_tree(&Value::from_json(json!([1, 2])), &TreePath::root()).is_empty());
    assert!(build_field_tree(&Value::Null, &TreePath::root()).is_empty());
}

#[test]
fn iteration_order_is_insertion_order() {
    let doc = Value::from_json(json!({"zeta": 1, "alpha": 2}));
    let nodes = build_field_tree(&doc, &TreePath::root());
    let keys: Vec<&str> = nodes.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, ["zeta", "alpha"]);
}

#[test]
fn to_json_renders_nested_nodes() {
    let doc = Value::from_json(json!({"z": {"w": "q"}}));
    let nodes = build_field_tree(&doc, &TreePath::root());
    let rendered = nodes[0].to_json();
    assert_eq!(rendered["key"], "z");
    assert_eq!(rendered["kind"], "object");
    assert_eq!(rendered["children"][0]["path"], "z.w");
}
