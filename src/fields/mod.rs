//! Field tree projection for incremental, path-driven editing.
//!
//! [`build_field_tree`] turns an object-shaped [`Value`] into a tree of
//! [`FieldNode`]s, one per key, each carrying its absolute path back into the
//! document. A UI host walks these nodes to render editable fields and feeds
//! the paths straight into the editor operations.
//!
//! The builder is pure and total: it never fails, never mutates its input,
//! and produces a fresh tree on every call. Nodes are not updated in place;
//! after an edit the host rebuilds from the new document value.

#[cfg(test)]
mod tests;

use crate::path::TreePath;
use crate::value::{Value, ValueKind};

/// One navigable position in a projected document.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    /// The last path segment in string form.
    pub key: String,
    /// The value at this position. Scalar nodes hold the string-coerced
    /// form (null becomes the empty string); containers hold themselves.
    pub value: Value,
    /// Coarse shape of the value.
    pub kind: ValueKind,
    /// Absolute path from the document root.
    pub path: TreePath,
    /// Child nodes, present only for object nodes.
    pub children: Option<Vec<FieldNode>>,
}

impl FieldNode {
    /// JSON rendering of this node for machine output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("key".to_string(), self.key.clone().into());
        object.insert(
            "kind".to_string(),
            serde_json::to_value(self.kind).unwrap_or(serde_json::Value::Null),
        );
        object.insert("path".to_string(), self.path.to_string().into());
        object.insert("value".to_string(), self.value.to_json());
        if let Some(children) = &self.children {
            object.insert(
                "children".to_string(),
                children.iter().map(FieldNode::to_json).collect(),
            );
        }
        serde_json::Value::Object(object)
    }
}

/// Project an object value into a sequence of field nodes.
///
/// Only object-shaped values produce nodes; a scalar or array root yields an
/// empty sequence (the editable root of a workflow document is always an
/// object). Iteration order is the object's key insertion order.
pub fn build_field_tree(value: &Value, base_path: &TreePath) -> Vec<FieldNode> {
    let Some(object) = value.as_object() else {
        return Vec::new();
    };

    object
        .iter()
        .map(|(key, child)| {
            let path = base_path.clone().key(key.clone());
            match child {
                Value::Array(_) => FieldNode {
                    key: key.clone(),
                    value: child.clone(),
                    kind: ValueKind::Array,
                    path,
                    children: None,
                },
                Value::Object(_) => {
                    let children = build_field_tree(child, &path);
                    FieldNode {
                        key: key.clone(),
                        value: child.clone(),
                        kind: ValueKind::Object,
                        path,
                        children: Some(children),
                    }
                }
                scalar => FieldNode {
                    key: key.clone(),
                    value: Value::String(scalar.coerce_string().unwrap_or_default()),
                    kind: ValueKind::Scalar,
                    path,
                    children: None,
                },
            }
        })
        .collect()
}
