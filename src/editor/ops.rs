//! Editor operation implementations.

use crate::error::{Result, TrellisError};
use crate::path::{Segment, TreePath};
use crate::value::{Object, Value};
use std::sync::Arc;

/// Read the value at `path`, failing soft.
///
/// Returns `None` as soon as any intermediate node is absent or has the
/// wrong kind for the segment (indexing a scalar is "absent", not an error).
/// The empty path returns the root itself.
pub fn get<'a>(root: &'a Value, path: &TreePath) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.segments() {
        node = match segment {
            Segment::Key(key) => node.get_key(key)?,
            Segment::Index(index) => node.get_index(*index)?,
        };
    }
    Some(node)
}

/// Write `value` at `path`, creating intermediate containers as needed.
///
/// The empty path replaces the root entirely. Missing intermediates are
/// created to match the segment that addresses into them: an array when the
/// segment is an index, an object otherwise. A mismatched container at any
/// step is discarded and replaced the same way. Setting an array index past
/// the end pads the gap with nulls.
///
/// Guarantees `get(&set(root, path, v), path) == Some(&v)` and leaves every
/// container off the path referentially unchanged.
pub fn set(root: &Value, path: &TreePath, value: Value) -> Value {
    set_in(Some(root), path.segments(), value)
}

fn set_in(node: Option<&Value>, segments: &[Segment], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };
    match head {
        Segment::Key(key) => {
            let mut map = match node {
                Some(Value::Object(map)) => Object::clone(map),
                _ => Object::new(),
            };
            let child = set_in(map.get(key.as_str()), rest, value);
            map.insert(key.clone(), child);
            Value::Object(Arc::new(map))
        }
        Segment::Index(index) => {
            let mut items = match node {
                Some(Value::Array(items)) => Vec::clone(items),
                _ => Vec::new(),
            };
            let child = set_in(items.get(*index), rest, value);
            if *index < items.len() {
                items[*index] = child;
            } else {
                items.resize(*index, Value::Null);
                items.push(child);
            }
            Value::Array(Arc::new(items))
        }
    }
}

/// Remove the element or key at `path`.
///
/// The empty path is a no-op (the root cannot be deleted). Removing an array
/// element shifts later elements down by one. A path that does not resolve
/// returns the tree unchanged.
pub fn delete(root: &Value, path: &TreePath) -> Value {
    delete_in(root, path.segments())
}

fn delete_in(node: &Value, segments: &[Segment]) -> Value {
    match segments {
        [] => node.clone(),
        [last] => match (node, last) {
            (Value::Object(map), Segment::Key(key)) => {
                if !map.contains_key(key.as_str()) {
                    return node.clone();
                }
                let mut map = Object::clone(map);
                map.shift_remove(key.as_str());
                Value::Object(Arc::new(map))
            }
            (Value::Array(items), Segment::Index(index)) => {
                if *index >= items.len() {
                    return node.clone();
                }
                let mut items = Vec::clone(items);
                items.remove(*index);
                Value::Array(Arc::new(items))
            }
            _ => node.clone(),
        },
        [head, rest @ ..] => match (node, head) {
            (Value::Object(map), Segment::Key(key)) => {
                let Some(child) = map.get(key.as_str()) else {
                    return node.clone();
                };
                let child = delete_in(child, rest);
                let mut map = Object::clone(map);
                map.insert(key.clone(), child);
                Value::Object(Arc::new(map))
            }
            (Value::Array(items), Segment::Index(index)) => {
                let Some(child) = items.get(*index) else {
                    return node.clone();
                };
                let child = delete_in(child, rest);
                let mut items = Vec::clone(items);
                items[*index] = child;
                Value::Array(Arc::new(items))
            }
            _ => node.clone(),
        },
    }
}

/// Rename `old_key` to `new_key` on the object at `parent`.
///
/// No-op when the parent is not an object, `old_key` is absent, or the two
/// keys are equal. Fails with [`TrellisError::DuplicateKey`] when `new_key`
/// already exists: overwriting the sibling would lose its value. The renamed
/// key moves to the end of the object (append semantics; key order is not
/// contracted).
pub fn rename_key(root: &Value, parent: &TreePath, old_key: &str, new_key: &str) -> Result<Value> {
    let Some(Value::Object(map)) = get(root, parent) else {
        return Ok(root.clone());
    };
    let Some(value) = map.get(old_key) else {
        return Ok(root.clone());
    };
    if old_key == new_key {
        return Ok(root.clone());
    }
    if map.contains_key(new_key) {
        return Err(TrellisError::DuplicateKey(new_key.to_string()));
    }

    let value = value.clone();
    let mut map = Object::clone(map);
    map.shift_remove(old_key);
    map.insert(new_key.to_string(), value);
    Ok(set(root, parent, Value::Object(Arc::new(map))))
}

/// Make sure the value at `path` is an object.
///
/// Returns the root unchanged (shared) when it already is; otherwise writes
/// a fresh empty object there, discarding whatever was present. Idempotent.
pub fn ensure_object(root: &Value, path: &TreePath) -> Value {
    match get(root, path) {
        Some(Value::Object(_)) => root.clone(),
        _ => set(root, path, Value::object()),
    }
}

/// Make sure the value at `path` is an array. See [`ensure_object`].
pub fn ensure_array(root: &Value, path: &TreePath) -> Value {
    match get(root, path) {
        Some(Value::Array(_)) => root.clone(),
        _ => set(root, path, Value::array()),
    }
}
