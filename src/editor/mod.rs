//! Path-addressable tree editor.
//!
//! Pure copy-on-write operations over [`Value`](crate::value::Value) trees:
//! every mutating operation returns a new tree and leaves its input intact.
//! Only the containers along the edited path are cloned; everything off the
//! path is shared with the input, so callers can detect the smallest changed
//! region with [`Value::same_node`](crate::value::Value::same_node) and keep
//! old trees around as undo history.
//!
//! Missing paths are soft: `get` returns `None`, `delete` returns the tree
//! unchanged. The one loud failure is [`rename_key`] on an existing target
//! key, which would otherwise silently drop a sibling's value.

mod ops;


pub use ops::{delete, ensure_array, ensure_object, get, rename_key, set};
