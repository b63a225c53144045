//! Decode/encode boundary between workflow text and the value tree.
//!
//! The engine treats the textual configuration format as opaque: decoding
//! yields a plain nested [`Value`], encoding turns one back into text. YAML
//! is the concrete format. An empty or null document decodes to an empty
//! object (a blank workflow being edited from scratch), while any other
//! non-mapping root is a decode error with a human-readable message.

use crate::error::{Result, TrellisError};
use crate::value::Value;
use std::path::Path;
use tracing::debug;

/// Decode workflow text into a value tree.
///
/// Empty and null documents decode to an empty object. A syntactically
/// invalid document, or one whose root is not a mapping, is a
/// [`TrellisError::Decode`] carrying the parser's message; the error text is
/// meant to be shown to the user verbatim.
pub fn decode(text: &str) -> Result<Value> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| TrellisError::Decode(e.to_string()))?;

    match yaml {
        serde_yaml::Value::Null => Ok(Value::object()),
        mapping @ serde_yaml::Value::Mapping(_) => {
            let value = Value::from_yaml(mapping);
            debug!(
                keys = value.as_object().map(|o| o.len()).unwrap_or(0),
                "decoded workflow document"
            );
            Ok(value)
        }
        other => Err(TrellisError::Decode(format!(
            "document root must be a mapping, found {}",
            yaml_kind(&other)
        ))),
    }
}

/// Encode a value tree back into workflow text.
///
/// On encode failure the original input text is returned unchanged; encoding
/// is not expected to fail for trees produced by this engine, and keeping
/// the user's text beats losing it.
pub fn encode(value: &Value, original: &str) -> String {
    match serde_yaml::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "encode failed, keeping original text");
            original.to_string()
        }
    }
}

/// Read and decode a workflow file, returning both the raw text and the tree.
///
/// The raw text is kept so a later [`save`] can fall back to it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<(String, Value)> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        TrellisError::UserError(format!(
            "failed to read workflow file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let value = decode(&text)?;
    Ok((text, value))
}

/// Encode and write a workflow file.
pub fn save<P: AsRef<Path>>(path: P, value: &Value, original: &str) -> Result<()> {
    let path = path.as_ref();
    let text = encode(value, original);
    std::fs::write(path, text).map_err(|e| {
        TrellisError::UserError(format!(
            "failed to write workflow file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
