//! Command implementations for trellis.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Edit commands (`set`, `delete`, `rename`) load the
//! workflow file, apply one editor operation to the decoded tree, and write
//! the re-encoded document back (or to stdout with `--stdout`).

mod summary;

use crate::cli::{Command, DeleteArgs, FieldsArgs, GetArgs, RenameArgs, SetArgs};
use crate::document;
use crate::editor;
use crate::error::{Result, TrellisError};
use crate::fields::{FieldNode, build_field_tree};
use crate::path::TreePath;
use crate::value::{Value, ValueKind};
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Summary(args) => summary::cmd_summary(args),
        Command::Fields(args) => cmd_fields(args),
        Command::Get(args) => cmd_get(args),
        Command::Set(args) => cmd_set(args),
        Command::Delete(args) => cmd_delete(args),
        Command::Rename(args) => cmd_rename(args),
    }
}

fn cmd_fields(args: FieldsArgs) -> Result<()> {
    let (_, doc) = document::load(&args.file)?;
    let nodes = build_field_tree(&doc, &TreePath::root());

    if args.json {
        let rendered: Vec<serde_json::Value> = nodes.iter().map(FieldNode::to_json).collect();
        println!("{}", render_json(&rendered)?);
    } else {
        print_nodes(&nodes, 0);
    }
    Ok(())
}

fn print_nodes(nodes: &[FieldNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node.kind {
            ValueKind::Scalar => {
                // Scalar nodes hold the string-coerced value.
                let text = node.value.as_str().unwrap_or_default();
                println!("{}{} = {}", indent, node.key, text);
            }
            ValueKind::Array => {
                let count = node.value.as_array().map(<[Value]>::len).unwrap_or(0);
                println!("{}{} [{} item(s)]", indent, node.key, count);
            }
            ValueKind::Object => {
                println!("{}{}:", indent, node.key);
                if let Some(children) = &node.children {
                    print_nodes(children, depth + 1);
                }
            }
        }
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let (_, doc) = document::load(&args.file)?;
    let path = parse_path(&args.path)?;

    // A path that resolves to nothing prints nothing; that is the defined
    // soft-absence outcome, not a failure.
    if let Some(value) = editor::get(&doc, &path) {
        let text = serde_yaml::to_string(value)
            .map_err(|e| TrellisError::UserError(format!("failed to render value: {}", e)))?;
        print!("{}", text);
    }
    Ok(())
}

fn cmd_set(args: SetArgs) -> Result<()> {
    let (text, doc) = document::load(&args.file)?;
    let path = parse_path(&args.path)?;
    let value = parse_value(&args.value)?;

    let edited = editor::set(&doc, &path, value);
    debug!(path = %path, file = %args.file, "set value");
    write_result(&args.file, &edited, &text, args.stdout)
}

fn cmd_delete(args: DeleteArgs) -> Result<()> {
    let (text, doc) = document::load(&args.file)?;
    let path = parse_path(&args.path)?;

    let edited = editor::delete(&doc, &path);
    debug!(path = %path, file = %args.file, "deleted value");
    write_result(&args.file, &edited, &text, args.stdout)
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let (text, doc) = document::load(&args.file)?;
    let parent = parse_path(&args.parent)?;

    let edited = editor::rename_key(&doc, &parent, &args.old_key, &args.new_key)?;
    debug!(
        parent = %parent,
        old = %args.old_key,
        new = %args.new_key,
        "renamed key"
    );
    write_result(&args.file, &edited, &text, args.stdout)
}

/// Parse a textual path argument.
fn parse_path(text: &str) -> Result<TreePath> {
    text.parse()
}

/// Parse a value argument as a YAML fragment.
///
/// `true`, `3`, `[a, b]`, `{k: v}` become the corresponding typed values;
/// anything else becomes a string.
fn parse_value(text: &str) -> Result<Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| TrellisError::UserError(format!("failed to parse value as YAML: {}", e)))?;
    Ok(Value::from_yaml(yaml))
}

fn render_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TrellisError::UserError(format!("failed to render JSON: {}", e)))
}

/// Write the edited document back, or print it with `--stdout`.
fn write_result(file: &str, value: &Value, original: &str, stdout: bool) -> Result<()> {
    if stdout {
        print!("{}", document::encode(value, original));
        Ok(())
    } else {
        document::save(file, value, original)
    }
}
