//! Trigger extraction: what starts the workflow, and on which branches/paths.

use crate::value::Value;
use serde::Serialize;

/// Closed table of recognized trigger identifiers and their display labels.
/// Unrecognized keys under `on` are silently ignored.
const KNOWN_TRIGGERS: &[(&str, &str)] = &[
    ("push", "Push"),
    ("pull_request", "Pull Request"),
    ("schedule", "Schedule"),
    ("workflow_dispatch", "Manual Dispatch"),
];

/// Derived trigger overview for a workflow document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TriggerSummary {
    /// Human-readable labels for recognized triggers, in document key order.
    pub trigger_names: Vec<String>,
    /// Branch filters from `push` then `pull_request`, concatenated.
    pub branches: Vec<String>,
    /// Path filters from `push` then `pull_request`, concatenated.
    pub paths: Vec<String>,
    /// The document's `name` field; empty when absent or not a string.
    pub workflow_name: String,
}

/// Extract the trigger summary from a workflow document.
pub fn extract_triggers(doc: &Value) -> TriggerSummary {
    let mut summary = TriggerSummary::default();

    if let Some(name) = doc.get_key("name").and_then(Value::as_str) {
        summary.workflow_name = name.to_string();
    }

    let Some(on) = doc.get_key("on").and_then(Value::as_object) else {
        return summary;
    };

    for key in on.keys() {
        if let Some((_, label)) = KNOWN_TRIGGERS.iter().find(|(id, _)| *id == key.as_str()) {
            summary.trigger_names.push((*label).to_string());
        }
    }

    // Branch and path filters, push first, then pull_request.
    for trigger in ["push", "pull_request"] {
        if let Some(config) = on.get(trigger) {
            collect_string_items(config.get_key("branches"), &mut summary.branches);
            collect_string_items(config.get_key("paths"), &mut summary.paths);
        }
    }

    summary
}

/// Append every string-coercible element of an array-shaped value.
fn collect_string_items(value: Option<&Value>, out: &mut Vec<String>) {
    let Some(items) = value.and_then(Value::as_array) else {
        return;
    };
    for item in items {
        if let Some(s) = item.coerce_string() {
            out.push(s);
        }
    }
}
