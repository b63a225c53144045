//! Step extraction: action references, shell commands, and parameters.

use crate::value::{Object, Value};
use indexmap::IndexMap;
use serde::Serialize;

/// Derived step overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepSummary {
    /// `uses` action references, in step order.
    pub action_refs: Vec<String>,
    /// `run` shell commands, in step order.
    pub shell_commands: Vec<String>,
    /// Merged `with` parameter mapping; later steps overwrite earlier keys.
    pub with_parameters: Object,
}

/// Single-step projection; every field absent in the source stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_parameters: Option<Object>,
    /// `env`, restricted to its string-coercible entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

/// Extract the step summary from a job or document fragment.
///
/// Reads `uses`/`run`/`with` off the input itself, then off every
/// object-shaped element of a `steps` array. `with` mappings merge into one
/// accumulated parameter map, last write wins.
pub fn extract_steps(doc: &Value) -> StepSummary {
    let mut summary = StepSummary::default();
    collect_step_fields(doc, &mut summary);

    if let Some(steps) = doc.get_key("steps").and_then(Value::as_array) {
        for step in steps {
            if step.is_object() {
                collect_step_fields(step, &mut summary);
            }
        }
    }

    summary
}

/// Project a single step into its detail view.
pub fn extract_step_detail(step: &Value) -> StepDetail {
    StepDetail {
        name: step.get_key("name").and_then(Value::coerce_string),
        action_ref: step.get_key("uses").and_then(Value::coerce_string),
        shell_command: step.get_key("run").and_then(Value::coerce_string),
        with_parameters: step.get_key("with").and_then(Value::as_object).cloned(),
        env: step.get_key("env").and_then(Value::as_object).map(|env| {
            env.iter()
                .filter_map(|(k, v)| v.coerce_string().map(|s| (k.clone(), s)))
                .collect()
        }),
        continue_on_error: step
            .get_key("continue-on-error")
            .and_then(Value::coerce_bool),
        condition: step.get_key("if").and_then(Value::coerce_string),
        working_directory: step
            .get_key("working-directory")
            .and_then(Value::coerce_string),
        shell: step.get_key("shell").and_then(Value::coerce_string),
    }
}

fn collect_step_fields(step: &Value, summary: &mut StepSummary) {
    if let Some(uses) = step.get_key("uses").and_then(Value::coerce_string) {
        summary.action_refs.push(uses);
    }
    if let Some(run) = step.get_key("run").and_then(Value::coerce_string) {
        summary.shell_commands.push(run);
    }
    if let Some(with) = step.get_key("with").and_then(Value::as_object) {
        for (key, value) in with {
            summary.with_parameters.insert(key.clone(), value.clone());
        }
    }
}
