//! Implementation of the `trellis summary` command.
//!
//! Runs the normalizer passes over a workflow file and prints the derived
//! overview: workflow name, recognized triggers with branch/path filters,
//! job metadata, and per-job step summaries.

use crate::cli::SummaryArgs;
use crate::document;
use crate::error::Result;
use crate::normalize::{JobScope, StepSummary, extract_jobs, extract_steps, extract_triggers};
use crate::value::Value;
use indexmap::IndexMap;
use serde_json::json;

/// Execute the `trellis summary` command.
pub fn cmd_summary(args: SummaryArgs) -> Result<()> {
    let (_, doc) = document::load(&args.file)?;

    let triggers = extract_triggers(&doc);
    let jobs = extract_jobs(&doc, JobScope::WholeDocument);
    let steps = per_job_steps(&doc);

    if args.json {
        let payload = json!({
            "triggers": triggers,
            "jobs": jobs,
            "steps": steps,
        });
        println!("{}", super::render_json(&payload)?);
        return Ok(());
    }

    let name = if triggers.workflow_name.is_empty() {
        "(unnamed)"
    } else {
        &triggers.workflow_name
    };
    println!("Workflow: {}", name);
    println!();

    if triggers.trigger_names.is_empty() {
        println!("Triggers: (none recognized)");
    } else {
        println!("Triggers: {}", triggers.trigger_names.join(", "));
    }
    if !triggers.branches.is_empty() {
        println!("  branches: {}", triggers.branches.join(", "));
    }
    if !triggers.paths.is_empty() {
        println!("  paths:    {}", triggers.paths.join(", "));
    }
    println!();

    println!("Jobs:");
    print_list("runners", &jobs.runners);
    print_list("needs", &jobs.dependencies);
    print_list("timeouts", &jobs.timeouts);
    print_list("conditions", &jobs.conditions);
    println!();

    if steps.is_empty() {
        println!("Steps: (none)");
    } else {
        println!("Steps:");
        for (job, summary) in &steps {
            println!(
                "  {}: {} action(s), {} command(s)",
                job,
                summary.action_refs.len(),
                summary.shell_commands.len()
            );
            for action in &summary.action_refs {
                println!("    uses {}", action);
            }
            for command in &summary.shell_commands {
                println!("    run  {}", command);
            }
        }
    }

    Ok(())
}

/// Step summaries per job, in the document's job order.
fn per_job_steps(doc: &Value) -> IndexMap<String, StepSummary> {
    let mut steps = IndexMap::new();
    if let Some(jobs) = doc.get_key("jobs").and_then(Value::as_object) {
        for (name, job) in jobs {
            if job.is_object() {
                steps.insert(name.clone(), extract_steps(job));
            }
        }
    }
    steps
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {}: (none)", label);
    } else {
        println!("  {}: {}", label, items.join(", "));
    }
}
