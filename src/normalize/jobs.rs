//! Job extraction: runners, dependencies, timeouts, and run conditions.

use crate::value::Value;
use serde::Serialize;

/// What shape of input the job pass is reading.
///
/// The same four fields are extracted either from every entry under a
/// document's `jobs` mapping or from a single job block passed directly;
/// the caller states which, instead of the pass guessing from the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobScope {
    /// A whole workflow document; jobs live under the `jobs` key.
    WholeDocument,
    /// A single job block; fields live on the input itself.
    SingleJob,
}

/// Derived job overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobSummary {
    /// `runs-on` values, one per job that declares one.
    pub runners: Vec<String>,
    /// `needs` entries, concatenated across jobs.
    pub dependencies: Vec<String>,
    /// Timeout values (`timeout-minutes`, or legacy `timeout`), stringified.
    pub timeouts: Vec<String>,
    /// `if` run conditions, stringified.
    pub conditions: Vec<String>,
}

/// Extract the job summary from `doc` according to `scope`.
///
/// Whole-document scope walks `jobs` values in key order, skipping entries
/// that are not object-shaped. Single-job scope reads the fields off the
/// input itself.
pub fn extract_jobs(doc: &Value, scope: JobScope) -> JobSummary {
    let mut summary = JobSummary::default();
    match scope {
        JobScope::WholeDocument => {
            if let Some(jobs) = doc.get_key("jobs").and_then(Value::as_object) {
                for job in jobs.values() {
                    if job.is_object() {
                        collect_job_fields(job, &mut summary);
                    }
                }
            }
        }
        JobScope::SingleJob => collect_job_fields(doc, &mut summary),
    }
    summary
}

fn collect_job_fields(job: &Value, summary: &mut JobSummary) {
    if let Some(runner) = job.get_key("runs-on").and_then(Value::coerce_string) {
        summary.runners.push(runner);
    }

    // `needs` is usually an array, but a bare string is valid in documents.
    match job.get_key("needs") {
        Some(Value::Array(deps)) => {
            for dep in deps.iter() {
                if let Some(s) = dep.coerce_string() {
                    summary.dependencies.push(s);
                }
            }
        }
        Some(Value::String(dep)) => summary.dependencies.push(dep.clone()),
        _ => {}
    }

    let timeout = job
        .get_key("timeout-minutes")
        .or_else(|| job.get_key("timeout"));
    if let Some(t) = timeout.and_then(Value::coerce_string) {
        summary.timeouts.push(t);
    }

    if let Some(condition) = job.get_key("if").and_then(Value::coerce_string) {
        summary.conditions.push(condition);
    }
}
