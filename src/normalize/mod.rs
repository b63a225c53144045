//! Workflow schema normalizer.
//!
//! Four extraction passes that read a loosely-typed workflow document and
//! produce strongly-typed display summaries: triggers, jobs, steps, and a
//! single-step detail projection.
//!
//! Every pass is best-effort and infallible. A field that is missing or has
//! an unexpected shape is treated as "not present" and skipped; nothing here
//! validates or rejects a document. The summaries feed a visual overview,
//! and are re-derived from scratch after every edit.

mod jobs;
mod steps;
mod triggers;


pub use jobs::{JobScope, JobSummary, extract_jobs};
pub use steps::{StepDetail, StepSummary, extract_step_detail, extract_steps};
pub use triggers::{TriggerSummary, extract_triggers};
