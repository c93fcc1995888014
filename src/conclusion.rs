use std::collections::BTreeSet;

use crate::platform::types::WorkflowJob;

/// Known conclusion labels, lowest to highest precedence.
const CONCLUSION_PRIORITY: [&str; 7] = [
    "neutral",
    "skipped",
    "success",
    "cancelled",
    "timed_out",
    "action_required",
    "failure",
];

/// Used when no job reported a recognized conclusion.
pub const FALLBACK_CONCLUSION: &str = "skipped";

/// Collect the distinct conclusion labels present across a run's jobs.
///
/// Jobs without a terminal conclusion (still running, skipped before
/// dispatch) carry no label and are dropped.
pub fn job_conclusions(jobs: &[WorkflowJob]) -> BTreeSet<String> {
    jobs.iter()
        .filter_map(|job| job.conclusion.clone())
        .collect()
}

/// Reduce a set of job conclusions to the single most overriding one.
///
/// The highest-precedence known label wins; labels outside the known
/// vocabulary are ignored. An empty set, or a set of only unknown labels,
/// falls back to [`FALLBACK_CONCLUSION`].
pub fn workflow_conclusion(conclusions: &BTreeSet<String>) -> &'static str {
    CONCLUSION_PRIORITY
        .iter()
        .copied()
        .filter(|label| conclusions.contains(*label))
        .last()
        .unwrap_or(FALLBACK_CONCLUSION)
}
