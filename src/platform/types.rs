use serde::{Deserialize, Serialize};

/// One job of a workflow run, as reported by the job source.
///
/// `conclusion` is absent while the job is non-terminal; only present
/// conclusions participate in aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: Option<String>,
}
