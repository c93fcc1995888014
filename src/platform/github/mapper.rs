use serde::Deserialize;

use crate::platform::types;

/// One page of the "list jobs for a workflow run" endpoint.
#[derive(Debug, Deserialize)]
pub struct JobsPage {
    pub total_count: u64,
    pub jobs: Vec<JobRecord>,
}

/// Wire shape of a job record; only the fields we consume.
#[derive(Debug, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: Option<String>,
}

/// Map a wire job record to our platform job type.
pub fn map_job(job: JobRecord) -> types::WorkflowJob {
    types::WorkflowJob {
        id: job.id,
        name: job.name,
        status: job.status,
        conclusion: job.conclusion,
    }
}
