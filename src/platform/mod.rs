pub mod github;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::WorkflowJob;

#[async_trait]
pub trait JobSource: Send + Sync {
    /// List every job of a workflow run, across all pages.
    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<WorkflowJob>>;
}
