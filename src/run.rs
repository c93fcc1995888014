use std::collections::BTreeSet;

use crate::conclusion;
use crate::error::Result;
use crate::platform::types::WorkflowJob;
use crate::platform::JobSource;

/// Everything the binary reports about one run: the raw jobs, the distinct
/// conclusion labels, and the single reduced conclusion.
#[derive(Debug)]
pub struct RunVerdict {
    pub jobs: Vec<WorkflowJob>,
    pub conclusions: BTreeSet<String>,
    pub conclusion: &'static str,
}

/// Fetch a run's jobs and reduce their conclusions to one verdict.
pub async fn aggregate_run_conclusion(
    source: &dyn JobSource,
    run_id: u64,
) -> Result<RunVerdict> {
    let jobs = source.list_run_jobs(run_id).await?;
    let conclusions = conclusion::job_conclusions(&jobs);
    let conclusion = conclusion::workflow_conclusion(&conclusions);

    tracing::debug!(
        jobs = jobs.len(),
        distinct = conclusions.len(),
        conclusion,
        "Reduced run conclusion"
    );

    Ok(RunVerdict {
        jobs,
        conclusions,
        conclusion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::AppError;

    struct InMemoryJobs {
        jobs: Vec<WorkflowJob>,
    }

    #[async_trait]
    impl JobSource for InMemoryJobs {
        async fn list_run_jobs(&self, _run_id: u64) -> Result<Vec<WorkflowJob>> {
            Ok(self.jobs.clone())
        }
    }

    struct FailingJobs;

    #[async_trait]
    impl JobSource for FailingJobs {
        async fn list_run_jobs(&self, _run_id: u64) -> Result<Vec<WorkflowJob>> {
            Err(AppError::GitHubApi("boom".to_string()))
        }
    }

    fn job(id: u64, conclusion: Option<&str>) -> WorkflowJob {
        WorkflowJob {
            id,
            name: format!("job-{id}"),
            status: "completed".to_string(),
            conclusion: conclusion.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_failure_wins_over_success() {
        let source = InMemoryJobs {
            jobs: vec![
                job(1, Some("success")),
                job(2, None),
                job(3, Some("success")),
                job(4, Some("failure")),
            ],
        };

        let verdict = aggregate_run_conclusion(&source, 42).await.unwrap();
        assert_eq!(verdict.jobs.len(), 4);
        assert_eq!(verdict.conclusions.len(), 2);
        assert_eq!(verdict.conclusion, "failure");
    }

    #[tokio::test]
    async fn test_all_jobs_without_conclusion_fall_back() {
        let source = InMemoryJobs {
            jobs: vec![job(1, None), job(2, None)],
        };

        let verdict = aggregate_run_conclusion(&source, 42).await.unwrap();
        assert!(verdict.conclusions.is_empty());
        assert_eq!(verdict.conclusion, "skipped");
    }

    #[tokio::test]
    async fn test_empty_run_falls_back() {
        let source = InMemoryJobs { jobs: vec![] };

        let verdict = aggregate_run_conclusion(&source, 42).await.unwrap();
        assert!(verdict.conclusions.is_empty());
        assert_eq!(verdict.conclusion, "skipped");
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let err = aggregate_run_conclusion(&FailingJobs, 42).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
