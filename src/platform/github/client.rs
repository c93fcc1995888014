use async_trait::async_trait;
use octocrab::Octocrab;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::platform::types::WorkflowJob;
use crate::platform::JobSource;

use super::mapper;

const PER_PAGE: usize = 100;

pub struct GitHubJobs {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubJobs {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (owner, repo) = Self::parse_repo(&config.repository)?;

        let client = Octocrab::builder()
            .base_uri(config.api_url.as_str())
            .map_err(|e| AppError::GitHubApi(format!("Invalid API base URL: {e}")))?
            .personal_token(config.token().to_string())
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    fn parse_repo(repo_full_name: &str) -> Result<(&str, &str)> {
        let parts: Vec<&str> = repo_full_name.splitn(2, '/').collect();
        if parts.len() != 2 {
            return Err(AppError::GitHubApi(format!(
                "Invalid repo name: {repo_full_name}"
            )));
        }
        Ok((parts[0], parts[1]))
    }
}

#[async_trait]
impl JobSource for GitHubJobs {
    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<WorkflowJob>> {
        let owner = &self.owner;
        let repo = &self.repo;

        let mut jobs = Vec::new();
        let mut page = 1u32;
        loop {
            // octocrab doesn't model this endpoint, use the API directly
            let url = format!(
                "/repos/{owner}/{repo}/actions/runs/{run_id}/jobs?per_page={PER_PAGE}&page={page}"
            );
            let response: mapper::JobsPage = self
                .client
                .get(&url, None::<&()>)
                .await
                .map_err(|e| {
                    AppError::GitHubApi(format!("Failed to list jobs for run {run_id}: {e}"))
                })?;

            let fetched = response.jobs.len();
            jobs.extend(response.jobs.into_iter().map(mapper::map_job));

            if fetched < PER_PAGE || jobs.len() as u64 >= response.total_count {
                break;
            }
            page += 1;
        }

        Ok(jobs)
    }
}
