use serde::Deserialize;

use crate::error::{AppError, Result};

/// Runtime configuration, normally filled in by the variables the Actions
/// runner exports for every step (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`,
/// `GITHUB_RUN_ID`, `GITHUB_API_URL`).
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    pub token: String,
    /// "owner/name" form, as provided by the runner.
    pub repository: String,
    pub run_id: u64,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

// Manual Debug impl to avoid leaking the token
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("token", &"[REDACTED]")
            .field("repository", &self.repository)
            .field("run_id", &self.run_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Load from file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            builder = builder.add_source(
                config::File::with_name("workflow-conclusion").required(false),
            );
        }

        // Environment variable overrides with GITHUB_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("GITHUB").try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
