use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workflow_conclusion::actions;
use workflow_conclusion::config::AppConfig;
use workflow_conclusion::platform::github::GitHubJobs;
use workflow_conclusion::run::aggregate_run_conclusion;

#[derive(Parser)]
#[command(
    name = "workflow-conclusion",
    about = "Reduces a workflow run's job conclusions to a single conclusion"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        actions::set_failed(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> workflow_conclusion::error::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    tracing::info!(
        repository = %config.repository,
        run_id = config.run_id,
        "Aggregating workflow run conclusion"
    );

    let source = GitHubJobs::new(&config)?;
    let verdict = aggregate_run_conclusion(&source, config.run_id).await?;

    actions::group("Jobs: ");
    println!("{}", serde_json::to_string_pretty(&verdict.jobs)?);
    actions::end_group();

    actions::group("Conclusions: ");
    println!("{:?}", verdict.conclusions);
    actions::end_group();

    actions::group("Conclusion: ");
    println!("{}", verdict.conclusion);
    actions::end_group();

    actions::set_output("conclusion", verdict.conclusion)?;

    Ok(())
}
