//! pageproof CLI - declarative page verification
//!
//! Usage:
//!   pageproof run <scenario.json>...    Execute scenario files
//!   pageproof check <scenario.json>...  Validate scenario files
//!   pageproof template                  Print a starter scenario

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pageproof_browser::{PageVerifier, SessionConfig};
use pageproof_core::{example_scenario, PageproofConfig, VerificationScenario};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pageproof")]
#[command(author, version, about = "Declarative page verification with a headless browser")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute one or more scenario files
    Run {
        /// Scenario files (JSON)
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,

        /// Override the default readiness wait budget in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Run with a visible browser window
        #[arg(long)]
        headed: bool,

        /// Attach to a running browser on this CDP port instead of launching
        #[arg(long, value_name = "PORT")]
        connect_port: Option<u16>,
    },

    /// Parse and validate scenario files without launching a browser
    Check {
        /// Scenario files (JSON)
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,
    },

    /// Print a starter scenario template
    Template {
        /// Write to file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run {
            scenarios,
            timeout,
            headed,
            connect_port,
        } => cmd_run(scenarios, timeout, headed, connect_port).await,
        Commands::Check { scenarios } => cmd_check(scenarios).await,
        Commands::Template { output } => cmd_template(output).await,
    }
}

async fn cmd_run(
    scenario_paths: Vec<PathBuf>,
    timeout: Option<u64>,
    headed: bool,
    connect_port: Option<u16>,
) -> Result<()> {
    let config = PageproofConfig::load_or_default(Path::new("."))?;

    let mut session_config = SessionConfig::from(&config.browser);
    if let Some(secs) = timeout {
        session_config.timeout_seconds = secs;
    }
    if headed {
        session_config.headless = false;
    }

    let mut verifier = PageVerifier::new(session_config);
    if let Some(port) = connect_port {
        verifier = verifier.with_connect_port(port);
    }

    let mut scenarios = Vec::with_capacity(scenario_paths.len());
    for path in &scenario_paths {
        scenarios.push(load_scenario(path).await?);
    }

    info!("Running {} scenario(s)", scenarios.len());
    let artifacts = verifier.run_all(&scenarios).await?;

    for (scenario, artifact) in scenarios.iter().zip(&artifacts) {
        println!(
            "{}: {} ({} bytes)",
            scenario.label(),
            artifact.path.display(),
            artifact.size_bytes
        );
    }

    println!("{} scenario(s) passed", artifacts.len());

    Ok(())
}

async fn cmd_check(scenario_paths: Vec<PathBuf>) -> Result<()> {
    for path in &scenario_paths {
        let scenario = load_scenario(path).await?;
        scenario
            .validate()
            .with_context(|| format!("Scenario file {} is invalid", path.display()))?;

        println!(
            "{}: ok ({} wait(s), {} interaction(s))",
            path.display(),
            scenario.readiness.len()
                + scenario
                    .interactions
                    .iter()
                    .filter(|i| i.expect.is_some())
                    .count()
                + usize::from(scenario.final_readiness.is_some()),
            scenario.interactions.len()
        );
    }

    Ok(())
}

async fn cmd_template(output: Option<PathBuf>) -> Result<()> {
    let template = example_scenario();
    let json = template.to_json()?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &json).await?;
            println!("Wrote template scenario to {}", path.display());
            println!("Next steps:");
            println!("  1. Edit target_url, waits, and interactions for your page");
            println!("  2. Run 'pageproof check {}' to validate", path.display());
            println!("  3. Run 'pageproof run {}' to execute", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn load_scenario(path: &Path) -> Result<VerificationScenario> {
    VerificationScenario::load(path)
        .await
        .with_context(|| format!("Failed to load scenario {}", path.display()))
}
