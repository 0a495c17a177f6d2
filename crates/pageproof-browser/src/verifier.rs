//! End-to-end execution of verification scenarios

use crate::error::Result;
use crate::session::{BrowserSession, SessionConfig};
use pageproof_core::{InteractionAction, VerificationScenario};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Metadata for a screenshot written by a successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotArtifact {
    /// Path the screenshot was written to
    pub path: PathBuf,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Executes verification scenarios against a live browser
///
/// Each `run` call owns its browser session exclusively for the full
/// duration of the scenario and releases it before returning, on success
/// and on every failure path. The first failing step is terminal; no step
/// is retried.
pub struct PageVerifier {
    config: SessionConfig,
    connect_port: Option<u16>,
}

impl PageVerifier {
    /// Create a verifier that launches its own browser per run
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            connect_port: None,
        }
    }

    /// Attach to an already-running browser on a CDP port instead of launching
    pub fn with_connect_port(mut self, port: u16) -> Self {
        self.connect_port = Some(port);
        self
    }

    /// Execute one scenario end-to-end
    ///
    /// Navigates to the scenario URL, waits on each readiness condition in
    /// order, performs each interaction (and its trailing expectation, when
    /// present), waits on the final readiness condition, then captures a
    /// full-page screenshot to the scenario's path.
    ///
    /// Exactly one screenshot file exists on success and none is produced
    /// on failure. Rerunning against the same path overwrites the previous
    /// file.
    pub async fn run(&self, scenario: &VerificationScenario) -> Result<ScreenshotArtifact> {
        scenario.validate()?;

        info!("Running scenario: {}", scenario.label());

        let session = match self.connect_port {
            Some(port) => BrowserSession::connect_with_config(port, self.config.clone()).await?,
            None => BrowserSession::launch_with_config(self.config.clone()).await?,
        };

        let outcome = Self::drive(&session, scenario).await;

        // Release the session before surfacing the step outcome
        session.close().await?;

        let artifact = outcome?;
        info!(
            "Scenario {} complete: {} ({} bytes)",
            scenario.label(),
            artifact.path.display(),
            artifact.size_bytes
        );

        Ok(artifact)
    }

    /// Execute scenarios sequentially, one session each
    ///
    /// The first failing scenario is terminal; earlier screenshots remain
    /// on disk.
    pub async fn run_all(&self, scenarios: &[VerificationScenario]) -> Result<Vec<ScreenshotArtifact>> {
        let mut artifacts = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            artifacts.push(self.run(scenario).await?);
        }

        Ok(artifacts)
    }

    async fn drive(
        session: &BrowserSession,
        scenario: &VerificationScenario,
    ) -> Result<ScreenshotArtifact> {
        session.navigate(&scenario.target_url).await?;

        for condition in &scenario.readiness {
            session.wait_for(condition).await?;
        }

        for interaction in &scenario.interactions {
            match interaction.action {
                InteractionAction::Click => session.click(&interaction.target).await?,
            }

            if let Some(condition) = &interaction.expect {
                session.wait_for(condition).await?;
            }
        }

        if let Some(condition) = &scenario.final_readiness {
            session.wait_for(condition).await?;
        }

        debug!("Capturing screenshot to {}", scenario.screenshot_path.display());
        let data = session.capture_screenshot().await?;
        tokio::fs::write(&scenario.screenshot_path, &data).await?;

        Ok(ScreenshotArtifact {
            path: scenario.screenshot_path.clone(),
            size_bytes: data.len() as u64,
        })
    }
}

impl Default for PageVerifier {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageproof_core::PageproofError;

    #[tokio::test]
    async fn test_invalid_scenario_fails_before_browser_launch() {
        let verifier = PageVerifier::default();
        let scenario = VerificationScenario::new("not a url", "shot.png");

        // Validation runs first, so no browser is required for this path
        let result = verifier.run(&scenario).await;
        assert!(matches!(result, Err(PageproofError::InvalidScenario(_))));
    }

    #[tokio::test]
    async fn test_empty_screenshot_path_fails_before_browser_launch() {
        let verifier = PageVerifier::default();
        let scenario = VerificationScenario::new("http://localhost:8080/code.html", "");

        let result = verifier.run(&scenario).await;
        assert!(matches!(result, Err(PageproofError::InvalidScenario(_))));
    }
}
