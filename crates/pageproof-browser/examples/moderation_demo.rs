//! Demonstration of running a moderation-queue verification scenario.
//!
//! This example drives the full flow against a locally-served page:
//! wait for the pending-task list, approve the first task, reject the
//! next, then capture a screenshot of the final state.
//!
//! Run with a local server on port 8080:
//!   cargo run --example moderation_demo -p pageproof-browser

use pageproof_browser::{PageVerifier, SessionConfig};
use pageproof_core::{Interaction, ReadinessCondition, VerificationScenario};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let scenario = VerificationScenario::new(
        "http://localhost:8080/config.html?local=true",
        "config_moderation_verification.png",
    )
    .named("config-moderation")
    .wait_for(ReadinessCondition::with_text(
        "#pending-tasks-container",
        "Do a barrel roll!",
    ))
    .interact(
        Interaction::click_role("button", "Approve").then_expect(ReadinessCondition::with_text(
            "#pending-tasks-container",
            "Name a character after me",
        )),
    )
    .interact(Interaction::click_role("button", "Reject"))
    .finally(ReadinessCondition::with_text(
        "#pending-tasks-container",
        "Let me pick the next song",
    ));

    let verifier = PageVerifier::new(SessionConfig::default());
    let artifact = verifier.run(&scenario).await?;

    println!(
        "Screenshot saved: {} ({} bytes)",
        artifact.path.display(),
        artifact.size_bytes
    );

    Ok(())
}
