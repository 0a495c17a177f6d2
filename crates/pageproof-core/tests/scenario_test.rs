//! Integration tests for scenario decoding and file loading
//!
//! Exercises the scenario formats the CLI consumes, including the three
//! shipped verification flows: the moderation queue (click-heavy), the
//! task-list render check (existence-only waits), and a short-budget
//! variant used to prove timeout behavior.

use pageproof_core::{
    InteractionAction, InteractionTarget, PageproofError, VerificationScenario,
};

/// Moderation flow: wait, approve, wait, reject, wait, screenshot
const MODERATION_SCENARIO: &str = r##"
{
    "name": "config-moderation",
    "target_url": "http://localhost:8080/config.html?local=true",
    "readiness": [
        { "selector": "#pending-tasks-container", "contains_text": "Do a barrel roll!" }
    ],
    "interactions": [
        {
            "target": { "role": "button", "name": "Approve" },
            "expect": { "selector": "#pending-tasks-container", "contains_text": "Name a character after me" }
        },
        {
            "target": { "role": "button", "name": "Reject" }
        }
    ],
    "final_readiness": { "selector": "#pending-tasks-container", "contains_text": "Let me pick the next song" },
    "screenshot_path": "config_moderation_verification.png"
}
"##;

/// Render check: two existence-only waits, no interactions
const RENDER_SCENARIO: &str = r##"
{
    "name": "task-list-render",
    "target_url": "http://localhost:8080/code.html?local=true",
    "readiness": [
        { "selector": "#streamer-tasks label" },
        { "selector": "#viewer-tasks label" }
    ],
    "screenshot_path": "verification.png"
}
"##;

/// Same render check with a broken selector and a 2 second budget
const SHORT_BUDGET_SCENARIO: &str = r##"
{
    "target_url": "http://localhost:8080/code.html?local=true",
    "readiness": [
        { "selector": "#streamer-tasks-typo label", "timeout_secs": 2 }
    ],
    "screenshot_path": "verification.png"
}
"##;

#[test]
fn test_moderation_scenario_decodes() {
    let scenario = VerificationScenario::from_json(MODERATION_SCENARIO).unwrap();
    scenario.validate().unwrap();

    assert_eq!(scenario.label(), "config-moderation");
    assert_eq!(scenario.readiness.len(), 1);
    assert_eq!(
        scenario.readiness[0].contains_text.as_deref(),
        Some("Do a barrel roll!")
    );

    assert_eq!(scenario.interactions.len(), 2);
    assert_eq!(
        scenario.interactions[0].target,
        InteractionTarget::Role {
            role: "button".to_string(),
            name: "Approve".to_string()
        }
    );
    assert_eq!(scenario.interactions[0].action, InteractionAction::Click);
    assert!(scenario.interactions[0].expect.is_some());
    assert!(scenario.interactions[1].expect.is_none());

    let final_condition = scenario.final_readiness.as_ref().unwrap();
    assert_eq!(
        final_condition.contains_text.as_deref(),
        Some("Let me pick the next song")
    );
}

#[test]
fn test_render_scenario_decodes() {
    let scenario = VerificationScenario::from_json(RENDER_SCENARIO).unwrap();
    scenario.validate().unwrap();

    assert_eq!(scenario.readiness.len(), 2);
    assert!(scenario.readiness.iter().all(|c| c.contains_text.is_none()));
    assert!(scenario.interactions.is_empty());
    assert!(scenario.final_readiness.is_none());
}

#[test]
fn test_short_budget_override_decodes() {
    let scenario = VerificationScenario::from_json(SHORT_BUDGET_SCENARIO).unwrap();
    assert_eq!(scenario.readiness[0].timeout_secs, Some(2));
    // Unnamed scenarios fall back to the URL as their label
    assert_eq!(scenario.label(), "http://localhost:8080/code.html?local=true");
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let result = VerificationScenario::from_json("{ not json");
    assert!(matches!(result, Err(PageproofError::Serialization(_))));
}

#[test]
fn test_missing_target_url_is_rejected() {
    let result = VerificationScenario::from_json(r#"{ "screenshot_path": "x.png" }"#);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moderation.json");
    std::fs::write(&path, MODERATION_SCENARIO).unwrap();

    let scenario = VerificationScenario::load(&path).await.unwrap();
    assert_eq!(scenario.label(), "config-moderation");
    assert_eq!(scenario.interactions.len(), 2);
}

#[tokio::test]
async fn test_load_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = VerificationScenario::load(&dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(PageproofError::Io(_))));
}
