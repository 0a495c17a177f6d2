//! Scenario definitions for page verification runs
//!
//! A [`VerificationScenario`] is a declarative description of one run:
//! the URL to load, the readiness conditions to wait on, the interactions
//! to perform, and the path the final screenshot is written to. Scenarios
//! are built as literals or loaded from JSON files, executed exactly once,
//! and hold no identity across runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::{PageproofError, Result};

/// A readiness predicate over the live DOM
///
/// The element matching `selector` must exist and, if `contains_text` is
/// set, its text content must contain the given substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessCondition {
    /// CSS selector the element must match
    pub selector: String,

    /// Required visible-text substring (existence-only check if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_text: Option<String>,

    /// Wait budget override in seconds for this condition only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ReadinessCondition {
    /// Condition satisfied as soon as an element matches the selector
    pub fn present(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            contains_text: None,
            timeout_secs: None,
        }
    }

    /// Condition satisfied when a matching element contains the given text
    pub fn with_text(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            contains_text: Some(text.into()),
            timeout_secs: None,
        }
    }

    /// Override the wait budget for this condition
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Human-readable form used in logs and timeout errors
    pub fn describe(&self) -> String {
        match &self.contains_text {
            Some(text) => format!("{} containing \"{}\"", self.selector, text),
            None => self.selector.clone(),
        }
    }
}

/// Target of a UI interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractionTarget {
    /// Accessible role + accessible name (e.g. button named "Approve")
    Role { role: String, name: String },
    /// Plain CSS selector
    Css { selector: String },
}

impl std::fmt::Display for InteractionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Role { role, name } => write!(f, "role={} name=\"{}\"", role, name),
            Self::Css { selector } => write!(f, "{}", selector),
        }
    }
}

/// Supported interaction actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionAction {
    #[default]
    Click,
}

impl std::fmt::Display for InteractionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Click => write!(f, "click"),
        }
    }
}

/// One interaction step: act on a target, then optionally wait for the
/// page to settle into an expected state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Element to act on (first match in document order)
    pub target: InteractionTarget,

    /// Action to perform (defaults to click)
    #[serde(default)]
    pub action: InteractionAction,

    /// Readiness condition awaited after the action completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<ReadinessCondition>,
}

impl Interaction {
    /// Click the first element with the given accessible role and name
    pub fn click_role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            target: InteractionTarget::Role {
                role: role.into(),
                name: name.into(),
            },
            action: InteractionAction::Click,
            expect: None,
        }
    }

    /// Click the first element matching a CSS selector
    pub fn click_selector(selector: impl Into<String>) -> Self {
        Self {
            target: InteractionTarget::Css {
                selector: selector.into(),
            },
            action: InteractionAction::Click,
            expect: None,
        }
    }

    /// Wait for a readiness condition after the action
    pub fn then_expect(mut self, condition: ReadinessCondition) -> Self {
        self.expect = Some(condition);
        self
    }
}

/// Declarative description of one verification run
///
/// Execution order is fixed: navigate to `target_url`, wait on each entry
/// of `readiness`, perform each entry of `interactions` (with its trailing
/// `expect` wait, when present), wait on `final_readiness`, then capture a
/// full-page screenshot to `screenshot_path`. The run either completes
/// fully or fails at the first unmet step; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationScenario {
    /// Optional scenario name for logs and CLI output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute http(s) URL to load, query string included
    pub target_url: String,

    /// Readiness conditions awaited after navigation, in order
    #[serde(default)]
    pub readiness: Vec<ReadinessCondition>,

    /// Interactions performed after the page is ready, in order
    #[serde(default)]
    pub interactions: Vec<Interaction>,

    /// Final readiness condition before the screenshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_readiness: Option<ReadinessCondition>,

    /// Path the full-page screenshot is written to
    pub screenshot_path: PathBuf,
}

impl VerificationScenario {
    /// Create a scenario with no waits or interactions
    pub fn new(target_url: impl Into<String>, screenshot_path: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            target_url: target_url.into(),
            readiness: Vec::new(),
            interactions: Vec::new(),
            final_readiness: None,
            screenshot_path: screenshot_path.into(),
        }
    }

    /// Name the scenario
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a readiness condition awaited after navigation
    pub fn wait_for(mut self, condition: ReadinessCondition) -> Self {
        self.readiness.push(condition);
        self
    }

    /// Append an interaction step
    pub fn interact(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Set the final readiness condition before the screenshot
    pub fn finally(mut self, condition: ReadinessCondition) -> Self {
        self.final_readiness = Some(condition);
        self
    }

    /// Label used in logs: the name if set, otherwise the target URL
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.target_url)
    }

    /// Check structural invariants before any browser work
    ///
    /// The target URL must parse as an absolute http(s) URL and the
    /// screenshot path must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.target_url)
            .map_err(|e| PageproofError::InvalidScenario(format!("bad target_url \"{}\": {}", self.target_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PageproofError::InvalidScenario(format!(
                "unsupported URL scheme \"{}\" in {}",
                url.scheme(),
                self.target_url
            )));
        }

        if self.screenshot_path.as_os_str().is_empty() {
            return Err(PageproofError::InvalidScenario(
                "screenshot_path is empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse a scenario from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    /// Serialize the scenario to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Create an example scenario for demonstration and `pageproof template`
pub fn example_scenario() -> VerificationScenario {
    VerificationScenario::new("http://localhost:8080/config.html?local=true", "verification.png")
        .named("moderation-queue")
        .wait_for(ReadinessCondition::with_text(
            "#pending-tasks-container",
            "Do a barrel roll!",
        ))
        .interact(
            Interaction::click_role("button", "Approve").then_expect(
                ReadinessCondition::with_text("#pending-tasks-container", "Name a character after me"),
            ),
        )
        .interact(Interaction::click_role("button", "Reject"))
        .finally(ReadinessCondition::with_text(
            "#pending-tasks-container",
            "Let me pick the next song",
        ))
}
