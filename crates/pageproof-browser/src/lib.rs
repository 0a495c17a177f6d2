//! Browser execution for pageproof verification scenarios
//!
//! This crate drives a headless Chrome through the Chrome DevTools
//! Protocol (CDP) to execute declarative [`VerificationScenario`]s:
//! navigate, wait for readiness conditions, perform interactions, and
//! capture a full-page screenshot.
//!
//! # Example
//!
//! ```no_run
//! use pageproof_browser::{PageVerifier, SessionConfig};
//! use pageproof_core::{Interaction, ReadinessCondition, VerificationScenario};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scenario = VerificationScenario::new(
//!         "http://localhost:8080/config.html?local=true",
//!         "moderation.png",
//!     )
//!     .wait_for(ReadinessCondition::with_text(
//!         "#pending-tasks-container",
//!         "Do a barrel roll!",
//!     ))
//!     .interact(Interaction::click_role("button", "Approve"))
//!     .finally(ReadinessCondition::present("#pending-tasks-container"));
//!
//!     let verifier = PageVerifier::new(SessionConfig::default());
//!     let artifact = verifier.run(&scenario).await?;
//!
//!     println!("Screenshot saved: {}", artifact.path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium browser installed
//! - For headless operation, no additional setup required
//! - For attaching to an existing browser: `chrome --remote-debugging-port=9222`
//!
//! # Architecture
//!
//! - [`session`]: browser lifecycle, navigation, waits, clicks, capture
//! - [`verifier`]: scenario orchestration with guaranteed session release
//! - [`script`]: JavaScript snippets evaluated in the page
//! - [`error`]: error types for browser operations

pub mod error;
pub mod script;
pub mod session;
pub mod verifier;

// Re-export commonly used types
pub use error::{PageproofError, Result};
pub use pageproof_core::VerificationScenario;
pub use session::{BrowserSession, SessionConfig};
pub use verifier::{PageVerifier, ScreenshotArtifact};
