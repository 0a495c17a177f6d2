//! # pageproof-core
//!
//! Core types for the pageproof page verification harness.
//!
//! A verification run is described declaratively by a
//! [`VerificationScenario`]: the page to load, the readiness conditions to
//! wait on, the interactions to perform, and the screenshot path. The
//! browser-facing execution lives in `pageproof-browser`; this crate holds
//! only the data model, the unified error type, and configuration.

mod config;
mod error;
mod scenario;

pub use config::{BrowserDefaults, PageproofConfig};
pub use error::{PageproofError, Result};
pub use scenario::{
    example_scenario, Interaction, InteractionAction, InteractionTarget, ReadinessCondition,
    VerificationScenario,
};
