//! Browser error types - re-exports the unified PageproofError from pageproof-core
//!
//! All browser errors use the unified PageproofError type:
//! - Navigation(String) - unreachable URL or fatal load error
//! - Timeout { condition, elapsed_ms } - readiness condition never held
//! - ElementNotFound(String) - interaction target missing
//! - Screenshot(String) - CDP capture failure
//! - Browser(String) - launch, attach, and evaluation transport failures
//! - Io(std::io::Error) - screenshot write failures
//!
//! Error messages should be descriptive and include context about the operation that failed.

pub use pageproof_core::{PageproofError, Result};
