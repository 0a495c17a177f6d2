//! Configuration management for pageproof
//!
//! Repository-level defaults for browser launch and readiness waits,
//! loaded from `pageproof.toml` in the working directory. CLI flags
//! override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{PageproofError, Result};

const CONFIG_FILE: &str = "pageproof.toml";

/// Repository-level pageproof configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageproofConfig {
    /// Browser launch and wait defaults
    #[serde(default)]
    pub browser: BrowserDefaults,
}

/// Default browser parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserDefaults {
    /// Run in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Default readiness wait budget in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// DOM poll interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

// Default value providers
fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for BrowserDefaults {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PageproofConfig {
    /// Load configuration from `pageproof.toml` in `dir` or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| PageproofError::Config(format!("Failed to parse {}: {}", config_path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `pageproof.toml` in `dir`
    pub fn write_default(dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| PageproofError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageproofConfig::default();
        assert!(config.browser.headless);
        assert_eq!(config.browser.window_width, 1920);
        assert_eq!(config.browser.window_height, 1080);
        assert_eq!(config.browser.timeout_secs, 30);
        assert_eq!(config.browser.poll_interval_ms, 100);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PageproofConfig::load_or_default(dir.path()).unwrap();
        assert!(config.browser.headless);
        assert_eq!(config.browser.timeout_secs, 30);
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        PageproofConfig::write_default(dir.path()).unwrap();

        let config = PageproofConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.browser.window_width, 1920);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[browser]\ntimeout_secs = 5\nheadless = false\n",
        )
        .unwrap();

        let config = PageproofConfig::load_or_default(dir.path()).unwrap();
        assert!(!config.browser.headless);
        assert_eq!(config.browser.timeout_secs, 5);
        assert_eq!(config.browser.window_width, 1920);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "browser = [not toml").unwrap();

        assert!(matches!(
            PageproofConfig::load_or_default(dir.path()),
            Err(PageproofError::Config(_))
        ));
    }
}
