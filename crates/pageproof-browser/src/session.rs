//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::Result;
use crate::script;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use pageproof_core::{BrowserDefaults, InteractionTarget, PageproofError, ReadinessCondition};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// User agent string
    pub user_agent: Option<String>,
    /// Default readiness wait budget in seconds
    pub timeout_seconds: u64,
    /// DOM poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            user_agent: None,
            timeout_seconds: 30,
            poll_interval_ms: 100,
        }
    }
}

impl From<&BrowserDefaults> for SessionConfig {
    fn from(defaults: &BrowserDefaults) -> Self {
        Self {
            headless: defaults.headless,
            window_width: defaults.window_width,
            window_height: defaults.window_height,
            user_agent: None,
            timeout_seconds: defaults.timeout_secs,
            poll_interval_ms: defaults.poll_interval_ms,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// The session owns the browser process for its full lifetime. Dropping
/// the session tears the browser down, so every exit path releases it.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: SessionConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(SessionConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: SessionConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let mut launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| PageproofError::Browser(format!("Failed to launch browser: {}", e)))?;

        // Add user agent if specified
        let user_agent_arg: Option<String> = config
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));
        if let Some(ref ua_arg) = user_agent_arg {
            launch_options.args.push(OsStr::new(ua_arg));
        }

        let browser = Browser::new(launch_options)
            .map_err(|e| PageproofError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| PageproofError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Connect to an existing browser instance
    ///
    /// # Arguments
    /// * `port` - Chrome DevTools Protocol port (typically 9222)
    pub async fn connect(port: u16) -> Result<Self> {
        Self::connect_with_config(port, SessionConfig::default()).await
    }

    /// Connect to an existing browser with custom wait configuration
    pub async fn connect_with_config(port: u16, config: SessionConfig) -> Result<Self> {
        info!("Connecting to existing browser on port {}", port);

        let browser = Browser::connect(format!("http://127.0.0.1:{}", port))
            .map_err(|e| PageproofError::Browser(format!("Failed to connect to browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| PageproofError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Connected to browser successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and wait for the load to settle
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| PageproofError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| PageproofError::Navigation(format!("Navigation to {} did not complete: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate(&self, expression: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", expression);

        let result = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| PageproofError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Block until a readiness condition holds in the live DOM
    ///
    /// Polls the page at the configured interval. Fails with a timeout
    /// error naming the condition and elapsed time once the budget (the
    /// condition's own override, or the session default) is spent.
    pub async fn wait_for(&self, condition: &ReadinessCondition) -> Result<()> {
        let budget = Duration::from_secs(
            condition
                .timeout_secs
                .unwrap_or(self.config.timeout_seconds),
        );
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        let started = Instant::now();

        debug!("Waiting for {} (budget: {:?})", condition.describe(), budget);

        loop {
            if self.condition_holds(condition).await? {
                debug!("Condition met: {}", condition.describe());
                return Ok(());
            }

            if started.elapsed() >= budget {
                return Err(PageproofError::Timeout {
                    condition: condition.describe(),
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    async fn condition_holds(&self, condition: &ReadinessCondition) -> Result<bool> {
        let expression = script::readiness_script(condition);
        let value = self.evaluate(&expression).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Click the first element matching an interaction target
    pub async fn click(&self, target: &InteractionTarget) -> Result<()> {
        debug!("Clicking {}", target);

        match target {
            InteractionTarget::Css { selector } => {
                let element = self
                    .tab
                    .find_element(selector)
                    .map_err(|_e| PageproofError::ElementNotFound(selector.clone()))?;

                element
                    .click()
                    .map_err(|e| PageproofError::Browser(format!("Click failed on {}: {}", selector, e)))?;
            }
            InteractionTarget::Role { role, name } => {
                let expression = script::click_by_role_script(role, name);
                let clicked = self.evaluate(&expression).await?.as_bool().unwrap_or(false);

                if !clicked {
                    return Err(PageproofError::ElementNotFound(target.to_string()));
                }
            }
        }

        info!("Clicked {}", target);
        Ok(())
    }

    /// Capture a full-page PNG screenshot
    pub async fn capture_screenshot(&self) -> Result<Vec<u8>> {
        debug!("Capturing full page screenshot");

        let data = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| PageproofError::Screenshot(format!("CDP capture failed: {}", e)))?;

        Ok(data)
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser will be dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}
