//! Authenticated browsing session
//!
//! One session per test execution; never shared across concurrent tests.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use jorani_harness::{Driver, HarnessError, Result};
use tracing::{info, warn};

use crate::config::SuiteConfig;
use crate::pages::LoginPage;

/// Per-test handle over the driver and configuration. Cheap to clone; all
/// clones share the same browsing context.
#[derive(Clone)]
pub struct Session {
    driver: Arc<dyn Driver>,
    config: SuiteConfig,
}

impl Session {
    pub fn new(driver: Arc<dyn Driver>, config: SuiteConfig) -> Self {
        Self { driver, config }
    }

    pub fn driver(&self) -> &dyn Driver {
        self.driver.as_ref()
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Probe the application before a live run. Connection refused while
    /// the instance is still starting is expected and retried.
    pub async fn check_available(&self) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| HarnessError::Driver(e.to_string()))?;

        let deadline = std::time::Instant::now() + self.config.default_timeout;
        let mut attempts = 0usize;

        while std::time::Instant::now() < deadline {
            attempts += 1;
            match client.get(&self.config.base_url).send().await {
                Ok(resp) if resp.status().is_success() || resp.status().is_redirection() => {
                    return Ok(());
                }
                Ok(resp) => {
                    warn!(status = %resp.status(), "availability probe returned an error status");
                }
                Err(e) if e.is_connect() => {
                    if attempts == 1 {
                        info!("waiting for the application to come up...");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "availability probe failed");
                }
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }

        Err(HarnessError::Driver(format!(
            "application at {} not reachable after {} attempts",
            self.config.base_url, attempts
        )))
    }

    /// Authenticate with the configured credentials and wait for the home
    /// screen.
    pub async fn login(&self) -> Result<()> {
        self.driver.navigate(&self.url("/session/login")).await?;
        let login = LoginPage::new(self.driver());
        login.login(&self.config.login, &self.config.password).await?;
        self.driver
            .wait_for_url("**/home", self.config.default_timeout)
            .await?;
        info!(login = %self.config.login, "authenticated");
        Ok(())
    }

    /// Capture a screenshot for failure diagnosis. Best-effort: a capture
    /// failure is logged, never allowed to mask the test result.
    pub async fn capture_failure_screenshot(&self, name: &str) -> Option<PathBuf> {
        let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
        let path = self
            .config
            .screenshot_dir
            .join(format!("{}_{}.png", stamp, name));
        if let Err(e) = std::fs::create_dir_all(&self.config.screenshot_dir) {
            warn!(error = %e, "could not create screenshot directory");
            return None;
        }
        match self.driver.screenshot(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "failure screenshot captured");
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "failure screenshot capture failed");
                None
            }
        }
    }
}
