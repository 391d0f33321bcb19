//! Suite configuration and logging setup

use std::path::PathBuf;
use std::time::Duration;

use jorani_harness::TableTiming;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Configuration for a suite run against one Jorani instance.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the application under test.
    pub base_url: String,

    /// Credentials of the approving/admin account.
    pub login: String,
    pub password: String,

    /// Run the browser headless.
    pub headless: bool,

    /// Timeout for visibility and navigation waits.
    pub default_timeout: Duration,

    /// Interval between stability polls.
    pub stability_interval: Duration,

    /// Attempts per stability poll loop.
    pub max_poll_attempts: usize,

    /// Hard cap on pages visited during pagination.
    pub pagination_safety_bound: usize,

    /// Where failure screenshots land.
    pub screenshot_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            login: "bbalet".to_string(),
            password: "bbalet".to_string(),
            headless: true,
            default_timeout: Duration::from_secs(10),
            stability_interval: Duration::from_millis(300),
            max_poll_attempts: 10,
            pagination_safety_bound: 40,
            screenshot_dir: PathBuf::from("test-results/screenshots"),
        }
    }
}

impl SuiteConfig {
    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("JORANI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(login) = std::env::var("JORANI_LOGIN") {
            config.login = login;
        }
        if let Ok(password) = std::env::var("JORANI_PASSWORD") {
            config.password = password;
        }
        if let Ok(headless) = std::env::var("JORANI_HEADLESS") {
            config.headless = headless != "false" && headless != "0";
        }
        config
    }

    /// Table polling parameters derived from this config.
    pub fn table_timing(&self) -> TableTiming {
        TableTiming {
            max_attempts: self.max_poll_attempts,
            interval: self.stability_interval,
            visibility_timeout: self.default_timeout,
            safety_bound: self.pagination_safety_bound,
        }
    }

    /// Absolute URL for an application path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

static TRACING: OnceCell<()> = OnceCell::new();

/// Initialize tracing once per process. Safe to call from every test.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
