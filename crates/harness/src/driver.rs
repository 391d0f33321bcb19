//! Driver abstraction over a browser automation engine
//!
//! The harness never assumes a concrete engine beyond this capability set.
//! Screens are addressed by CSS selector; element state is read and written
//! through the owning page, the way Playwright's page-level API works.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Target state for a selector wait
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

impl WaitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitState::Visible => "visible",
            WaitState::Hidden => "hidden",
            WaitState::Attached => "attached",
            WaitState::Detached => "detached",
        }
    }
}

/// Capability boundary to the browser automation engine.
///
/// Implementations must be usable from a single logical test flow; the
/// harness performs no intra-test concurrency, so interior mutability is an
/// implementation concern, not a contract one.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate to an absolute URL.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Current page URL.
    async fn current_url(&self) -> Result<String>;

    /// Reload the current page.
    async fn reload(&self) -> Result<()>;

    /// Click the first element matching the selector.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Double-click the first element matching the selector.
    async fn dblclick(&self, selector: &str) -> Result<()>;

    /// Replace the value of an input or textarea.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Select a `<select>` option by its visible label.
    async fn select_option(&self, selector: &str, label: &str) -> Result<()>;

    /// Press a keyboard key (page-level focus).
    async fn press(&self, key: &str) -> Result<()>;

    /// Rendered text content of the first match.
    async fn inner_text(&self, selector: &str) -> Result<String>;

    /// Raw markup of the first match.
    async fn inner_html(&self, selector: &str) -> Result<String>;

    /// Current value of an input element.
    async fn input_value(&self, selector: &str) -> Result<String>;

    /// Whether the first match is currently visible. A selector with no
    /// matches is not visible, not an error.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Number of elements matching the selector.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Attribute value of the first match, if the attribute is present.
    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Whether a checkbox or radio is checked.
    async fn is_checked(&self, selector: &str) -> Result<bool>;

    /// Check or uncheck a checkbox.
    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()>;

    /// Wait until the selector reaches the given state.
    ///
    /// Expiry is reported as a driver-level error; callers that need the
    /// typed `ElementNotFound` kind go through the stable-read primitives.
    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> Result<()>;

    /// Wait until the page URL matches a glob pattern such as `**/users`.
    async fn wait_for_url(&self, pattern: &str, timeout: Duration) -> Result<()>;

    /// Capture a full-page screenshot to the given path.
    async fn screenshot(&self, path: &Path) -> Result<()>;

    /// Click the selector and wait for the download it triggers, saving
    /// the file under `dir`. Returns the saved path. The click and the
    /// event wait are armed together; arming them sequentially would race
    /// the event.
    async fn wait_for_download(
        &self,
        selector: &str,
        dir: &Path,
        timeout: Duration,
    ) -> Result<PathBuf>;
}

/// Compile a `**`-style URL glob into a regex.
///
/// `**` matches any run of characters including `/`; `*` matches any run
/// without `/`. The pattern is anchored at the end so `**/users` matches
/// `http://host/users` but not `http://host/users/create`.
pub fn url_glob(pattern: &str) -> Result<regex::Regex> {
    let mut re = String::from("^");
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    re.push_str(".*");
                } else {
                    re.push_str("[^/]*");
                }
            }
            '?' => re.push('.'),
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    regex::Regex::new(&re).map_err(|e| crate::error::HarnessError::Driver(e.to_string()))
}
