//! Playwright-backed driver
//!
//! Drives a persistent `node` subprocess running a small Playwright command
//! loop. Commands and replies are JSON lines over stdin/stdout, so one
//! browsing context (and its login session) survives across calls.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as TokioCommand};
use tracing::{debug, info};

use crate::driver::{Driver, WaitState};
use crate::error::{HarnessError, Result};

/// Browser engine selection
#[derive(Debug, Clone, Copy, Default)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

/// Configuration for the Playwright driver
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub browser: Browser,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub screenshot_dir: PathBuf,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            browser: Browser::Chromium,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            screenshot_dir: PathBuf::from("test-results/screenshots"),
        }
    }
}

struct DriverIo {
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
}

/// Handle to the node/Playwright subprocess
pub struct PlaywrightDriver {
    io: tokio::sync::Mutex<DriverIo>,
    child: std::sync::Mutex<Child>,
    next_id: AtomicU64,
    // Keeps the command-loop script alive for the process lifetime.
    _script: tempfile::NamedTempFile,
}

impl PlaywrightDriver {
    /// Launch the browser and wait for the command loop to come up.
    pub async fn launch(config: PlaywrightConfig) -> Result<Self> {
        Self::check_playwright_installed()?;
        std::fs::create_dir_all(&config.screenshot_dir)?;

        let script = tempfile::Builder::new()
            .prefix("pw-driver-")
            .suffix(".cjs")
            .tempfile()?;
        std::fs::write(script.path(), DRIVER_SCRIPT)?;

        let mut cmd = TokioCommand::new("node");
        cmd.arg(script.path())
            .env("PW_BROWSER", config.browser.as_str())
            .env("PW_HEADLESS", if config.headless { "1" } else { "0" })
            .env("PW_VIEWPORT_WIDTH", config.viewport_width.to_string())
            .env("PW_VIEWPORT_HEIGHT", config.viewport_height.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| HarnessError::Driver(format!("failed to spawn node: {}", e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| HarnessError::Driver("driver stdin unavailable".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| HarnessError::Driver("driver stdout unavailable".into()))?;
        let mut lines = BufReader::new(stdout).lines();

        // The loop prints a ready line once the browser context is open.
        let ready = lines
            .next_line()
            .await?
            .ok_or_else(|| HarnessError::Driver("driver exited before ready".into()))?;
        let ready: Value = serde_json::from_str(&ready)?;
        if ready.get("ready").and_then(Value::as_bool) != Some(true) {
            return Err(HarnessError::Driver(format!(
                "unexpected driver greeting: {}",
                ready
            )));
        }

        info!(browser = config.browser.as_str(), "playwright driver ready");

        Ok(Self {
            io: tokio::sync::Mutex::new(DriverIo { stdin, lines }),
            child: std::sync::Mutex::new(child),
            next_id: AtomicU64::new(1),
            _script: script,
        })
    }

    /// Check if Playwright is installed
    fn check_playwright_installed() -> Result<()> {
        let output = std::process::Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(HarnessError::Driver(
                "Playwright not found. Install with: npx playwright install".into(),
            )),
        }
    }

    /// Close the browser and let the subprocess exit.
    pub async fn close(&self) -> Result<()> {
        let _ = self.call(json!({ "cmd": "close" })).await;
        Ok(())
    }

    async fn call(&self, mut msg: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        msg["id"] = json!(id);

        let mut io = self.io.lock().await;
        debug!(cmd = %msg["cmd"], "driver command");

        io.stdin.write_all(msg.to_string().as_bytes()).await?;
        io.stdin.write_all(b"\n").await?;
        io.stdin.flush().await?;

        let line = io
            .lines
            .next_line()
            .await?
            .ok_or_else(|| HarnessError::Driver("driver process closed".into()))?;
        let resp: Value = serde_json::from_str(&line)?;

        if resp.get("ok").and_then(Value::as_bool) == Some(true) {
            Ok(resp.get("value").cloned().unwrap_or(Value::Null))
        } else {
            let error = resp
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown driver error");
            Err(HarnessError::Driver(error.to_string()))
        }
    }

    fn expect_string(value: Value) -> Result<String> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| HarnessError::Driver(format!("expected string, got {}", value)))
    }
}

impl Drop for PlaywrightDriver {
    fn drop(&mut self) {
        if let Ok(mut child) = self.child.lock() {
            let _ = child.start_kill();
        }
    }
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.call(json!({ "cmd": "navigate", "url": url })).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Self::expect_string(self.call(json!({ "cmd": "current_url" })).await?)
    }

    async fn reload(&self) -> Result<()> {
        self.call(json!({ "cmd": "reload" })).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.call(json!({ "cmd": "click", "selector": selector }))
            .await?;
        Ok(())
    }

    async fn dblclick(&self, selector: &str) -> Result<()> {
        self.call(json!({ "cmd": "dblclick", "selector": selector }))
            .await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.call(json!({ "cmd": "fill", "selector": selector, "value": value }))
            .await?;
        Ok(())
    }

    async fn select_option(&self, selector: &str, label: &str) -> Result<()> {
        self.call(json!({ "cmd": "select_option", "selector": selector, "value": label }))
            .await?;
        Ok(())
    }

    async fn press(&self, key: &str) -> Result<()> {
        self.call(json!({ "cmd": "press", "key": key })).await?;
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        Self::expect_string(
            self.call(json!({ "cmd": "inner_text", "selector": selector }))
                .await?,
        )
    }

    async fn inner_html(&self, selector: &str) -> Result<String> {
        Self::expect_string(
            self.call(json!({ "cmd": "inner_html", "selector": selector }))
                .await?,
        )
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        Self::expect_string(
            self.call(json!({ "cmd": "input_value", "selector": selector }))
                .await?,
        )
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let value = self
            .call(json!({ "cmd": "is_visible", "selector": selector }))
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let value = self
            .call(json!({ "cmd": "count", "selector": selector }))
            .await?;
        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let value = self
            .call(json!({ "cmd": "attribute", "selector": selector, "name": name }))
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    async fn is_checked(&self, selector: &str) -> Result<bool> {
        let value = self
            .call(json!({ "cmd": "is_checked", "selector": selector }))
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()> {
        self.call(json!({ "cmd": "set_checked", "selector": selector, "checked": checked }))
            .await?;
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> Result<()> {
        self.call(json!({
            "cmd": "wait_for_selector",
            "selector": selector,
            "state": state.as_str(),
            "timeout_ms": timeout.as_millis() as u64,
        }))
        .await?;
        Ok(())
    }

    async fn wait_for_url(&self, pattern: &str, timeout: Duration) -> Result<()> {
        self.call(json!({
            "cmd": "wait_for_url",
            "pattern": pattern,
            "timeout_ms": timeout.as_millis() as u64,
        }))
        .await?;
        Ok(())
    }

    async fn screenshot(&self, path: &std::path::Path) -> Result<()> {
        self.call(json!({ "cmd": "screenshot", "path": path.to_string_lossy() }))
            .await?;
        Ok(())
    }

    async fn wait_for_download(
        &self,
        selector: &str,
        dir: &std::path::Path,
        timeout: Duration,
    ) -> Result<std::path::PathBuf> {
        std::fs::create_dir_all(dir)?;
        let value = self
            .call(json!({
                "cmd": "download",
                "selector": selector,
                "dir": dir.to_string_lossy(),
                "timeout_ms": timeout.as_millis() as u64,
            }))
            .await?;
        Ok(std::path::PathBuf::from(Self::expect_string(value)?))
    }
}

const DRIVER_SCRIPT: &str = r#"
const readline = require('readline');
const { chromium, firefox, webkit } = require('playwright');

(async () => {
  const engines = { chromium, firefox, webkit };
  const engine = engines[process.env.PW_BROWSER || 'chromium'];
  const browser = await engine.launch({ headless: process.env.PW_HEADLESS !== '0' });
  const context = await browser.newContext({
    viewport: {
      width: parseInt(process.env.PW_VIEWPORT_WIDTH || '1280', 10),
      height: parseInt(process.env.PW_VIEWPORT_HEIGHT || '720', 10)
    }
  });
  const page = await context.newPage();

  // Handlers returning Playwright objects (Response, ElementHandle,
  // Buffer) must resolve to undefined so replies stay JSON-serializable.
  const handlers = {
    navigate: async (a) => { await page.goto(a.url); },
    current_url: () => page.url(),
    reload: async () => { await page.reload(); },
    click: (a) => page.click(a.selector),
    dblclick: (a) => page.dblclick(a.selector),
    fill: (a) => page.fill(a.selector, a.value),
    select_option: (a) => page.selectOption(a.selector, { label: a.value }),
    press: (a) => page.keyboard.press(a.key),
    inner_text: (a) => page.innerText(a.selector),
    inner_html: (a) => page.innerHTML(a.selector),
    input_value: (a) => page.inputValue(a.selector),
    is_visible: (a) => page.isVisible(a.selector),
    count: (a) => page.locator(a.selector).count(),
    attribute: (a) => page.getAttribute(a.selector, a.name),
    is_checked: (a) => page.isChecked(a.selector),
    set_checked: (a) => page.setChecked(a.selector, a.checked),
    wait_for_selector: async (a) => {
      await page.waitForSelector(a.selector, { state: a.state, timeout: a.timeout_ms });
    },
    wait_for_url: async (a) => { await page.waitForURL(a.pattern, { timeout: a.timeout_ms }); },
    screenshot: async (a) => { await page.screenshot({ path: a.path, fullPage: true }); },
    download: async (a) => {
      const [download] = await Promise.all([
        page.waitForEvent('download', { timeout: a.timeout_ms }),
        page.click(a.selector)
      ]);
      const target = a.dir + '/' + download.suggestedFilename();
      await download.saveAs(target);
      return target;
    },
    close: async () => { await browser.close(); process.exit(0); }
  };

  console.log(JSON.stringify({ ready: true }));

  const rl = readline.createInterface({ input: process.stdin });
  for await (const line of rl) {
    let msg;
    try { msg = JSON.parse(line); } catch { continue; }
    try {
      const handler = handlers[msg.cmd];
      if (!handler) throw new Error('unknown command: ' + msg.cmd);
      const value = await handler(msg);
      console.log(JSON.stringify({ id: msg.id, ok: true, value: value === undefined ? null : value }));
    } catch (err) {
      console.log(JSON.stringify({ id: msg.id, ok: false, error: String((err && err.message) || err) }));
    }
  }
})();
"#;
