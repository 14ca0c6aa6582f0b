//! Harness configuration.
//!
//! Every knob reads an `E2E_*` environment variable and falls back to the
//! local-development defaults the front end is usually served with. A value
//! that fails to parse is logged and replaced by the default rather than
//! failing the test before it starts.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;
use url::Url;
use wd::Capabilities;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
const DEFAULT_ARTIFACTS_DIR: &str = "target/e2e-artifacts";

/// Which browser the WebDriver server should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

/// Resolved harness configuration.
#[derive(Debug, Clone)]
pub struct E2eConfig {
    /// Deployment under test; page paths are joined onto this.
    pub base_url: Url,
    /// Already-running remote end to attach to. When unset the harness
    /// spawns its own driver server.
    pub webdriver_url: Option<Url>,
    pub browser: Browser,
    pub headless: bool,
    /// Deadline for every polling wait.
    pub wait_timeout: Duration,
    /// Pause between poll attempts.
    pub poll_interval: Duration,
    /// Where failure screenshots land.
    pub artifacts_dir: PathBuf,
}

impl E2eConfig {
    /// Read the configuration from `E2E_*` environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("E2E_BASE_URL")
            .ok()
            .and_then(|raw| parse_url("E2E_BASE_URL", &raw))
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"));
        let webdriver_url = std::env::var("E2E_WEBDRIVER_URL")
            .ok()
            .and_then(|raw| parse_url("E2E_WEBDRIVER_URL", &raw));
        let browser = std::env::var("E2E_BROWSER")
            .ok()
            .and_then(|raw| match parse_browser(&raw) {
                Some(browser) => Some(browser),
                None => {
                    warn!(target = "e2e", value = %raw, "unknown E2E_BROWSER, using chrome");
                    None
                }
            })
            .unwrap_or(Browser::Chrome);
        let headless = std::env::var("E2E_HEADLESS")
            .ok()
            .and_then(|raw| match parse_bool(&raw) {
                Some(flag) => Some(flag),
                None => {
                    warn!(target = "e2e", value = %raw, "invalid E2E_HEADLESS, using true");
                    None
                }
            })
            .unwrap_or(true);

        Self {
            base_url,
            webdriver_url,
            browser,
            headless,
            wait_timeout: millis_or(
                std::env::var("E2E_WAIT_TIMEOUT_MS").ok(),
                "E2E_WAIT_TIMEOUT_MS",
                DEFAULT_WAIT_TIMEOUT_MS,
            ),
            poll_interval: millis_or(
                std::env::var("E2E_POLL_INTERVAL_MS").ok(),
                "E2E_POLL_INTERVAL_MS",
                DEFAULT_POLL_INTERVAL_MS,
            ),
            artifacts_dir: std::env::var("E2E_ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
        }
    }

    /// Absolute URL of a page path like `/user/login`.
    pub fn page_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Session capabilities for the configured browser.
    pub fn capabilities(&self) -> Capabilities {
        let caps = match self.browser {
            Browser::Chrome => Capabilities::chrome(),
            Browser::Firefox => Capabilities::firefox(),
        };
        if self.headless { caps.headless() } else { caps }
    }
}

fn parse_url(var: &str, raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(target = "e2e", %var, value = %raw, error = %e, "invalid URL, ignoring");
            None
        }
    }
}

fn parse_browser(raw: &str) -> Option<Browser> {
    match raw.to_ascii_lowercase().as_str() {
        "chrome" | "chromium" => Some(Browser::Chrome),
        "firefox" | "gecko" => Some(Browser::Firefox),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn millis_or(raw: Option<String>, var: &str, default_ms: u64) -> Duration {
    let ms = match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(target = "e2e", %var, value = %raw, "invalid millisecond count, using default");
            default_ms
        }),
        None => default_ms,
    };
    Duration::from_millis(ms)
}
