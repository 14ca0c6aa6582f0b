//! The shared per-test context.
//!
//! One context per test: it owns the driver server (when the harness
//! spawned one), the WebDriver session, and the resolved configuration.
//! Tests receive it as a value, use its action helpers, and hand their
//! outcome back to [`TestContext::conclude`] for teardown.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use tracing::{info, warn};
use wd::{By, Element, Session, Wait};
use wd_runtime::DriverServer;

use crate::config::E2eConfig;
use crate::logging;

pub struct TestContext {
    config: E2eConfig,
    driver: Option<DriverServer>,
    session: Session,
    test_name: String,
}

impl TestContext {
    /// Bring up everything one test needs: logging, configuration, a
    /// WebDriver remote end (spawned unless `E2E_WEBDRIVER_URL` points at a
    /// running one), and a fresh browser session.
    pub async fn launch(test_name: &str) -> Result<Self> {
        logging::init();
        let config = E2eConfig::from_env();
        let (driver, endpoint) = match &config.webdriver_url {
            Some(url) => (None, url.clone()),
            None => {
                let server = DriverServer::launch().await?;
                let endpoint = server.endpoint().clone();
                (Some(server), endpoint)
            }
        };
        let session = Session::new(&endpoint, config.capabilities()).await?;
        info!(
            target = "e2e",
            test = test_name,
            base_url = %config.base_url,
            %endpoint,
            spawned_driver = driver.is_some(),
            "test context ready"
        );
        Ok(Self {
            config,
            driver,
            session,
            test_name: test_name.to_string(),
        })
    }

    pub fn config(&self) -> &E2eConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A polling wait with the configured timeout and interval.
    pub fn wait(&self) -> Wait<'_> {
        self.session
            .wait()
            .timeout(self.config.wait_timeout)
            .interval(self.config.poll_interval)
    }

    /// Navigate to a page path like `/user/login`.
    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.config.page_url(path)?;
        info!(target = "e2e", %url, "open");
        self.session.goto(url.as_str()).await?;
        Ok(())
    }

    /// Poll until `by` resolves to a displayed element.
    pub async fn wait_for(&self, by: &By) -> Result<Element> {
        Ok(self.wait().for_element(by).await?)
    }

    /// Poll until nothing matches `by` any more.
    pub async fn wait_for_gone(&self, by: &By) -> Result<()> {
        Ok(self.wait().for_count(by, 0).await?)
    }

    /// Resolve `by` and type `text` into it.
    pub async fn type_into(&self, by: &By, text: &str) -> Result<()> {
        self.wait_for(by).await?.send_keys(text).await?;
        Ok(())
    }

    /// Resolve `by` and click it.
    pub async fn click(&self, by: &By) -> Result<()> {
        self.wait_for(by).await?.click().await?;
        Ok(())
    }

    /// Click `by`, then poll for `after` so the triggered navigation or
    /// re-render has landed before the script moves on.
    pub async fn click_and_wait(&self, by: &By, after: &By) -> Result<Element> {
        self.click(by).await?;
        self.wait_for(after).await
    }

    /// How many elements currently match `by`, evaluated once without
    /// polling. Zero is an answer, not an error.
    pub async fn visible_count(&self, by: &By) -> Result<usize> {
        Ok(self.session.find_all(by).await?.len())
    }

    /// Assert the browser is exactly at the given page path.
    pub async fn assert_url(&self, path: &str) -> Result<()> {
        let expected = self.config.page_url(path)?;
        let actual = self.session.current_url().await?;
        ensure!(
            actual == expected.as_str(),
            "expected the browser at {expected}, found {actual}"
        );
        Ok(())
    }

    /// Poll until the browser lands on the given page path.
    pub async fn wait_for_url(&self, path: &str) -> Result<()> {
        let expected = self.config.page_url(path)?;
        self.wait()
            .for_url(&format!("to equal {expected}"), |url| {
                url == expected.as_str()
            })
            .await?;
        Ok(())
    }

    /// Save a screenshot into the artifacts directory.
    ///
    /// Capture problems are logged and swallowed: artifact capture runs on
    /// the failure path and must not mask the original error.
    pub async fn capture_failure_artifacts(&self) {
        let path = self.artifact_path("png");
        let png = match self.session.screenshot_png().await {
            Ok(png) => png,
            Err(e) => {
                warn!(target = "e2e", error = %e, "screenshot capture failed");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(target = "e2e", error = %e, "could not create artifacts directory");
                return;
            }
        }
        match std::fs::write(&path, &png) {
            Ok(()) => info!(target = "e2e", path = %path.display(), "failure screenshot saved"),
            Err(e) => warn!(target = "e2e", error = %e, "could not write screenshot"),
        }
    }

    /// Quit the session and shut down the driver server, if one was
    /// spawned.
    pub async fn finish(self) -> Result<()> {
        self.session.quit().await?;
        if let Some(driver) = self.driver {
            driver.shutdown().await?;
        }
        Ok(())
    }

    /// Tear down, preserving `outcome`. On failure a screenshot is captured
    /// first; teardown errors only surface when the flow itself passed.
    pub async fn conclude(self, outcome: Result<()>) -> Result<()> {
        match &outcome {
            Ok(()) => info!(target = "e2e", test = %self.test_name, "test flow passed"),
            Err(e) => {
                warn!(target = "e2e", test = %self.test_name, error = %e, "test flow failed");
                self.capture_failure_artifacts().await;
            }
        }
        let teardown = self.finish().await;
        match outcome {
            Ok(()) => teardown,
            Err(e) => Err(e),
        }
    }

    fn artifact_path(&self, ext: &str) -> PathBuf {
        self.config
            .artifacts_dir
            .join(format!("{}.{ext}", self.test_name))
    }
}
