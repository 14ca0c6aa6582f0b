//! WebDriver sessions.

use std::sync::Arc;

use tracing::{debug, info};
use url::Url;
use wd_protocol::{
    Capabilities, ElementRef, NavigateRequest, NewSessionRequest, NewSessionResponse,
    decode_screenshot,
};
use wd_runtime::{HttpTransport, Result};

use crate::by::By;
use crate::element::Element;
use crate::wait::Wait;

/// One browser-driver session.
///
/// Created against a running remote end (a spawned
/// [`wd_runtime::DriverServer`] or an externally managed endpoint). The
/// session owns the browser for its lifetime; call [`Session::quit`] at
/// teardown so the remote end can release it. A test owns at most one live
/// session at a time.
#[derive(Debug, Clone)]
pub struct Session {
    transport: HttpTransport,
    session_id: Arc<str>,
}

impl Session {
    /// Start a new session at `endpoint` with the given capabilities.
    pub async fn new(endpoint: &Url, capabilities: Capabilities) -> Result<Self> {
        let transport = HttpTransport::new(endpoint.clone());
        let browser = capabilities.browser_name.clone();
        let value = transport
            .post("session", &NewSessionRequest::new(capabilities))
            .await?;
        let response: NewSessionResponse = serde_json::from_value(value)?;
        info!(
            target = "wd",
            session = %response.session_id,
            %browser,
            endpoint = %endpoint,
            "session created"
        );
        Ok(Self {
            transport,
            session_id: response.session_id.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    fn path(&self, suffix: &str) -> String {
        format!("session/{}/{suffix}", self.session_id)
    }

    /// Navigate to an absolute URL and block until the document is loaded.
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(target = "wd", %url, "navigate");
        self.transport
            .post(&self.path("url"), &NavigateRequest::new(url))
            .await?;
        Ok(())
    }

    /// URL of the current top-level browsing context.
    pub async fn current_url(&self) -> Result<String> {
        let value = self.transport.get(&self.path("url")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Title of the current document.
    pub async fn title(&self) -> Result<String> {
        let value = self.transport.get(&self.path("title")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve a locator to a single element.
    ///
    /// Fails with a `no such element` remote error when nothing matches;
    /// use [`Session::wait`] to poll instead of failing immediately.
    pub async fn find(&self, by: &By) -> Result<Element> {
        let value = self
            .transport
            .post(&self.path("element"), &by.to_wire())
            .await?;
        let element: ElementRef = serde_json::from_value(value)?;
        Ok(self.element(element))
    }

    /// Resolve a locator to every matching element.
    ///
    /// Returns an empty vec (not an error) when nothing matches, so callers
    /// can assert on match counts directly.
    pub async fn find_all(&self, by: &By) -> Result<Vec<Element>> {
        let value = self
            .transport
            .post(&self.path("elements"), &by.to_wire())
            .await?;
        let refs: Vec<ElementRef> = serde_json::from_value(value)?;
        Ok(refs.into_iter().map(|r| self.element(r)).collect())
    }

    /// PNG screenshot of the current viewport.
    pub async fn screenshot_png(&self) -> Result<Vec<u8>> {
        let value = self.transport.get(&self.path("screenshot")).await?;
        let encoded: String = serde_json::from_value(value)?;
        decode_screenshot(&encoded).map_err(|e| wd_runtime::Error::Payload(e.to_string()))
    }

    /// A polling wait over this session with default bounds.
    pub fn wait(&self) -> Wait<'_> {
        Wait::new(self)
    }

    /// End the session. The remote end closes the browser.
    pub async fn quit(self) -> Result<()> {
        info!(target = "wd", session = %self.session_id, "session quit");
        self.transport
            .delete(&format!("session/{}", self.session_id))
            .await?;
        Ok(())
    }

    fn element(&self, element: ElementRef) -> Element {
        Element::new(
            self.transport.clone(),
            Arc::clone(&self.session_id),
            element.element_id,
        )
    }
}
