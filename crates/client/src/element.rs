//! Resolved DOM elements.

use std::sync::Arc;

use tracing::debug;
use wd_protocol::{SendKeysRequest, empty_body};
use wd_runtime::{HttpTransport, Result};

/// A handle to one element the remote end has resolved.
///
/// The handle stays valid as long as the element remains attached to the
/// document; a re-render that replaces the node turns further commands into
/// `stale element reference` errors. Re-locate through the session (or a
/// [`crate::Wait`]) instead of holding handles across navigations.
#[derive(Debug, Clone)]
pub struct Element {
    transport: HttpTransport,
    session_id: Arc<str>,
    element_id: String,
}

impl Element {
    pub(crate) fn new(transport: HttpTransport, session_id: Arc<str>, element_id: String) -> Self {
        Self {
            transport,
            session_id,
            element_id,
        }
    }

    /// Remote-end identifier for this element.
    pub fn id(&self) -> &str {
        &self.element_id
    }

    fn path(&self, suffix: &str) -> String {
        format!(
            "session/{}/element/{}/{suffix}",
            self.session_id, self.element_id
        )
    }

    /// Click the element's in-view center point.
    pub async fn click(&self) -> Result<()> {
        debug!(target = "wd", element = %self.element_id, "click");
        self.transport
            .post(&self.path("click"), &empty_body())
            .await?;
        Ok(())
    }

    /// Type a key sequence into the element.
    ///
    /// The text may contain WebDriver key codepoints from
    /// [`wd_protocol::keys`] alongside ordinary characters.
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        debug!(target = "wd", element = %self.element_id, len = text.len(), "send keys");
        self.transport
            .post(&self.path("value"), &SendKeysRequest::new(text))
            .await?;
        Ok(())
    }

    /// Reset the element's value to empty.
    pub async fn clear(&self) -> Result<()> {
        self.transport
            .post(&self.path("clear"), &empty_body())
            .await?;
        Ok(())
    }

    /// The element's rendered text.
    pub async fn text(&self) -> Result<String> {
        let value = self.transport.get(&self.path("text")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the element is rendered visibly.
    pub async fn is_displayed(&self) -> Result<bool> {
        let value = self.transport.get(&self.path("displayed")).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Value of an attribute, or `None` when the attribute is absent.
    pub async fn attr(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .transport
            .get(&self.path(&format!("attribute/{name}")))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
