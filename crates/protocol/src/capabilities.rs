//! Session capabilities and the New Session command pair.

use serde::{Deserialize, Serialize};

/// Browser capabilities requested for a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Browser to launch ("chrome", "firefox").
    pub browser_name: String,

    /// Chromium-specific options, keyed per the W3C extension convention.
    #[serde(
        rename = "goog:chromeOptions",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub chrome_options: Option<ChromeOptions>,

    /// Gecko-specific options.
    #[serde(
        rename = "moz:firefoxOptions",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub firefox_options: Option<FirefoxOptions>,
}

/// Command-line arguments passed to a Chromium browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChromeOptions {
    #[serde(default)]
    pub args: Vec<String>,
}

/// Command-line arguments passed to a Gecko browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirefoxOptions {
    #[serde(default)]
    pub args: Vec<String>,
}

impl Capabilities {
    /// Chrome with no extra arguments.
    pub fn chrome() -> Self {
        Self {
            browser_name: "chrome".into(),
            chrome_options: Some(ChromeOptions::default()),
            firefox_options: None,
        }
    }

    /// Firefox with no extra arguments.
    pub fn firefox() -> Self {
        Self {
            browser_name: "firefox".into(),
            chrome_options: None,
            firefox_options: Some(FirefoxOptions::default()),
        }
    }

    /// Append a browser command-line argument to whichever option block is
    /// present for the selected browser.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        if let Some(opts) = self.chrome_options.as_mut() {
            opts.args.push(arg);
        } else if let Some(opts) = self.firefox_options.as_mut() {
            opts.args.push(arg);
        }
        self
    }

    /// Run the browser headless.
    pub fn headless(self) -> Self {
        if self.browser_name == "firefox" {
            self.with_arg("-headless")
        } else {
            self.with_arg("--headless=new")
        }
    }
}

/// Body of `POST /session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub capabilities: CapabilitiesRequest,
}

/// The W3C capabilities negotiation envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesRequest {
    pub always_match: Capabilities,
}

impl NewSessionRequest {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities: CapabilitiesRequest {
                always_match: capabilities,
            },
        }
    }
}

/// `value` payload of a successful `POST /session`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionResponse {
    pub session_id: String,

    /// Capabilities the remote end actually granted. Opaque to the client.
    #[serde(default)]
    pub capabilities: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_options_serialize_under_vendor_key() {
        let caps = Capabilities::chrome().headless();
        let json = serde_json::to_value(NewSessionRequest::new(caps)).unwrap();
        assert_eq!(
            json["capabilities"]["alwaysMatch"]["browserName"],
            "chrome"
        );
        assert_eq!(
            json["capabilities"]["alwaysMatch"]["goog:chromeOptions"]["args"][0],
            "--headless=new"
        );
    }

    #[test]
    fn firefox_headless_uses_gecko_flag() {
        let caps = Capabilities::firefox().headless();
        let json = serde_json::to_value(&caps).unwrap();
        assert_eq!(json["moz:firefoxOptions"]["args"][0], "-headless");
        assert!(json.get("goog:chromeOptions").is_none());
    }

    #[test]
    fn new_session_response_from_chromedriver_shape() {
        let raw = r#"{"sessionId":"3a4f","capabilities":{"browserName":"chrome"}}"#;
        let resp: NewSessionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.session_id, "3a4f");
        assert_eq!(resp.capabilities["browserName"], "chrome");
    }
}
