//! Element location strategies.

use serde::{Deserialize, Serialize};

/// Location strategy accepted by Find Element / Find Elements.
///
/// Only the two strategies the test suite actually uses are modeled; the
/// W3C `link text` family is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocatorStrategy {
    /// CSS selector
    #[serde(rename = "css selector")]
    CssSelector,
    /// XPath expression
    #[serde(rename = "xpath")]
    XPath,
}

/// Body of `POST /session/{id}/element(s)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireLocator {
    pub using: LocatorStrategy,
    pub value: String,
}

impl WireLocator {
    pub fn css(value: impl Into<String>) -> Self {
        Self {
            using: LocatorStrategy::CssSelector,
            value: value.into(),
        }
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self {
            using: LocatorStrategy::XPath,
            value: value.into(),
        }
    }
}
