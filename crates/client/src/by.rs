//! Locators.
//!
//! A locator is an immutable descriptor of how to find a DOM element. It has
//! no lifecycle of its own; test scripts construct them inline at each use
//! site. The selector strings are a contract with the front-end markup under
//! test and must match it exactly.

use std::fmt;

use wd_protocol::WireLocator;

/// Selector strategy plus selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    /// CSS selector, e.g. `input[formcontrolname='username']`.
    Css(String),
    /// XPath expression, e.g. `//button[@id='go']`.
    XPath(String),
}

impl By {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    pub(crate) fn to_wire(&self) -> WireLocator {
        match self {
            Self::Css(value) => WireLocator::css(value.clone()),
            Self::XPath(value) => WireLocator::xpath(value.clone()),
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(value) => write!(f, "css selector \"{value}\""),
            Self::XPath(value) => write!(f, "xpath \"{value}\""),
        }
    }
}
