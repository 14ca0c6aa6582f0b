//! Ergonomic client API over the WebDriver runtime.
//!
//! A [`Session`] is one browser-driver session; [`Element`] is a resolved
//! DOM element within it; [`By`] describes how to locate one; and
//! [`wait::Wait`] is the bounded polling loop that bridges the gap between
//! issuing a command and the page actually being ready for it.

pub mod by;
pub mod element;
pub mod session;
pub mod wait;

pub use by::By;
pub use element::Element;
pub use session::Session;
pub use wait::Wait;
pub use wd_protocol::{Capabilities, keys};
pub use wd_runtime::{Error, Result};
