//! WebDriver remote-end plumbing.
//!
//! This crate owns everything below the ergonomic client API:
//! - locating a WebDriver server binary on the host ([`driver`])
//! - spawning and supervising the server process ([`server`])
//! - issuing WebDriver commands over HTTP and decoding the response
//!   envelope ([`transport`])
//!
//! The client API in the `wd` crate composes these into sessions and
//! elements; test harnesses should not need to touch this crate directly
//! except to launch a [`server::DriverServer`].

pub mod driver;
pub mod error;
pub mod server;
pub mod transport;

pub use error::{Error, Result};
pub use server::DriverServer;
pub use transport::HttpTransport;
