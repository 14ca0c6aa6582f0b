//! Wire types for the W3C WebDriver protocol.
//!
//! This crate contains the serde-serializable types exchanged with a
//! WebDriver remote end (chromedriver, geckodriver) over JSON/HTTP. These
//! types represent the "protocol layer" - the shapes of data as they appear
//! on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with protocol**: Match the W3C WebDriver specification
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Higher-level ergonomic APIs are built on top of these types in `wd`.

pub mod capabilities;
pub mod command;
pub mod element;
pub mod error;
pub mod keys;
pub mod locator;
pub mod response;

pub use capabilities::*;
pub use command::*;
pub use element::*;
pub use error::*;
pub use locator::*;
pub use response::*;
