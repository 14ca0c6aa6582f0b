//! Harness for browser-driven end-to-end tests of the workbench front end.
//!
//! The actual test flows live under `tests/`; this library provides the
//! shared [`TestContext`] they run against, plus configuration and logging
//! setup. Flows are linear scripts: open a page, fill fields, click, assert
//! on the resulting DOM state or URL. All timing slack lives in the client's
//! polling waits, never in sleeps.

pub mod config;
pub mod context;
pub mod logging;

pub use config::E2eConfig;
pub use context::TestContext;
