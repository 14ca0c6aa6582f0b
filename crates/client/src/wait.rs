//! Bounded polling waits.
//!
//! Single-page front-ends render asynchronously, so a command issued right
//! after navigation often races the DOM. A [`Wait`] closes that gap: it
//! retries a condition on a fixed interval until it holds or a deadline
//! passes. The deadline is a hard upper bound; a wait never spins forever,
//! and it never gives up before the full timeout has elapsed.

use std::time::{Duration, Instant};

use tracing::trace;
use wd_runtime::{Error, Result};

use crate::by::By;
use crate::element::Element;
use crate::session::Session;

/// Default deadline for a polling wait.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default pause between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// A configurable polling loop over one session.
#[derive(Debug)]
pub struct Wait<'a> {
    session: &'a Session,
    timeout: Duration,
    interval: Duration,
}

impl<'a> Wait<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self {
            session,
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Override the deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the pause between attempts.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Poll until `by` resolves to a displayed element.
    ///
    /// `no such element` and `stale element reference` responses count as
    /// "not yet" and keep the loop going; any other error aborts it
    /// immediately. Times out with [`Error::WaitTimeout`] naming the
    /// locator.
    pub async fn for_element(&self, by: &By) -> Result<Element> {
        self.run(by.to_string(), || async move {
            let element = match self.session.find(by).await {
                Ok(element) => element,
                Err(e) if e.is_no_such_element() || e.is_stale() => return Ok(None),
                Err(e) => return Err(e),
            };
            match element.is_displayed().await {
                Ok(true) => Ok(Some(element)),
                Ok(false) => Ok(None),
                Err(e) if e.is_stale() => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
    }

    /// Poll until `by` matches exactly `count` elements.
    ///
    /// `count` may be zero, which waits for the last match to leave the
    /// DOM. Matches are counted raw, without a visibility check.
    pub async fn for_count(&self, by: &By, count: usize) -> Result<()> {
        self.run(format!("{by} to match {count} element(s)"), || async move {
            let found = self.session.find_all(by).await?.len();
            Ok((found == count).then_some(()))
        })
        .await
    }

    /// Poll until the current URL satisfies `pred`.
    ///
    /// `expected` is the human-readable description carried into the
    /// timeout error.
    pub async fn for_url<F>(&self, expected: &str, pred: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let pred = &pred;
        self.run(format!("url {expected}"), || async move {
            let url = self.session.current_url().await?;
            Ok(pred(&url).then_some(url))
        })
        .await
    }

    /// The deadline loop shared by every condition.
    ///
    /// Attempts once immediately, then sleeps and retries. The final
    /// attempt lands at (or just after) the deadline, so a condition that
    /// becomes true at the last instant is still observed.
    async fn run<T, F, Fut>(&self, condition: String, attempt: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let start = Instant::now();
        let deadline = start + self.timeout;
        loop {
            if let Some(value) = attempt().await? {
                return Ok(value);
            }
            let now = Instant::now();
            if now >= deadline {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                trace!(target = "wd", %condition, elapsed_ms, "wait timed out");
                return Err(Error::WaitTimeout {
                    condition,
                    elapsed_ms,
                });
            }
            tokio::time::sleep(self.interval.min(deadline - now)).await;
        }
    }
}
